//! HTTP handlers for the student and product resources.

pub mod products;
pub mod students;
