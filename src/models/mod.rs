//! Per-resource records (rows) and request payloads.

mod product;
mod student;

pub use product::{NewProduct, Product, ProductChanges};
pub use student::{Student, StudentPayload};
