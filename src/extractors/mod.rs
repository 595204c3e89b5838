//! Request extractors: pool acquisition and typed JSON bodies.

pub mod db;
pub mod json;

pub use db::Db;
pub use json::JsonBody;
