//! One parameterized statement per operation, per resource.

mod products;
mod students;
pub use products::ProductService;
pub use students::StudentService;
