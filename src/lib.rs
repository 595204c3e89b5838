//! Records API: REST CRUD over the `students` and `products` tables.

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;

pub use config::{DbConfig, ServerConfig};
pub use db::PoolHandle;
pub use error::{AppError, ConfigError};
pub use models::{NewProduct, Product, ProductChanges, Student, StudentPayload};
pub use response::MessageBody;
pub use routes::{app, common_routes, product_routes, student_routes};
pub use service::{ProductService, StudentService};
pub use state::AppState;
