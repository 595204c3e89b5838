//! Product handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{Db, JsonBody};
use crate::models::{NewProduct, Product, ProductChanges};
use crate::response::{created, ok};
use crate::service::ProductService;
use axum::{extract::Path, response::IntoResponse, Json};

pub async fn list(Db(pool): Db) -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(ProductService::list(&pool).await?))
}

/// Missing rows answer 200 with `null`.
pub async fn read(Db(pool): Db, Path(id): Path<String>) -> Result<Json<Option<Product>>, AppError> {
    Ok(Json(ProductService::read(&pool, &id).await?))
}

pub async fn create(Db(pool): Db, JsonBody(body): JsonBody<NewProduct>) -> Result<impl IntoResponse, AppError> {
    ProductService::create(&pool, &body).await?;
    Ok(created("Product created"))
}

/// Full-field update of the product columns. A `{Name, Weight}` body is rejected with 400.
pub async fn update(
    Db(pool): Db,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<ProductChanges>,
) -> Result<impl IntoResponse, AppError> {
    ProductService::update(&pool, &id, &body).await?;
    Ok(ok("Product updated"))
}

pub async fn delete(Db(pool): Db, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    ProductService::delete(&pool, &id).await?;
    Ok(ok("Product deleted"))
}
