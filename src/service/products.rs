//! SQL for the `products` table.

use crate::error::AppError;
use crate::models::{NewProduct, Product, ProductChanges};
use sqlx::PgPool;

const LIST: &str = r#"SELECT * FROM products"#;
const READ: &str = r#"SELECT * FROM products WHERE id = $1"#;
const INSERT: &str = r#"INSERT INTO products (name, "count", "createDate", description, id, image, status, unit)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#;
const UPDATE: &str = r#"UPDATE products
SET name = $2, "count" = $3, "createDate" = $4, description = $5, image = $6, status = $7, unit = $8
WHERE id = $1"#;
const DELETE: &str = r#"DELETE FROM products WHERE id = $1"#;

pub struct ProductService;

impl ProductService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        tracing::debug!(sql = %LIST, "query");
        let rows = sqlx::query_as::<_, Product>(LIST).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn read(pool: &PgPool, id: &str) -> Result<Option<Product>, AppError> {
        tracing::debug!(sql = %READ, id, "query");
        let row = sqlx::query_as::<_, Product>(READ)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Id uniqueness is left to the primary key; a duplicate surfaces as a database error.
    pub async fn create(pool: &PgPool, body: &NewProduct) -> Result<(), AppError> {
        tracing::debug!(sql = %INSERT, id = %body.id, "query");
        sqlx::query(INSERT)
            .bind(&body.name)
            .bind(body.count)
            .bind(&body.create_date)
            .bind(&body.description)
            .bind(&body.id)
            .bind(&body.image)
            .bind(body.status)
            .bind(&body.unit)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn update(pool: &PgPool, id: &str, body: &ProductChanges) -> Result<(), AppError> {
        tracing::debug!(sql = %UPDATE, id, "query");
        sqlx::query(UPDATE)
            .bind(id)
            .bind(&body.name)
            .bind(body.count)
            .bind(&body.create_date)
            .bind(&body.description)
            .bind(&body.image)
            .bind(body.status)
            .bind(&body.unit)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete(pool: &PgPool, id: &str) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        sqlx::query(DELETE).bind(id).execute(pool).await?;
        Ok(())
    }
}
