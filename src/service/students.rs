//! SQL for the `students` table.

use crate::error::AppError;
use crate::models::{Student, StudentPayload};
use sqlx::PgPool;

const LIST: &str = r#"SELECT * FROM students"#;
const READ: &str = r#"SELECT * FROM students WHERE "Id" = $1"#;
const INSERT: &str = r#"INSERT INTO students ("Name", "Weight") VALUES ($1, $2)"#;
const UPDATE: &str = r#"UPDATE students SET "Name" = $2, "Weight" = $3 WHERE "Id" = $1"#;
const DELETE: &str = r#"DELETE FROM students WHERE "Id" = $1"#;

pub struct StudentService;

impl StudentService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = %LIST, "query");
        let rows = sqlx::query_as::<_, Student>(LIST).fetch_all(pool).await?;
        Ok(rows)
    }

    /// `None` when no row has this id; callers answer 200 with `null`.
    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<Student>, AppError> {
        tracing::debug!(sql = %READ, id, "query");
        let row = sqlx::query_as::<_, Student>(READ)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &PgPool, body: &StudentPayload) -> Result<(), AppError> {
        tracing::debug!(sql = %INSERT, "query");
        sqlx::query(INSERT)
            .bind(&body.name)
            .bind(body.weight)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Full-field update. Succeeds whether or not a row matched.
    pub async fn update(pool: &PgPool, id: i32, body: &StudentPayload) -> Result<(), AppError> {
        tracing::debug!(sql = %UPDATE, id, "query");
        sqlx::query(UPDATE)
            .bind(id)
            .bind(&body.name)
            .bind(body.weight)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Succeeds whether or not a row matched.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        sqlx::query(DELETE).bind(id).execute(pool).await?;
        Ok(())
    }
}
