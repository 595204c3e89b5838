//! Student handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{Db, JsonBody};
use crate::models::{Student, StudentPayload};
use crate::response::{created, ok};
use crate::service::StudentService;
use axum::{extract::Path, response::IntoResponse, Json};

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid student id '{}'", id_str)))
}

pub async fn list(Db(pool): Db) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(StudentService::list(&pool).await?))
}

/// Missing rows answer 200 with `null`.
pub async fn read(Db(pool): Db, Path(id_str): Path<String>) -> Result<Json<Option<Student>>, AppError> {
    let id = parse_id(&id_str)?;
    Ok(Json(StudentService::read(&pool, id).await?))
}

pub async fn create(Db(pool): Db, JsonBody(body): JsonBody<StudentPayload>) -> Result<impl IntoResponse, AppError> {
    StudentService::create(&pool, &body).await?;
    Ok(created("Student created"))
}

pub async fn update(
    Db(pool): Db,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<StudentPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    StudentService::update(&pool, id, &body).await?;
    Ok(ok("Student updated"))
}

pub async fn delete(Db(pool): Db, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    StudentService::delete(&pool, id).await?;
    Ok(ok("Student deleted"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("99999999999"), Err(AppError::BadRequest(_))));
    }
}
