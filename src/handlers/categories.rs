// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{category::Category, question::Question},
    pagination::{PageParams, paginate},
};

/// Builds the id -> type mapping shared by the category endpoints.
/// Fails NotFound when no categories exist at all.
pub(crate) async fn category_map(
    pool: &SqlitePool,
) -> Result<serde_json::Map<String, serde_json::Value>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(categories
        .into_iter()
        .map(|c| (c.id.to_string(), json!(c.category_type)))
        .collect())
}

/// Lists all categories as an id -> label mapping.
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let categories = category_map(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

/// Lists the questions belonging to one category, paginated.
///
/// The category must exist and must have at least one question; both the
/// unknown-category and the empty-category case answer 404 with the same
/// body.
pub async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
        .bind(category_id)
        .fetch_optional(&pool)
        .await?
        .ok_or(AppError::NotFound)?;

    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE category = ? ORDER BY id",
    )
    .bind(category_id)
    .fetch_all(&pool)
    .await?;

    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let current_questions = paginate(params.page(), &questions)?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "Total_questions": questions.len(),
    })))
}
