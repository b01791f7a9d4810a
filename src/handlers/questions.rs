// src/handlers/questions.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    handlers::categories::category_map,
    models::question::{Question, QuestionPayload},
    pagination::{PageParams, paginate},
};

async fn all_questions(pool: &SqlitePool) -> Result<Vec<Question>, AppError> {
    Ok(sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(pool)
    .await?)
}

/// Lists all questions, paginated, together with the category mapping and
/// the pre-pagination total.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let categories = category_map(&pool).await?;

    let questions = all_questions(&pool).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let current_questions = paginate(params.page(), &questions)?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "Total_questions": questions.len(),
        "categories": categories,
    })))
}

/// Deletes one question by id.
///
/// A failed delete rolls the transaction back and answers 422. On success
/// the remaining list is recomputed and returned alongside the deleted id.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
    )
    .bind(question_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound)?;

    let mut tx = pool.begin().await?;
    let deleted = sqlx::query("DELETE FROM questions WHERE id = ?")
        .bind(question_id)
        .execute(&mut *tx)
        .await;

    match deleted {
        Ok(_) => tx.commit().await?,
        Err(e) => {
            tracing::error!("Failed to delete question {}: {:?}", question_id, e);
            tx.rollback().await?;
            return Err(AppError::Unprocessable);
        }
    }

    let questions = all_questions(&pool).await?;
    let current_questions = paginate(params.page(), &questions)?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "Total_questions": questions.len(),
        "deleted": question_id,
    })))
}

/// Dual-purpose POST /questions handler: searches when the body carries a
/// `searchTerm`, creates a new question otherwise.
pub async fn create_or_search(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
    Json(body): Json<QuestionPayload>,
) -> Result<Json<serde_json::Value>, AppError> {
    if let Some(search_term) = body.search_term {
        return search_questions(&pool, params.page(), &search_term).await;
    }

    // Each creation field is independently required.
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (body.question, body.answer, body.difficulty, body.category)
    else {
        return Err(AppError::BadRequest);
    };

    let mut tx = pool.begin().await?;
    let inserted = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
    )
    .bind(&question)
    .bind(&answer)
    .bind(category)
    .bind(difficulty)
    .execute(&mut *tx)
    .await;

    match inserted {
        Ok(_) => tx.commit().await?,
        Err(e) => {
            tracing::error!("Failed to insert question: {:?}", e);
            tx.rollback().await?;
            return Err(AppError::Unprocessable);
        }
    }

    let questions = all_questions(&pool).await?;
    let current_questions = paginate(params.page(), &questions)?;

    if current_questions.is_empty() {
        // The fresh question may land past the requested window; the
        // contract answers 404 here rather than an empty page.
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "Total_questions": questions.len(),
    })))
}

/// Case-insensitive substring search over question text.
async fn search_questions(
    pool: &SqlitePool,
    page: u32,
    search_term: &str,
) -> Result<Json<serde_json::Value>, AppError> {
    // SQLite LIKE is case-insensitive for ASCII.
    let pattern = format!("%{}%", search_term);
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE question LIKE ? ORDER BY id",
    )
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let current_questions = paginate(page, &questions)?;
    // Unlike the creation branch, total_questions reports the length of the
    // returned page, not the full match count. Preserved as-is.
    let total_questions = current_questions.len();

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": total_questions,
    })))
}
