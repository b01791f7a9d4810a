// src/handlers/quizzes.rs

use axum::{Json, extract::State, response::IntoResponse};
use rand::seq::SliceRandom;
use serde_json::json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::{
    error::AppError,
    models::question::{Question, QuizPayload},
};

/// Serves the next quiz question.
///
/// Draws one question uniformly at random from the requested category
/// (id 0 means all categories), skipping ids already listed in
/// `previous_questions`. An exhausted pool answers `question: null`, which
/// signals quiz completion to the caller rather than an error.
pub async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizPayload>,
) -> Result<impl IntoResponse, AppError> {
    let quiz_category = body.quiz_category.ok_or(AppError::Unprocessable)?;

    // Dynamic NOT IN clause, built with QueryBuilder.
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE 1 = 1",
    );

    if quiz_category.id != 0 {
        query.push(" AND category = ").push_bind(quiz_category.id);
    }

    if !body.previous_questions.is_empty() {
        query.push(" AND id NOT IN (");
        let mut separated = query.separated(",");
        for id in &body.previous_questions {
            separated.push_bind(*id);
        }
        separated.push_unseparated(")");
    }

    let candidates: Vec<Question> = query.build_query_as().fetch_all(&pool).await?;

    if candidates.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "question": null,
        })));
    }

    let picked = candidates
        .choose(&mut rand::thread_rng())
        .ok_or(AppError::NotFound)?;

    // Re-fetch the drawn question by id.
    let next_question = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
    )
    .bind(picked.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Json(json!({
        "success": true,
        "question": next_question,
    })))
}
