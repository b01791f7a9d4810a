// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
/// Serializes to the formatted view `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    /// The correct answer.
    pub answer: String,

    /// Id of the owning category. Presence-checked at creation time only;
    /// referential integrity is left to the storage layer's defaults.
    pub category: i64,

    /// Difficulty score.
    pub difficulty: i64,
}

/// Body of POST /questions. The endpoint is dual-purpose: a present
/// `searchTerm` selects the search branch, otherwise the four creation
/// fields are each independently required. Every field is optional so
/// presence can be validated per field.
#[derive(Debug, Deserialize)]
pub struct QuestionPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// Body of POST /quizzes.
#[derive(Debug, Deserialize)]
pub struct QuizPayload {
    pub quiz_category: Option<QuizCategory>,

    /// Ids of questions already served in this quiz round.
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}
