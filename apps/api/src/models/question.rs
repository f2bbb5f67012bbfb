use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub vacancy_id: i64,
    pub question_text: String,
    pub competence: String,
    pub weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct QuestionCreate {
    pub question_text: String,
    pub competence: String,
    pub weight: f64,
}

/// Partial update — omitted fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct QuestionUpdate {
    pub question_text: Option<String>,
    pub competence: Option<String>,
    pub weight: Option<f64>,
}
