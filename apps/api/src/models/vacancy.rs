use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct VacancyCreate {
    pub title: String,
}

/// Partial update — omitted fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct VacancyUpdate {
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<i64>,
    pub status: Option<String>,
}
