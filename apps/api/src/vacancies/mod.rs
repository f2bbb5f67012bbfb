//! Vacancy persistence boundary — the only module issuing vacancy SQL.

pub mod handlers;

use sqlx::PgPool;

use crate::ingest::{VacancyDraft, DEFAULT_STATUS};
use crate::models::vacancy::VacancyRow;

/// Inserts an extracted draft and returns the stored row with its identity
/// and creation timestamp assigned.
pub async fn create_vacancy(db: &PgPool, draft: &VacancyDraft) -> Result<VacancyRow, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO vacancies (title, description, requirements, salary, status)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&draft.title)
    .bind(&draft.description)
    .bind(&draft.requirements)
    .bind(draft.salary)
    .bind(&draft.status)
    .fetch_one(db)
    .await
}

/// Inserts a bare vacancy from just a title, in the initial status.
pub async fn create_vacancy_from_title(db: &PgPool, title: &str) -> Result<VacancyRow, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO vacancies (title, status) VALUES ($1, $2) RETURNING *",
    )
    .bind(title)
    .bind(DEFAULT_STATUS)
    .fetch_one(db)
    .await
}

pub async fn find_vacancy(db: &PgPool, id: i64) -> Result<Option<VacancyRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM vacancies WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}
