//! Axum route handlers for the vacancy CRUD API.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::question::QuestionRow;
use crate::models::vacancy::{VacancyCreate, VacancyRow, VacancyUpdate};
use crate::questions::{handlers::QuestionResponse, questions_for_vacancy};
use crate::state::AppState;
use crate::suggestions::{suggest_vacancy_fields, VacancySuggestions};
use crate::vacancies::{create_vacancy_from_title, find_vacancy};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct VacancyResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<i64>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub questions: Vec<QuestionResponse>,
}

impl VacancyResponse {
    pub fn from_parts(vacancy: VacancyRow, questions: Vec<QuestionRow>) -> Self {
        Self {
            id: vacancy.id,
            title: vacancy.title,
            description: vacancy.description,
            requirements: vacancy.requirements,
            salary: vacancy.salary,
            status: vacancy.status,
            created_at: vacancy.created_at,
            questions: questions.into_iter().map(QuestionResponse::from).collect(),
        }
    }
}

/// Returned from create: the stored vacancy plus AI suggestions for filling
/// it in. Suggestions are advisory and never persisted.
#[derive(Debug, Serialize)]
pub struct VacancyCreatedResponse {
    #[serde(flatten)]
    pub vacancy: VacancyResponse,
    pub ai_suggestions: VacancySuggestions,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/vacancies
pub async fn handle_list_vacancies(
    State(state): State<AppState>,
) -> Result<Json<Vec<VacancyResponse>>, AppError> {
    let vacancies: Vec<VacancyRow> = sqlx::query_as("SELECT * FROM vacancies ORDER BY id")
        .fetch_all(&state.db)
        .await?;

    let questions: Vec<QuestionRow> = sqlx::query_as("SELECT * FROM questions ORDER BY id")
        .fetch_all(&state.db)
        .await?;

    let mut by_vacancy: HashMap<i64, Vec<QuestionRow>> = HashMap::new();
    for question in questions {
        by_vacancy.entry(question.vacancy_id).or_default().push(question);
    }

    Ok(Json(
        vacancies
            .into_iter()
            .map(|v| {
                let questions = by_vacancy.remove(&v.id).unwrap_or_default();
                VacancyResponse::from_parts(v, questions)
            })
            .collect(),
    ))
}

/// GET /api/v1/vacancies/:id
pub async fn handle_get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VacancyResponse>, AppError> {
    let vacancy = find_vacancy(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vacancy {id} not found")))?;
    let questions = questions_for_vacancy(&state.db, id).await?;

    Ok(Json(VacancyResponse::from_parts(vacancy, questions)))
}

/// POST /api/v1/vacancies
///
/// Creates a vacancy from just a title, then asks the AI for field
/// suggestions. The suggestion call is fail-soft: the vacancy is created
/// either way, and a broken AI backend only means an all-null
/// `ai_suggestions` object.
pub async fn handle_create_vacancy(
    State(state): State<AppState>,
    Json(request): Json<VacancyCreate>,
) -> Result<Json<VacancyCreatedResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let vacancy = create_vacancy_from_title(&state.db, &request.title).await?;

    let ai_suggestions = suggest_vacancy_fields(state.llm.as_ref(), &vacancy.title).await;

    Ok(Json(VacancyCreatedResponse {
        vacancy: VacancyResponse::from_parts(vacancy, Vec::new()),
        ai_suggestions,
    }))
}

/// PUT /api/v1/vacancies/:id
pub async fn handle_update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<VacancyUpdate>,
) -> Result<Json<VacancyResponse>, AppError> {
    if let Some(salary) = request.salary {
        if salary < 0 {
            return Err(AppError::Validation("salary cannot be negative".to_string()));
        }
    }

    let updated: Option<VacancyRow> = sqlx::query_as(
        "UPDATE vacancies
         SET description = COALESCE($2, description),
             requirements = COALESCE($3, requirements),
             salary = COALESCE($4, salary),
             status = COALESCE($5, status)
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&request.description)
    .bind(&request.requirements)
    .bind(request.salary)
    .bind(&request.status)
    .fetch_optional(&state.db)
    .await?;

    let updated = updated.ok_or_else(|| AppError::NotFound(format!("Vacancy {id} not found")))?;
    let questions = questions_for_vacancy(&state.db, id).await?;

    Ok(Json(VacancyResponse::from_parts(updated, questions)))
}

/// DELETE /api/v1/vacancies/:id
///
/// Deletes the vacancy (questions cascade) and returns its last
/// representation.
pub async fn handle_delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VacancyResponse>, AppError> {
    let vacancy = find_vacancy(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vacancy {id} not found")))?;
    let questions = questions_for_vacancy(&state.db, id).await?;

    sqlx::query("DELETE FROM vacancies WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    Ok(Json(VacancyResponse::from_parts(vacancy, questions)))
}
