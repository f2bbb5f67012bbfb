//! Axum route handlers for interview questions and question suggestions.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::question::{QuestionCreate, QuestionRow, QuestionUpdate};
use crate::questions::add_questions;
use crate::state::AppState;
use crate::suggestions::{suggest_interview_questions, QuestionSuggestion, DEFAULT_QUESTION_COUNT};
use crate::vacancies::find_vacancy;

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question_text: String,
    pub competence: String,
    pub weight: f64,
}

impl From<QuestionRow> for QuestionResponse {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question_text: row.question_text,
            competence: row.competence,
            weight: row.weight,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub count: Option<u8>,
}

fn ensure_weight_in_range(weight: f64) -> Result<(), AppError> {
    if !(0.0..=1.0).contains(&weight) {
        return Err(AppError::Validation(format!(
            "weight must be within [0.0, 1.0], got {weight}"
        )));
    }
    Ok(())
}

/// GET /api/v1/vacancies/:id/questions/suggestions
///
/// Asks the AI for interview questions tailored to the stored vacancy.
/// Fail-soft: an unavailable or misbehaving AI backend yields an empty list,
/// never an error.
pub async fn handle_question_suggestions(
    State(state): State<AppState>,
    Path(vacancy_id): Path<i64>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<Vec<QuestionSuggestion>>, AppError> {
    let vacancy = find_vacancy(&state.db, vacancy_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vacancy {vacancy_id} not found")))?;

    let suggestions = suggest_interview_questions(
        state.llm.as_ref(),
        &vacancy.title,
        vacancy.description.as_deref().unwrap_or(""),
        vacancy.requirements.as_deref().unwrap_or(""),
        params.count.unwrap_or(DEFAULT_QUESTION_COUNT),
    )
    .await;

    Ok(Json(suggestions))
}

/// POST /api/v1/vacancies/:id/questions
pub async fn handle_add_questions(
    State(state): State<AppState>,
    Path(vacancy_id): Path<i64>,
    Json(request): Json<Vec<QuestionCreate>>,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    for question in &request {
        ensure_weight_in_range(question.weight)?;
    }

    find_vacancy(&state.db, vacancy_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Vacancy {vacancy_id} not found")))?;

    let created = add_questions(&state.db, vacancy_id, &request).await?;

    Ok(Json(created.into_iter().map(QuestionResponse::from).collect()))
}

/// GET /api/v1/questions
pub async fn handle_list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    let questions: Vec<QuestionRow> = sqlx::query_as("SELECT * FROM questions ORDER BY id")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(questions.into_iter().map(QuestionResponse::from).collect()))
}

/// PUT /api/v1/questions/:id
pub async fn handle_update_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<QuestionUpdate>,
) -> Result<Json<QuestionResponse>, AppError> {
    if let Some(weight) = request.weight {
        ensure_weight_in_range(weight)?;
    }

    let updated: Option<QuestionRow> = sqlx::query_as(
        "UPDATE questions
         SET question_text = COALESCE($2, question_text),
             competence = COALESCE($3, competence),
             weight = COALESCE($4, weight)
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&request.question_text)
    .bind(&request.competence)
    .bind(request.weight)
    .fetch_optional(&state.db)
    .await?;

    let updated = updated.ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))?;

    Ok(Json(QuestionResponse::from(updated)))
}

/// DELETE /api/v1/questions/:id
pub async fn handle_delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<QuestionResponse>, AppError> {
    let deleted: Option<QuestionRow> =
        sqlx::query_as("DELETE FROM questions WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&state.db)
            .await?;

    let deleted = deleted.ok_or_else(|| AppError::NotFound(format!("Question {id} not found")))?;

    Ok(Json(QuestionResponse::from(deleted)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_bounds_are_inclusive() {
        assert!(ensure_weight_in_range(0.0).is_ok());
        assert!(ensure_weight_in_range(1.0).is_ok());
        assert!(ensure_weight_in_range(0.5).is_ok());
    }

    #[test]
    fn test_out_of_range_weights_are_rejected() {
        assert!(ensure_weight_in_range(1.5).is_err());
        assert!(ensure_weight_in_range(-0.1).is_err());
    }
}
