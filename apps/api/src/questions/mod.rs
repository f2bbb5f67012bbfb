//! Question persistence boundary — the only module issuing question SQL.

pub mod handlers;

use sqlx::PgPool;

use crate::models::question::{QuestionCreate, QuestionRow};

/// Inserts a batch of questions for a vacancy, returning the stored rows
/// with their identities.
pub async fn add_questions(
    db: &PgPool,
    vacancy_id: i64,
    questions: &[QuestionCreate],
) -> Result<Vec<QuestionRow>, sqlx::Error> {
    let mut created = Vec::with_capacity(questions.len());
    for question in questions {
        let row: QuestionRow = sqlx::query_as(
            "INSERT INTO questions (vacancy_id, question_text, competence, weight)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(vacancy_id)
        .bind(&question.question_text)
        .bind(&question.competence)
        .bind(question.weight)
        .fetch_one(db)
        .await?;
        created.push(row);
    }
    Ok(created)
}

pub async fn questions_for_vacancy(
    db: &PgPool,
    vacancy_id: i64,
) -> Result<Vec<QuestionRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM questions WHERE vacancy_id = $1 ORDER BY id")
        .bind(vacancy_id)
        .fetch_all(db)
        .await
}
