//! Suggestion pipeline — best-effort AI enrichment for vacancies and
//! interview questions.
//!
//! Both operations are strictly fail-soft: any failure (transport, HTTP
//! status, JSON parse, shape mismatch) is logged and collapsed to an
//! empty/all-null result at the public boundary. The AI subsystem being down
//! must never turn a CRUD request into a hard failure.

pub mod prompts;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::llm_client::{Completion, LlmError};
use crate::suggestions::prompts::{
    INTERVIEW_QUESTIONS_PROMPT_TEMPLATE, VACANCY_FIELDS_PROMPT_TEMPLATE,
};

/// How many interview questions to request when the caller does not say.
pub const DEFAULT_QUESTION_COUNT: u8 = 7;

/// AI-suggested values for vacancy fields. Any field may be `None` when the
/// model call failed or returned unparsable content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacancySuggestions {
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<i64>,
}

/// One AI-suggested interview question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSuggestion {
    pub question_text: String,
    /// Label naming the skill or trait the question assesses.
    pub competence: String,
    /// Relative importance, constrained to [0.0, 1.0].
    pub weight: f64,
}

/// Internal failure reasons — reach the log sink, never the caller.
#[derive(Debug, Error)]
enum SuggestionError {
    #[error("completion call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model reply is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed suggestion: {0}")]
    Malformed(String),
}

/// Suggests description, requirements, and a market salary for a vacancy
/// title. Never fails; worst case is an all-`None` bundle.
pub async fn suggest_vacancy_fields(llm: &dyn Completion, title: &str) -> VacancySuggestions {
    match fetch_vacancy_fields(llm, title).await {
        Ok(bundle) => bundle,
        Err(e) => {
            warn!("vacancy suggestions unavailable for '{title}': {e}");
            VacancySuggestions::default()
        }
    }
}

async fn fetch_vacancy_fields(
    llm: &dyn Completion,
    title: &str,
) -> Result<VacancySuggestions, SuggestionError> {
    let prompt = VACANCY_FIELDS_PROMPT_TEMPLATE.replace("{title}", title);
    let reply = llm.complete(&prompt).await?;
    // The reply is parsed as-is: absent keys map to None.
    Ok(serde_json::from_str(&reply)?)
}

/// Suggests `count` interview questions for a vacancy. Never fails; any
/// fetch-or-parse problem yields an empty list (all-or-nothing per call,
/// never a partial list).
pub async fn suggest_interview_questions(
    llm: &dyn Completion,
    title: &str,
    description: &str,
    requirements: &str,
    count: u8,
) -> Vec<QuestionSuggestion> {
    match fetch_interview_questions(llm, title, description, requirements, count).await {
        Ok(questions) => questions,
        Err(e) => {
            warn!("question suggestions unavailable for '{title}': {e}");
            Vec::new()
        }
    }
}

async fn fetch_interview_questions(
    llm: &dyn Completion,
    title: &str,
    description: &str,
    requirements: &str,
    count: u8,
) -> Result<Vec<QuestionSuggestion>, SuggestionError> {
    let prompt = INTERVIEW_QUESTIONS_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{title}", title)
        .replace("{description}", description)
        .replace("{requirements}", requirements);

    let reply = llm.complete(&prompt).await?;
    let cleaned = clean_model_reply(&reply);

    let questions: Vec<QuestionSuggestion> = serde_json::from_str(cleaned)?;
    for question in &questions {
        validate_suggestion(question)?;
    }

    Ok(questions)
}

fn validate_suggestion(question: &QuestionSuggestion) -> Result<(), SuggestionError> {
    if question.question_text.trim().is_empty() {
        return Err(SuggestionError::Malformed(
            "question_text is empty".to_string(),
        ));
    }
    if question.competence.trim().is_empty() {
        return Err(SuggestionError::Malformed("competence is empty".to_string()));
    }
    if !(0.0..=1.0).contains(&question.weight) {
        return Err(SuggestionError::Malformed(format!(
            "weight {} is outside [0.0, 1.0]",
            question.weight
        )));
    }
    Ok(())
}

/// Strips a fenced code block from model output: leading/trailing backticks,
/// then a case-insensitive "json" language tag, re-trimming after each step.
fn clean_model_reply(text: &str) -> &str {
    let mut cleaned = text.trim().trim_matches('`').trim();
    if cleaned.len() >= 4
        && cleaned.is_char_boundary(4)
        && cleaned[..4].eq_ignore_ascii_case("json")
    {
        cleaned = cleaned[4..].trim_start();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Completion backend that always replies with a canned string.
    struct Canned(&'static str);

    #[async_trait]
    impl Completion for Canned {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    /// Completion backend that always fails at the transport level.
    struct Unreachable;

    #[async_trait]
    impl Completion for Unreachable {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }
    }

    const VALID_QUESTIONS: &str = r#"[
        {"question_text": "Расскажите о вашем опыте с Rust", "competence": "Rust", "weight": 0.9},
        {"question_text": "Как вы работаете в команде?", "competence": "Коммуникация", "weight": 0.5}
    ]"#;

    #[tokio::test]
    async fn test_vacancy_fields_happy_path() {
        let llm = Canned(
            r#"{"description": "Разработка бэкенда", "requirements": "Rust; SQL", "salary": 180000}"#,
        );
        let bundle = suggest_vacancy_fields(&llm, "Backend Engineer").await;
        assert_eq!(bundle.description.as_deref(), Some("Разработка бэкенда"));
        assert_eq!(bundle.requirements.as_deref(), Some("Rust; SQL"));
        assert_eq!(bundle.salary, Some(180000));
    }

    #[tokio::test]
    async fn test_vacancy_fields_transport_error_is_all_null() {
        let bundle = suggest_vacancy_fields(&Unreachable, "Backend Engineer").await;
        assert_eq!(bundle, VacancySuggestions::default());
    }

    #[tokio::test]
    async fn test_vacancy_fields_non_json_reply_is_all_null() {
        let llm = Canned("Извините, я не могу помочь с этим запросом.");
        let bundle = suggest_vacancy_fields(&llm, "Backend Engineer").await;
        assert_eq!(bundle, VacancySuggestions::default());
    }

    #[tokio::test]
    async fn test_vacancy_fields_missing_keys_stay_null() {
        let llm = Canned(r#"{"description": "Только описание"}"#);
        let bundle = suggest_vacancy_fields(&llm, "Backend Engineer").await;
        assert_eq!(bundle.description.as_deref(), Some("Только описание"));
        assert!(bundle.requirements.is_none());
        assert!(bundle.salary.is_none());
    }

    #[tokio::test]
    async fn test_questions_happy_path() {
        let llm = Canned(VALID_QUESTIONS);
        let questions = suggest_interview_questions(&llm, "t", "d", "r", 7).await;
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].competence, "Rust");
        assert!((questions[1].weight - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_questions_fenced_reply_parses_like_bare_json() {
        let fenced = "```json\n[{\"question_text\": \"q\", \"competence\": \"c\", \"weight\": 0.3}]\n```";
        let bare = "[{\"question_text\": \"q\", \"competence\": \"c\", \"weight\": 0.3}]";

        let from_fenced = suggest_interview_questions(&Canned(fenced), "t", "d", "r", 7).await;
        let from_bare = suggest_interview_questions(&Canned(bare), "t", "d", "r", 7).await;
        assert_eq!(from_fenced, from_bare);
        assert_eq!(from_fenced.len(), 1);
    }

    #[tokio::test]
    async fn test_questions_out_of_range_weight_empties_whole_call() {
        let llm = Canned(
            r#"[
                {"question_text": "ok", "competence": "ok", "weight": 0.5},
                {"question_text": "bad", "competence": "bad", "weight": 1.5}
            ]"#,
        );
        let questions = suggest_interview_questions(&llm, "t", "d", "r", 7).await;
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_questions_empty_competence_empties_whole_call() {
        let llm = Canned(r#"[{"question_text": "ok", "competence": "  ", "weight": 0.5}]"#);
        let questions = suggest_interview_questions(&llm, "t", "d", "r", 7).await;
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_questions_missing_key_empties_whole_call() {
        let llm = Canned(r#"[{"question_text": "ok", "weight": 0.5}]"#);
        let questions = suggest_interview_questions(&llm, "t", "d", "r", 7).await;
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_questions_transport_error_is_empty() {
        let questions = suggest_interview_questions(&Unreachable, "t", "d", "r", 7).await;
        assert!(questions.is_empty());
    }

    #[test]
    fn test_clean_model_reply_strips_json_fence() {
        assert_eq!(clean_model_reply("```json\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn test_clean_model_reply_strips_plain_fence() {
        assert_eq!(clean_model_reply("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn test_clean_model_reply_strips_uppercase_tag() {
        assert_eq!(clean_model_reply("```JSON\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn test_clean_model_reply_is_noop_on_bare_json() {
        assert_eq!(clean_model_reply("[1, 2]"), "[1, 2]");
    }
}
