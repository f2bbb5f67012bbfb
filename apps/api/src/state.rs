use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::Completion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Completion backend behind a trait object so tests can substitute fakes.
    pub llm: Arc<dyn Completion>,
}
