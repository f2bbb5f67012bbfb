pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::ingest::handlers::handle_upload_vacancy;
use crate::questions::handlers as question_handlers;
use crate::state::AppState;
use crate::vacancies::handlers as vacancy_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Vacancies
        .route(
            "/api/v1/vacancies",
            get(vacancy_handlers::handle_list_vacancies)
                .post(vacancy_handlers::handle_create_vacancy),
        )
        .route("/api/v1/vacancies/upload", post(handle_upload_vacancy))
        .route(
            "/api/v1/vacancies/:id",
            get(vacancy_handlers::handle_get_vacancy)
                .put(vacancy_handlers::handle_update_vacancy)
                .delete(vacancy_handlers::handle_delete_vacancy),
        )
        // Questions
        .route(
            "/api/v1/vacancies/:id/questions",
            post(question_handlers::handle_add_questions),
        )
        .route(
            "/api/v1/vacancies/:id/questions/suggestions",
            get(question_handlers::handle_question_suggestions),
        )
        .route(
            "/api/v1/questions",
            get(question_handlers::handle_list_questions),
        )
        .route(
            "/api/v1/questions/:id",
            put(question_handlers::handle_update_question)
                .delete(question_handlers::handle_delete_question),
        )
        .with_state(state)
}
