//! Axum route handler for DOCX vacancy upload.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::ingest::extract_vacancy;
use crate::state::AppState;
use crate::vacancies::{self, handlers::VacancyResponse};

/// POST /api/v1/vacancies/upload
///
/// Accepts a multipart `file` field holding a DOCX, extracts a vacancy draft
/// from its tables, and persists it. An unreadable container is a 400;
/// missing labels just fall back to defaults.
pub async fn handle_upload_vacancy(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<VacancyResponse>, AppError> {
    let mut payload: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.to_lowercase().ends_with(".docx") {
            return Err(AppError::Validation(
                "only .docx files are supported".to_string(),
            ));
        }

        payload = Some(
            field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?,
        );
    }

    let payload =
        payload.ok_or_else(|| AppError::Validation("multipart field 'file' is required".to_string()))?;

    let draft = extract_vacancy(&payload)?;
    info!("extracted vacancy draft '{}' from upload", draft.title);

    let vacancy = vacancies::create_vacancy(&state.db, &draft).await?;

    Ok(Json(VacancyResponse::from_parts(vacancy, Vec::new())))
}
