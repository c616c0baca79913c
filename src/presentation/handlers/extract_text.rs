use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::TextExtractor;
use crate::application::services::IngestionError;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

use super::upload::read_file_field;

#[derive(Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
}

/// Full-text extraction: return the document's text content without
/// persisting anything.
#[tracing::instrument(skip(state, multipart))]
pub async fn extract_text_handler<E>(
    State(state): State<AppState<E>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
{
    let (filename, data) = match read_file_field(&mut multipart).await {
        Ok(file) => file,
        Err(rejection) => return rejection.into_response(),
    };

    match state.ingestion_service.extract_text(&data, &filename).await {
        Ok(text) => (StatusCode::OK, Json(ExtractTextResponse { text })).into_response(),
        Err(IngestionError::Extraction(e)) => {
            tracing::warn!(error = %e, filename = %filename, "text extraction failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to extract text: {}", e))),
            )
                .into_response()
        }
        Err(IngestionError::Storage(e)) => {
            tracing::error!(error = %e, filename = %filename, "text extraction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Failed to extract text: {}", e))),
            )
                .into_response()
        }
    }
}
