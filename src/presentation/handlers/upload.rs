use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::TextExtractor;
use crate::application::services::IngestionError;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

use super::sheet_types::AuctionSheetOut;

/// Structured extraction: parse the uploaded listing sheet, persist it, and
/// return the extracted fields.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<E>(
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

    tracing::debug!(filename = %filename, bytes = data.len(), "processing sheet upload");

    match state.ingestion_service.ingest(&data, &filename).await {
        Ok(sheet) => (StatusCode::OK, Json(AuctionSheetOut::from(&sheet))).into_response(),
        Err(IngestionError::Extraction(e)) => {
            tracing::warn!(error = %e, filename = %filename, "sheet parse failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to parse PDF: {}", e))),
            )
                .into_response()
        }
        Err(IngestionError::Storage(e)) => {
            tracing::error!(error = %e, filename = %filename, "failed to store sheet");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Failed to store sheet: {}", e))),
            )
                .into_response()
        }
    }
}

/// Pull the uploaded file out of the multipart body: filename, content-type
/// check, and the raw bytes.
pub(super) async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<(String, Bytes), (StatusCode, Json<ErrorResponse>)> {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            tracing::warn!("upload request with no file");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("No file uploaded")),
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to read multipart");
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(format!("Failed to read multipart: {}", e))),
            ));
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    if content_type != "application/pdf" && !filename.to_lowercase().ends_with(".pdf") {
        tracing::warn!(content_type = %content_type, "unsupported content type");
        return Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse::new(format!(
                "Unsupported content type: {}",
                content_type
            ))),
        ));
    }

    let data = field.bytes().await.map_err(|e| {
        tracing::error!(error = %e, "failed to read file bytes");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!("Failed to read file: {}", e))),
        )
    })?;

    Ok((filename, data))
}
