use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::TextExtractor;
use crate::domain::SheetId;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

use super::sheet_types::AuctionSheetOut;

#[tracing::instrument(skip(state))]
pub async fn list_sheets_handler<E>(State(state): State<AppState<E>>) -> impl IntoResponse
where
    E: TextExtractor + 'static,
{
    match state.sheet_repository.list_sheets().await {
        Ok(sheets) => {
            let out: Vec<AuctionSheetOut> = sheets.iter().map(AuctionSheetOut::from).collect();
            (StatusCode::OK, Json(out)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list sheets");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Failed to list sheets: {}", e))),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_sheet_handler<E>(
    State(state): State<AppState<E>>,
    Path(sheet_id): Path<i64>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
{
    match state
        .sheet_repository
        .get_sheet(SheetId::from_row_id(sheet_id))
        .await
    {
        Ok(Some(sheet)) => (StatusCode::OK, Json(AuctionSheetOut::from(&sheet))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Sheet not found")),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, sheet_id, "failed to fetch sheet");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Failed to fetch sheet: {}", e))),
            )
                .into_response()
        }
    }
}
