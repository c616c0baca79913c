use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::TextExtractor;
use crate::application::services::{AnalyzeParams, ValuationError};
use crate::domain::{Valuation, VehicleId};
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
pub struct ValuationOut {
    pub id: i64,
    pub vehicle_id: i64,
    pub algo_version: String,
    pub recommended_bid_yen: Option<i64>,
    pub resource_value_yen: Option<i64>,
    pub component_value_yen: Option<i64>,
    pub assumptions_json: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<&Valuation> for ValuationOut {
    fn from(v: &Valuation) -> Self {
        Self {
            id: v.id.as_i64(),
            vehicle_id: v.vehicle_id.as_i64(),
            algo_version: v.algo_version.clone(),
            recommended_bid_yen: v.recommended_bid_yen,
            resource_value_yen: v.resource_value_yen,
            component_value_yen: v.component_value_yen,
            assumptions_json: v.assumptions.clone(),
            created_at: v.created_at,
        }
    }
}

/// Estimate scrap value and a recommended bid for a stored vehicle. The
/// request body is optional; defaults are used when it is absent.
#[tracing::instrument(skip(state, params))]
pub async fn analyze_vehicle_handler<E>(
    State(state): State<AppState<E>>,
    Path(vehicle_id): Path<i64>,
    params: Option<Json<AnalyzeParams>>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
{
    let params = params.map(|Json(p)| p).unwrap_or_default();

    match state
        .valuation_service
        .analyze(VehicleId::from_row_id(vehicle_id), params)
        .await
    {
        Ok(valuation) => (StatusCode::OK, Json(ValuationOut::from(&valuation))).into_response(),
        Err(ValuationError::VehicleNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Vehicle not found")),
        )
            .into_response(),
        Err(ValuationError::Storage(e)) => {
            tracing::error!(error = %e, vehicle_id, "failed to store valuation");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!(
                    "Failed to store valuation: {}",
                    e
                ))),
            )
                .into_response()
        }
    }
}
