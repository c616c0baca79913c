use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TextExtractor;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    admin_sheets_handler, admin_vehicles_handler, analyze_vehicle_handler, extract_text_handler,
    get_sheet_handler, health_handler, list_sheets_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E>(state: AppState<E>) -> Router
where
    E: TextExtractor + 'static,
{
    let allowed_origins: Vec<HeaderValue> = state
        .settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.upload.max_file_size_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/upload", post(upload_handler::<E>))
        .route("/api/extract-text", post(extract_text_handler::<E>))
        .route("/api/sheets", get(list_sheets_handler::<E>))
        .route("/api/sheets/{sheet_id}", get(get_sheet_handler::<E>))
        .route(
            "/api/vehicles/{vehicle_id}/analyze",
            post(analyze_vehicle_handler::<E>),
        )
        .route("/admin/sheets", get(admin_sheets_handler::<E>))
        .route("/admin/vehicles", get(admin_vehicles_handler::<E>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
