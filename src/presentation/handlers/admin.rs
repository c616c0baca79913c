//! Minimal HTML tables for eyeballing what the parser stored, no frontend
//! required.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::Deserialize;

use crate::application::ports::TextExtractor;
use crate::domain::{SheetId, SheetSummary, Vehicle};
use crate::presentation::state::AppState;

const BASE_CSS: &str = "\
table{border-collapse:collapse;font-family:system-ui,Segoe UI,Arial;font-size:14px}\
th,td{border:1px solid #ddd;padding:6px 8px;vertical-align:top}\
th{background:#f6f6f6}\
h2{font-family:system-ui,Segoe UI,Arial}\
a{color:#1f6feb;text-decoration:none}";

#[derive(Debug, Deserialize)]
pub struct SheetsQuery {
    #[serde(default = "default_sheets_limit")]
    pub limit: i64,
}

fn default_sheets_limit() -> i64 {
    50
}

#[derive(Debug, Deserialize)]
pub struct VehiclesQuery {
    pub sheet_id: i64,
    #[serde(default = "default_vehicles_limit")]
    pub limit: i64,
}

fn default_vehicles_limit() -> i64 {
    200
}

#[tracing::instrument(skip(state))]
pub async fn admin_sheets_handler<E>(
    State(state): State<AppState<E>>,
    Query(query): Query<SheetsQuery>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
{
    let limit = query.limit.clamp(1, 500);

    match state.sheet_repository.list_summaries(limit).await {
        Ok(summaries) => Html(render_sheets_page(limit, &summaries)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render admin sheet list");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<html><body><p>error: {}</p></body></html>", esc(&e.to_string()))),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn admin_vehicles_handler<E>(
    State(state): State<AppState<E>>,
    Query(query): Query<VehiclesQuery>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
{
    let limit = query.limit.clamp(1, 1000);

    match state
        .sheet_repository
        .list_vehicles(SheetId::from_row_id(query.sheet_id), limit)
        .await
    {
        Ok(vehicles) => Html(render_vehicles_page(query.sheet_id, &vehicles)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, sheet_id = query.sheet_id, "failed to render admin vehicle list");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("<html><body><p>error: {}</p></body></html>", esc(&e.to_string()))),
            )
                .into_response()
        }
    }
}

fn render_sheets_page(limit: i64, summaries: &[SheetSummary]) -> String {
    let mut html = String::new();
    html.push_str("<html><head><meta charset='utf-8'>");
    html.push_str(&format!("<style>{}</style>", BASE_CSS));
    html.push_str("</head><body>");
    html.push_str(&format!("<h2>Auction Sheets (latest {})</h2>", limit));
    html.push_str(
        "<table><tr><th>ID</th><th>File</th><th>Auction</th><th>Date</th>\
         <th>Uploaded</th><th>Vehicles</th></tr>",
    );

    for s in summaries {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href='/admin/vehicles?sheet_id={}'>{}</a></td></tr>",
            s.id.as_i64(),
            esc(&s.file_name),
            esc_opt(s.auction_name.as_deref()),
            s.auction_date.map(|d| d.to_string()).unwrap_or_default(),
            s.uploaded_at.format("%Y-%m-%d %H:%M:%S"),
            s.id.as_i64(),
            s.vehicle_count,
        ));
    }

    html.push_str("</table></body></html>");
    html
}

fn render_vehicles_page(sheet_id: i64, vehicles: &[Vehicle]) -> String {
    let mut html = String::new();
    html.push_str("<html><head><meta charset='utf-8'>");
    html.push_str(&format!("<style>{}</style>", BASE_CSS));
    html.push_str("</head><body>");
    html.push_str(&format!("<h2>Vehicles for Sheet #{}</h2>", sheet_id));
    html.push_str("<p><a href='/admin/sheets'>&laquo; back</a></p>");
    html.push_str(
        "<table><tr><th>ID</th><th>Sheet</th><th>No</th><th>Maker</th><th>Car</th>\
         <th>Grade</th><th>Year</th><th>Model</th><th>Mileage</th><th>Color</th>\
         <th>Shift</th><th>Inspection</th><th>Score</th><th>Start</th><th>Lane</th></tr>",
    );

    for v in vehicles {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td></tr>",
            v.id.as_i64(),
            v.sheet_id.as_i64(),
            esc_opt(v.auction_no.as_deref()),
            esc_opt(v.maker.as_deref()),
            esc_opt(v.car_name.as_deref()),
            esc_opt(v.grade.as_deref()),
            opt_num(v.year),
            esc_opt(v.model_code.as_deref()),
            opt_num(v.mileage_km),
            esc_opt(v.color.as_deref()),
            esc_opt(v.shift.as_deref()),
            esc_opt(v.inspection_until.as_deref()),
            esc_opt(v.score.as_deref()),
            opt_num(v.start_price_yen),
            esc_opt(v.lane.as_deref()),
        ));
    }

    html.push_str("</table></body></html>");
    html
}

fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br>")
}

fn esc_opt(s: Option<&str>) -> String {
    s.map(esc).unwrap_or_default()
}

fn opt_num(n: Option<i64>) -> String {
    n.map(|n| n.to_string()).unwrap_or_default()
}
