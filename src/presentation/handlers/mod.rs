mod admin;
mod analyze;
mod extract_text;
mod health;
mod sheet_types;
mod sheets;
mod upload;

pub use admin::{admin_sheets_handler, admin_vehicles_handler};
pub use analyze::analyze_vehicle_handler;
pub use extract_text::extract_text_handler;
pub use health::health_handler;
pub use sheet_types::{AuctionSheetOut, VehicleOut};
pub use sheets::{get_sheet_handler, list_sheets_handler};
pub use upload::upload_handler;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
