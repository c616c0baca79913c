use chrono::{DateTime, NaiveDate, Utc};

use super::vehicle::{ParsedVehicle, Vehicle};

/// Row id of a stored auction sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetId(i64);

impl SheetId {
    pub fn from_row_id(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// A stored auction listing sheet (出品票) together with the vehicles
/// extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionSheet {
    pub id: SheetId,
    pub file_name: String,
    pub auction_name: Option<String>,
    pub auction_date: Option<NaiveDate>,
    pub uploaded_at: DateTime<Utc>,
    pub vehicles: Vec<Vehicle>,
}

/// Parser output for one uploaded document, before persistence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSheet {
    pub file_name: String,
    pub auction_name: Option<String>,
    pub auction_date: Option<NaiveDate>,
    pub vehicles: Vec<ParsedVehicle>,
}

/// Sheet header row with its vehicle count, for the admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    pub id: SheetId,
    pub file_name: String,
    pub auction_name: Option<String>,
    pub auction_date: Option<NaiveDate>,
    pub uploaded_at: DateTime<Utc>,
    pub vehicle_count: i64,
}
