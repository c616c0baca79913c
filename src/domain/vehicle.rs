use super::sheet::SheetId;

/// Row id of a stored vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(i64);

impl VehicleId {
    pub fn from_row_id(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// One vehicle row extracted from a listing sheet. Every field is optional:
/// auction sheets vary wildly in layout and any column may be missing or
/// unreadable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedVehicle {
    pub auction_no: Option<String>,
    pub maker: Option<String>,
    pub car_name: Option<String>,
    pub grade: Option<String>,
    pub model_code: Option<String>,
    pub year: Option<i64>,
    pub mileage_km: Option<i64>,
    pub color: Option<String>,
    pub shift: Option<String>,
    pub inspection_until: Option<String>,
    pub score: Option<String>,
    pub start_price_yen: Option<i64>,
    pub lane: Option<String>,
    /// The raw cells (or fallback marker) the fields were coerced from,
    /// kept for debugging extraction problems.
    pub raw_extracted: Option<serde_json::Value>,
}

impl ParsedVehicle {
    /// A row is only worth keeping when at least one identifying field
    /// was extracted.
    pub fn has_identity(&self) -> bool {
        self.auction_no.is_some() || self.car_name.is_some() || self.maker.is_some()
    }
}

/// A persisted vehicle row.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub sheet_id: SheetId,
    pub auction_no: Option<String>,
    pub maker: Option<String>,
    pub car_name: Option<String>,
    pub grade: Option<String>,
    pub model_code: Option<String>,
    pub year: Option<i64>,
    pub mileage_km: Option<i64>,
    pub color: Option<String>,
    pub shift: Option<String>,
    pub inspection_until: Option<String>,
    pub score: Option<String>,
    pub start_price_yen: Option<i64>,
    pub lane: Option<String>,
    pub raw_extracted: Option<serde_json::Value>,
}
