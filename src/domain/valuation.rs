use chrono::{DateTime, Utc};

use super::vehicle::VehicleId;

/// Row id of a stored valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValuationId(i64);

impl ValuationId {
    pub fn from_row_id(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// A scrap-value estimate and bid recommendation computed for one vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Valuation {
    pub id: ValuationId,
    pub vehicle_id: VehicleId,
    pub algo_version: String,
    pub recommended_bid_yen: Option<i64>,
    pub resource_value_yen: Option<i64>,
    pub component_value_yen: Option<i64>,
    pub assumptions: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}
