use async_trait::async_trait;

use crate::domain::{Valuation, VehicleId};

use super::RepositoryError;

/// A valuation ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewValuation {
    pub vehicle_id: VehicleId,
    pub algo_version: String,
    pub recommended_bid_yen: Option<i64>,
    pub resource_value_yen: Option<i64>,
    pub component_value_yen: Option<i64>,
    pub assumptions: serde_json::Value,
}

#[async_trait]
pub trait ValuationRepository: Send + Sync {
    async fn create(&self, valuation: &NewValuation) -> Result<Valuation, RepositoryError>;
}
