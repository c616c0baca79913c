use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::application::ports::{
    NewValuation, RepositoryError, SheetRepository, ValuationRepository,
};
use crate::domain::{Valuation, VehicleId};

pub const DEFAULT_ALGO_VERSION: &str = "v0.1-scrap-only";

// Placeholder curb weights and material ratios until real weight tables
// are wired in.
const PRIUS_WEIGHT_KG: f64 = 1200.0;
const DEFAULT_WEIGHT_KG: f64 = 1100.0;
const IRON_RATIO: f64 = 0.75;
const ALUMINUM_RATIO: f64 = 0.10;
const COPPER_RATIO: f64 = 0.01;

/// Scrap material prices for resource-value estimation. Fields the caller
/// leaves out fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketPrices {
    pub iron_yen_per_kg: i64,
    pub al_yen_per_kg: i64,
    pub cu_yen_per_kg: i64,
    pub catalyst_base_yen: i64,
}

impl Default for MarketPrices {
    fn default() -> Self {
        Self {
            iron_yen_per_kg: 40,
            al_yen_per_kg: 300,
            cu_yen_per_kg: 1200,
            catalyst_base_yen: 15_000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzeParams {
    pub market: Option<MarketPrices>,
    pub reuse_bonus: i64,
    pub safety_ratio: f64,
    pub algo_version: String,
}

impl Default for AnalyzeParams {
    fn default() -> Self {
        Self {
            market: None,
            reuse_bonus: 0,
            safety_ratio: 0.75,
            algo_version: DEFAULT_ALGO_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationBreakdown {
    pub iron_kg: i64,
    pub aluminum_kg: i64,
    pub copper_kg: i64,
    pub catalyst_yen: i64,
}

/// Estimate the scrap resource value of a vehicle from its material
/// content at current market prices.
pub fn estimate_resource_value(
    car_name: Option<&str>,
    market: &MarketPrices,
) -> (i64, ValuationBreakdown) {
    let weight_kg = if car_name.is_some_and(|n| n.contains("プリウス")) {
        PRIUS_WEIGHT_KG
    } else {
        DEFAULT_WEIGHT_KG
    };

    let breakdown = ValuationBreakdown {
        iron_kg: (weight_kg * IRON_RATIO) as i64,
        aluminum_kg: (weight_kg * ALUMINUM_RATIO) as i64,
        copper_kg: (weight_kg * COPPER_RATIO) as i64,
        catalyst_yen: market.catalyst_base_yen,
    };

    let resource_value = breakdown.iron_kg * market.iron_yen_per_kg
        + breakdown.aluminum_kg * market.al_yen_per_kg
        + breakdown.copper_kg * market.cu_yen_per_kg
        + breakdown.catalyst_yen;

    (resource_value, breakdown)
}

/// Discount the resource value by a safety margin to arrive at a bid.
pub fn recommend_bid(resource_value: i64, reuse_bonus: i64, safety_ratio: f64) -> i64 {
    ((resource_value + reuse_bonus) as f64 * safety_ratio) as i64
}

pub struct ValuationService {
    sheets: Arc<dyn SheetRepository>,
    valuations: Arc<dyn ValuationRepository>,
}

impl ValuationService {
    pub fn new(sheets: Arc<dyn SheetRepository>, valuations: Arc<dyn ValuationRepository>) -> Self {
        Self { sheets, valuations }
    }

    #[tracing::instrument(skip(self, params), fields(vehicle_id = vehicle_id.as_i64()))]
    pub async fn analyze(
        &self,
        vehicle_id: VehicleId,
        params: AnalyzeParams,
    ) -> Result<Valuation, ValuationError> {
        let vehicle = self
            .sheets
            .get_vehicle(vehicle_id)
            .await?
            .ok_or(ValuationError::VehicleNotFound(vehicle_id.as_i64()))?;

        let market = params.market.clone().unwrap_or_default();
        let (resource_value, breakdown) =
            estimate_resource_value(vehicle.car_name.as_deref(), &market);
        let bid = recommend_bid(resource_value, params.reuse_bonus, params.safety_ratio);

        let assumptions = serde_json::json!({
            "market": market,
            "breakdown": breakdown,
            "safety_ratio": params.safety_ratio,
            "reuse_bonus": params.reuse_bonus,
        });

        let valuation = self
            .valuations
            .create(&NewValuation {
                vehicle_id,
                algo_version: params.algo_version,
                recommended_bid_yen: Some(bid),
                resource_value_yen: Some(resource_value),
                component_value_yen: None,
                assumptions,
            })
            .await?;

        tracing::info!(
            valuation_id = valuation.id.as_i64(),
            recommended_bid_yen = bid,
            resource_value_yen = resource_value,
            "valuation stored"
        );

        Ok(valuation)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    #[error("vehicle not found: {0}")]
    VehicleNotFound(i64),
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
}
