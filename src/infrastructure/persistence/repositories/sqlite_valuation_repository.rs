use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePool;
use tracing::instrument;

use crate::application::ports::{NewValuation, RepositoryError, ValuationRepository};
use crate::domain::{Valuation, ValuationId};

pub struct SqliteValuationRepository {
    pool: SqlitePool,
}

impl SqliteValuationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ValuationRepository for SqliteValuationRepository {
    #[instrument(skip(self, valuation), fields(vehicle_id = valuation.vehicle_id.as_i64()))]
    async fn create(&self, valuation: &NewValuation) -> Result<Valuation, RepositoryError> {
        let created_at = Utc::now();

        let id = sqlx::query(
            r#"
            INSERT INTO valuations (
                vehicle_id, algo_version, recommended_bid_yen, resource_value_yen,
                component_value_yen, assumptions_json, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(valuation.vehicle_id.as_i64())
        .bind(&valuation.algo_version)
        .bind(valuation.recommended_bid_yen)
        .bind(valuation.resource_value_yen)
        .bind(valuation.component_value_yen)
        .bind(valuation.assumptions.to_string())
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
        .last_insert_rowid();

        Ok(Valuation {
            id: ValuationId::from_row_id(id),
            vehicle_id: valuation.vehicle_id,
            algo_version: valuation.algo_version.clone(),
            recommended_bid_yen: valuation.recommended_bid_yen,
            resource_value_yen: valuation.resource_value_yen,
            component_value_yen: valuation.component_value_yen,
            assumptions: Some(valuation.assumptions.clone()),
            created_at,
        })
    }
}
