use async_trait::async_trait;

use crate::domain::{AuctionSheet, ParsedSheet, SheetId, SheetSummary, Vehicle, VehicleId};

use super::RepositoryError;

#[async_trait]
pub trait SheetRepository: Send + Sync {
    /// Persist a parsed sheet and its vehicles, returning the stored rows
    /// with their assigned ids.
    async fn save_sheet(&self, parsed: &ParsedSheet) -> Result<AuctionSheet, RepositoryError>;

    async fn get_sheet(&self, id: SheetId) -> Result<Option<AuctionSheet>, RepositoryError>;

    /// All sheets with their vehicles, newest upload first.
    async fn list_sheets(&self) -> Result<Vec<AuctionSheet>, RepositoryError>;

    /// Sheet headers with vehicle counts, newest first.
    async fn list_summaries(&self, limit: i64) -> Result<Vec<SheetSummary>, RepositoryError>;

    async fn list_vehicles(
        &self,
        sheet_id: SheetId,
        limit: i64,
    ) -> Result<Vec<Vehicle>, RepositoryError>;

    async fn get_vehicle(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError>;
}
