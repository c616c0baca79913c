use std::sync::Arc;

use crate::application::ports::{SheetRepository, TextExtractor};
use crate::application::services::{SheetIngestionService, ValuationService};
use crate::presentation::config::Settings;

pub struct AppState<E>
where
    E: TextExtractor,
{
    pub ingestion_service: Arc<SheetIngestionService<E>>,
    pub valuation_service: Arc<ValuationService>,
    pub sheet_repository: Arc<dyn SheetRepository>,
    pub settings: Settings,
}

impl<E> Clone for AppState<E>
where
    E: TextExtractor,
{
    fn clone(&self) -> Self {
        Self {
            ingestion_service: Arc::clone(&self.ingestion_service),
            valuation_service: Arc::clone(&self.valuation_service),
            sheet_repository: Arc::clone(&self.sheet_repository),
            settings: self.settings.clone(),
        }
    }
}
