use std::sync::Arc;

use crate::application::ports::{
    RepositoryError, SheetRepository, TextExtractor, TextExtractorError,
};
use crate::domain::{AuctionSheet, ParsedVehicle};

use super::normalize::{clamp_int, parse_int};
use super::sheet_parser::SheetParser;

// Upper bounds for values coming out of a misread cell; anything beyond
// these is dropped rather than stored.
const MAX_AUCTION_NO: i64 = 9_999_999;
const MAX_YEAR: i64 = 3000;
const MAX_MILEAGE_KM: i64 = 10_000_000;
const MAX_START_PRICE_YEN: i64 = 1_000_000_000;

pub struct SheetIngestionService<E>
where
    E: TextExtractor,
{
    extractor: Arc<E>,
    parser: SheetParser,
    repository: Arc<dyn SheetRepository>,
}

impl<E> SheetIngestionService<E>
where
    E: TextExtractor,
{
    pub fn new(extractor: Arc<E>, repository: Arc<dyn SheetRepository>) -> Self {
        Self {
            extractor,
            parser: SheetParser::new(),
            repository,
        }
    }

    /// Extract, parse, and persist one uploaded listing sheet.
    #[tracing::instrument(skip(self, data), fields(filename = %filename, bytes = data.len()))]
    pub async fn ingest(&self, data: &[u8], filename: &str) -> Result<AuctionSheet, IngestionError> {
        let pages = self.extractor.extract_pages(data, filename).await?;
        let mut parsed = self.parser.parse(&pages, filename);

        for vehicle in &mut parsed.vehicles {
            clamp_vehicle(vehicle);
        }

        let sheet = self.repository.save_sheet(&parsed).await?;

        tracing::info!(
            sheet_id = sheet.id.as_i64(),
            vehicle_count = sheet.vehicles.len(),
            "auction sheet stored"
        );

        Ok(sheet)
    }

    /// Full extracted text of the document, for the text-extraction endpoint.
    pub async fn extract_text(&self, data: &[u8], filename: &str) -> Result<String, IngestionError> {
        let text = self.extractor.extract_text(data, filename).await?;
        Ok(text)
    }
}

fn clamp_vehicle(vehicle: &mut ParsedVehicle) {
    vehicle.auction_no = vehicle
        .auction_no
        .take()
        .and_then(|s| clamp_int(parse_int(&s), MAX_AUCTION_NO))
        .map(|n| n.to_string());
    vehicle.year = clamp_int(vehicle.year, MAX_YEAR);
    vehicle.mileage_km = clamp_int(vehicle.mileage_km, MAX_MILEAGE_KM);
    vehicle.start_price_yen = clamp_int(vehicle.start_price_yen, MAX_START_PRICE_YEN);
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("extraction: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("storage: {0}")]
    Storage(#[from] RepositoryError),
}
