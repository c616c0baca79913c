pub mod normalize;
mod sheet_ingestion_service;
mod sheet_parser;
mod valuation;

pub use sheet_ingestion_service::{IngestionError, SheetIngestionService};
pub use sheet_parser::SheetParser;
pub use valuation::{
    AnalyzeParams, MarketPrices, ValuationBreakdown, ValuationError, ValuationService,
    DEFAULT_ALGO_VERSION, estimate_resource_value, recommend_bid,
};
