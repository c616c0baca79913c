mod repository_error;
mod sheet_repository;
mod text_extractor;
mod valuation_repository;

pub use repository_error::RepositoryError;
pub use sheet_repository::SheetRepository;
pub use text_extractor::{PageText, TextExtractor, TextExtractorError};
pub use valuation_repository::{NewValuation, ValuationRepository};
