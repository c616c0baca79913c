mod sqlite_sheet_repository;
mod sqlite_valuation_repository;

pub use sqlite_sheet_repository::SqliteSheetRepository;
pub use sqlite_valuation_repository::SqliteValuationRepository;
