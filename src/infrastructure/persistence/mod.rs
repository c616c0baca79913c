mod repositories;
mod sqlite_pool;

pub use repositories::{SqliteSheetRepository, SqliteValuationRepository};
pub use sqlite_pool::{create_pool, ensure_schema};
