use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;

#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<SqlitePool, RepositoryError> {
    let options = url
        .parse::<SqliteConnectOptions>()
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?
        .create_if_missing(true);

    let mut retries = 5;
    let mut delay = Duration::from_millis(500);

    loop {
        match SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options.clone())
            .await
        {
            Ok(pool) => {
                info!("SQLite connection pool established");
                return Ok(pool);
            }
            Err(e) if retries > 0 => {
                retries -= 1;
                warn!(
                    error = %e,
                    retries_left = retries,
                    delay_ms = delay.as_millis(),
                    "SQLite connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                return Err(RepositoryError::ConnectionFailed(e.to_string()));
            }
        }
    }
}

/// Create the tables on first start and apply the light auto-migrations
/// that SQLite allows in place.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS auction_sheets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            file_name TEXT NOT NULL,
            auction_name TEXT,
            auction_date TEXT,
            uploaded_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sheet_id INTEGER NOT NULL REFERENCES auction_sheets(id) ON DELETE CASCADE,
            auction_no TEXT,
            maker TEXT,
            car_name TEXT,
            grade TEXT,
            model_code TEXT,
            year INTEGER,
            mileage_km INTEGER,
            color TEXT,
            shift TEXT,
            inspection_until TEXT,
            score TEXT,
            start_price_yen INTEGER,
            raw_extracted_json TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS valuations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vehicle_id INTEGER NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
            algo_version TEXT NOT NULL,
            recommended_bid_yen INTEGER,
            resource_value_yen INTEGER,
            component_value_yen INTEGER,
            assumptions_json TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    ensure_column(pool, "vehicles", "lane", "TEXT").await?;

    Ok(())
}

/// Add a column if it does not exist yet.
async fn ensure_column(
    pool: &SqlitePool,
    table: &str,
    column: &str,
    type_sql: &str,
) -> Result<(), RepositoryError> {
    let rows = sqlx::query(&format!("PRAGMA table_info({table})"))
        .fetch_all(pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    let exists = rows.iter().any(|row| {
        row.try_get::<String, _>("name")
            .map(|name| name == column)
            .unwrap_or(false)
    });

    if !exists {
        info!(table, column, "adding missing column");
        sqlx::query(&format!("ALTER TABLE {table} ADD COLUMN {column} {type_sql}"))
            .execute(pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
    }

    Ok(())
}
