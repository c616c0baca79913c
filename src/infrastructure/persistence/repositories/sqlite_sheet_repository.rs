use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::instrument;

use crate::application::ports::{RepositoryError, SheetRepository};
use crate::domain::{
    AuctionSheet, ParsedSheet, ParsedVehicle, SheetId, SheetSummary, Vehicle, VehicleId,
};

pub struct SqliteSheetRepository {
    pool: SqlitePool,
}

impl SqliteSheetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn vehicles_for_sheet(&self, sheet_id: i64) -> Result<Vec<Vehicle>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, sheet_id, auction_no, maker, car_name, grade, model_code,
                   year, mileage_km, color, shift, inspection_until, score,
                   start_price_yen, raw_extracted_json, lane
            FROM vehicles
            WHERE sheet_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(sheet_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(vehicle_from_row).collect()
    }
}

#[async_trait]
impl SheetRepository for SqliteSheetRepository {
    #[instrument(skip(self, parsed), fields(file_name = %parsed.file_name))]
    async fn save_sheet(&self, parsed: &ParsedSheet) -> Result<AuctionSheet, RepositoryError> {
        let uploaded_at = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let sheet_id = sqlx::query(
            r#"
            INSERT INTO auction_sheets (file_name, auction_name, auction_date, uploaded_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&parsed.file_name)
        .bind(&parsed.auction_name)
        .bind(parsed.auction_date.map(format_date))
        .bind(uploaded_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
        .last_insert_rowid();

        let mut vehicles = Vec::with_capacity(parsed.vehicles.len());
        for vehicle in &parsed.vehicles {
            let vehicle_id = insert_vehicle(&mut tx, sheet_id, vehicle).await?;
            vehicles.push(stored_vehicle(vehicle_id, sheet_id, vehicle));
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(AuctionSheet {
            id: SheetId::from_row_id(sheet_id),
            file_name: parsed.file_name.clone(),
            auction_name: parsed.auction_name.clone(),
            auction_date: parsed.auction_date,
            uploaded_at,
            vehicles,
        })
    }

    #[instrument(skip(self), fields(sheet_id = id.as_i64()))]
    async fn get_sheet(&self, id: SheetId) -> Result<Option<AuctionSheet>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, file_name, auction_name, auction_date, uploaded_at
            FROM auction_sheets
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        match row {
            Some(row) => {
                let mut sheet = sheet_from_row(&row)?;
                sheet.vehicles = self.vehicles_for_sheet(sheet.id.as_i64()).await?;
                Ok(Some(sheet))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn list_sheets(&self) -> Result<Vec<AuctionSheet>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, file_name, auction_name, auction_date, uploaded_at
            FROM auction_sheets
            ORDER BY uploaded_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let mut sheets = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut sheet = sheet_from_row(row)?;
            sheet.vehicles = self.vehicles_for_sheet(sheet.id.as_i64()).await?;
            sheets.push(sheet);
        }

        Ok(sheets)
    }

    #[instrument(skip(self))]
    async fn list_summaries(&self, limit: i64) -> Result<Vec<SheetSummary>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.file_name, s.auction_name, s.auction_date, s.uploaded_at,
                   COUNT(v.id) AS vehicle_count
            FROM auction_sheets s
            LEFT JOIN vehicles v ON v.sheet_id = s.id
            GROUP BY s.id
            ORDER BY s.id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter()
            .map(|row| {
                let sheet = sheet_from_row(row)?;
                let vehicle_count: i64 = row
                    .try_get("vehicle_count")
                    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
                Ok(SheetSummary {
                    id: sheet.id,
                    file_name: sheet.file_name,
                    auction_name: sheet.auction_name,
                    auction_date: sheet.auction_date,
                    uploaded_at: sheet.uploaded_at,
                    vehicle_count,
                })
            })
            .collect()
    }

    #[instrument(skip(self), fields(sheet_id = sheet_id.as_i64()))]
    async fn list_vehicles(
        &self,
        sheet_id: SheetId,
        limit: i64,
    ) -> Result<Vec<Vehicle>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, sheet_id, auction_no, maker, car_name, grade, model_code,
                   year, mileage_km, color, shift, inspection_until, score,
                   start_price_yen, raw_extracted_json, lane
            FROM vehicles
            WHERE sheet_id = ?
            ORDER BY id ASC
            LIMIT ?
            "#,
        )
        .bind(sheet_id.as_i64())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(vehicle_from_row).collect()
    }

    #[instrument(skip(self), fields(vehicle_id = id.as_i64()))]
    async fn get_vehicle(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, sheet_id, auction_no, maker, car_name, grade, model_code,
                   year, mileage_km, color, shift, inspection_until, score,
                   start_price_yen, raw_extracted_json, lane
            FROM vehicles
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        row.as_ref().map(vehicle_from_row).transpose()
    }
}

async fn insert_vehicle(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    sheet_id: i64,
    vehicle: &ParsedVehicle,
) -> Result<i64, RepositoryError> {
    let raw_json = vehicle.raw_extracted.as_ref().map(|v| v.to_string());

    let id = sqlx::query(
        r#"
        INSERT INTO vehicles (
            sheet_id, auction_no, maker, car_name, grade, model_code, year,
            mileage_km, color, shift, inspection_until, score, start_price_yen,
            raw_extracted_json, lane
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(sheet_id)
    .bind(&vehicle.auction_no)
    .bind(&vehicle.maker)
    .bind(&vehicle.car_name)
    .bind(&vehicle.grade)
    .bind(&vehicle.model_code)
    .bind(vehicle.year)
    .bind(vehicle.mileage_km)
    .bind(&vehicle.color)
    .bind(&vehicle.shift)
    .bind(&vehicle.inspection_until)
    .bind(&vehicle.score)
    .bind(vehicle.start_price_yen)
    .bind(raw_json)
    .bind(&vehicle.lane)
    .execute(&mut **tx)
    .await
    .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
    .last_insert_rowid();

    Ok(id)
}

fn stored_vehicle(id: i64, sheet_id: i64, parsed: &ParsedVehicle) -> Vehicle {
    Vehicle {
        id: VehicleId::from_row_id(id),
        sheet_id: SheetId::from_row_id(sheet_id),
        auction_no: parsed.auction_no.clone(),
        maker: parsed.maker.clone(),
        car_name: parsed.car_name.clone(),
        grade: parsed.grade.clone(),
        model_code: parsed.model_code.clone(),
        year: parsed.year,
        mileage_km: parsed.mileage_km,
        color: parsed.color.clone(),
        shift: parsed.shift.clone(),
        inspection_until: parsed.inspection_until.clone(),
        score: parsed.score.clone(),
        start_price_yen: parsed.start_price_yen,
        lane: parsed.lane.clone(),
        raw_extracted: parsed.raw_extracted.clone(),
    }
}

fn sheet_from_row(row: &SqliteRow) -> Result<AuctionSheet, RepositoryError> {
    let auction_date: Option<String> = get(row, "auction_date")?;

    Ok(AuctionSheet {
        id: SheetId::from_row_id(get(row, "id")?),
        file_name: get(row, "file_name")?,
        auction_name: get(row, "auction_name")?,
        auction_date: auction_date.as_deref().map(parse_date).transpose()?,
        uploaded_at: parse_timestamp(&get::<String>(row, "uploaded_at")?)?,
        vehicles: Vec::new(),
    })
}

fn vehicle_from_row(row: &SqliteRow) -> Result<Vehicle, RepositoryError> {
    let raw_json: Option<String> = get(row, "raw_extracted_json")?;

    Ok(Vehicle {
        id: VehicleId::from_row_id(get(row, "id")?),
        sheet_id: SheetId::from_row_id(get(row, "sheet_id")?),
        auction_no: get(row, "auction_no")?,
        maker: get(row, "maker")?,
        car_name: get(row, "car_name")?,
        grade: get(row, "grade")?,
        model_code: get(row, "model_code")?,
        year: get(row, "year")?,
        mileage_km: get(row, "mileage_km")?,
        color: get(row, "color")?,
        shift: get(row, "shift")?,
        inspection_until: get(row, "inspection_until")?,
        score: get(row, "score")?,
        start_price_yen: get(row, "start_price_yen")?,
        lane: get(row, "lane")?,
        raw_extracted: raw_json.and_then(|s| serde_json::from_str(&s).ok()),
    })
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(s: &str) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RepositoryError::QueryFailed(format!("invalid date {s}: {e}")))
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::QueryFailed(format!("invalid timestamp {s}: {e}")))
}
