use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::{AuctionSheet, Vehicle};

/// Structured extraction result for one vehicle. Fields the parser could
/// not read serialize as null.
#[derive(Debug, Serialize)]
pub struct VehicleOut {
    pub id: i64,
    pub auction_no: Option<String>,
    pub maker: Option<String>,
    pub car_name: Option<String>,
    pub grade: Option<String>,
    pub model_code: Option<String>,
    pub year: Option<i64>,
    pub mileage_km: Option<i64>,
    pub color: Option<String>,
    pub shift: Option<String>,
    pub inspection_until: Option<String>,
    pub score: Option<String>,
    pub start_price_yen: Option<i64>,
    pub lane: Option<String>,
    pub raw_extracted_json: Option<serde_json::Value>,
}

impl From<&Vehicle> for VehicleOut {
    fn from(v: &Vehicle) -> Self {
        Self {
            id: v.id.as_i64(),
            auction_no: v.auction_no.clone(),
            maker: v.maker.clone(),
            car_name: v.car_name.clone(),
            grade: v.grade.clone(),
            model_code: v.model_code.clone(),
            year: v.year,
            mileage_km: v.mileage_km,
            color: v.color.clone(),
            shift: v.shift.clone(),
            inspection_until: v.inspection_until.clone(),
            score: v.score.clone(),
            start_price_yen: v.start_price_yen,
            lane: v.lane.clone(),
            raw_extracted_json: v.raw_extracted.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuctionSheetOut {
    pub id: i64,
    pub file_name: String,
    pub auction_name: Option<String>,
    pub auction_date: Option<NaiveDate>,
    pub uploaded_at: DateTime<Utc>,
    pub vehicles: Vec<VehicleOut>,
}

impl From<&AuctionSheet> for AuctionSheetOut {
    fn from(sheet: &AuctionSheet) -> Self {
        Self {
            id: sheet.id.as_i64(),
            file_name: sheet.file_name.clone(),
            auction_name: sheet.auction_name.clone(),
            auction_date: sheet.auction_date,
            uploaded_at: sheet.uploaded_at,
            vehicles: sheet.vehicles.iter().map(VehicleOut::from).collect(),
        }
    }
}
