//! Turns raw per-page text of a listing sheet into structured vehicle rows.
//!
//! Most sheets are one big table, one vehicle per row. The extractor keeps
//! layout spacing, so rows are reconstructed by splitting lines on column
//! gaps, the header row is located via alias matching, and the remaining
//! rows are coerced field by field. Single-vehicle sheets without a usable
//! table fall back to a labelled-field scan over the whole document.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::PageText;
use crate::domain::{ParsedSheet, ParsedVehicle};

use super::normalize::{fold_width, parse_auction_date, parse_int, parse_mileage_km};

/// Which vehicle field a table column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ColumnKind {
    AuctionNo,
    Maker,
    CarName,
    Grade,
    ModelCode,
    Year,
    MileageKm,
    Color,
    Shift,
    InspectionUntil,
    Score,
    StartPriceYen,
}

/// Header cell aliases, in match-priority order. Venues label the same
/// columns differently; these absorb the common variants.
const HEADER_ALIASES: &[(ColumnKind, &[&str])] = &[
    (
        ColumnKind::AuctionNo,
        &["出品番号", "出品No", "Lot", "LOT", "ロット", "車番", "番号"],
    ),
    (ColumnKind::Maker, &["メーカー", "Maker", "Make"]),
    (ColumnKind::CarName, &["車名", "車種", "車両名", "車型", "Model"]),
    (ColumnKind::Grade, &["グレード", "仕様", "Grade"]),
    (ColumnKind::ModelCode, &["型式", "Type"]),
    (ColumnKind::Year, &["年式", "初度登録", "初年度"]),
    (ColumnKind::MileageKm, &["走行距離", "走行", "距離"]),
    (ColumnKind::Color, &["カラー", "Color", "色"]),
    (ColumnKind::Shift, &["ミッション", "AT/MT", "シフト", "変速"]),
    (ColumnKind::InspectionUntil, &["車検", "検切れ"]),
    (ColumnKind::Score, &["評価", "点数"]),
    (
        ColumnKind::StartPriceYen,
        &["スタート", "開始価格", "最低価格", "Start"],
    ),
];

// How many leading table rows are scanned for a header.
const HEADER_SCAN_ROWS: usize = 3;

static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+|\||\u{3000}+| {2,}").unwrap());
static PRICE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-?\d+").unwrap());
static VENUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:USS|JU|TAA)\s*[\p{Hiragana}\p{Katakana}\p{Han}]+").unwrap()
});

static FALLBACK_AUCTION_NO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:出品番号|出品No\.?|LOT|ロット)[^\d]*(\d{3,6})").unwrap());
static FALLBACK_MAKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:メーカー|Make)[:\s]*([^\n]+)").unwrap());
static FALLBACK_CAR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:車名|車種|Model)[:\s]*([^\n]+)").unwrap());
static FALLBACK_GRADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:グレード|仕様|Grade)[:\s]*([^\n]+)").unwrap());
static FALLBACK_MODEL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"型式[:\s]*([^\n]+)").unwrap());
static FALLBACK_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:年式|初度登録)[:\s]*(\d{4})").unwrap());
static FALLBACK_MILEAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"走行距離[:\s]*([\d,]+)").unwrap());
static FALLBACK_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:色|カラー)[:\s]*([^\n]+)").unwrap());
static FALLBACK_SHIFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:ミッション|AT/MT|変速)[:\s]*([^\n]+)").unwrap());
static FALLBACK_INSPECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:車検|有効|満了)[:\s]*([^\n]+)").unwrap());
static FALLBACK_SCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:評価点|評価)[:\s]*([^\n]+)").unwrap());
static FALLBACK_START_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:スタート|開始価格)[:\s]*([\d,]+)").unwrap());

#[derive(Debug, Default)]
pub struct SheetParser;

impl SheetParser {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(skip(self, pages), fields(filename = %filename, page_count = pages.len()))]
    pub fn parse(&self, pages: &[PageText], filename: &str) -> ParsedSheet {
        let joined = pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let mut auction_name = detect_venue(&joined);
        let auction_date = parse_auction_date(&joined);

        let mut vehicles = Vec::new();
        for page in pages {
            for table in detect_tables(&page.text) {
                collect_table_vehicles(&table, &mut vehicles);
            }
        }

        // Single-vehicle sheets often carry labelled fields instead of a table.
        if vehicles.is_empty() {
            if let Some(vehicle) = scan_labelled_fields(&joined) {
                vehicles.push(vehicle);
            }
        }

        if auction_name.is_none() && filename.to_lowercase().contains("uss") {
            auction_name = Some("USS".to_string());
        }

        tracing::debug!(
            vehicle_count = vehicles.len(),
            auction_name = ?auction_name,
            auction_date = ?auction_date,
            "sheet parsed"
        );

        ParsedSheet {
            file_name: filename.to_string(),
            auction_name,
            auction_date,
            vehicles,
        }
    }
}

fn detect_venue(text: &str) -> Option<String> {
    let folded = fold_width(text);
    VENUE.find(&folded).map(|m| m.as_str().replace(' ', ""))
}

fn split_columns(line: &str) -> Vec<String> {
    COLUMN_GAP
        .split(line.trim())
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Consecutive lines that split into two or more cells form a table.
fn detect_tables(page_text: &str) -> Vec<Vec<Vec<String>>> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in page_text.lines() {
        let cells = split_columns(line);
        if cells.len() >= 2 {
            current.push(cells);
        } else if !current.is_empty() {
            if current.len() >= 2 {
                tables.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.len() >= 2 {
        tables.push(current);
    }

    tables
}

/// Map each cell of a candidate header row to the field it labels.
fn map_header_row(row: &[String]) -> HashMap<usize, ColumnKind> {
    let mut mapping = HashMap::new();
    for (idx, cell) in row.iter().enumerate() {
        let folded = fold_width(cell);
        if folded.is_empty() {
            continue;
        }
        for (column, aliases) in HEADER_ALIASES {
            if aliases.iter().any(|alias| folded.contains(alias)) {
                mapping.insert(idx, *column);
                break;
            }
        }
    }
    mapping
}

fn collect_table_vehicles(table: &[Vec<String>], vehicles: &mut Vec<ParsedVehicle>) {
    // The header is not always the first row; pick the candidate row that
    // maps the most columns.
    let mut header_idx = 0;
    let mut header_map: HashMap<usize, ColumnKind> = HashMap::new();
    for (idx, row) in table.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let mapping = map_header_row(row);
        if mapping.len() > header_map.len() {
            header_map = mapping;
            header_idx = idx;
        }
    }
    if header_map.is_empty() {
        return;
    }

    for row in &table[header_idx + 1..] {
        let vehicle = coerce_row(row, &header_map);
        if vehicle.has_identity() {
            vehicles.push(vehicle);
        }
    }
}

fn coerce_row(row: &[String], header_map: &HashMap<usize, ColumnKind>) -> ParsedVehicle {
    let mut vehicle = ParsedVehicle::default();

    for (idx, raw) in row.iter().enumerate() {
        let Some(column) = header_map.get(&idx) else {
            continue;
        };
        let cell = raw.trim();
        if cell.is_empty() {
            continue;
        }
        match column {
            ColumnKind::AuctionNo => vehicle.auction_no = non_empty(fold_width(cell)),
            ColumnKind::Maker => vehicle.maker = non_empty(fold_width(cell)),
            ColumnKind::CarName => vehicle.car_name = non_empty(fold_width(cell)),
            ColumnKind::Grade => vehicle.grade = non_empty(fold_width(cell)),
            ColumnKind::ModelCode => vehicle.model_code = non_empty(fold_width(cell)),
            ColumnKind::Year => vehicle.year = parse_int(cell),
            ColumnKind::MileageKm => vehicle.mileage_km = parse_mileage_km(cell),
            ColumnKind::Color => vehicle.color = non_empty(fold_width(cell)),
            ColumnKind::Shift => vehicle.shift = non_empty(fold_width(cell)),
            ColumnKind::InspectionUntil => {
                vehicle.inspection_until = non_empty(fold_width(cell))
            }
            ColumnKind::Score => vehicle.score = non_empty(fold_width(cell)),
            ColumnKind::StartPriceYen => vehicle.start_price_yen = parse_start_price(cell),
        }
    }

    vehicle.raw_extracted = Some(serde_json::json!({ "row": row }));
    vehicle
}

fn parse_start_price(cell: &str) -> Option<i64> {
    let folded = fold_width(cell).replace(',', "");
    PRICE.find(&folded).and_then(|m| m.as_str().parse().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Labelled-field scan for sheets that describe a single vehicle in
/// "label: value" form rather than a table.
fn scan_labelled_fields(joined: &str) -> Option<ParsedVehicle> {
    let text = fold_width(joined);
    let find = |re: &Regex| {
        re.captures(&text)
            .map(|c| c[1].trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let vehicle = ParsedVehicle {
        auction_no: find(&FALLBACK_AUCTION_NO),
        maker: find(&FALLBACK_MAKER),
        car_name: find(&FALLBACK_CAR_NAME),
        grade: find(&FALLBACK_GRADE),
        model_code: find(&FALLBACK_MODEL_CODE),
        year: find(&FALLBACK_YEAR).as_deref().and_then(parse_int),
        mileage_km: find(&FALLBACK_MILEAGE).as_deref().and_then(parse_mileage_km),
        color: find(&FALLBACK_COLOR),
        shift: find(&FALLBACK_SHIFT),
        inspection_until: find(&FALLBACK_INSPECTION),
        score: find(&FALLBACK_SCORE),
        start_price_yen: find(&FALLBACK_START_PRICE).as_deref().and_then(parse_int),
        lane: None,
        raw_extracted: Some(serde_json::json!({ "fallback_text": true })),
    };

    if vehicle.has_identity() { Some(vehicle) } else { None }
}
