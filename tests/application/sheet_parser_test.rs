use chrono::NaiveDate;

use shuppinhyo::application::ports::PageText;
use shuppinhyo::application::services::SheetParser;

fn page(text: &str) -> Vec<PageText> {
    vec![PageText {
        page_number: 1,
        text: text.to_string(),
    }]
}

#[test]
fn given_table_sheet_when_parsing_then_extracts_venue_date_and_row_fields() {
    let text = "\
USS東京 オークション 2025/07/31\n\
\n\
出品番号  メーカー  車名  年式  走行距離\n\
1234  トヨタ  カローラ  2015  45,000km\n";

    let sheet = SheetParser::new().parse(&page(text), "sheet.pdf");

    assert_eq!(sheet.file_name, "sheet.pdf");
    assert_eq!(sheet.auction_name.as_deref(), Some("USS東京"));
    assert_eq!(sheet.auction_date, NaiveDate::from_ymd_opt(2025, 7, 31));
    assert_eq!(sheet.vehicles.len(), 1);

    let v = &sheet.vehicles[0];
    assert_eq!(v.auction_no.as_deref(), Some("1234"));
    assert_eq!(v.maker.as_deref(), Some("トヨタ"));
    assert_eq!(v.car_name.as_deref(), Some("カローラ"));
    assert_eq!(v.year, Some(2015));
    assert_eq!(v.mileage_km, Some(45_000));
    assert!(v.raw_extracted.is_some());
}

#[test]
fn given_full_width_cells_when_parsing_then_values_are_folded() {
    let text = "\
出品番号  車名  年式  走行距離\n\
５６７８  フィット  ２０１８  ３２，０００ｋｍ\n";

    let sheet = SheetParser::new().parse(&page(text), "sheet.pdf");

    assert_eq!(sheet.vehicles.len(), 1);
    let v = &sheet.vehicles[0];
    assert_eq!(v.auction_no.as_deref(), Some("5678"));
    assert_eq!(v.car_name.as_deref(), Some("フィット"));
    assert_eq!(v.year, Some(2018));
    assert_eq!(v.mileage_km, Some(32_000));
}

#[test]
fn given_multiple_data_rows_when_parsing_then_returns_one_vehicle_per_row() {
    let text = "\
出品番号  車名  年式\n\
1001  カローラ  2015\n\
1002  プリウス  2019\n\
1003  フィット  2017\n";

    let sheet = SheetParser::new().parse(&page(text), "sheet.pdf");

    assert_eq!(sheet.vehicles.len(), 3);
    assert_eq!(sheet.vehicles[0].auction_no.as_deref(), Some("1001"));
    assert_eq!(sheet.vehicles[1].car_name.as_deref(), Some("プリウス"));
    assert_eq!(sheet.vehicles[2].year, Some(2017));
}

#[test]
fn given_row_without_identifying_fields_when_parsing_then_row_is_skipped() {
    let text = "\
年式  走行距離  車名\n\
2015  45,000  カローラ\n\
2016  50,000\n";

    let sheet = SheetParser::new().parse(&page(text), "sheet.pdf");

    assert_eq!(sheet.vehicles.len(), 1);
    assert_eq!(sheet.vehicles[0].car_name.as_deref(), Some("カローラ"));
}

#[test]
fn given_labelled_single_vehicle_sheet_when_parsing_then_falls_back_to_field_scan() {
    let text = "\
出品番号: 4021\n\
車名: プリウス\n\
走行距離: 120,000\n\
評価: 4.5\n";

    let sheet = SheetParser::new().parse(&page(text), "sheet.pdf");

    assert_eq!(sheet.vehicles.len(), 1);
    let v = &sheet.vehicles[0];
    assert_eq!(v.auction_no.as_deref(), Some("4021"));
    assert_eq!(v.car_name.as_deref(), Some("プリウス"));
    assert_eq!(v.mileage_km, Some(120_000));
    assert_eq!(v.score.as_deref(), Some("4.5"));
    assert_eq!(
        v.raw_extracted,
        Some(serde_json::json!({ "fallback_text": true }))
    );
}

#[test]
fn given_no_venue_in_text_when_filename_mentions_uss_then_venue_falls_back_to_filename() {
    let sheet = SheetParser::new().parse(&page("ただのメモ"), "USS_nagoya_20250731.pdf");

    assert_eq!(sheet.auction_name.as_deref(), Some("USS"));
    assert!(sheet.vehicles.is_empty());
}

#[test]
fn given_unstructured_text_when_parsing_then_returns_empty_sheet() {
    let sheet = SheetParser::new().parse(&page("会議の議事録です。車の話はありません。"), "memo.pdf");

    assert!(sheet.auction_name.is_none());
    assert!(sheet.auction_date.is_none());
    assert!(sheet.vehicles.is_empty());
}
