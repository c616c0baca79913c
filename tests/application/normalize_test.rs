use chrono::NaiveDate;

use shuppinhyo::application::services::normalize::{
    clamp_int, fold_width, parse_auction_date, parse_int, parse_mileage_km,
};

#[test]
fn given_full_width_digits_when_folding_then_returns_ascii() {
    assert_eq!(fold_width("１２３４５"), "12345");
    assert_eq!(fold_width("ＴＯＹＯＴＡ"), "TOYOTA");
}

#[test]
fn given_padded_cell_when_folding_then_trims_edges() {
    assert_eq!(fold_width("　カローラ　"), "カローラ");
}

#[test]
fn given_separated_number_when_parsing_int_then_strips_separators() {
    assert_eq!(parse_int("45,000"), Some(45_000));
    assert_eq!(parse_int("1,250,000円"), Some(1_250_000));
}

#[test]
fn given_full_width_number_when_parsing_int_then_folds_first() {
    assert_eq!(parse_int("２０１５"), Some(2015));
}

#[test]
fn given_placeholder_cell_when_parsing_int_then_returns_none() {
    assert_eq!(parse_int("-"), None);
    assert_eq!(parse_int("--"), None);
    assert_eq!(parse_int(""), None);
    assert_eq!(parse_int("不明"), None);
}

#[test]
fn given_mileage_with_unit_when_parsing_then_returns_kilometres() {
    assert_eq!(parse_mileage_km("45,000km"), Some(45_000));
    assert_eq!(parse_mileage_km("３２，０００ｋｍ"), Some(32_000));
    assert_eq!(parse_mileage_km("8.5万km"), Some(8));
}

#[test]
fn given_out_of_range_value_when_clamping_then_drops_it() {
    assert_eq!(clamp_int(Some(12_000_000), 10_000_000), None);
    assert_eq!(clamp_int(Some(-12_000_000), 10_000_000), None);
    assert_eq!(clamp_int(Some(45_000), 10_000_000), Some(45_000));
    assert_eq!(clamp_int(None, 10_000_000), None);
}

#[test]
fn given_western_date_when_parsing_then_returns_calendar_date() {
    assert_eq!(
        parse_auction_date("開催日 2025/07/31 10:00"),
        NaiveDate::from_ymd_opt(2025, 7, 31)
    );
    assert_eq!(
        parse_auction_date("2024-01-05"),
        NaiveDate::from_ymd_opt(2024, 1, 5)
    );
}

#[test]
fn given_reiwa_date_when_parsing_then_offsets_era_year() {
    assert_eq!(
        parse_auction_date("令和6年5月"),
        NaiveDate::from_ymd_opt(2024, 5, 1)
    );
    assert_eq!(
        parse_auction_date("R6.5"),
        NaiveDate::from_ymd_opt(2024, 5, 1)
    );
}

#[test]
fn given_heisei_date_when_parsing_then_offsets_era_year() {
    assert_eq!(
        parse_auction_date("平成30年4月"),
        NaiveDate::from_ymd_opt(2018, 4, 1)
    );
}

#[test]
fn given_text_without_date_when_parsing_then_returns_none() {
    assert_eq!(parse_auction_date("トヨタ カローラ 45,000km"), None);
}
