//! Normalization helpers for text pulled out of Japanese auction sheets:
//! full-width folding, lenient integer parsing, and date formats including
//! era years (令和/平成).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,9}").unwrap());
static WESTERN_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20\d{2})[/-](\d{1,2})[/-](\d{1,2})").unwrap());
static REIWA_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Rr令]和?\s*(\d{1,2})[-./年](\d{1,2})").unwrap());
static HEISEI_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Hh平]成?\s*(\d{1,2})[-./年](\d{1,2})").unwrap());

// Era year 1 of Reiwa is 2019, of Heisei is 1989.
const REIWA_BASE_YEAR: i32 = 2018;
const HEISEI_BASE_YEAR: i32 = 1988;

/// NFKC-fold a cell: full-width digits and punctuation become ASCII,
/// ideographic spaces become regular spaces.
pub fn fold_width(s: &str) -> String {
    s.nfkc().collect::<String>().trim().to_string()
}

/// Lenient integer parse: folds width, strips everything but digits and
/// minus signs, treats "-"/"--" placeholders as absent.
pub fn parse_int(s: &str) -> Option<i64> {
    let folded = fold_width(s);
    let cleaned: String = folded
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    match cleaned.as_str() {
        "" | "-" | "--" => None,
        cleaned => cleaned.parse().ok(),
    }
}

/// Mileage cells carry thousands separators and an optional km suffix.
pub fn parse_mileage_km(s: &str) -> Option<i64> {
    let folded = fold_width(s).replace(',', "");
    DIGIT_RUN
        .find(&folded)
        .and_then(|m| m.as_str().parse().ok())
        .or_else(|| parse_int(&folded))
}

/// Drop values outside a plausible range rather than persisting garbage
/// from a misread cell.
pub fn clamp_int(value: Option<i64>, max_abs: i64) -> Option<i64> {
    value.filter(|v| v.abs() <= max_abs)
}

/// Interpret an auction date anywhere in the given text. Understands
/// 2025/07/31, 2025-07-31, R6/5, 令和6年5月, H30.4, 平成30年4月; era forms
/// without a day default to the 1st.
pub fn parse_auction_date(text: &str) -> Option<NaiveDate> {
    let t = fold_width(text);

    if let Some(c) = WESTERN_DATE.captures(&t) {
        let (y, m, d) = (parse_num(&c[1]), parse_num(&c[2]), parse_num(&c[3]));
        if let Some(date) = NaiveDate::from_ymd_opt(y as i32, m, d) {
            return Some(date);
        }
    }

    if let Some(c) = REIWA_DATE.captures(&t) {
        let (era_year, month) = (parse_num(&c[1]), parse_num(&c[2]));
        if let Some(date) = NaiveDate::from_ymd_opt(REIWA_BASE_YEAR + era_year as i32, month, 1) {
            return Some(date);
        }
    }

    if let Some(c) = HEISEI_DATE.captures(&t) {
        let (era_year, month) = (parse_num(&c[1]), parse_num(&c[2]));
        if let Some(date) = NaiveDate::from_ymd_opt(HEISEI_BASE_YEAR + era_year as i32, month, 1) {
            return Some(date);
        }
    }

    None
}

fn parse_num(s: &str) -> u32 {
    s.parse().unwrap_or(0)
}
