use shuppinhyo::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_full_width_text_when_sanitizing_then_folds_to_ascii() {
    let raw = "ＵＳＳ東京　出品番号１２３４";
    assert_eq!(sanitize_extracted_text(raw), "USS東京 出品番号1234");
}

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_rejoins_word() {
    let raw = "auction in-\nspection report";
    assert_eq!(sanitize_extracted_text(raw), "auction inspection report");
}

#[test]
fn given_runs_of_blank_lines_when_sanitizing_then_collapses_to_paragraph_break() {
    let raw = "車名 カローラ\n\n\n\n走行距離 45,000km";
    assert_eq!(
        sanitize_extracted_text(raw),
        "車名 カローラ\n\n走行距離 45,000km"
    );
}

#[test]
fn given_internal_whitespace_runs_when_sanitizing_then_collapses_to_single_space() {
    let raw = "トヨタ    カローラ\t\t2015";
    assert_eq!(sanitize_extracted_text(raw), "トヨタ カローラ 2015");
}

#[test]
fn given_surrounding_blank_lines_when_sanitizing_then_trims_them() {
    let raw = "\n\n  出品票  \n\n";
    assert_eq!(sanitize_extracted_text(raw), "出品票");
}

#[test]
fn given_empty_input_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(""), "");
}
