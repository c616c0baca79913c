mod normalize_test;
mod sheet_parser_test;
mod valuation_test;
