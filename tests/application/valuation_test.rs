use shuppinhyo::application::services::{
    estimate_resource_value, recommend_bid, AnalyzeParams, MarketPrices, DEFAULT_ALGO_VERSION,
};

#[test]
fn given_default_market_when_estimating_then_uses_standard_curb_weight() {
    let market = MarketPrices::default();

    let (value, breakdown) = estimate_resource_value(Some("カローラ"), &market);

    assert_eq!(breakdown.iron_kg, 825);
    assert_eq!(breakdown.aluminum_kg, 110);
    assert_eq!(breakdown.copper_kg, 11);
    assert_eq!(breakdown.catalyst_yen, 15_000);
    assert_eq!(value, 94_200);
}

#[test]
fn given_prius_when_estimating_then_uses_heavier_curb_weight() {
    let market = MarketPrices::default();

    let (value, breakdown) = estimate_resource_value(Some("プリウス S"), &market);

    assert_eq!(breakdown.iron_kg, 900);
    assert_eq!(breakdown.aluminum_kg, 120);
    assert_eq!(breakdown.copper_kg, 12);
    assert_eq!(value, 101_400);
}

#[test]
fn given_missing_car_name_when_estimating_then_falls_back_to_standard_weight() {
    let market = MarketPrices::default();

    let (value, _) = estimate_resource_value(None, &market);

    assert_eq!(value, 94_200);
}

#[test]
fn given_custom_iron_price_when_estimating_then_value_scales() {
    let market = MarketPrices {
        iron_yen_per_kg: 100,
        ..Default::default()
    };

    let (value, _) = estimate_resource_value(None, &market);

    assert_eq!(value, 143_700);
}

#[test]
fn given_resource_value_when_recommending_bid_then_applies_safety_ratio() {
    assert_eq!(recommend_bid(94_200, 0, 0.75), 70_650);
    assert_eq!(recommend_bid(143_700, 10_000, 0.5), 76_850);
    assert_eq!(recommend_bid(0, 0, 0.75), 0);
}

#[test]
fn given_empty_request_body_when_deserializing_params_then_uses_defaults() {
    let params: AnalyzeParams = serde_json::from_value(serde_json::json!({})).unwrap();

    assert!(params.market.is_none());
    assert_eq!(params.reuse_bonus, 0);
    assert_eq!(params.safety_ratio, 0.75);
    assert_eq!(params.algo_version, DEFAULT_ALGO_VERSION);
}

#[test]
fn given_partial_market_when_deserializing_then_remaining_prices_default() {
    let market: MarketPrices =
        serde_json::from_value(serde_json::json!({ "iron_yen_per_kg": 100 })).unwrap();

    assert_eq!(market.iron_yen_per_kg, 100);
    assert_eq!(market.al_yen_per_kg, 300);
    assert_eq!(market.cu_yen_per_kg, 1200);
    assert_eq!(market.catalyst_base_yen, 15_000);
}
