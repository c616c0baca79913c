use shuppinhyo::domain::ParsedVehicle;

#[test]
fn given_empty_row_when_checking_identity_then_row_is_discardable() {
    let vehicle = ParsedVehicle::default();
    assert!(!vehicle.has_identity());
}

#[test]
fn given_only_numeric_fields_when_checking_identity_then_row_is_discardable() {
    let vehicle = ParsedVehicle {
        year: Some(2015),
        mileage_km: Some(45_000),
        ..Default::default()
    };
    assert!(!vehicle.has_identity());
}

#[test]
fn given_auction_no_when_checking_identity_then_row_is_kept() {
    let vehicle = ParsedVehicle {
        auction_no: Some("1234".to_string()),
        ..Default::default()
    };
    assert!(vehicle.has_identity());
}

#[test]
fn given_car_name_when_checking_identity_then_row_is_kept() {
    let vehicle = ParsedVehicle {
        car_name: Some("カローラ".to_string()),
        ..Default::default()
    };
    assert!(vehicle.has_identity());
}

#[test]
fn given_maker_when_checking_identity_then_row_is_kept() {
    let vehicle = ParsedVehicle {
        maker: Some("トヨタ".to_string()),
        ..Default::default()
    };
    assert!(vehicle.has_identity());
}
