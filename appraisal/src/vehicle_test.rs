use super::*;

#[test]
fn condition_defaults_to_good() {
    assert_eq!(Condition::default(), Condition::Good);
}

#[test]
fn condition_parses_case_insensitively() {
    assert_eq!("excellent".parse::<Condition>(), Ok(Condition::Excellent));
    assert_eq!(" POOR ".parse::<Condition>(), Ok(Condition::Poor));
}

#[test]
fn condition_parse_rejects_unknown() {
    let err = "mint".parse::<Condition>().unwrap_err();
    assert_eq!(err, ConditionParseError("mint".into()));
    assert!(err.to_string().contains("unknown condition"));
}

#[test]
fn condition_serializes_as_capitalized_name() {
    let json = serde_json::to_string(&Condition::Fair).unwrap();
    assert_eq!(json, "\"Fair\"");
}

#[test]
fn descriptor_new_presets_year_and_good_condition() {
    let d = VehicleDescriptor::new(2026);
    assert_eq!(d.year, 2026);
    assert!(d.make.is_empty());
    assert_eq!(d.mileage, None);
    assert_eq!(d.condition, Condition::Good);
}

#[test]
fn request_sends_missing_mileage_as_null() {
    let mut d = VehicleDescriptor::new(2026);
    d.make = "Toyota".into();
    d.model = "Corolla".into();
    d.year = 2020;

    let req = ValuationRequest::from(&d);
    let json = serde_json::to_value(&req).unwrap();
    assert!(json["mileage"].is_null());
    assert!(json["trim"].is_null());
    assert!(json["zip_code"].is_null());
    assert_eq!(json["year"], 2020);
}

#[test]
fn request_coerces_mileage_to_decimal() {
    let mut d = VehicleDescriptor::new(2026);
    d.make = "Honda".into();
    d.model = "Civic".into();
    d.trim = "Sport".into();
    d.mileage = Some(42_000);
    d.zip_code = Some("94107".into());

    let req = ValuationRequest::from(&d);
    assert_eq!(req.mileage, Some(42_000.0));
    assert_eq!(req.trim.as_deref(), Some("Sport"));
    assert_eq!(req.zip_code.as_deref(), Some("94107"));
}

#[test]
fn request_blank_zip_becomes_none() {
    let mut d = VehicleDescriptor::new(2026);
    d.zip_code = Some("   ".into());
    assert_eq!(ValuationRequest::from(&d).zip_code, None);
}

#[test]
fn request_deserializes_with_defaults() {
    let req: ValuationRequest = serde_json::from_str(r#"{"make":"Ford","model":"F-150","year":2019}"#).unwrap();
    assert_eq!(req.condition, Condition::Good);
    assert_eq!(req.trim, None);
    assert_eq!(req.mileage, None);
}
