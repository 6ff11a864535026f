use crate::phone_lookup::{
    type_label, PhoneIntel, PhoneLookupError, PhoneReport, DEFAULT_REGION, INVALID_FORMAT,
};
use crate::phone_metadata::{CarrierTable, UNKNOWN_TIMEZONE};
use phonenumber::Type;

fn create_test_intel() -> PhoneIntel {
    PhoneIntel::new(DEFAULT_REGION, CarrierTable::builtin()).unwrap()
}

#[test]
fn test_indian_mobile_without_prefix() {
    let intel = create_test_intel();
    let details = intel.lookup("9876543210").unwrap();

    assert!(details.valid);
    assert_eq!(details.number_type, "MOBILE");
    assert_eq!(details.carrier, "Airtel");
    assert_eq!(details.location, "India");
    assert_eq!(details.timezone, vec!["Asia/Calcutta".to_string()]);
}

#[test]
fn test_explicit_country_code_overrides_default_region() {
    let intel = create_test_intel();
    let details = intel.lookup("+1 650-253-0000").unwrap();

    assert!(details.valid);
    assert_eq!(details.location, "United States");
    assert!(details
        .timezone
        .contains(&"America/Los_Angeles".to_string()));
    assert_eq!(details.carrier, "Unknown");
}

#[test]
fn test_unparsable_number_reports_invalid_format() {
    let intel = create_test_intel();

    assert!(matches!(
        intel.lookup("not-a-number"),
        Err(PhoneLookupError::Parse(_))
    ));
    assert_eq!(
        intel.report("not-a-number"),
        PhoneReport::Error {
            error: INVALID_FORMAT.to_string()
        }
    );
}

#[test]
fn test_error_report_serializes_to_single_field() {
    let intel = create_test_intel();
    let json = serde_json::to_value(intel.report("not-a-number")).unwrap();
    assert_eq!(json, serde_json::json!({"error": "Invalid format"}));
}

#[test]
fn test_details_serialize_with_type_key() {
    let intel = create_test_intel();
    let json = serde_json::to_value(intel.report("9876543210")).unwrap();

    assert_eq!(json["valid"], true);
    assert_eq!(json["type"], "MOBILE");
    assert!(json["timezone"].as_array().is_some_and(|zones| !zones.is_empty()));
    assert!(json.get("error").is_none());
}

#[test]
fn test_parsable_but_invalid_number() {
    let intel = create_test_intel();
    let details = intel.lookup("12345").unwrap();

    assert!(!details.valid);
    assert_eq!(details.number_type, "UNKNOWN");
    assert_eq!(details.carrier, "Unknown");
    assert_eq!(details.location, "");
    assert_eq!(details.timezone, vec![UNKNOWN_TIMEZONE.to_string()]);
}

#[test]
fn test_unknown_default_region_is_rejected() {
    let result = PhoneIntel::new("ZZZ", CarrierTable::builtin());
    assert!(matches!(result, Err(PhoneLookupError::UnknownRegion(_))));
}

#[test]
fn test_default_region_is_case_insensitive() {
    assert!(PhoneIntel::new("in", CarrierTable::builtin()).is_ok());
}

#[test]
fn test_type_labels() {
    assert_eq!(type_label(Type::Mobile), "MOBILE");
    assert_eq!(type_label(Type::FixedLine), "FIXED_LINE");
    assert_eq!(type_label(Type::FixedLineOrMobile), "FIXED_LINE_OR_MOBILE");
    assert_eq!(type_label(Type::TollFree), "TOLL_FREE");
    assert_eq!(type_label(Type::Voip), "VOIP");
    assert_eq!(type_label(Type::Unknown), "UNKNOWN");
    assert_eq!(type_label(Type::PremiumRate), "PREMIUM_RATE");
    assert_eq!(type_label(Type::NoInternational), "NO_INTERNATIONAL");
}

#[test]
fn test_crown_dependency_mobile() {
    let intel = create_test_intel();
    let details = intel.lookup("+44 7911 123456").unwrap();

    assert!(details.valid);
    assert_eq!(details.number_type, "MOBILE");
    assert_eq!(details.location, "Guernsey");
    assert_eq!(
        details.timezone,
        vec![
            "Europe/Guernsey".to_string(),
            "Europe/Isle_of_Man".to_string(),
            "Europe/Jersey".to_string(),
            "Europe/London".to_string(),
        ]
    );
}

#[test]
fn test_region_outside_builtin_carriers() {
    let intel = create_test_intel();
    let details = intel.lookup("+351 912 345 678").unwrap();

    assert!(details.valid);
    assert_eq!(details.location, "Portugal");
    assert_eq!(details.timezone, vec!["Europe/Lisbon".to_string()]);
}
