use tower_core::errors::{ErrorInfo, TowerError};
use tower_core::SchemaVersion;

#[test]
fn errors_round_trip_json() {
    let err = TowerError::division_by_zero("rational");
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"family\": \"Arithmetic\""));
    let decoded: TowerError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn hint_is_omitted_when_absent() {
    let info = ErrorInfo::new("E002", "no hint");
    let value = serde_json::to_value(&info).expect("serialize");
    assert!(value.get("hint").is_none());
    assert_eq!(value["message"], "no hint");

    let hinted = serde_json::to_value(info.with_hint("check the witness")).expect("serialize");
    assert_eq!(hinted["hint"], "check the witness");
}

#[test]
fn schema_version_defaults_to_one() {
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
    assert!(SchemaVersion::new(1, 1, 0) > SchemaVersion::new(1, 0, 9));
}
