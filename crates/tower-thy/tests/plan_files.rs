mod common;

use std::fs;

use tower_core::errors::TowerError;
use tower_thy::{run_plan, WitnessPlan};

use common::sample_plan;

#[test]
fn yaml_and_json_plans_load_identically() -> Result<(), TowerError> {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan = sample_plan();

    let yaml_path = dir.path().join("plan.yaml");
    fs::write(&yaml_path, common::SAMPLE_YAML).expect("write yaml");
    let json_path = dir.path().join("plan.json");
    fs::write(&json_path, serde_json::to_vec(&plan).expect("json")).expect("write json");

    assert_eq!(WitnessPlan::load(&yaml_path)?, plan);
    assert_eq!(WitnessPlan::load(&json_path)?, plan);
    Ok(())
}

#[test]
fn missing_plan_file_is_a_plan_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = WitnessPlan::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, TowerError::Plan(_)));
    assert_eq!(err.info().code, "plan-read");
}

#[test]
fn every_row_produces_checks() {
    let plan = sample_plan();
    let checks = run_plan(&plan);
    let naturals = checks.iter().filter(|c| c.name.starts_with("natural.")).count();
    let vectors = checks
        .iter()
        .filter(|c| c.name.starts_with("inner_product."))
        .count();
    assert_eq!(naturals, 6 * plan.naturals.len());
    assert_eq!(vectors, 4);
    assert!(checks
        .iter()
        .any(|c| c.name == "injection.rational_preserves_order[0]"));
}
