//! 集成測試

use courier::input::{parse_discount_catalog, parse_setup};
use courier::{DeliveryError, DeliverySystem, PlanningConfig};
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;

const CATALOG: &str = r#"[
    {"code": "OFR001", "discount": {"value": 10, "type": "percentage"},
     "distance": {"min": 0, "max": 200}, "weight": {"min": 70, "max": 200}},
    {"code": "OFR002", "discount": {"value": 7, "type": "percentage"},
     "distance": {"min": 50, "max": 150}, "weight": {"min": 100, "max": 250}},
    {"code": "OFR003", "discount": {"value": 5, "type": "percentage"},
     "distance": {"min": 50, "max": 250}, "weight": {"min": 10, "max": 150}}
]"#;

const SETUP: &str = "100 5
PKG1 50 30 OFR001
PKG2 75 125 NA
PKG3 175 100 OFR003
PKG4 110 60 OFR002
PKG5 155 95 NA
2 70 200
";

fn data_path(name: &str) -> String {
    format!("{}/demos/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn run(setup: &str) -> courier::Result<Vec<String>> {
    let setup = parse_setup(setup)?;
    let catalog = parse_discount_catalog(CATALOG)?;
    let summary = DeliverySystem::new(setup, catalog, PlanningConfig::default())?.run()?;
    Ok(summary.results.iter().map(ToString::to_string).collect())
}

#[test]
fn test_full_pipeline_from_text() {
    let lines = run(SETUP).unwrap();

    assert_eq!(
        lines,
        vec![
            "PKG1 0 750 3.98",
            "PKG2 0 1475 1.78",
            "PKG3 0 2350 1.42",
            "PKG4 105 1395 0.85",
            "PKG5 0 2125 4.19",
        ]
    );
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let first = run(SETUP).unwrap();
    for _ in 0..5 {
        assert_eq!(run(SETUP).unwrap(), first);
    }
}

#[test]
fn test_pipeline_from_demo_files() {
    let summary = courier::run_from_files(
        data_path("delivery-setup.txt"),
        data_path("discount-codes.json"),
        PlanningConfig::default(),
    )
    .unwrap();

    assert_eq!(summary.results.len(), 5);
    assert_eq!(summary.delivery_count, 4);

    let pkg5 = summary.results.iter().find(|r| r.name == "PKG5").unwrap();
    assert_eq!(pkg5.delivery_time, Decimal::from_str("4.19").unwrap());
    assert_eq!(pkg5.vehicle_id, 1);
}

#[test]
fn test_total_cost_from_demo_files() {
    let estimates = courier::estimate_from_files(
        data_path("cost-setup.txt"),
        data_path("discount-codes.json"),
        &PlanningConfig::default(),
    )
    .unwrap();

    let lines: Vec<String> = estimates.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["PKG1 0 175", "PKG2 0 275", "PKG3 35 665"]);
}

#[test]
fn test_unknown_discount_code_aborts_run() {
    let setup = SETUP.replace("PKG2 75 125 NA", "PKG2 75 125 OFFR0008");

    match run(&setup) {
        Err(DeliveryError::DiscountNotFound { code, package }) => {
            assert_eq!(code, "OFFR0008");
            assert_eq!(package, "PKG2");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[rstest]
#[case("100 0\n2 70 200\n")]
#[case("100 1\nPKG1 50 30 NA\n0 70 200\n")]
fn test_incomplete_setup(#[case] setup: &str) {
    assert!(matches!(run(setup), Err(DeliveryError::IncompleteSetup)));
}

#[test]
fn test_overweight_package_rejected() {
    let setup = "100 2\nPKG1 50 30 NA\nPKG2 250 30 NA\n1 70 200\n";
    assert!(matches!(run(setup), Err(DeliveryError::PackageOverweight { .. })));
}

#[test]
fn test_invalid_input_rejected_before_core() {
    assert!(matches!(
        run("100 2\nPKG1 50 30 NA\nPKG1 60 30 NA\n1 70 200\n"),
        Err(DeliveryError::Validation(_))
    ));
    assert!(matches!(
        run("100 1\nPKG1 50 30 NA\n1 0 200\n"),
        Err(DeliveryError::Validation(_))
    ));
}

#[test]
fn test_three_vehicles_spread_load() {
    let setup = SETUP.replace("2 70 200", "3 70 200");
    let lines = run(&setup).unwrap();

    // PKG2&PKG4 → 0, PKG3 → 1, PKG5 → 2, PKG1 → 2（2.70 最小）
    assert_eq!(lines[0], "PKG1 0 750 3.12");
    assert_eq!(lines[4], "PKG5 0 2125 1.35");
}

#[rstest]
#[case("100 2\nA 50000000000000000000000000000 10 NA\nB 50000000000000000000000000000 10 NA\n")]
#[case("100 1\nFAR 10 70000000000000000000000000000 NA\n")]
fn test_huge_values_fail_without_panic(#[case] packages: &str) {
    let setup = format!("{packages}2 70 {}\n", Decimal::MAX);
    assert!(matches!(run(&setup), Err(DeliveryError::Calculation(_))));
}
