//! Behavior of the standard import validator on representative uploads.

use deck_guard::core::{ImportValidator, ValidationReport};
use deck_guard::validate;

const NO_HEADERS: &str = "No headers were detected in this CSV.";
const NO_NAME_COLUMN: &str = "No \"Name\" column found. Using first column.";
const NO_ROWS: &str = "No card rows detected after the header row.";

fn no_rows() -> Vec<Vec<&'static str>> {
    Vec::new()
}

fn assert_consistent(report: &ValidationReport) {
    assert_eq!(report.is_valid(), report.errors().is_empty());
}

#[test]
fn test_well_formed_collection() {
    let report = validate(
        &["Name", "Quantity"],
        &[vec!["Sol Ring", "1"], vec!["Lightning Greaves", "1"]],
    );

    assert!(report.is_valid());
    assert!(report.errors().is_empty());
    assert!(report.warnings().is_empty());
}

#[test]
fn test_missing_name_column_only_warns() {
    let report = validate(&["Quantity"], &[vec!["1"], vec!["2"]]);

    assert!(report.is_valid());
    assert_eq!(report.warnings(), &[NO_NAME_COLUMN]);
}

#[test]
fn test_single_empty_row_is_singular() {
    let report = validate(&["Name", "Quantity"], &[vec!["", ""], vec!["Sol Ring", "1"]]);

    assert!(report.is_valid());
    assert_eq!(report.warnings()[0], "Found 1 empty row");
}

#[test]
fn test_byte_order_mark_only_row_is_empty() {
    let report = validate(&["Name"], &[["\u{feff}"], ["Sol Ring"]]);

    assert!(report.is_valid());
    assert_eq!(report.warnings(), &["Found 1 empty row"]);
}

#[test]
fn test_short_row_reports_display_row_number() {
    let report = validate(
        &["Name", "Quantity"],
        &[vec!["Sol Ring", "1"], vec!["Lightning Greaves"]],
    );

    assert!(!report.is_valid());
    assert!(report.errors()[0].contains("Rows 3"));
    assert_consistent(&report);
}

#[test]
fn test_no_headers_skips_column_check() {
    let headers: [&str; 0] = [];
    let report = validate(&headers, &[vec!["Sol Ring"]]);

    assert!(!report.is_valid());
    assert_eq!(report.errors(), &[NO_HEADERS]);
    assert!(report.warnings().contains(&NO_NAME_COLUMN.to_string()));
}

#[test]
fn test_no_data_rows() {
    let report = validate(&["Name"], &no_rows());

    assert!(!report.is_valid());
    assert_eq!(report.errors(), &[NO_ROWS]);
    assert!(report.warnings().is_empty());
}

#[test]
fn test_no_headers_and_no_rows_reports_both() {
    let headers: [&str; 0] = [];
    let report = validate(&headers, &no_rows());

    assert_eq!(report.errors(), &[NO_HEADERS, NO_ROWS]);
    assert_eq!(report.warnings(), &[NO_NAME_COLUMN]);
}

#[test]
fn test_findings_follow_check_order() {
    let rows = vec![
        vec!["1", "C21"],
        vec![""],
        vec!["2", "CMR", "extra"],
        vec!["  ", " "],
    ];
    let report = validate(&["Qty", "Set"], &rows);

    assert_eq!(
        report.errors(),
        &["Rows 3, 4 have a different number of columns than the header."]
    );
    assert_eq!(report.warnings(), &[NO_NAME_COLUMN, "Found 2 empty rows"]);
}

#[test]
fn test_many_mismatches_produce_one_truncated_error() {
    let mut rows = vec![vec!["Sol Ring".to_string(), "1".to_string()]];
    for i in 0..10 {
        rows.push(vec![format!("Card {i}")]);
    }
    let headers = vec!["Name".to_string(), "Quantity".to_string()];

    let report = validate(&headers, &rows);
    assert_eq!(
        report.errors(),
        &["Rows 3, 4, 5, 6… have a different number of columns than the header."]
    );
}

#[test]
fn test_validation_is_idempotent() {
    let headers = ["Card Name", "Qty"];
    let rows = vec![vec!["Sol Ring", "1"], vec![], vec!["Arcane Signet"]];

    let first = validate(&headers, &rows);
    let second = validate(&headers, &rows);
    assert_eq!(first, second);

    let standalone = ImportValidator::standard().validate(&headers, &rows);
    assert_eq!(first, standalone);
}

#[test]
fn test_validator_shared_across_threads() {
    let validator = std::sync::Arc::new(ImportValidator::standard());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let rows: Vec<Vec<String>> = (0..=i).map(|n| vec![format!("Card {n}")]).collect();
                validator.validate(&["Name"], &rows)
            })
        })
        .collect();

    for handle in handles {
        let report = handle.join().unwrap();
        assert!(report.is_valid());
    }
}

#[test]
fn test_report_json_shape() {
    let report = validate(&["Name"], &no_rows());
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "valid": false,
            "errors": [NO_ROWS],
            "warnings": []
        })
    );
}
