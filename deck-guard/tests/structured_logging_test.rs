//! Integration tests for structured logging output.

use deck_guard::core::ImportValidator;
use deck_guard::logging::LogConfig;
use std::sync::{Arc, Mutex};

/// Test helper to capture structured logs
struct LogCapture {
    logs: Arc<Mutex<Vec<String>>>,
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let s = String::from_utf8_lossy(buf).to_string();
        self.logs.lock().unwrap().push(s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_json_logs(filter: &str, run: impl FnOnce()) -> String {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let writer_logs = logs.clone();

    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(move || LogCapture {
            logs: writer_logs.clone(),
        })
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::with_default(subscriber, run);

    let captured = logs.lock().unwrap().join("");
    captured
}

#[test]
fn test_failed_constraints_are_logged() {
    let combined = capture_json_logs("deck_guard=debug", || {
        let headers: [&str; 0] = [];
        let rows: Vec<Vec<&str>> = Vec::new();
        let _ = deck_guard::validate(&headers, &rows);
    });

    assert!(
        combined.contains(r#""validator.name":"card_csv_import""#),
        "Should contain validator span fields"
    );
    assert!(
        combined.contains(r#""message":"Constraint failed""#),
        "Should log failures"
    );
    assert!(
        combined.contains(r#""constraint.name":"header_presence""#),
        "Should name the failing constraint"
    );
    assert!(
        combined.contains(r#""message":"Validation finished""#),
        "Should log completion"
    );
}

#[test]
fn test_constraint_details_follow_log_config() {
    let quiet = capture_json_logs("deck_guard=debug", || {
        let _ = ImportValidator::standard().validate(&["Name"], &[["Sol Ring"]]);
    });
    assert!(!quiet.contains("Constraint passed"));

    let verbose = capture_json_logs("deck_guard=debug", || {
        let validator = ImportValidator::builder("verbose_import")
            .constraint(deck_guard::constraints::RowCountConstraint::new())
            .log_config(LogConfig::verbose())
            .build();
        let _ = validator.validate(&["Name"], &[["Sol Ring"]]);
    });
    assert!(verbose.contains(r#""message":"Constraint passed""#));
    assert!(verbose.contains(r#""message":"Validating table""#));
}

#[test]
fn test_nothing_logged_at_info() {
    let combined = capture_json_logs("deck_guard=info", || {
        let _ = deck_guard::validate(&["Name"], &[["Sol Ring"]]);
    });
    assert!(combined.is_empty());
}
