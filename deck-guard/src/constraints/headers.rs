//! Header row presence constraint.

use crate::core::{Constraint, ConstraintMetadata, ConstraintResult, Level, TableView};

/// Fails when the CSV has no header row at all.
#[derive(Debug, Clone, Default)]
pub struct HeaderPresenceConstraint;

impl HeaderPresenceConstraint {
    /// Creates a new header presence constraint.
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for HeaderPresenceConstraint {
    fn evaluate(&self, table: &TableView<'_>) -> ConstraintResult {
        let column_count = table.column_count();
        if column_count == 0 {
            ConstraintResult::failure("No headers were detected in this CSV.")
        } else {
            ConstraintResult::success_with_metric(column_count as f64)
        }
    }

    fn name(&self) -> &str {
        "header_presence"
    }

    fn level(&self) -> Level {
        Level::Error
    }

    fn metadata(&self) -> ConstraintMetadata {
        ConstraintMetadata::new()
            .with_description("Checks that the CSV starts with a header row")
            .with_custom("constraint_type", "schema")
    }
}
