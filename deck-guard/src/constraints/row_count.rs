//! Data row count constraint.

use crate::core::{Constraint, ConstraintMetadata, ConstraintResult, Level, TableView};

/// Fails when nothing follows the header row.
///
/// Blank rows still count as rows here; they are reported separately by
/// [`EmptyRowsConstraint`](super::EmptyRowsConstraint).
#[derive(Debug, Clone, Default)]
pub struct RowCountConstraint;

impl RowCountConstraint {
    /// Creates a new row count constraint.
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for RowCountConstraint {
    fn evaluate(&self, table: &TableView<'_>) -> ConstraintResult {
        let row_count = table.row_count();
        if row_count == 0 {
            ConstraintResult::failure_with_metric(0.0, "No card rows detected after the header row.")
        } else {
            ConstraintResult::success_with_metric(row_count as f64)
        }
    }

    fn name(&self) -> &str {
        "row_count"
    }

    fn level(&self) -> Level {
        Level::Error
    }

    fn metadata(&self) -> ConstraintMetadata {
        ConstraintMetadata::new()
            .with_description("Checks that at least one data row follows the header")
            .with_custom("constraint_type", "size")
    }
}
