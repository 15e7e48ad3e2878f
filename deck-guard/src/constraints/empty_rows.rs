//! Empty row detection constraint.

use crate::core::table::is_blank_row;
use crate::core::{Constraint, ConstraintMetadata, ConstraintResult, Level, TableView};

/// Warns about rows whose cells are all blank.
///
/// A cell is blank when it holds only whitespace and byte order marks. Rows with no
/// cells at all are blank as well.
#[derive(Debug, Clone, Default)]
pub struct EmptyRowsConstraint;

impl EmptyRowsConstraint {
    /// Creates a new empty rows constraint.
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for EmptyRowsConstraint {
    fn evaluate(&self, table: &TableView<'_>) -> ConstraintResult {
        let empty = table.rows().iter().filter(|row| is_blank_row(row)).count();

        if empty == 0 {
            return ConstraintResult::success_with_metric(0.0);
        }

        let noun = if empty == 1 { "row" } else { "rows" };
        ConstraintResult::failure_with_metric(empty as f64, format!("Found {empty} empty {noun}"))
    }

    fn name(&self) -> &str {
        "empty_rows"
    }

    fn level(&self) -> Level {
        Level::Warning
    }

    fn metadata(&self) -> ConstraintMetadata {
        ConstraintMetadata::new()
            .with_description("Counts rows in which every cell is blank")
            .with_custom("constraint_type", "completeness")
    }
}
