//! Per-row column count constraint.

use crate::core::{Constraint, ConstraintMetadata, ConstraintResult, Level, TableView};

/// Number of offending rows spelled out in the finding.
const DEFAULT_MAX_LISTED: usize = 4;

/// A constraint that validates every data row has as many cells as the header.
///
/// Offending rows are reported by their display row number: the 1-based
/// line a person would count in the file, where the header is row 1 and the
/// first data row is row 2. All offending rows are folded into a single
/// finding that lists the first few row numbers and ends with `…` when more
/// exist.
///
/// The constraint is skipped when the header row is empty, since there is
/// no width to compare against.
///
/// # Examples
///
/// ```rust
/// use deck_guard::constraints::ColumnCountConstraint;
/// use deck_guard::core::{Constraint, TableView};
///
/// let rows = vec![vec!["Sol Ring", "1"], vec!["Lightning Greaves"]];
/// let table = TableView::new(&["Name", "Quantity"], &rows);
///
/// let result = ColumnCountConstraint::new().evaluate(&table);
/// assert_eq!(
///     result.message.as_deref(),
///     Some("Rows 3 have a different number of columns than the header.")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ColumnCountConstraint {
    max_listed: usize,
}

impl ColumnCountConstraint {
    /// Creates a new column count constraint listing up to four rows.
    pub fn new() -> Self {
        Self {
            max_listed: DEFAULT_MAX_LISTED,
        }
    }

    /// Sets how many offending row numbers the finding lists.
    pub fn with_max_listed(mut self, max_listed: usize) -> Self {
        self.max_listed = max_listed.max(1);
        self
    }

    /// Display row numbers of all rows whose width differs from the header.
    pub fn mismatched_rows(table: &TableView<'_>) -> Vec<usize> {
        let expected = table.column_count();
        table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() != expected)
            .map(|(index, _)| index + 2)
            .collect()
    }

    fn describe(&self, mismatched: &[usize]) -> String {
        let listed = mismatched
            .iter()
            .take(self.max_listed)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let ellipsis = if mismatched.len() > self.max_listed {
            "…"
        } else {
            ""
        };
        format!("Rows {listed}{ellipsis} have a different number of columns than the header.")
    }
}

impl Default for ColumnCountConstraint {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraint for ColumnCountConstraint {
    fn evaluate(&self, table: &TableView<'_>) -> ConstraintResult {
        if table.column_count() == 0 {
            return ConstraintResult::skipped("No header row to compare row widths against");
        }

        let mismatched = Self::mismatched_rows(table);
        if mismatched.is_empty() {
            ConstraintResult::success_with_metric(0.0)
        } else {
            ConstraintResult::failure_with_metric(
                mismatched.len() as f64,
                self.describe(&mismatched),
            )
        }
    }

    fn name(&self) -> &str {
        "column_count"
    }

    fn level(&self) -> Level {
        Level::Error
    }

    fn metadata(&self) -> ConstraintMetadata {
        ConstraintMetadata::new()
            .with_description("Checks that every row has as many cells as the header")
            .with_custom("constraint_type", "schema")
            .with_custom("max_listed", self.max_listed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConstraintStatus;

    fn evaluate(headers: &[&str], rows: &[Vec<&str>]) -> ConstraintResult {
        ColumnCountConstraint::new().evaluate(&TableView::new(headers, rows))
    }

    #[test]
    fn test_all_rows_match() {
        let result = evaluate(
            &["Name", "Quantity"],
            &[vec!["Sol Ring", "1"], vec!["Arcane Signet", "1"]],
        );
        assert_eq!(result.status, ConstraintStatus::Success);
        assert_eq!(result.metric, Some(0.0));
    }

    #[test]
    fn test_short_row_uses_display_number() {
        let result = evaluate(
            &["Name", "Quantity"],
            &[vec!["Sol Ring", "1"], vec!["Lightning Greaves"]],
        );
        assert_eq!(result.status, ConstraintStatus::Failure);
        assert_eq!(
            result.message.as_deref(),
            Some("Rows 3 have a different number of columns than the header.")
        );
    }

    #[test]
    fn test_long_rows_are_mismatches_too() {
        let result = evaluate(&["Name"], &[vec!["Sol Ring", "1"], vec!["Arcane Signet"]]);
        assert_eq!(
            result.message.as_deref(),
            Some("Rows 2 have a different number of columns than the header.")
        );
    }

    #[test]
    fn test_exactly_four_rows_has_no_ellipsis() {
        let rows = vec![vec!["x"]; 4];
        let result = evaluate(&["Name", "Quantity"], &rows);
        assert_eq!(
            result.message.as_deref(),
            Some("Rows 2, 3, 4, 5 have a different number of columns than the header.")
        );
        assert_eq!(result.metric, Some(4.0));
    }

    #[test]
    fn test_more_than_four_rows_truncates() {
        let mut rows = vec![vec!["Sol Ring", "1"]];
        rows.extend(vec![vec!["x"]; 6]);
        let result = evaluate(&["Name", "Quantity"], &rows);
        assert_eq!(
            result.message.as_deref(),
            Some("Rows 3, 4, 5, 6… have a different number of columns than the header.")
        );
        assert_eq!(result.metric, Some(6.0));
    }

    #[test]
    fn test_empty_row_counts_as_mismatch() {
        let result = evaluate(&["Name"], &[vec![], vec!["Sol Ring"]]);
        assert_eq!(
            result.message.as_deref(),
            Some("Rows 2 have a different number of columns than the header.")
        );
    }

    #[test]
    fn test_skipped_without_headers() {
        let result = evaluate(&[], &[vec!["Sol Ring"]]);
        assert_eq!(result.status, ConstraintStatus::Skipped);
    }

    #[test]
    fn test_custom_listing_limit() {
        let constraint = ColumnCountConstraint::new().with_max_listed(2);
        let rows = vec![vec!["x"]; 3];
        let result = constraint.evaluate(&TableView::new(&["Name", "Quantity"], &rows));
        assert_eq!(
            result.message.as_deref(),
            Some("Rows 2, 3… have a different number of columns than the header.")
        );
    }

    #[test]
    fn test_metadata() {
        let metadata = ColumnCountConstraint::new().metadata();
        assert_eq!(
            metadata.custom.get("constraint_type"),
            Some(&"schema".to_string())
        );
        assert_eq!(metadata.custom.get("max_listed"), Some(&"4".to_string()));
    }
}
