//! Card name column constraint.

use crate::core::table::normalize_header;
use crate::core::{Constraint, ConstraintMetadata, ConstraintResult, Level, TableView};

/// Header text that marks the card name column.
pub(crate) const NAME_TOKEN: &str = "name";

/// Warns when no header looks like a card name column.
///
/// Headers are trimmed and lowercased, then searched for the substring
/// `name`, so `Name`, `Card Name` and ` CARDNAME ` all qualify. When the
/// check fails, importers fall back to the first column for card names.
#[derive(Debug, Clone, Default)]
pub struct NameColumnConstraint;

impl NameColumnConstraint {
    /// Creates a new name column constraint.
    pub fn new() -> Self {
        Self
    }

    /// Index of the first header that qualifies as the name column.
    pub fn find_name_column<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
        headers
            .iter()
            .position(|header| normalize_header(header.as_ref()).contains(NAME_TOKEN))
    }
}

impl Constraint for NameColumnConstraint {
    fn evaluate(&self, table: &TableView<'_>) -> ConstraintResult {
        match Self::find_name_column(table.headers()) {
            Some(index) => ConstraintResult::success_with_metric(index as f64),
            None => ConstraintResult::failure(r#"No "Name" column found. Using first column."#),
        }
    }

    fn name(&self) -> &str {
        "name_column"
    }

    fn level(&self) -> Level {
        Level::Warning
    }

    fn metadata(&self) -> ConstraintMetadata {
        ConstraintMetadata::new()
            .with_description("Checks that a header names the card name column")
            .with_custom("constraint_type", "schema")
            .with_custom("token", NAME_TOKEN)
    }
}
