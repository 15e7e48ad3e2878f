//! Validation report type.

use super::Level;
use serde::{Deserialize, Serialize};

/// The outcome of validating one imported table.
///
/// A report is assembled once per validation call and never changes
/// afterwards. `valid` is derived from `errors`: it is true exactly when no
/// blocking finding was recorded. Warnings never affect validity.
///
/// The serialized form is `{"valid": .., "errors": [..], "warnings": [..]}`.
/// When a report is deserialized, `valid` is recomputed from `errors`.
///
/// # Examples
///
/// ```rust
/// use deck_guard::core::ValidationReport;
///
/// let report = ValidationReport::from_findings(
///     Vec::new(),
///     vec!["Found 1 empty row".to_string()],
/// );
/// assert!(report.is_valid());
/// assert!(report.has_warnings());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawReport")]
pub struct ValidationReport {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

#[derive(Deserialize)]
struct RawReport {
    #[serde(default)]
    errors: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl From<RawReport> for ValidationReport {
    fn from(raw: RawReport) -> Self {
        Self::from_findings(raw.errors, raw.warnings)
    }
}

impl ValidationReport {
    /// Builds a report from already ordered findings.
    pub fn from_findings(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::from_findings(Vec::new(), Vec::new())
    }

    /// Records a finding and keeps `valid` in step with `errors`.
    pub(crate) fn record(&mut self, level: Level, message: String) {
        match level {
            Level::Error => {
                self.errors.push(message);
                self.valid = false;
            }
            Level::Warning => self.warnings.push(message),
        }
    }

    /// True if no blocking error was found.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Blocking findings, in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Non-blocking findings, in the order the checks ran.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns true if any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// All findings tagged with their level, errors first.
    pub fn issues(&self) -> impl Iterator<Item = (Level, &str)> + '_ {
        self.errors
            .iter()
            .map(|message| (Level::Error, message.as_str()))
            .chain(
                self.warnings
                    .iter()
                    .map(|message| (Level::Warning, message.as_str())),
            )
    }

    /// Total number of findings.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Splits the report into its error and warning lists.
    pub fn into_findings(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }

    /// Formats the report as compact JSON.
    pub fn to_json(&self) -> crate::prelude::Result<String> {
        use crate::formatters::{JsonFormatter, ResultFormatter};
        JsonFormatter::new().with_pretty(false).format(self)
    }

    /// Formats the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::prelude::Result<String> {
        use crate::formatters::{JsonFormatter, ResultFormatter};
        JsonFormatter::new().format(self)
    }

    /// Formats the report for console display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let report = deck_guard::validate(&["Name"], &[["Sol Ring"]]);
    /// let output = report.to_human().unwrap();
    /// assert!(output.contains("Import PASSED"));
    /// ```
    pub fn to_human(&self) -> crate::prelude::Result<String> {
        use crate::formatters::{HumanFormatter, ResultFormatter};
        HumanFormatter::new().format(self)
    }

    /// Formats the report as Markdown.
    pub fn to_markdown(&self) -> crate::prelude::Result<String> {
        use crate::formatters::{MarkdownFormatter, ResultFormatter};
        MarkdownFormatter::new().format(self)
    }

    /// Formats the report using a custom formatter.
    pub fn format_with<F: crate::formatters::ResultFormatter>(
        &self,
        formatter: &F,
    ) -> crate::prelude::Result<String> {
        formatter.format(self)
    }
}
