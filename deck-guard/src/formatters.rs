//! Report formatting for import validation results.
//!
//! This module renders a [`ValidationReport`] as JSON for programmatic
//! consumers, as human-readable text for terminals, or as Markdown for
//! pasting into issues and pull requests.
//!
//! # Examples
//!
//! ```rust
//! use deck_guard::formatters::{HumanFormatter, ResultFormatter};
//!
//! let report = deck_guard::validate(&["Quantity"], &[["1"]]);
//! let output = HumanFormatter::new().format(&report).unwrap();
//! assert!(output.contains("No \"Name\" column found"));
//! ```

use crate::core::{Level, ValidationReport};
use crate::prelude::*;
use std::fmt::Write;

/// Configuration options for formatting validation reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Include warnings, not only errors
    pub include_warnings: bool,
    /// Maximum number of findings to display (-1 for all)
    pub max_issues: i32,
    /// Whether to use colorized output (for human formatter)
    pub use_colors: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            include_warnings: true,
            max_issues: -1,
            use_colors: true,
        }
    }
}

impl FormatterConfig {
    /// Creates a minimal configuration showing only blocking errors.
    pub fn minimal() -> Self {
        Self {
            include_warnings: false,
            max_issues: -1,
            use_colors: false,
        }
    }

    /// Creates a detailed configuration showing everything.
    pub fn detailed() -> Self {
        Self::default()
    }

    /// Creates a configuration suitable for CI/CD environments.
    pub fn ci() -> Self {
        Self {
            include_warnings: true,
            max_issues: 50,
            use_colors: false,
        }
    }

    /// Sets whether to include warnings.
    pub fn with_warnings(mut self, include: bool) -> Self {
        self.include_warnings = include;
        self
    }

    /// Sets the maximum number of findings to display.
    pub fn with_max_issues(mut self, max: i32) -> Self {
        self.max_issues = max;
        self
    }

    /// Sets whether to use colorized output.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Findings selected by this configuration, and how many were left out.
    fn select<'r>(&self, report: &'r ValidationReport) -> (Vec<(Level, &'r str)>, usize) {
        let eligible: Vec<_> = report
            .issues()
            .filter(|(level, _)| self.include_warnings || level.is_blocking())
            .collect();
        let shown = if self.max_issues < 0 {
            eligible.len()
        } else {
            eligible.len().min(self.max_issues as usize)
        };
        let hidden = eligible.len() - shown;
        (eligible.into_iter().take(shown).collect(), hidden)
    }
}

/// Trait for formatting validation reports into different output formats.
///
/// # Examples
///
/// ```rust
/// use deck_guard::core::ValidationReport;
/// use deck_guard::formatters::ResultFormatter;
///
/// struct OneLine;
///
/// impl ResultFormatter for OneLine {
///     fn format(&self, report: &ValidationReport) -> deck_guard::prelude::Result<String> {
///         Ok(format!("valid={} issues={}", report.is_valid(), report.issue_count()))
///     }
/// }
/// ```
pub trait ResultFormatter {
    /// Formats a validation report into a string representation.
    fn format(&self, report: &ValidationReport) -> Result<String>;

    /// Formats a validation report with custom configuration.
    fn format_with_config(
        &self,
        report: &ValidationReport,
        _config: &FormatterConfig,
    ) -> Result<String> {
        self.format(report)
    }
}

/// Formats validation reports as JSON.
///
/// The output has the shape `{"valid": .., "errors": [..], "warnings": [..]}`.
/// Filtering by configuration only trims the listed findings; `valid` always
/// reflects the full report.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    config: FormatterConfig,
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            pretty: true,
        }
    }

    /// Creates a new JSON formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            pretty: true,
        }
    }

    /// Sets whether to use pretty-printed JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// The report as a JSON value, filtered by this formatter's configuration.
    pub fn to_value(&self, report: &ValidationReport) -> serde_json::Value {
        Self::value_with_config(report, &self.config)
    }

    fn value_with_config(report: &ValidationReport, config: &FormatterConfig) -> serde_json::Value {
        let (selected, _) = config.select(report);
        let pick = |wanted: Level| {
            selected
                .iter()
                .filter(|(level, _)| *level == wanted)
                .map(|(_, message)| *message)
                .collect::<Vec<&str>>()
        };

        serde_json::json!({
            "valid": report.is_valid(),
            "errors": pick(Level::Error),
            "warnings": pick(Level::Warning),
        })
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        self.format_with_config(report, &self.config)
    }

    fn format_with_config(
        &self,
        report: &ValidationReport,
        config: &FormatterConfig,
    ) -> Result<String> {
        let value = Self::value_with_config(report, config);

        let output = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        output.map_err(|e| DeckError::Serialization(format!("Failed to serialize report: {e}")))
    }
}

/// Formats validation reports for console output.
#[derive(Debug, Clone)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    /// Creates a new human formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
        }
    }

    /// Creates a new human formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for HumanFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        self.format_with_config(report, &self.config)
    }

    fn format_with_config(
        &self,
        report: &ValidationReport,
        config: &FormatterConfig,
    ) -> Result<String> {
        let mut output = String::new();
        let paint = |code: &str, text: &str| {
            if config.use_colors {
                format!("\x1b[{code}m{text}\x1b[0m")
            } else {
                text.to_string()
            }
        };

        if report.is_valid() {
            writeln!(output, "✅ {}", paint("32", "Import PASSED")).unwrap();
        } else {
            writeln!(output, "❌ {}", paint("31", "Import FAILED")).unwrap();
        }
        writeln!(
            output,
            "   Errors: {}  Warnings: {}",
            report.errors().len(),
            report.warnings().len()
        )
        .unwrap();

        let (selected, hidden) = config.select(report);
        if !selected.is_empty() {
            writeln!(output).unwrap();
        }
        for (level, message) in selected {
            let label = match level {
                Level::Error => paint("31", "error"),
                Level::Warning => paint("33", "warning"),
            };
            writeln!(output, "   {label}: {message}").unwrap();
        }

        if hidden > 0 {
            writeln!(
                output,
                "   ... and {hidden} more issues (use --max-issues to show more)"
            )
            .unwrap();
        }

        Ok(output)
    }
}

/// Formats validation reports as Markdown.
#[derive(Debug, Clone)]
pub struct MarkdownFormatter {
    config: FormatterConfig,
    heading_level: u8,
}

impl MarkdownFormatter {
    /// Creates a new Markdown formatter with default configuration.
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            heading_level: 2,
        }
    }

    /// Creates a new Markdown formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self {
            config,
            heading_level: 2,
        }
    }

    /// Sets the base heading level for the output.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for MarkdownFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        self.format_with_config(report, &self.config)
    }

    fn format_with_config(
        &self,
        report: &ValidationReport,
        config: &FormatterConfig,
    ) -> Result<String> {
        let mut output = String::new();
        let h = "#".repeat(self.heading_level as usize);

        if report.is_valid() {
            writeln!(output, "{h} ✅ Import Report - PASSED").unwrap();
        } else {
            writeln!(output, "{h} ❌ Import Report - FAILED").unwrap();
        }

        writeln!(output).unwrap();
        writeln!(output, "| Finding | Count |").unwrap();
        writeln!(output, "|---------|-------|").unwrap();
        writeln!(output, "| Errors | {} |", report.errors().len()).unwrap();
        writeln!(output, "| Warnings | {} |", report.warnings().len()).unwrap();

        let (selected, hidden) = config.select(report);
        if !selected.is_empty() {
            writeln!(output).unwrap();
            writeln!(output, "{h}# Issues").unwrap();
            writeln!(output).unwrap();
            for (level, message) in selected {
                let emoji = match level {
                    Level::Error => "🚨",
                    Level::Warning => "⚠️",
                };
                writeln!(output, "- {emoji} **{level}:** {message}").unwrap();
            }
        }

        if hidden > 0 {
            writeln!(output).unwrap();
            writeln!(
                output,
                "> **Note:** {hidden} additional issues not shown in this report."
            )
            .unwrap();
        }

        Ok(output)
    }
}
