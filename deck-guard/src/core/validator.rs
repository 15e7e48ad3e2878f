//! Import validator for running an ordered set of constraints.

use super::{Constraint, ConstraintStatus, TableView, ValidationReport};
use crate::constraints::{
    ColumnCountConstraint, EmptyRowsConstraint, HeaderPresenceConstraint, NameColumnConstraint,
    RowCountConstraint,
};
use crate::logging::{truncate_field, LogConfig};
use crate::sources::CsvTable;
use crate::{log_constraint, perf_debug};
use std::sync::Arc;
use tracing::{debug, instrument};

/// An ordered list of constraints run against imported tables.
///
/// Every constraint runs on every call; a failing constraint never prevents
/// the ones after it from running. Failures are recorded in registration
/// order, as errors or warnings depending on the constraint's [`Level`].
///
/// [`Level`]: super::Level
///
/// # Examples
///
/// ```rust
/// use deck_guard::core::ImportValidator;
///
/// let validator = ImportValidator::standard();
/// let report = validator.validate(&["Name", "Quantity"], &[["Sol Ring", "1"]]);
/// assert!(report.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct ImportValidator {
    name: String,
    constraints: Vec<Arc<dyn Constraint>>,
    log_config: LogConfig,
}

impl ImportValidator {
    /// Creates a new builder for an import validator.
    pub fn builder(name: impl Into<String>) -> ImportValidatorBuilder {
        ImportValidatorBuilder::new(name)
    }

    /// The validator used for card collection CSV uploads.
    ///
    /// Checks, in order: header presence, name column, empty rows, column
    /// count per row, and at least one data row.
    pub fn standard() -> Self {
        Self::builder("card_csv_import")
            .constraint(HeaderPresenceConstraint::new())
            .constraint(NameColumnConstraint::new())
            .constraint(EmptyRowsConstraint::new())
            .constraint(ColumnCountConstraint::new())
            .constraint(RowCountConstraint::new())
            .build()
    }

    /// Returns the name of the validator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registered constraints in evaluation order.
    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }

    /// Validates a header row and its data rows.
    pub fn validate<'a, H, R, C>(&self, headers: &'a [H], rows: &'a [R]) -> ValidationReport
    where
        H: AsRef<str>,
        R: AsRef<[C]>,
        C: AsRef<str> + 'a,
    {
        self.validate_view(&TableView::new(headers, rows))
    }

    /// Validates a table produced by a [`CsvSource`](crate::sources::CsvSource).
    pub fn validate_table(&self, table: &CsvTable) -> ValidationReport {
        self.validate(table.headers(), table.rows())
    }

    /// Validates an already constructed table view.
    #[instrument(skip(self, table), fields(
        validator.name = %self.name,
        table.columns = table.column_count(),
        table.rows = table.row_count()
    ))]
    pub fn validate_view(&self, table: &TableView<'_>) -> ValidationReport {
        perf_debug!(
            self.log_config,
            headers = %truncate_field(&table.headers().join(","), self.log_config.max_field_length),
            "Validating table"
        );

        let mut report = ValidationReport::empty();

        for constraint in &self.constraints {
            let result = constraint.evaluate(table);

            match result.status {
                ConstraintStatus::Failure => {
                    debug!(
                        constraint.name = %constraint.name(),
                        constraint.level = %constraint.level(),
                        constraint.metric = ?result.metric,
                        "Constraint failed"
                    );
                    let message = result
                        .message
                        .unwrap_or_else(|| format!("Constraint '{}' failed", constraint.name()));
                    report.record(constraint.level(), message);
                }
                ConstraintStatus::Success => {
                    log_constraint!(
                        self.log_config,
                        constraint.name = %constraint.name(),
                        constraint.metric = ?result.metric,
                        "Constraint passed"
                    );
                }
                ConstraintStatus::Skipped => {
                    log_constraint!(
                        self.log_config,
                        constraint.name = %constraint.name(),
                        reason = ?result.message,
                        "Constraint skipped"
                    );
                }
            }
        }

        debug!(
            report.valid = report.is_valid(),
            report.errors = report.errors().len(),
            report.warnings = report.warnings().len(),
            "Validation finished"
        );

        report
    }
}

impl Default for ImportValidator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for [`ImportValidator`].
#[derive(Debug)]
pub struct ImportValidatorBuilder {
    name: String,
    constraints: Vec<Arc<dyn Constraint>>,
    log_config: LogConfig,
}

impl ImportValidatorBuilder {
    /// Creates a new builder with the given validator name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
            log_config: LogConfig::default(),
        }
    }

    /// Appends a constraint. Constraints run in the order they are added.
    pub fn constraint(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Arc::new(constraint));
        self
    }

    /// Appends several boxed constraints.
    pub fn constraints<I>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Constraint>>,
    {
        self.constraints
            .extend(constraints.into_iter().map(Arc::from));
        self
    }

    /// Sets the logging configuration used while validating.
    pub fn log_config(mut self, config: LogConfig) -> Self {
        self.log_config = config;
        self
    }

    /// Builds the validator.
    pub fn build(self) -> ImportValidator {
        ImportValidator {
            name: self.name,
            constraints: self.constraints,
            log_config: self.log_config,
        }
    }
}
