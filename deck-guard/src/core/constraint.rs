//! Constraint trait and related types for import checks.

use super::{Level, TableView};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;

/// The status of a constraint evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintStatus {
    /// The constraint check passed
    Success,
    /// The constraint check failed
    Failure,
    /// The constraint does not apply to this table (e.g., no header row)
    Skipped,
}

impl ConstraintStatus {
    /// Returns true if this is a Success status.
    pub fn is_success(&self) -> bool {
        matches!(self, ConstraintStatus::Success)
    }

    /// Returns true if this is a Failure status.
    pub fn is_failure(&self) -> bool {
        matches!(self, ConstraintStatus::Failure)
    }

    /// Returns true if this is a Skipped status.
    pub fn is_skipped(&self) -> bool {
        matches!(self, ConstraintStatus::Skipped)
    }
}

/// The result of evaluating a constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintResult {
    /// The status of the constraint evaluation
    pub status: ConstraintStatus,
    /// Optional metric value computed during evaluation
    pub metric: Option<f64>,
    /// Optional message providing additional context
    pub message: Option<String>,
}

impl ConstraintResult {
    /// Creates a successful constraint result.
    pub fn success() -> Self {
        Self {
            status: ConstraintStatus::Success,
            metric: None,
            message: None,
        }
    }

    /// Creates a successful constraint result with a metric.
    pub fn success_with_metric(metric: f64) -> Self {
        Self {
            status: ConstraintStatus::Success,
            metric: Some(metric),
            message: None,
        }
    }

    /// Creates a failed constraint result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ConstraintStatus::Failure,
            metric: None,
            message: Some(message.into()),
        }
    }

    /// Creates a failed constraint result with a metric.
    pub fn failure_with_metric(metric: f64, message: impl Into<String>) -> Self {
        Self {
            status: ConstraintStatus::Failure,
            metric: Some(metric),
            message: Some(message.into()),
        }
    }

    /// Creates a skipped constraint result.
    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            status: ConstraintStatus::Skipped,
            metric: None,
            message: Some(message.into()),
        }
    }
}

/// Metadata associated with a constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstraintMetadata {
    /// A human-readable description of what this constraint validates
    pub description: Option<String>,
    /// Additional key-value pairs for custom metadata
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom: HashMap<String, String>,
}

impl ConstraintMetadata {
    /// Creates a new, empty metadata instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a custom metadata entry.
    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }
}

/// A single check run against an imported table.
///
/// Constraints are pure: `evaluate` must not keep state between calls, so a
/// single validator can be shared across threads and reused for any number
/// of tables.
///
/// # Examples
///
/// ```rust
/// use deck_guard::core::{Constraint, ConstraintResult, Level, TableView};
///
/// #[derive(Debug)]
/// struct MaxRows(usize);
///
/// impl Constraint for MaxRows {
///     fn name(&self) -> &str {
///         "max_rows"
///     }
///
///     fn level(&self) -> Level {
///         Level::Warning
///     }
///
///     fn evaluate(&self, table: &TableView<'_>) -> ConstraintResult {
///         if table.row_count() > self.0 {
///             ConstraintResult::failure(format!("More than {} rows", self.0))
///         } else {
///             ConstraintResult::success()
///         }
///     }
/// }
/// ```
pub trait Constraint: Debug + Send + Sync {
    /// Evaluates the constraint against the table.
    fn evaluate(&self, table: &TableView<'_>) -> ConstraintResult;

    /// Returns the name of the constraint.
    fn name(&self) -> &str;

    /// The severity of a failure of this constraint.
    fn level(&self) -> Level;

    /// Returns the metadata associated with this constraint.
    fn metadata(&self) -> ConstraintMetadata {
        ConstraintMetadata::new()
    }
}
