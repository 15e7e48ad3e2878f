//! Finding severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity of a finding produced by a constraint.
///
/// Levels are ordered by severity: Error > Warning.
///
/// - **Error**: the table must not be imported (no headers, ragged rows,
///   no data rows).
/// - **Warning**: the user should see the finding, but the import may
///   proceed (no name column, empty rows).
///
/// # Examples
///
/// ```rust
/// use deck_guard::core::Level;
///
/// assert!(Level::Error > Level::Warning);
/// assert!(Level::Error.is_blocking());
/// assert!(!Level::Warning.is_blocking());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Surfaced to the user, does not block the import
    #[default]
    Warning = 1,
    /// Blocks the import
    Error = 2,
}

impl Level {
    /// Returns the string representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Returns true if findings at this level make a report invalid.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
