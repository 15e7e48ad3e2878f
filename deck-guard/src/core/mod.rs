//! Core validation types for card collection imports.
//!
//! This module provides the building blocks for validating a tokenized CSV
//! table before it is turned into card lookups.
//!
//! ## Overview
//!
//! - **[`ImportValidator`]**: an ordered list of constraints run against a table
//! - **[`Constraint`]**: an individual check (implemented in the `constraints` module)
//! - **[`Level`]**: whether a failed constraint blocks the import or only warns
//! - **[`ValidationReport`]**: the errors and warnings found, plus overall validity
//! - **[`TableView`]**: the borrowed header row and data rows being checked
//!
//! ## Architecture
//!
//! ```text
//! ImportValidator
//!     ├── HeaderPresenceConstraint (Error)
//!     ├── NameColumnConstraint     (Warning)
//!     ├── EmptyRowsConstraint      (Warning)
//!     ├── ColumnCountConstraint    (Error)
//!     └── RowCountConstraint       (Error)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use deck_guard::core::ImportValidator;
//!
//! let headers = vec!["Quantity".to_string()];
//! let rows = vec![vec!["1".to_string()], vec!["2".to_string()]];
//!
//! let report = ImportValidator::standard().validate(&headers, &rows);
//! assert!(report.is_valid());
//! assert_eq!(
//!     report.warnings(),
//!     &["No \"Name\" column found. Using first column."]
//! );
//! ```
//!
//! ## Constraint Status
//!
//! Each constraint evaluation returns a status:
//!
//! - **Success**: the constraint passed
//! - **Failure**: the constraint failed; its message becomes a finding
//! - **Skipped**: the constraint does not apply (e.g., no header row)

mod constraint;
mod level;
mod report;
pub(crate) mod table;
mod validator;

pub use constraint::{Constraint, ConstraintMetadata, ConstraintResult, ConstraintStatus};
pub use level::Level;
pub use report::ValidationReport;
pub use table::TableView;
pub use validator::{ImportValidator, ImportValidatorBuilder};
