//! # deck-guard - Card collection CSV import validation
//!
//! deck-guard checks a user's uploaded card collection CSV before it is
//! matched against a commander's recommended cardlist. It validates the
//! tokenized table, reports every problem at once as errors (which block the
//! import) and warnings (which do not), and turns valid tables into an owned
//! card collection that can be compared with a recommended list.
//!
//! ## Quick Start
//!
//! ```rust
//! let headers = ["Name", "Quantity"];
//! let rows = [["Sol Ring", "1"], ["Lightning Greaves", "1"]];
//!
//! let report = deck_guard::validate(&headers, &rows);
//! assert!(report.is_valid());
//! assert!(report.errors().is_empty());
//! assert!(report.warnings().is_empty());
//! ```
//!
//! Findings are data, never panics or `Err`s:
//!
//! ```rust
//! let headers: [&str; 0] = [];
//! let rows = [["Sol Ring"]];
//!
//! let report = deck_guard::validate(&headers, &rows);
//! assert!(!report.is_valid());
//! assert_eq!(report.errors(), &["No headers were detected in this CSV."]);
//! ```
//!
//! ## From file to comparison
//!
//! ```rust,no_run
//! use deck_guard::cards::CardCollection;
//! use deck_guard::sources::CsvSource;
//!
//! # fn example() -> deck_guard::error::Result<()> {
//! let table = CsvSource::new("collection.csv").load()?;
//! let report = table.validate();
//! for warning in report.warnings() {
//!     println!("warning: {warning}");
//! }
//!
//! let collection = CardCollection::from_table(&table)?;
//! let comparison = collection.compare(["Sol Ring", "Command Tower", "Arcane Signet"]);
//! println!("missing: {:?}", comparison.missing);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`core`**: `ImportValidator`, the `Constraint` trait, `Level` and `ValidationReport`
//! - **`constraints`**: the built-in import checks
//! - **`sources`**: CSV tokenizing and glob expansion
//! - **`cards`**: owned card collections and recommended-list comparison
//! - **`formatters`**: human, JSON and Markdown report output
//! - **`logging`**: `tracing` configuration helpers

use once_cell::sync::Lazy;

pub mod cards;
pub mod constraints;
pub mod core;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod sources;

static STANDARD_VALIDATOR: Lazy<core::ImportValidator> = Lazy::new(core::ImportValidator::standard);

/// Validates a header row and data rows with the standard import checks.
///
/// This is a pure function of its inputs: calling it twice with the same
/// table yields equal reports.
pub fn validate<'a, H, R, C>(headers: &'a [H], rows: &'a [R]) -> core::ValidationReport
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str> + 'a,
{
    STANDARD_VALIDATOR.validate(headers, rows)
}
