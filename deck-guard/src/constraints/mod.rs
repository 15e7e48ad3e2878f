//! Built-in constraints for card collection imports.
//!
//! Each constraint inspects a [`TableView`](crate::core::TableView) and
//! produces at most one finding. The standard import validator runs them in
//! this order:
//!
//! | Constraint | Level | Finding |
//! |------------|-------|---------|
//! | [`HeaderPresenceConstraint`] | Error | the CSV has no header row |
//! | [`NameColumnConstraint`] | Warning | no header mentions "name" |
//! | [`EmptyRowsConstraint`] | Warning | some rows are entirely blank |
//! | [`ColumnCountConstraint`] | Error | rows disagree with the header width |
//! | [`RowCountConstraint`] | Error | there are no rows after the header |

mod column_count;
mod empty_rows;
mod headers;
mod name_column;
mod row_count;

pub use column_count::ColumnCountConstraint;
pub use empty_rows::EmptyRowsConstraint;
pub use headers::HeaderPresenceConstraint;
pub use name_column::NameColumnConstraint;
pub use row_count::RowCountConstraint;
