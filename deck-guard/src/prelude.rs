//! Prelude for commonly used types and traits in deck-guard.

pub use crate::core::{ImportValidator, Level, ValidationReport};
pub use crate::error::{DeckError, ErrorContext, Result};
pub use crate::formatters::{FormatterConfig, ResultFormatter};
pub use crate::logging::LogConfig;
