//! Data sources that turn uploaded files into tokenized tables.
//!
//! The validator works on a header row plus data rows. This module produces
//! them from CSV text, readers or files, and expands glob patterns into the
//! list of files to import.

use crate::prelude::*;
use std::path::PathBuf;

mod csv;

pub use self::csv::{CsvOptions, CsvSource, CsvTable};

/// Expands glob patterns into the files they match.
///
/// Directories are ignored. It is an error for the patterns to match no
/// file at all.
pub fn expand_globs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matches = glob::glob(pattern).map_err(|e| {
            DeckError::Configuration(format!("Invalid glob pattern '{pattern}': {e}"))
        })?;

        for entry in matches {
            let path = entry.map_err(|e| DeckError::Io(e.into_error()))?;
            if path.is_file() {
                paths.push(path);
            }
        }
    }

    if paths.is_empty() {
        return Err(DeckError::data_source(
            "file",
            "No files found matching glob patterns",
        ));
    }

    Ok(paths)
}
