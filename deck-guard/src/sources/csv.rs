//! CSV file source implementation.

use crate::core::{ImportValidator, ValidationReport};
use crate::prelude::*;
use ::csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const BYTE_ORDER_MARK: char = '\u{feff}';
const BYTE_ORDER_MARK_BYTES: &[u8] = b"\xef\xbb\xbf";

/// Options for configuring CSV tokenizing.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
    /// Escape character (default: None, quotes are escaped by doubling)
    pub escape: Option<u8>,
    /// Comment prefix (lines starting with this are ignored)
    pub comment: Option<u8>,
    /// Strip a leading UTF-8 byte order mark from the first header. When
    /// false the mark is kept as the first character of the first header.
    pub strip_bom: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: None,
            comment: None,
            strip_bom: true,
        }
    }
}

impl CsvOptions {
    /// Options for tab separated exports.
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the comment prefix.
    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    fn reader_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .escape(self.escape)
            .double_quote(self.escape.is_none())
            .comment(self.comment);
        builder
    }
}

/// A tokenized CSV: the first record and every record after it.
///
/// Records keep their own lengths, so ragged files survive tokenizing and
/// can be reported by the validator instead of failing here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Creates a table from an already tokenized header row and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Tokenizes CSV text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deck_guard::sources::{CsvOptions, CsvTable};
    ///
    /// let table = CsvTable::parse_str("Name,Quantity\nSol Ring,1\n", &CsvOptions::default())?;
    /// assert_eq!(table.headers(), &["Name", "Quantity"]);
    /// assert_eq!(table.rows().len(), 1);
    /// # Ok::<(), deck_guard::error::DeckError>(())
    /// ```
    pub fn parse_str(text: &str, options: &CsvOptions) -> Result<Self> {
        Self::from_reader(text.as_bytes(), options)
    }

    /// Tokenizes CSV data from any reader.
    ///
    /// Input that is empty (or only blank lines) yields a table with no
    /// headers and no rows. Non UTF-8 input is an error.
    pub fn from_reader<R: Read>(reader: R, options: &CsvOptions) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        // The tokenizer always drops a leading BOM, so look for it first.
        let has_bom = reader.fill_buf()?.starts_with(BYTE_ORDER_MARK_BYTES);

        let mut csv_reader = options.reader_builder().from_reader(reader);
        let mut records = csv_reader.records();

        let mut headers = match records.next() {
            Some(record) => record_to_strings(&record?),
            None => return Ok(Self::default()),
        };

        if let Some(first) = headers.first_mut() {
            let kept = first.starts_with(BYTE_ORDER_MARK);
            if options.strip_bom && kept {
                first.remove(0);
            } else if has_bom && !options.strip_bom && !kept {
                first.insert(0, BYTE_ORDER_MARK);
            }
        }

        let rows = records
            .map(|record| record.map(|r| record_to_strings(&r)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            table.columns = headers.len(),
            table.rows = rows.len(),
            "Tokenized CSV"
        );

        Ok(Self { headers, rows })
    }

    /// The header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Runs the standard import validator over this table.
    pub fn validate(&self) -> ValidationReport {
        ImportValidator::standard().validate_table(self)
    }

    /// Splits the table into its header row and data rows.
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        (self.headers, self.rows)
    }
}

fn record_to_strings(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

/// A CSV file on disk.
///
/// # Examples
///
/// ```rust,no_run
/// use deck_guard::sources::{CsvOptions, CsvSource};
///
/// # fn example() -> deck_guard::error::Result<()> {
/// // Simple CSV file
/// let table = CsvSource::new("collection.csv").load()?;
///
/// // Tab separated export
/// let table = CsvSource::with_options("collection.tsv", CsvOptions::tsv()).load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvSource {
    /// Creates a new CSV source for a single file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_options(path, CsvOptions::default())
    }

    /// Creates a new CSV source with custom options.
    pub fn with_options(path: impl AsRef<Path>, options: CsvOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    /// The path this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The tokenizer options.
    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Reads and tokenizes the file.
    #[instrument(skip(self), fields(source.path = %self.path.display()))]
    pub fn load(&self) -> Result<CsvTable> {
        let file = File::open(&self.path).map_err(|e| {
            DeckError::data_source_with_source(
                "CSV",
                format!("Failed to open '{}'", self.path.display()),
                Box::new(e),
            )
        })?;

        let table = CsvTable::from_reader(file, &self.options).map_err(|e| {
            let source: Box<dyn std::error::Error + Send + Sync> = match e {
                DeckError::Csv(inner) => Box::new(inner),
                other => Box::new(other),
            };
            DeckError::data_source_with_source(
                "CSV",
                format!("Failed to read '{}'", self.path.display()),
                source,
            )
        })?;

        info!(
            source.path = %self.path.display(),
            table.columns = table.headers().len(),
            table.rows = table.rows().len(),
            "Loaded CSV source"
        );

        Ok(table)
    }
}
