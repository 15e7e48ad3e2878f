//! Borrowed view over a tokenized table.

/// A read-only view of a header row and its data rows.
///
/// Constraints never see the caller's concrete collection types; the view
/// borrows every cell as `&str` so that `Vec<String>`, `&[&str]` and arrays
/// can all be validated without copying cell contents.
///
/// # Examples
///
/// ```rust
/// use deck_guard::core::TableView;
///
/// let headers = ["Name", "Quantity"];
/// let rows = [["Sol Ring", "1"], ["Arcane Signet", "1"]];
/// let view = TableView::new(&headers, &rows);
///
/// assert_eq!(view.column_count(), 2);
/// assert_eq!(view.row_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    headers: Vec<&'a str>,
    rows: Vec<Vec<&'a str>>,
}

impl<'a> TableView<'a> {
    /// Creates a view over borrowed headers and rows.
    pub fn new<H, R, C>(headers: &'a [H], rows: &'a [R]) -> Self
    where
        H: AsRef<str>,
        R: AsRef<[C]>,
        C: AsRef<str> + 'a,
    {
        Self {
            headers: headers.iter().map(|header| header.as_ref()).collect(),
            rows: rows
                .iter()
                .map(|row| row.as_ref().iter().map(|cell| cell.as_ref()).collect())
                .collect(),
        }
    }

    /// The header row, in file order.
    pub fn headers(&self) -> &[&'a str] {
        &self.headers
    }

    /// The data rows, in file order.
    pub fn rows(&self) -> &[Vec<&'a str>] {
        &self.rows
    }

    /// Number of columns named by the header row.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows, including empty ones.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Lowercased, trimmed header text used for column matching.
pub(crate) fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Returns true if every cell of the row is blank after trimming.
///
/// Trimming removes whitespace and stray byte order marks (U+FEFF), which
/// spreadsheet exports sometimes leave in otherwise empty cells. A row with
/// no cells at all counts as empty.
pub(crate) fn is_blank_row(row: &[&str]) -> bool {
    row.iter().all(|cell| is_blank_cell(cell))
}

fn is_blank_cell(cell: &str) -> bool {
    cell.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}
