//! Turning validated tables into owned cards and comparing them with a
//! recommended list.

use crate::constraints::NameColumnConstraint;
use crate::core::table::{is_blank_row, normalize_header};
use crate::prelude::*;
use crate::sources::CsvTable;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument, warn};

/// Normalized header texts that identify a quantity column.
const QUANTITY_HEADERS: [&str; 3] = ["quantity", "qty", "count"];

/// Separator between the faces of a double-faced card name.
const FACE_SEPARATOR: &str = " // ";

/// One owned card and how many copies of it the collection holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Card name, as first spelled in the file
    pub name: String,
    /// Number of copies, at least 1
    pub quantity: u32,
}

/// The owned cards read from a validated import.
///
/// # Examples
///
/// ```rust
/// use deck_guard::cards::CardCollection;
/// use deck_guard::sources::{CsvOptions, CsvTable};
///
/// let table = CsvTable::parse_str(
///     "Qty,Card Name\n1,Sol Ring\n2,Arcane Signet\n",
///     &CsvOptions::default(),
/// )?;
/// let collection = CardCollection::from_table(&table)?;
///
/// let comparison = collection.compare(["Sol Ring", "Command Tower"]);
/// assert_eq!(comparison.owned, vec!["Sol Ring"]);
/// assert_eq!(comparison.missing, vec!["Command Tower"]);
/// # Ok::<(), deck_guard::error::DeckError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<CardEntry>,
}

/// Which recommended cards are owned and which are missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComparison {
    /// Recommended cards present in the collection, in recommended order
    pub owned: Vec<String>,
    /// Recommended cards absent from the collection, in recommended order
    pub missing: Vec<String>,
}

impl DeckComparison {
    /// Share of the recommended list already owned, from 0.0 to 1.0.
    pub fn coverage(&self) -> f64 {
        let total = self.owned.len() + self.missing.len();
        if total == 0 {
            1.0
        } else {
            self.owned.len() as f64 / total as f64
        }
    }
}

impl CardCollection {
    /// Builds a collection from a tokenized table.
    ///
    /// The table is validated first; if the report is invalid, its errors
    /// are returned as [`DeckError::InvalidImport`]. Warnings do not prevent
    /// the import.
    #[instrument(skip(table), fields(table.rows = table.rows().len()))]
    pub fn from_table(table: &CsvTable) -> Result<Self> {
        let report = table.validate();
        if !report.is_valid() {
            let (errors, _) = report.into_findings();
            return Err(DeckError::InvalidImport { errors });
        }

        let name_index = NameColumnConstraint::find_name_column(table.headers()).unwrap_or(0);
        let quantity_index = table
            .headers()
            .iter()
            .position(|header| QUANTITY_HEADERS.contains(&normalize_header(header).as_str()));
        debug!(
            name.column = name_index,
            quantity.column = ?quantity_index,
            "Resolved card columns"
        );

        let mut collection = Self::default();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for row in table.rows() {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            if is_blank_row(&cells) {
                continue;
            }

            let name = cells.get(name_index).map(|cell| cell.trim()).unwrap_or("");
            if name.is_empty() {
                continue;
            }

            let quantity = quantity_index
                .and_then(|index| cells.get(index))
                .map(|cell| parse_quantity(cell))
                .unwrap_or(1);

            match positions.get(&card_key(name)) {
                Some(&position) => {
                    let entry = &mut collection.cards[position];
                    entry.quantity = entry.quantity.saturating_add(quantity);
                }
                None => {
                    positions.insert(card_key(name), collection.cards.len());
                    collection.cards.push(CardEntry {
                        name: name.to_string(),
                        quantity,
                    });
                }
            }
        }

        debug!(cards = collection.cards.len(), "Built card collection");
        Ok(collection)
    }

    /// The owned cards in first-seen order.
    pub fn cards(&self) -> &[CardEntry] {
        &self.cards
    }

    /// Number of distinct cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the collection holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total number of copies across all cards.
    pub fn total_quantity(&self) -> u64 {
        self.cards.iter().map(|card| u64::from(card.quantity)).sum()
    }

    /// Returns true if the collection holds the named card.
    ///
    /// Matching ignores case and surrounding whitespace. A double-faced name
    /// such as `"Delver of Secrets // Insectile Aberration"` also matches its
    /// front face, in either direction.
    pub fn contains(&self, name: &str) -> bool {
        let keys = self.lookup_keys();
        matches_any(&keys, name)
    }

    /// Splits a recommended list into owned and missing cards.
    ///
    /// Blank and repeated recommendations are ignored.
    pub fn compare<I, S>(&self, recommended: I) -> DeckComparison
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = self.lookup_keys();
        let mut seen = HashSet::new();
        let mut comparison = DeckComparison::default();

        for name in recommended {
            let name = name.as_ref().trim();
            if name.is_empty() || !seen.insert(card_key(name)) {
                continue;
            }

            if matches_any(&keys, name) {
                comparison.owned.push(name.to_string());
            } else {
                comparison.missing.push(name.to_string());
            }
        }

        debug!(
            owned = comparison.owned.len(),
            missing = comparison.missing.len(),
            "Compared collection with recommendations"
        );
        comparison
    }

    fn lookup_keys(&self) -> HashSet<String> {
        let mut keys = HashSet::new();
        for card in &self.cards {
            let key = card_key(&card.name);
            if let Some(front) = front_face(&key) {
                keys.insert(front.to_string());
            }
            keys.insert(key);
        }
        keys
    }
}

fn matches_any(keys: &HashSet<String>, name: &str) -> bool {
    let key = card_key(name);
    keys.contains(&key) || front_face(&key).map_or(false, |front| keys.contains(front))
}

fn card_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn front_face(key: &str) -> Option<&str> {
    key.split_once(FACE_SEPARATOR)
        .map(|(front, _)| front.trim())
        .filter(|front| !front.is_empty())
}

fn parse_quantity(cell: &str) -> u32 {
    let cell = cell.trim();
    match cell.parse::<u32>() {
        Ok(quantity) if quantity > 0 => quantity,
        _ => {
            if !cell.is_empty() {
                warn!(quantity = %cell, "Unreadable quantity, counting one copy");
            }
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::CsvOptions;

    fn table(text: &str) -> CsvTable {
        CsvTable::parse_str(text, &CsvOptions::default()).unwrap()
    }

    #[test]
    fn test_from_table_reads_name_and_quantity() {
        let collection =
            CardCollection::from_table(&table("Quantity,Name\n2,Sol Ring\n1,Arcane Signet\n"))
                .unwrap();

        assert_eq!(
            collection.cards(),
            &[
                CardEntry {
                    name: "Sol Ring".to_string(),
                    quantity: 2
                },
                CardEntry {
                    name: "Arcane Signet".to_string(),
                    quantity: 1
                },
            ]
        );
        assert_eq!(collection.total_quantity(), 3);
    }

    #[test]
    fn test_from_table_falls_back_to_first_column() {
        let collection =
            CardCollection::from_table(&table("Card,Set\nSol Ring,C21\nCommand Tower,C21\n"))
                .unwrap();

        let names: Vec<&str> = collection.cards().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Sol Ring", "Command Tower"]);
    }

    #[test]
    fn test_from_table_merges_duplicates_and_skips_blanks() {
        let collection = CardCollection::from_table(&table(
            "Name,Qty\nSol Ring,1\n,\n  ,3\nsol ring ,2\nArcane Signet,abc\n",
        ))
        .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.cards()[0].name, "Sol Ring");
        assert_eq!(collection.cards()[0].quantity, 3);
        assert_eq!(collection.cards()[1].quantity, 1);
    }

    #[test]
    fn test_from_table_rejects_invalid_tables() {
        let err = CardCollection::from_table(&table("Name,Qty\nSol Ring\n")).unwrap_err();
        match err {
            DeckError::InvalidImport { errors } => {
                assert_eq!(
                    errors,
                    vec!["Rows 2 have a different number of columns than the header."]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_compare_is_case_insensitive_and_deduplicated() {
        let collection = CardCollection::from_table(&table("Name\nSol Ring\nCommand Tower\n")).unwrap();

        let comparison =
            collection.compare(["SOL RING", "Cultivate", "sol ring", "", "Command Tower"]);
        assert_eq!(comparison.owned, vec!["SOL RING", "Command Tower"]);
        assert_eq!(comparison.missing, vec!["Cultivate"]);
        assert!((comparison.coverage() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_double_faced_names_match_front_face() {
        let collection = CardCollection::from_table(&table(
            "Name\nDelver of Secrets // Insectile Aberration\nBonecrusher Giant\n",
        ))
        .unwrap();

        assert!(collection.contains("Delver of Secrets"));
        assert!(collection.contains("delver of secrets // insectile aberration"));
        assert!(collection.contains("Bonecrusher Giant // Stomp"));
        assert!(!collection.contains("Insectile Aberration"));
    }

    #[test]
    fn test_empty_comparison_has_full_coverage() {
        let comparison = CardCollection::default().compare(Vec::<String>::new());
        assert_eq!(comparison.coverage(), 1.0);
    }
}
