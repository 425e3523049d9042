use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    #[error("reference table is not a valid JSON array of entries: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One named entity in the reference table.
///
/// `pubid` is the join key against fetched offers. It is not required to be
/// unique across entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub pubid: String,
}

/// The static list of named entities offers are matched against.
///
/// Loaded once at startup and never refreshed. Document order is preserved
/// and drives the order of summary rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
}

const BUNDLED_TABLE: &str = include_str!("../../data/reference_table.json");

impl ReferenceTable {
    #[must_use]
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self { entries }
    }

    /// Parse a table from a JSON array of `{name, pubid}` objects.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::Parse` if the document is not such an array.
    pub fn from_json(document: &str) -> Result<Self, ReferenceError> {
        let entries: Vec<ReferenceEntry> = serde_json::from_str(document)?;
        Ok(Self { entries })
    }

    /// The table bundled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::Parse` if the bundled document is malformed.
    pub fn bundled() -> Result<Self, ReferenceError> {
        Self::from_json(BUNDLED_TABLE)
    }

    #[must_use]
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
