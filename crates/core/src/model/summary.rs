/// Per-entry match count, in reference-table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    name: String,
    count: usize,
}

impl SummaryRow {
    #[must_use]
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Result of matching a fetched offer collection against the reference
/// table: one row per reference entry plus derived aggregates.
///
/// Recomputed in full on every fetch; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSummary {
    rows: Vec<SummaryRow>,
}

impl MatchSummary {
    #[must_use]
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Number of reference entries, matched or not.
    #[must_use]
    pub fn total_names(&self) -> usize {
        self.rows.len()
    }

    /// Sum of all row counts. Offers matching several entries with the same
    /// pubid contribute to each of those rows.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.rows.iter().map(SummaryRow::count).sum()
    }

    /// Number of entries with at least one match.
    #[must_use]
    pub fn active_names(&self) -> usize {
        self.rows.iter().filter(|row| row.count() > 0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
