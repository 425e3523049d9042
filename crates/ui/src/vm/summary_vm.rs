use offerboard_core::model::{MatchSummary, SummaryRow};

/// Table line for one reference entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRowVm {
    pub name: String,
    pub count_label: String,
    pub status_label: &'static str,
    pub active: bool,
}

impl From<&SummaryRow> for SummaryRowVm {
    fn from(row: &SummaryRow) -> Self {
        let active = row.count() > 0;
        Self {
            name: row.name().to_owned(),
            count_label: format!("{} matches", row.count()),
            status_label: if active { "Active" } else { "No matches" },
            active,
        }
    }
}

#[must_use]
pub fn map_summary_rows(rows: &[SummaryRow]) -> Vec<SummaryRowVm> {
    rows.iter().map(SummaryRowVm::from).collect()
}

/// The three aggregate cards under the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardsVm {
    pub total_names: String,
    pub total_matches: String,
    pub active_names: String,
}

#[must_use]
pub fn map_stat_cards(summary: &MatchSummary) -> StatCardsVm {
    StatCardsVm {
        total_names: summary.total_names().to_string(),
        total_matches: summary.total_matches().to_string(),
        active_names: summary.active_names().to_string(),
    }
}
