//! Counts fetched offers per reference entry.

use std::collections::HashMap;

use crate::model::{MatchSummary, Offer, ReferenceTable, SummaryRow};

/// Count, for every reference entry, the offers whose `pubid` equals the
/// entry's `pubid`.
///
/// Comparison is byte-exact: case-sensitive, no normalization, and the
/// empty string matches like any other value. Entries sharing a `pubid`
/// each receive the full count, so one offer can be counted on several
/// rows. The result has exactly one row per entry, in table order.
#[must_use]
pub fn compute_summary(reference: &ReferenceTable, offers: &[Offer]) -> MatchSummary {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(offers.len());
    for offer in offers {
        *counts.entry(offer.pubid.as_str()).or_insert(0) += 1;
    }

    let rows = reference
        .entries()
        .iter()
        .map(|entry| {
            let count = counts.get(entry.pubid.as_str()).copied().unwrap_or(0);
            SummaryRow::new(entry.name.clone(), count)
        })
        .collect();

    MatchSummary::new(rows)
}
