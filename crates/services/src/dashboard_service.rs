use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use offerboard_core::Clock;
use offerboard_core::matching::compute_summary;
use offerboard_core::model::{MatchSummary, Offer, ReferenceTable};

use crate::error::OfferFeedError;
use crate::offer_feed::OfferSource;

/// Identifies one fetch. Tokens increase monotonically; only the response
/// carrying the most recently issued token may update what the dashboard
/// shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Everything one successful fetch produces for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub offers: Vec<Offer>,
    pub summary: MatchSummary,
    pub fetched_at: DateTime<Utc>,
}

/// Coordinates offer fetches and match computation.
///
/// The summary is computed only after a fetch resolves, never
/// speculatively, and a response is dropped when a newer token has been
/// issued in the meantime, so the rendered summary always belongs to the
/// most recently completed current fetch.
pub struct DashboardService {
    clock: Clock,
    reference: ReferenceTable,
    source: Arc<dyn OfferSource>,
    latest: AtomicU64,
}

impl DashboardService {
    #[must_use]
    pub fn new(clock: Clock, reference: ReferenceTable, source: Arc<dyn OfferSource>) -> Self {
        Self {
            clock,
            reference,
            source,
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a token for a fetch that is about to start. Issuing a token
    /// invalidates every earlier one.
    pub fn issue_token(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` still identifies the most recently issued fetch.
    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.value()
    }

    /// Fetch offers and compute the summary for them.
    ///
    /// Returns `Ok(None)` when a newer token was issued while this fetch
    /// was in flight; the response is discarded unused.
    ///
    /// # Errors
    ///
    /// Returns `OfferFeedError` if the fetch itself fails.
    pub async fn load(
        &self,
        token: RequestToken,
    ) -> Result<Option<DashboardSnapshot>, OfferFeedError> {
        let offers = match self.source.fetch_offers().await {
            Ok(offers) => offers,
            Err(err) => {
                warn!(error = %err, "offer fetch failed");
                return Err(err);
            }
        };

        if !self.is_current(token) {
            debug!(token = token.value(), "discarding stale offer response");
            return Ok(None);
        }

        let summary = compute_summary(&self.reference, &offers);
        Ok(Some(DashboardSnapshot {
            offers,
            summary,
            fetched_at: self.clock.now(),
        }))
    }
}
