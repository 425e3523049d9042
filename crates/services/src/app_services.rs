use std::sync::Arc;

use offerboard_core::Clock;
use offerboard_core::model::{Credentials, ReferenceTable};
use storage::repository::Storage;
use tracing::info;

use crate::auth_service::AuthService;
use crate::dashboard_service::DashboardService;
use crate::error::AppServicesError;
use crate::offer_feed::{FeedConfig, HttpOfferSource};

/// Assembles the app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services over the given storage and restore any session a
    /// previous run persisted.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the bundled reference table fails to
    /// parse or the persisted session cannot be read.
    pub async fn new(
        storage: Storage,
        clock: Clock,
        feed: FeedConfig,
        accepted: Credentials,
    ) -> Result<Self, AppServicesError> {
        let reference = ReferenceTable::bundled()?;
        info!(entries = reference.len(), "reference table loaded");

        let auth = Arc::new(AuthService::new(
            clock,
            accepted,
            Arc::clone(&storage.sessions),
        ));
        let restored = auth.restore().await?;
        info!(authenticated = restored.is_authenticated(), "session restored");

        let source = Arc::new(HttpOfferSource::new(feed));
        let dashboard = Arc::new(DashboardService::new(clock, reference, source));

        Ok(Self { auth, dashboard })
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}
