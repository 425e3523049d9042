use std::sync::Arc;

use services::{AuthService, DashboardService};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn dashboard(&self) -> Arc<DashboardService>;
}

/// Services handed to views through the Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    dashboard: Arc<DashboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            dashboard: app.dashboard(),
        }
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

// This context is provided by the application composition root
// (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
