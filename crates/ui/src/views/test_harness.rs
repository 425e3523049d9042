use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use offerboard_core::model::{Credentials, Offer, ReferenceEntry, ReferenceTable};
use offerboard_core::time::fixed_clock;
use services::{AuthService, DashboardService, OfferFeedError, OfferSource};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{DashboardView, LoginView};

#[derive(Clone)]
struct TestApp {
    auth: Arc<AuthService>,
    dashboard: Arc<DashboardService>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

#[derive(Default)]
pub struct StubOfferSource {
    offers: Vec<Offer>,
}

impl StubOfferSource {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }
}

#[async_trait]
impl OfferSource for StubOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, OfferFeedError> {
        Ok(self.offers.clone())
    }
}

pub struct FailingOfferSource;

#[async_trait]
impl OfferSource for FailingOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, OfferFeedError> {
        Err(OfferFeedError::HttpStatus(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Dashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    // Views navigate with the real app routes; absorb those paths so a
    // redirect does not fail the harness router.
    #[route("/:..segments")]
    Absorbed { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    }
}

#[component]
fn Absorbed(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "test-absorbed", "{path}" }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub auth: Arc<AuthService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn reference_fixture() -> ReferenceTable {
    ReferenceTable::new(vec![
        ReferenceEntry {
            name: "Acme Media".to_string(),
            pubid: "p1".to_string(),
        },
        ReferenceEntry {
            name: "Borealis Ads".to_string(),
            pubid: "p2".to_string(),
        },
    ])
}

pub async fn setup_view_harness(
    view: ViewKind,
    source: Arc<dyn OfferSource>,
    authenticated: bool,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let auth = Arc::new(AuthService::new(
        fixed_clock(),
        Credentials::preset(),
        Arc::clone(&storage.sessions),
    ));
    if authenticated {
        auth.login("admin", "admin123").await.expect("login");
    }

    let dashboard = Arc::new(DashboardService::new(
        fixed_clock(),
        reference_fixture(),
        source,
    ));

    let app = Arc::new(TestApp {
        auth: Arc::clone(&auth),
        dashboard,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, auth }
}
