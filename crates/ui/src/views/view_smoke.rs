use std::sync::Arc;

use offerboard_core::model::Offer;

use super::test_harness::{FailingOfferSource, StubOfferSource, ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form_and_hint() {
    let source = Arc::new(StubOfferSource::default());
    let mut harness = setup_view_harness(ViewKind::Login, source, false).await;
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Sign in to access your dashboard"),
        "missing subtitle in {html}"
    );
    assert!(html.contains("Enter username"), "missing input in {html}");
    assert!(html.contains("Sign In"), "missing submit in {html}");
    assert!(html.contains("Demo credentials"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_offers_table_and_stats() {
    let source = Arc::new(StubOfferSource::new(vec![
        Offer::with_title("p1", "Spring promo"),
        Offer::new("p1"),
        Offer::new("p9"),
    ]));
    let mut harness = setup_view_harness(ViewKind::Dashboard, source, true).await;
    assert!(harness.auth.is_authenticated());

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Matched Summary"), "missing title in {html}");
    assert!(html.contains("Acme Media"), "missing row name in {html}");
    assert!(html.contains("2 matches"), "missing match badge in {html}");
    assert!(html.contains("0 matches"), "missing empty badge in {html}");
    assert!(html.contains("No matches"), "missing status in {html}");
    assert!(html.contains("Total Names"), "missing stat card in {html}");
    assert!(html.contains("Active Names"), "missing stat card in {html}");
    assert!(html.contains("Spring promo"), "missing offer title in {html}");
    assert!(html.contains("No Title"), "missing title fallback in {html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
    assert!(html.contains("Last updated"), "missing timestamp in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_error_state() {
    let source = Arc::new(FailingOfferSource);
    let mut harness = setup_view_harness(ViewKind::Dashboard, source, true).await;

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to fetch data from server"),
        "missing error banner in {html}"
    );
    // The summary region stays empty while the stat cards render zeros.
    assert!(!html.contains("Acme Media"), "unexpected rows in {html}");
    assert!(html.contains("Total Names"), "missing stat card in {html}");
    assert!(html.contains(">0<"), "missing zero stat in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_gates_unauthenticated_operator() {
    let source = Arc::new(StubOfferSource::new(vec![Offer::new("p1")]));
    let mut harness = setup_view_harness(ViewKind::Dashboard, source, false).await;

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        !html.contains("Matched Summary"),
        "dashboard content leaked in {html}"
    );
    assert!(!html.contains("matches"), "summary rows leaked in {html}");
}
