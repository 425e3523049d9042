use dioxus::prelude::*;
use dioxus_router::use_navigator;

use offerboard_core::model::MatchSummary;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    OfferVm, StatCardsVm, SummaryRowVm, format_fetched_at, map_offers, map_stat_cards,
    map_summary_rows,
};

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    offers: Vec<OfferVm>,
    rows: Vec<SummaryRowVm>,
    stats: StatCardsVm,
    fetched_at_str: String,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let authenticated = ctx.auth().is_authenticated();

    // The dashboard is gated: bounce to the sign-in form instead of
    // fetching anything while logged out.
    use_effect(move || {
        if !authenticated {
            navigator.replace(Route::Login {});
        }
    });

    let dashboard = ctx.dashboard();
    let resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            if !authenticated {
                return Err(ViewError::Unknown);
            }
            let token = dashboard.issue_token();
            match dashboard.load(token).await {
                Ok(Some(snapshot)) => Ok(DashboardData {
                    offers: map_offers(&snapshot.offers),
                    rows: map_summary_rows(snapshot.summary.rows()),
                    stats: map_stat_cards(&snapshot.summary),
                    fetched_at_str: format_fetched_at(snapshot.fetched_at),
                }),
                // A newer fetch owns the view by now; its resource renders
                // instead of this one.
                Ok(None) => Err(ViewError::Unknown),
                Err(_) => Err(ViewError::Feed),
            }
        }
    });
    let state = view_state_from_resource(&resource);

    let auth = ctx.auth();
    let on_logout = move |()| {
        let auth = auth.clone();
        spawn(async move {
            // Local sign-out proceeds even if clearing the flag fails.
            let _ = auth.logout().await;
            navigator.replace(Route::Login {});
        });
    };

    if !authenticated {
        return rsx! {
            div { class: "dashboard-redirect",
                p { "Redirecting to sign-in..." }
            }
        };
    }

    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "dashboard-loading",
                div { class: "spinner" }
                p { "Loading dashboard..." }
            }
        },
        ViewState::Ready(data) => rsx! {
            DashboardPane { data: Some(data), error: None, on_logout }
        },
        ViewState::Error(err) => rsx! {
            DashboardPane { data: None, error: Some(err), on_logout }
        },
    }
}

#[component]
fn DashboardPane(
    data: Option<DashboardData>,
    error: Option<ViewError>,
    on_logout: EventHandler<()>,
) -> Element {
    let offers = data
        .as_ref()
        .map(|d| d.offers.clone())
        .unwrap_or_default();
    let stats = data.as_ref().map_or_else(
        || map_stat_cards(&MatchSummary::default()),
        |d| d.stats.clone(),
    );

    rsx! {
        div { class: "dashboard",
            Sidebar { offers, on_logout }
            main { class: "dashboard-main",
                header { class: "dashboard-header",
                    h1 { "Matched Summary" }
                    p {
                        "Count of matching pubids between the reference table and the offer feed"
                    }
                    if let Some(data) = &data {
                        p { class: "dashboard-updated", "Last updated {data.fetched_at_str}" }
                    }
                }

                if let Some(err) = error {
                    div { class: "feed-error", "{err.message()}" }
                } else if let Some(data) = &data {
                    SummaryTable { rows: data.rows.clone() }
                }

                StatCards { stats }
            }
        }
    }
}

#[component]
fn Sidebar(offers: Vec<OfferVm>, on_logout: EventHandler<()>) -> Element {
    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                h1 { "Offer Dashboard" }
                p { "Analytics Panel" }
            }

            h2 { "Offers" }
            ul { class: "offer-list",
                for offer in offers {
                    li { class: "offer-item",
                        div { class: "offer-title", "{offer.title}" }
                        div { class: "offer-pubid", "{offer.pubid}" }
                    }
                }
            }

            button {
                class: "btn logout",
                r#type: "button",
                onclick: move |_| on_logout.call(()),
                "Logout"
            }
        }
    }
}

#[component]
fn SummaryTable(rows: Vec<SummaryRowVm>) -> Element {
    rsx! {
        div { class: "summary-panel",
            table { class: "summary-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Match Count" }
                        th { "Status" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            td { class: "summary-name", "{row.name}" }
                            td {
                                span {
                                    class: if row.active {
                                        "count-badge count-badge--active"
                                    } else {
                                        "count-badge count-badge--empty"
                                    },
                                    "{row.count_label}"
                                }
                            }
                            td { class: "summary-status", "{row.status_label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCards(stats: StatCardsVm) -> Element {
    rsx! {
        div { class: "stat-grid",
            StatCard {
                label: "Total Names",
                value: stats.total_names,
                accent: "stat-value",
            }
            StatCard {
                label: "Total Matches",
                value: stats.total_matches,
                accent: "stat-value stat-value--green",
            }
            StatCard {
                label: "Active Names",
                value: stats.active_names,
                accent: "stat-value stat-value--blue",
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, accent: &'static str) -> Element {
    rsx! {
        div { class: "stat-card",
            h3 { "{label}" }
            p { class: "{accent}", "{value}" }
        }
    }
}
