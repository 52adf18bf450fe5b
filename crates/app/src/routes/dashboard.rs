use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::{FeatureCard, PageHeader, Skeleton};

use crate::auth::use_auth;
use crate::components::FactsChart;
use crate::routes::cases::CaseTab;
use crate::routes::{nav_icon, nav_route, NavTarget};
use crate::MatterContext;

/// A promotional tile on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureTile {
    pub title: &'static str,
    pub description: &'static str,
    pub target: NavTarget,
}

const TILES: [FeatureTile; 5] = [
    FeatureTile {
        title: "Documents",
        description: "Browse every document uploaded to the case, newest first.",
        target: NavTarget::Case(CaseTab::Documents),
    },
    FeatureTile {
        title: "Facts",
        description: "See which people and organisations the extracted facts revolve around.",
        target: NavTarget::Case(CaseTab::Facts),
    },
    FeatureTile {
        title: "Entities",
        description: "Review the entities identified across the case record.",
        target: NavTarget::Case(CaseTab::Entities),
    },
    FeatureTile {
        title: "Activity",
        description: "Follow recent uploads, reviews and edits on the case.",
        target: NavTarget::Case(CaseTab::Activity),
    },
    FeatureTile {
        title: "All Cases",
        description: "Open any matter your firm is working on.",
        target: NavTarget::Cases,
    },
];

/// Tiles shown under the current feature flags.
pub fn feature_tiles(flags: &FeatureFlags) -> Vec<FeatureTile> {
    TILES
        .into_iter()
        .filter(|tile| match tile.target {
            NavTarget::Case(tab) => tab.enabled(flags),
            _ => true,
        })
        .collect()
}

/// Dashboard: greeting, matter picker, feature tiles and the facts chart
/// for the selected matter.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let matter: MatterContext = use_context();

    let selected = matter.selected();
    let name = auth.greeting_name();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                title: format!("Welcome back, {name}"),
                subtitle: "Pick a case to explore its documents and extracted facts.".to_string(),
                MatterPicker {}
            }

            section { class: "feature-grid", "aria-label": "Features",
                for tile in feature_tiles(&flags) {
                    FeatureTileLink { key: "{tile.title}", tile, matter: selected.clone() }
                }
            }

            FactsChart { matter_id: selected }
        }
    }
}

#[component]
fn FeatureTileLink(tile: FeatureTile, matter: Option<String>) -> Element {
    let card = |disabled: bool| {
        rsx! {
            FeatureCard {
                title: tile.title.to_string(),
                description: tile.description.to_string(),
                icon: nav_icon(tile.target),
                disabled,
                disabled_hint: "Select a case above first".to_string(),
            }
        }
    };

    match nav_route(tile.target, matter.as_deref()) {
        Some(to) => rsx! {
            Link { to, class: "feature-card-link", {card(false)} }
        },
        None => card(true),
    }
}

/// Drop-down of the firm's matters; choosing one sets the shared selection.
#[component]
fn MatterPicker() -> Element {
    let mut matter: MatterContext = use_context();
    let matters = use_resource(move || async move {
        match server::api::list_matters().await {
            Ok(matters) => matters,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load matters");
                Vec::new()
            }
        }
    });

    let selected = matter.selected().unwrap_or_default();
    let options: Option<Vec<(String, String)>> = matters
        .read()
        .as_ref()
        .map(|list| list.iter().map(|m| (m.id.clone(), m.label())).collect());

    match options {
        None => rsx! {
            Skeleton { class: "matter-picker-skeleton" }
        },
        Some(list) => {
            let empty = list.is_empty();
            rsx! {
                label { class: "matter-picker",
                    span { class: "matter-picker-label", "Case" }
                    select {
                        class: "matter-picker-select",
                        disabled: empty,
                        onchange: move |e: FormEvent| matter.select(&e.value()),
                        option { value: "", selected: selected.is_empty(),
                            if empty { "No cases available" } else { "Select a case..." }
                        }
                        for (id, label) in list {
                            option {
                                key: "{id}",
                                value: "{id}",
                                selected: id == selected,
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
