use dioxus::prelude::*;
use shared_types::{FeatureFlags, Matter};
use shared_ui::{Badge, BadgeVariant, PageHeader, Skeleton};

use super::tabs::{activity::ActivityTab, entities::EntitiesTab, facts::FactsTab};
use super::CaseTab;
use crate::components::DocumentTable;
use crate::format_helpers::format_snake_case_title;
use crate::routes::Route;

/// `/cases/:id/:tab`. Keyed by matter so a different case starts fresh.
#[component]
pub fn CaseDetail(id: String, tab: String) -> Element {
    let flags: FeatureFlags = use_context();
    let tab = CaseTab::resolve(&tab, &flags);
    let tabs = CaseTab::visible(&flags);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cases.css") }

        div { class: "case-detail-page",
            CaseHeader { key: "{id}", id: id.clone() }

            nav { class: "case-tabs", "aria-label": "Case sections",
                for (t, slug, label) in tabs.into_iter().map(|t| (t, t.slug(), t.label())) {
                    Link {
                        key: "{slug}",
                        to: Route::case_tab(id.clone(), t),
                        class: if t == tab { "case-tab active" } else { "case-tab" },
                        "{label}"
                    }
                }
            }

            div { class: "case-tab-content",
                match tab {
                    CaseTab::Documents => rsx! { DocumentTable { matter_id: id.clone() } },
                    CaseTab::Facts => rsx! { FactsTab { key: "{id}", matter_id: id.clone() } },
                    CaseTab::Entities => rsx! { EntitiesTab { key: "{id}", matter_id: id.clone() } },
                    CaseTab::Activity => rsx! { ActivityTab { key: "{id}", matter_id: id.clone() } },
                }
            }
        }
    }
}

/// Title, number and status of a case.
#[component]
fn CaseHeader(id: String) -> Element {
    let matter_id = id.clone();
    let matter = use_resource(move || {
        let id = matter_id.clone();
        async move {
            match server::api::get_matter(id.clone()).await {
                Ok(matter) => Some(matter),
                Err(e) => {
                    tracing::warn!(matter_id = %id, error = %e, "failed to load matter");
                    None
                }
            }
        }
    });

    let loaded: Option<Option<Matter>> = matter.read().as_ref().cloned();

    match loaded {
        None => rsx! {
            div { class: "case-header-loading",
                Skeleton { class: "case-header-skeleton" }
            }
        },
        Some(None) => rsx! {
            PageHeader {
                title: "Case".to_string(),
                subtitle: "Case details are unavailable right now.".to_string(),
            }
        },
        Some(Some(m)) => {
            let subtitle = case_subtitle(&m);
            rsx! {
                PageHeader { title: m.matter_name.clone(), subtitle,
                    if !m.status.is_empty() {
                        Badge { variant: BadgeVariant::for_status(&m.status), "{m.status}" }
                    }
                }
            }
        }
    }
}

/// "2024-CV-11 · Litigation · N.D. Cal." from whatever the matter carries.
pub fn case_subtitle(matter: &Matter) -> String {
    let matter_type = format_snake_case_title(&matter.matter_type);
    [
        Some(matter.matter_number.as_str()),
        Some(matter_type.as_str()),
        matter.court_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" \u{b7} ")
}
