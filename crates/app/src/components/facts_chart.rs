use dioxus::prelude::*;
use shared_types::EntityData;
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState, PieChart, PieDatum,
    Skeleton,
};

use crate::format_helpers::{format_snake_case_title, pluralize};

pub const NO_FACTS: &str = "No facts found yet";

/// Used for slices the backend sent without a colour.
const FALLBACK_COLORS: [&str; 6] = [
    "#1e40af", "#0f766e", "#b45309", "#7c3aed", "#be123c", "#4d7c0f",
];

/// Chart data for the drawable slices, in backend order.
pub fn pie_data(slices: &[EntityData]) -> Vec<PieDatum> {
    slices
        .iter()
        .filter(|s| s.is_drawable())
        .enumerate()
        .map(|(i, s)| PieDatum {
            label: s.name.clone(),
            detail: format_snake_case_title(&s.entity_type),
            value: s.value,
            color: if s.color.trim().is_empty() {
                FALLBACK_COLORS[i % FALLBACK_COLORS.len()].to_string()
            } else {
                s.color.clone()
            },
        })
        .collect()
}

/// Facts-per-entity donut chart for a matter.
#[component]
pub fn FactsChart(matter_id: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./facts_chart.css") }
        Card { class: "facts-chart",
            CardHeader {
                CardTitle { "Facts per entity" }
                CardDescription { "How often each extracted entity appears in the case facts" }
            }
            CardContent {
                match matter_id.filter(|id| !id.trim().is_empty()) {
                    None => rsx! { EmptyState { message: NO_FACTS.to_string() } },
                    Some(id) => rsx! { MatterFacts { key: "{id}", matter_id: id } },
                }
            }
        }
    }
}

#[component]
fn MatterFacts(matter_id: String) -> Element {
    let id = matter_id.clone();
    let slices = use_resource(move || {
        let id = id.clone();
        async move {
            match server::api::get_facts_per_entity(id.clone()).await {
                Ok(slices) => slices,
                Err(e) => {
                    tracing::warn!(matter_id = %id, error = %e, "failed to load facts per entity");
                    Vec::new()
                }
            }
        }
    });

    let loaded = slices.read().as_ref().cloned();

    rsx! {
        FactsChartBody { slices: loaded }
    }
}

/// Chart for already-fetched slices; `None` means the fetch is pending.
#[component]
fn FactsChartBody(slices: Option<Vec<EntityData>>) -> Element {
    let Some(slices) = slices else {
        return rsx! {
            Skeleton { class: "facts-chart-skeleton" }
        };
    };

    let data = pie_data(&slices);
    if data.is_empty() {
        return rsx! {
            EmptyState { message: NO_FACTS.to_string() }
        };
    }

    let center = pluralize(EntityData::total(&slices).round() as u32, "fact", "facts");
    rsx! {
        PieChart {
            data,
            label: "Facts per entity".to_string(),
            center_label: center,
        }
    }
}
