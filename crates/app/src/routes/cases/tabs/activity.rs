use dioxus::prelude::*;
use shared_types::Activity;
use shared_ui::{EmptyState, Skeleton};

use crate::format_helpers::{format_date_human, format_snake_case_title};

pub const NO_ACTIVITY: &str = "No activity recorded yet";

/// Recent audit-log entries for the case.
#[component]
pub fn ActivityTab(matter_id: String) -> Element {
    let id = matter_id.clone();
    let activity = use_resource(move || {
        let id = id.clone();
        async move {
            match server::api::get_matter_activity(id.clone()).await {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(matter_id = %id, error = %e, "failed to load activity");
                    Vec::new()
                }
            }
        }
    });

    let loaded = activity.read().as_ref().cloned();

    match loaded {
        None => rsx! {
            div { class: "activity-loading",
                Skeleton { class: "activity-skeleton" }
                Skeleton { class: "activity-skeleton" }
            }
        },
        Some(entries) if entries.is_empty() => rsx! {
            EmptyState { message: NO_ACTIVITY.to_string() }
        },
        Some(entries) => rsx! {
            ol { class: "activity-feed",
                for entry in entries {
                    ActivityItem { key: "{entry.id}", entry }
                }
            }
        },
    }
}

#[component]
fn ActivityItem(entry: Activity) -> Element {
    let action = format_snake_case_title(&entry.action_type);
    let when = format_date_human(&entry.created_at);
    let actor = entry.actor().to_string();

    rsx! {
        li { class: "activity-item",
            div { class: "activity-item-header",
                span { class: "activity-action", "{action}" }
                time { class: "activity-time", datetime: "{entry.created_at}", "{when}" }
            }
            if !entry.description.is_empty() {
                p { class: "activity-description", "{entry.description}" }
            }
            span { class: "activity-actor", "by {actor}" }
        }
    }
}
