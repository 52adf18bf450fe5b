use dioxus::prelude::*;
use shared_types::{MatterEntity, MatterEntityList};
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DataTableSkeletonRows, EmptyState,
};

use crate::format_helpers::{format_snake_case_title, pluralize};

pub const NO_ENTITIES: &str = "No entities found yet";

/// Entities extracted from the case, most-cited first.
pub fn entities_by_fact_count(list: MatterEntityList) -> Vec<MatterEntity> {
    let mut entities = list.entities;
    entities.sort_by(|a, b| {
        b.related_facts_count
            .cmp(&a.related_facts_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    entities
}

#[component]
pub fn EntitiesTab(matter_id: String) -> Element {
    let id = matter_id.clone();
    let entities = use_resource(move || {
        let id = id.clone();
        async move {
            match server::api::get_matter_entities(id.clone()).await {
                Ok(list) => entities_by_fact_count(list),
                Err(e) => {
                    tracing::warn!(matter_id = %id, error = %e, "failed to load entities");
                    Vec::new()
                }
            }
        }
    });

    let loaded = entities.read().as_ref().cloned();

    match loaded {
        Some(list) if list.is_empty() => rsx! {
            EmptyState { message: NO_ENTITIES.to_string() }
        },
        loaded => rsx! {
            DataTable { caption: "Case entities".to_string(),
                DataTableHeader {
                    DataTableColumn { "Name" }
                    DataTableColumn { "Type" }
                    DataTableColumn { "Role" }
                    DataTableColumn { align_end: true, "Facts" }
                    DataTableColumn { "Review" }
                }
                DataTableBody {
                    match loaded {
                        None => rsx! { DataTableSkeletonRows { columns: 5 } },
                        Some(list) => rsx! {
                            for entity in list {
                                EntityRow { key: "{entity.id}", entity }
                            }
                        },
                    }
                }
            }
        },
    }
}

#[component]
fn EntityRow(entity: MatterEntity) -> Element {
    let entity_type = format_snake_case_title(&entity.entity_type);
    let role = if entity.role.trim().is_empty() {
        "\u{2014}".to_string()
    } else {
        format_snake_case_title(&entity.role)
    };
    let facts = pluralize(entity.related_facts_count, "fact", "facts");
    let review = format_snake_case_title(&entity.review_status);

    rsx! {
        DataTableRow {
            DataTableCell {
                span { class: "entity-name", "{entity.name}" }
                if !entity.short_name.is_empty() && entity.short_name != entity.name {
                    span { class: "entity-short-name", " ({entity.short_name})" }
                }
            }
            DataTableCell { "{entity_type}" }
            DataTableCell { "{role}" }
            DataTableCell { align_end: true, "{facts}" }
            DataTableCell {
                if !review.is_empty() {
                    Badge { variant: BadgeVariant::for_status(&entity.review_status), "{review}" }
                }
            }
        }
    }
}
