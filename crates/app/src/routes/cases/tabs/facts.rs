use dioxus::prelude::*;
use shared_types::{parse_timestamp, MatterFact, MatterFactPage};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DataTableSkeletonRows,
    EmptyState,
};

use crate::components::facts_chart::NO_FACTS;
use crate::components::FactsChart;
use crate::format_helpers::{format_date, format_snake_case_title};

const COLUMNS: usize = 4;
const UNDATED: &str = "Undated";

/// One fact row, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FactRowView {
    pub id: String,
    pub date: String,
    pub text: String,
    pub evidence: String,
    pub issues: Vec<String>,
    /// Raw status for the badge colour, and its label.
    pub review: Option<(String, String)>,
}

impl FactRowView {
    pub fn from_fact(fact: &MatterFact) -> Self {
        Self {
            id: fact.id.clone(),
            date: fact
                .date_time
                .as_deref()
                .and_then(parse_timestamp)
                .map(format_date)
                .unwrap_or_else(|| UNDATED.to_string()),
            text: fact.text().to_string(),
            evidence: fact.evidence.trim().to_string(),
            issues: fact
                .issues
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .map(str::to_string)
                .collect(),
            review: fact
                .review_status
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| (s.to_string(), format_snake_case_title(s))),
        }
    }
}

/// Chart of facts per entity with the paged facts table below it.
#[component]
pub fn FactsTab(matter_id: String) -> Element {
    rsx! {
        div { class: "facts-tab",
            FactsChart { matter_id: matter_id.clone() }
            MatterFactsTable { matter_id }
        }
    }
}

#[component]
fn MatterFactsTable(matter_id: String) -> Element {
    let mut offset = use_signal(|| 0u32);
    let id = matter_id.clone();
    let page = use_resource(move || {
        let id = id.clone();
        let offset = offset();
        async move {
            match server::api::get_matter_facts(id.clone(), offset).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(matter_id = %id, offset, error = %e, "failed to load facts");
                    MatterFactPage::default()
                }
            }
        }
    });

    let loaded = page.read().as_ref().cloned();

    rsx! {
        FactsTableBody {
            page: loaded,
            on_page: move |next: u32| offset.set(next),
        }
    }
}

/// The facts table for an already-fetched page; `None` means pending.
#[component]
fn FactsTableBody(
    page: Option<MatterFactPage>,
    #[props(default)] on_page: Option<EventHandler<u32>>,
) -> Element {
    if page.as_ref().is_some_and(|p| p.facts.is_empty()) {
        return rsx! {
            EmptyState { message: NO_FACTS.to_string() }
        };
    }

    let rows: Option<Vec<FactRowView>> = page
        .as_ref()
        .map(|p| p.facts.iter().map(FactRowView::from_fact).collect());
    let (previous, next, range) = page
        .as_ref()
        .map(|p| (p.previous_offset(), p.next_offset(), p.range_label()))
        .unwrap_or_default();
    let go = move |target: Option<u32>| {
        if let (Some(target), Some(handler)) = (target, on_page) {
            handler.call(target);
        }
    };

    rsx! {
        DataTable { caption: "Case facts".to_string(),
            DataTableHeader {
                DataTableColumn { "Date" }
                DataTableColumn { "Fact" }
                DataTableColumn { "Evidence" }
                DataTableColumn { "Review" }
            }
            DataTableBody {
                match rows {
                    None => rsx! { DataTableSkeletonRows { rows: 5, columns: COLUMNS } },
                    Some(rows) => rsx! {
                        for row in rows {
                            FactRow { key: "{row.id}", row }
                        }
                    },
                }
            }
        }

        if let Some(range) = range {
            div { class: "facts-pager",
                span { class: "facts-pager-range", "{range}" }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: previous.is_none(),
                    onclick: move |_| go(previous),
                    "Previous"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    disabled: next.is_none(),
                    onclick: move |_| go(next),
                    "Next"
                }
            }
        }
    }
}

#[component]
fn FactRow(row: FactRowView) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{row.date}" }
            DataTableCell {
                p { class: "fact-text", "{row.text}" }
                if !row.issues.is_empty() {
                    div { class: "fact-issues",
                        for issue in row.issues.iter() {
                            Badge { key: "{issue}", variant: BadgeVariant::Neutral, "{issue}" }
                        }
                    }
                }
            }
            DataTableCell { "{row.evidence}" }
            DataTableCell {
                if let Some((status, label)) = row.review.clone() {
                    Badge { variant: BadgeVariant::for_status(&status), "{label}" }
                }
            }
        }
    }
}
