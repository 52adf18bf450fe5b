use dioxus::prelude::*;
use shared_types::Matter;
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DataTableSkeletonRows, EmptyState, PageHeader,
};

use super::CaseTab;
use crate::format_helpers::{format_optional_date, format_snake_case_title};
use crate::routes::Route;

pub const NO_CASES: &str = "No cases yet";

/// All matters, newest first; a row opens the case's documents.
#[component]
pub fn CaseList() -> Element {
    let matters = use_resource(move || async move {
        match server::api::list_matters().await {
            Ok(matters) => matters,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load matters");
                Vec::new()
            }
        }
    });

    let loaded = matters.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cases.css") }

        div { class: "case-list-page",
            PageHeader {
                title: "Cases".to_string(),
                subtitle: "Every matter available to you.".to_string(),
            }

            match loaded {
                Some(list) if list.is_empty() => rsx! {
                    EmptyState {
                        message: NO_CASES.to_string(),
                        hint: "Matters created in the analysis service show up here.".to_string(),
                    }
                },
                loaded => rsx! {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Number" }
                            DataTableColumn { "Name" }
                            DataTableColumn { "Type" }
                            DataTableColumn { "Status" }
                            DataTableColumn { "Opened" }
                        }
                        DataTableBody {
                            match loaded {
                                None => rsx! { DataTableSkeletonRows { rows: 4, columns: 5 } },
                                Some(list) => rsx! {
                                    for m in list {
                                        CaseRow { key: "{m.id}", matter: m }
                                    }
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CaseRow(matter: Matter) -> Element {
    let to = Route::case_tab(matter.id.clone(), CaseTab::Documents);
    let matter_type = format_snake_case_title(&matter.matter_type);
    let opened = format_optional_date(matter.created());

    rsx! {
        DataTableRow { onclick: move |_| { navigator().push(to.clone()); },
            DataTableCell { "{matter.matter_number}" }
            DataTableCell {
                span { class: "case-name", "{matter.matter_name}" }
            }
            DataTableCell { "{matter_type}" }
            DataTableCell {
                Badge { variant: BadgeVariant::for_status(&matter.status), "{matter.status}" }
            }
            DataTableCell { "{opened}" }
        }
    }
}
