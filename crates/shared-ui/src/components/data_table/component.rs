use dioxus::prelude::*;

use crate::components::skeleton::Skeleton;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(#[props(default)] caption: Option<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                if let Some(caption) = caption {
                    caption { class: "data-table-caption", "{caption}" }
                }
                {children}
            }
        }
    }
}

/// Table header section; wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell. `align_end` right-aligns numeric columns.
#[component]
pub fn DataTableColumn(#[props(default = false)] align_end: bool, children: Element) -> Element {
    rsx! {
        th {
            scope: "col",
            "data-align": if align_end { "end" } else { "start" },
            {children}
        }
    }
}

#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(
    #[props(default = false)] align_end: bool,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        td {
            "data-align": if align_end { "end" } else { "start" },
            title: title,
            {children}
        }
    }
}

/// Placeholder rows shown while the table's data is loading.
#[component]
pub fn DataTableSkeletonRows(
    #[props(default = 3)] rows: usize,
    columns: usize,
) -> Element {
    rsx! {
        for row in 0..rows {
            tr { key: "{row}", class: "data-table-row skeleton-row", "aria-hidden": "true",
                for col in 0..columns {
                    td { key: "{col}",
                        Skeleton { class: "data-table-skeleton-cell" }
                    }
                }
            }
        }
    }
}
