use dioxus::prelude::*;
use shared_types::SourceDocument;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DataTableSkeletonRows,
    EmptyState,
};

use crate::format_helpers::{format_optional_date, pluralize, truncate_name};
use crate::routes::cases::CaseTab;
use crate::routes::Route;

pub const NO_DOCUMENTS: &str = "No documents uploaded yet";

/// Shown in the citations column when the backend did not count them.
const UNCOUNTED: &str = "\u{2014}";

const COLUMNS: usize = 5;

/// One table row, formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRowView {
    pub id: String,
    pub name: String,
    /// Untruncated name, shown as a tooltip when `name` was shortened.
    pub full_name: Option<String>,
    pub uploaded: String,
    pub citations: String,
    pub status: Option<String>,
}

impl DocumentRowView {
    pub fn from_document(doc: &SourceDocument) -> Self {
        let full = doc.display_name();
        let name = truncate_name(full);
        let full_name = (name != full).then(|| full.to_string());
        Self {
            id: doc.id.clone(),
            name,
            full_name,
            uploaded: format_optional_date(doc.uploaded_at()),
            citations: doc
                .citation_count
                .map(|n| pluralize(n, "citation", "citations"))
                .unwrap_or_else(|| UNCOUNTED.to_string()),
            status: doc
                .processing_status
                .clone()
                .filter(|s| !s.trim().is_empty()),
        }
    }
}

/// Documents of a matter, newest first.
///
/// Without a matter the empty state shows and nothing is fetched. The
/// loaded table is keyed by matter id, so switching matters remounts it and
/// drops any request still in flight for the previous one.
#[component]
pub fn DocumentTable(matter_id: Option<String>) -> Element {
    let Some(matter_id) = matter_id.filter(|id| !id.trim().is_empty()) else {
        return rsx! {
            EmptyState { message: NO_DOCUMENTS.to_string() }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./document_table.css") }
        MatterDocuments { key: "{matter_id}", matter_id }
    }
}

#[component]
fn MatterDocuments(matter_id: String) -> Element {
    let id = matter_id.clone();
    let documents = use_resource(move || {
        let id = id.clone();
        async move {
            match server::api::get_documents_by_matter(id.clone()).await {
                Ok(docs) => docs,
                Err(e) => {
                    tracing::warn!(matter_id = %id, error = %e, "failed to load documents");
                    Vec::new()
                }
            }
        }
    });

    let rows: Option<Vec<DocumentRowView>> = documents
        .read()
        .as_ref()
        .map(|docs| docs.iter().map(DocumentRowView::from_document).collect());

    rsx! {
        DocumentTableBody { matter_id, rows }
    }
}

/// The table for already-fetched rows; `None` means the fetch is pending.
#[component]
fn DocumentTableBody(matter_id: String, rows: Option<Vec<DocumentRowView>>) -> Element {
    match rows {
        Some(rows) if rows.is_empty() => rsx! {
            EmptyState {
                message: NO_DOCUMENTS.to_string(),
                hint: "Documents appear here once they are ingested by the analysis service.".to_string(),
            }
        },
        rows => rsx! {
            DataTable { caption: "Case documents".to_string(),
                DataTableHeader {
                    DataTableColumn { "Name" }
                    DataTableColumn { "Uploaded" }
                    DataTableColumn { align_end: true, "Citations" }
                    DataTableColumn { "Status" }
                    DataTableColumn { align_end: true, "Actions" }
                }
                DataTableBody {
                    match rows {
                        None => rsx! { DataTableSkeletonRows { rows: 3, columns: COLUMNS } },
                        Some(rows) => rsx! {
                            for row in rows {
                                DocumentRow { key: "{row.id}", matter_id: matter_id.clone(), row }
                            }
                        },
                    }
                }
            }
        },
    }
}

#[component]
fn DocumentRow(matter_id: String, row: DocumentRowView) -> Element {
    let review = Route::DocumentReview {
        id: matter_id.clone(),
        document_id: row.id.clone(),
    };
    let facts = Route::case_tab(matter_id, CaseTab::Facts);

    rsx! {
        DataTableRow {
            DataTableCell { title: row.full_name.clone(),
                span { class: "document-name", "{row.name}" }
            }
            DataTableCell { "{row.uploaded}" }
            DataTableCell { align_end: true, "{row.citations}" }
            DataTableCell {
                if let Some(status) = row.status.clone() {
                    Badge { variant: BadgeVariant::for_status(&status), "{status}" }
                }
            }
            DataTableCell { align_end: true,
                div { class: "document-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| { navigator().push(review.clone()); },
                        "Review"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| { navigator().push(facts.clone()); },
                        "Facts"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc() -> SourceDocument {
        SourceDocument {
            id: "d1".to_string(),
            file_name: Some("complaint.pdf".to_string()),
            citation_count: Some(1),
            processing_status: Some("completed".to_string()),
            ingested_at: Some("2026-01-20T21:35:00Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn row_formats_date_and_citations() {
        let row = DocumentRowView::from_document(&doc());
        assert_eq!(row.name, "complaint.pdf");
        assert_eq!(row.full_name, None);
        assert_eq!(row.uploaded, "Jan 20, 2026");
        assert_eq!(row.citations, "1 citation");
        assert_eq!(row.status.as_deref(), Some("completed"));
    }

    #[test]
    fn long_names_keep_full_text_for_tooltip() {
        let mut d = doc();
        let long = "Expert report on damages ".repeat(4);
        d.title = Some(long.clone());
        d.citation_count = Some(3);
        let row = DocumentRowView::from_document(&d);
        assert!(row.name.ends_with('…'));
        assert_eq!(row.full_name.as_deref(), Some(long.trim()));
        assert_eq!(row.citations, "3 citations");
    }

    #[test]
    fn missing_metadata_has_placeholders() {
        let d = SourceDocument {
            id: "d2".to_string(),
            processing_status: Some(" ".to_string()),
            ..Default::default()
        };
        let row = DocumentRowView::from_document(&d);
        assert_eq!(row.name, shared_types::UNTITLED_DOCUMENT);
        assert_eq!(row.uploaded, "Unknown");
        assert_eq!(row.citations, UNCOUNTED);
        assert_eq!(row.status, None);
    }

    #[test]
    fn absent_matter_renders_empty_state_without_table() {
        let html = dioxus_ssr::render_element(rsx! {
            DocumentTable {}
        });
        assert!(html.contains(NO_DOCUMENTS));
        assert!(!html.contains("<table"));

        let html = dioxus_ssr::render_element(rsx! {
            DocumentTable { matter_id: "  ".to_string() }
        });
        assert!(html.contains(NO_DOCUMENTS));
    }

    #[test]
    fn pending_fetch_renders_skeleton_rows() {
        let html = dioxus_ssr::render_element(rsx! {
            DocumentTableBody { matter_id: "m1".to_string(), rows: None }
        });
        assert!(html.contains("<table"));
        assert_eq!(html.matches("skeleton-row").count(), 3);
        assert!(!html.contains(NO_DOCUMENTS));
    }

    #[test]
    fn empty_result_renders_empty_state() {
        let html = dioxus_ssr::render_element(rsx! {
            DocumentTableBody { matter_id: "m1".to_string(), rows: Some(vec![]) }
        });
        assert!(html.contains(NO_DOCUMENTS));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn loaded_documents_render_one_row_each() {
        let mut second = doc();
        second.id = "d2".to_string();
        second.file_name = Some("answer.pdf".to_string());
        second.citation_count = Some(2);
        let rows = vec![
            DocumentRowView::from_document(&doc()),
            DocumentRowView::from_document(&second),
        ];
        let html = dioxus_ssr::render_element(rsx! {
            DocumentTableBody { matter_id: "m1".to_string(), rows: Some(rows) }
        });
        assert_eq!(html.matches("document-name").count(), 2);
        assert!(html.contains("complaint.pdf"));
        assert!(html.contains("answer.pdf"));
        assert!(html.contains("2 citations"));
        assert!(!html.contains("skeleton-row"));
    }
}
