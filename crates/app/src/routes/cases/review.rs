use dioxus::prelude::*;
use shared_types::{DocumentEntity, DocumentFact, DocumentSummary, SourceDocument};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, EmptyState, PageHeader, Skeleton,
};

use super::tabs::entities::NO_ENTITIES;
use super::CaseTab;
use crate::components::facts_chart::NO_FACTS;
use crate::format_helpers::{
    format_date_human, format_file_size, format_optional_date, format_snake_case_title, pluralize,
};
use crate::routes::Route;

pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable";

/// Label/value pairs shown in the metadata list.
pub fn document_metadata(doc: &SourceDocument) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Uploaded", format_optional_date(doc.uploaded_at()))];
    if let Some(kind) = doc.document_type.as_deref().filter(|k| !k.is_empty()) {
        rows.push(("Type", kind.to_string()));
    }
    if let Some(size) = doc.file_size {
        rows.push(("Size", format_file_size(size)));
    }
    if let Some(count) = doc.citation_count {
        rows.push(("Citations", pluralize(count, "citation", "citations")));
    }
    rows
}

/// `/cases/:id/documents/:document_id/review`.
#[component]
pub fn DocumentReview(id: String, document_id: String) -> Element {
    let back = Route::case_tab(id.clone(), CaseTab::Documents);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cases.css") }

        div { class: "document-review-page",
            ReviewBody { key: "{document_id}", document_id: document_id.clone() }

            div { class: "document-review-footer",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| { navigator().push(back.clone()); },
                    "Back to documents"
                }
            }
        }
    }
}

#[component]
fn ReviewBody(document_id: String) -> Element {
    let doc_id = document_id.clone();
    let doc_resource = use_resource(move || {
        let id = doc_id.clone();
        async move {
            match server::api::get_document(id.clone()).await {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!(document_id = %id, error = %e, "failed to load document");
                    None
                }
            }
        }
    });

    let summary_id = document_id.clone();
    let summary_resource = use_resource(move || {
        let id = summary_id.clone();
        async move {
            match server::api::get_document_summary(id.clone()).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    tracing::warn!(document_id = %id, error = %e, "failed to load document summary");
                    None
                }
            }
        }
    });

    let facts_id = document_id.clone();
    let facts_resource = use_resource(move || {
        let id = facts_id.clone();
        async move {
            match server::api::get_document_facts(id.clone()).await {
                Ok(facts) => facts,
                Err(e) => {
                    tracing::warn!(document_id = %id, error = %e, "failed to load document facts");
                    Vec::new()
                }
            }
        }
    });

    let entities_id = document_id.clone();
    let entities_resource = use_resource(move || {
        let id = entities_id.clone();
        async move {
            match server::api::get_document_entities(id.clone()).await {
                Ok(entities) => entities,
                Err(e) => {
                    tracing::warn!(document_id = %id, error = %e, "failed to load document entities");
                    Vec::new()
                }
            }
        }
    });

    let loaded_doc: Option<Option<SourceDocument>> = doc_resource.read().as_ref().cloned();
    let loaded_summary: Option<Option<DocumentSummary>> = summary_resource.read().as_ref().cloned();
    let loaded_facts: Option<Vec<DocumentFact>> = facts_resource.read().as_ref().cloned();
    let loaded_entities: Option<Vec<DocumentEntity>> = entities_resource.read().as_ref().cloned();

    rsx! {
        match loaded_doc {
            None => rsx! { Skeleton { class: "review-header-skeleton" } },
            Some(None) => rsx! {
                PageHeader { title: "Document".to_string(), subtitle: "Document details are unavailable.".to_string() }
            },
            Some(Some(doc)) => rsx! { DocumentMeta { doc } },
        }

        Card { class: "review-summary",
            CardHeader {
                CardTitle { "Summary" }
            }
            CardContent {
                match loaded_summary {
                    None => rsx! {
                        Skeleton { class: "review-summary-skeleton" }
                    },
                    Some(None) => rsx! {
                        EmptyState { message: SUMMARY_UNAVAILABLE.to_string() }
                    },
                    Some(Some(summary)) => rsx! { SummaryView { summary } },
                }
            }
        }

        div { class: "review-columns",
            ReviewFacts { facts: loaded_facts }
            ReviewEntities { entities: loaded_entities }
        }
    }
}

/// Facts suggested for the document; `None` while they load.
#[component]
fn ReviewFacts(facts: Option<Vec<DocumentFact>>) -> Element {
    let count = facts
        .as_ref()
        .map(|f| pluralize(f.len() as u32, "fact", "facts"));

    rsx! {
        Card { class: "review-facts",
            CardHeader {
                CardTitle { "Facts" }
                if let Some(count) = count {
                    CardDescription { "{count}" }
                }
            }
            CardContent {
                match facts {
                    None => rsx! { Skeleton { class: "review-list-skeleton" } },
                    Some(facts) if facts.is_empty() => rsx! {
                        EmptyState { message: NO_FACTS.to_string() }
                    },
                    Some(facts) => rsx! {
                        ul { class: "review-list",
                            for (fact, meta) in facts.iter().map(|f| (f, fact_meta(f))) {
                                li { key: "{fact.id}", class: "review-list-item",
                                    span { class: "review-fact-text", "{fact.fact}" }
                                    span { class: "review-list-meta", "{meta}" }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

/// "Mar 4, 2025 · p. 2", skipping whatever the fact lacks.
pub fn fact_meta(fact: &DocumentFact) -> String {
    let date = fact.event_date.as_deref().map(format_date_human);
    let page = fact.page_number.map(|p| format!("p. {p}"));
    [date, page]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" \u{b7} ")
}

/// Entities mentioned in the document; `None` while they load.
#[component]
fn ReviewEntities(entities: Option<Vec<DocumentEntity>>) -> Element {
    let count = entities
        .as_ref()
        .map(|e| pluralize(e.len() as u32, "entity", "entities"));

    rsx! {
        Card { class: "review-entities",
            CardHeader {
                CardTitle { "Entities" }
                if let Some(count) = count {
                    CardDescription { "{count}" }
                }
            }
            CardContent {
                match entities {
                    None => rsx! { Skeleton { class: "review-list-skeleton" } },
                    Some(entities) if entities.is_empty() => rsx! {
                        EmptyState { message: NO_ENTITIES.to_string() }
                    },
                    Some(entities) => rsx! {
                        ul { class: "review-list",
                            for (entity, kind, mentions) in entities.iter().map(|e| {
                                (e, format_snake_case_title(&e.entity_type), pluralize(e.mentions, "mention", "mentions"))
                            }) {
                                li { key: "{entity.id}", class: "review-list-item",
                                    span {
                                        span { class: "entity-name", "{entity.name}" }
                                        " "
                                        Badge { variant: BadgeVariant::Neutral, "{kind}" }
                                    }
                                    span { class: "review-list-meta", "{mentions}" }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn DocumentMeta(doc: SourceDocument) -> Element {
    let name = doc.display_name().to_string();
    let status = doc.processing_status.clone().filter(|s| !s.is_empty());
    let metadata = document_metadata(&doc);

    rsx! {
        PageHeader { title: name,
            if let Some(status) = status {
                Badge { variant: BadgeVariant::for_status(&status), "{status}" }
            }
        }
        dl { class: "review-meta",
            for (label, value) in metadata {
                div { key: "{label}", class: "review-meta-row",
                    dt { "{label}" }
                    dd { "{value}" }
                }
            }
        }
    }
}

#[component]
fn SummaryView(summary: DocumentSummary) -> Element {
    let text = summary.summary.trim().to_string();

    rsx! {
        if text.is_empty() {
            p { class: "review-summary-text muted", "No summary text was generated for this document." }
        } else {
            p { class: "review-summary-text", "{text}" }
        }

        if !summary.key_points.is_empty() {
            h3 { class: "review-section-title", "Key points" }
            ul { class: "review-key-points",
                for (i, point) in summary.key_points.iter().enumerate() {
                    li { key: "{i}", "{point}" }
                }
            }
        }

        if !summary.topics.is_empty() {
            h3 { class: "review-section-title", "Topics" }
            div { class: "review-topics",
                for (i, topic) in summary.topics.iter().enumerate() {
                    Badge { key: "{i}", variant: BadgeVariant::Info, "{topic}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metadata_lists_optional_fields() {
        let doc = SourceDocument {
            id: "d1".to_string(),
            document_type: Some("pleading".to_string()),
            file_size: Some(2048),
            citation_count: Some(1),
            ingested_at: Some("2026-01-20T21:35:00Z".to_string()),
            ..Default::default()
        };
        let rows = document_metadata(&doc);
        assert_eq!(
            rows,
            vec![
                ("Uploaded", "Jan 20, 2026".to_string()),
                ("Type", "pleading".to_string()),
                ("Size", "2.0 KB".to_string()),
                ("Citations", "1 citation".to_string()),
            ]
        );
    }

    #[test]
    fn metadata_omits_uncounted_and_unknown_fields() {
        let rows = document_metadata(&SourceDocument::default());
        let labels: Vec<&str> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Uploaded"]);
    }

    #[test]
    fn fact_meta_joins_date_and_page() {
        let mut fact = DocumentFact {
            id: "f1".to_string(),
            fact: "Contract signed.".to_string(),
            event_date: Some("2025-03-04".to_string()),
            page_number: Some(2),
            ..Default::default()
        };
        assert_eq!(fact_meta(&fact), "Mar 4, 2025 \u{b7} p. 2");
        fact.event_date = None;
        assert_eq!(fact_meta(&fact), "p. 2");
        fact.page_number = None;
        assert_eq!(fact_meta(&fact), "");
    }

    #[test]
    fn review_facts_render_each_fact_with_count() {
        let facts = vec![
            DocumentFact {
                id: "f1".to_string(),
                fact: "Acme breached the agreement.".to_string(),
                ..Default::default()
            },
            DocumentFact {
                id: "f2".to_string(),
                fact: "Notice was sent.".to_string(),
                page_number: Some(4),
                ..Default::default()
            },
        ];
        let html = dioxus_ssr::render_element(rsx! {
            ReviewFacts { facts: Some(facts) }
        });
        assert_eq!(html.matches("review-fact-text").count(), 2);
        assert!(html.contains("2 facts"));
        assert!(html.contains("p. 4"));
    }

    #[test]
    fn review_lists_show_loading_then_empty_state() {
        let html = dioxus_ssr::render_element(rsx! {
            ReviewEntities { entities: None }
        });
        assert!(html.contains("review-list-skeleton"));

        let html = dioxus_ssr::render_element(rsx! {
            ReviewEntities { entities: Some(vec![]) }
        });
        assert!(html.contains(NO_ENTITIES));
        assert!(html.contains("0 entities"));

        let html = dioxus_ssr::render_element(rsx! {
            ReviewFacts { facts: Some(vec![]) }
        });
        assert!(html.contains(NO_FACTS));
    }

    #[test]
    fn review_entities_show_type_and_mentions() {
        let entities = vec![DocumentEntity {
            id: "e1".to_string(),
            name: "Acme Corp".to_string(),
            entity_type: "organization".to_string(),
            mentions: 1,
        }];
        let html = dioxus_ssr::render_element(rsx! {
            ReviewEntities { entities: Some(entities) }
        });
        assert!(html.contains("Acme Corp"));
        assert!(html.contains("Organization"));
        assert!(html.contains("1 mention"));
    }
}
