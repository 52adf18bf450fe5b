use serde::{Deserialize, Serialize};

/// Facts shown per page of a matter's facts table.
pub const FACTS_PAGE_SIZE: u32 = 20;

/// A fact extracted from one of a matter's documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatterFact {
    pub id: String,
    /// Event date of the fact, if the extractor found one.
    #[serde(default)]
    pub date_time: Option<String>,
    /// Extracted statement. The backend can store facts without text.
    #[serde(default)]
    pub fact: Option<String>,
    #[serde(default)]
    pub issues: Vec<String>,
    /// File name of the source document.
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub review_status: Option<String>,
    #[serde(default)]
    pub document_id: Option<String>,
}

impl MatterFact {
    pub fn text(&self) -> &str {
        self.fact.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// One page of a matter's facts, newest event first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatterFactPage {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub facts: Vec<MatterFact>,
}

impl MatterFactPage {
    /// Offset of the previous page, if there is one.
    pub fn previous_offset(&self) -> Option<u32> {
        (self.offset > 0).then(|| self.offset.saturating_sub(self.page_size()))
    }

    /// Offset of the next page, if the backend has more facts.
    pub fn next_offset(&self) -> Option<u32> {
        let next = self.offset + self.facts.len() as u32;
        (!self.facts.is_empty() && next < self.total).then_some(next)
    }

    /// "Showing 21–40 of 57", or `None` for an empty page.
    pub fn range_label(&self) -> Option<String> {
        if self.facts.is_empty() {
            return None;
        }
        let first = self.offset + 1;
        let last = self.offset + self.facts.len() as u32;
        Some(format!("Showing {first}\u{2013}{last} of {}", self.total.max(last)))
    }

    fn page_size(&self) -> u32 {
        if self.limit == 0 {
            FACTS_PAGE_SIZE
        } else {
            self.limit
        }
    }
}

/// A fact suggested for one document during review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentFact {
    pub id: String,
    #[serde(default)]
    pub fact: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub review_status: Option<String>,
}

/// An entity mentioned in one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentEntity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub entity_type: String,
    #[serde(default)]
    pub mentions: u32,
}

/// Order document entities by mention count, then name.
pub fn sort_by_mentions_desc(entities: &mut [DocumentEntity]) {
    entities.sort_by(|a, b| b.mentions.cmp(&a.mentions).then_with(|| a.name.cmp(&b.name)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(total: u32, offset: u32, len: usize) -> MatterFactPage {
        MatterFactPage {
            total,
            limit: FACTS_PAGE_SIZE,
            offset,
            facts: (0..len)
                .map(|i| MatterFact {
                    id: format!("f{i}"),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn deserializes_backend_fact_page() {
        let json = r#"{
            "total": 1, "limit": 20, "offset": 0,
            "facts": [{
                "id": "f1", "date_time": "2025-03-04", "fact": "Contract signed.",
                "issues": ["Contract"], "evidence": "contract.pdf",
                "review_status": "not_reviewed", "confidence": 0.9,
                "source_text": "", "document_id": "d1", "document_name": "contract.pdf"
            }]
        }"#;
        let page: MatterFactPage = serde_json::from_str(json).unwrap();
        let fact = &page.facts[0];
        assert_eq!(fact.text(), "Contract signed.");
        assert_eq!(fact.evidence, "contract.pdf");
        assert_eq!(fact.review_status.as_deref(), Some("not_reviewed"));
        assert_eq!(fact.issues, vec!["Contract".to_string()]);
    }

    #[test]
    fn null_fact_text_reads_as_empty() {
        let fact: MatterFact =
            serde_json::from_str(r#"{"id":"f2","fact":null,"date_time":null}"#).unwrap();
        assert_eq!(fact.text(), "");
        assert_eq!(fact.date_time, None);
    }

    #[test]
    fn first_page_has_only_next() {
        let p = page(45, 0, 20);
        assert_eq!(p.previous_offset(), None);
        assert_eq!(p.next_offset(), Some(20));
        assert_eq!(p.range_label().as_deref(), Some("Showing 1\u{2013}20 of 45"));
    }

    #[test]
    fn last_page_has_only_previous() {
        let p = page(45, 40, 5);
        assert_eq!(p.previous_offset(), Some(20));
        assert_eq!(p.next_offset(), None);
        assert_eq!(p.range_label().as_deref(), Some("Showing 41\u{2013}45 of 45"));
    }

    #[test]
    fn empty_page_has_no_navigation() {
        let p = page(0, 0, 0);
        assert_eq!(p.previous_offset(), None);
        assert_eq!(p.next_offset(), None);
        assert_eq!(p.range_label(), None);
    }

    #[test]
    fn document_entities_read_type_and_mentions() {
        let json = r#"[{"id":"e1","name":"Jane Doe","type":"person","mentions":3,"confidence":0.8},
                       {"id":"e2","name":"Acme Corp","type":"organization","mentions":3},
                       {"id":"e3","name":"Springfield","type":"location","mentions":7}]"#;
        let mut entities: Vec<DocumentEntity> = serde_json::from_str(json).unwrap();
        sort_by_mentions_desc(&mut entities);
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Springfield", "Acme Corp", "Jane Doe"]);
        assert_eq!(entities[2].entity_type, "person");
    }

    #[test]
    fn document_fact_defaults_optional_fields() {
        let fact: DocumentFact =
            serde_json::from_str(r#"{"id":"f1","fact":"Payment missed."}"#).unwrap();
        assert!(fact.tags.is_empty());
        assert_eq!(fact.page_number, None);
        assert_eq!(fact.review_status, None);
    }
}
