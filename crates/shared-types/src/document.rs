use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when the backend has neither a title nor a file name.
pub const UNTITLED_DOCUMENT: &str = "Untitled document";

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Parse a backend timestamp.
///
/// The backend emits ISO-8601 strings that may or may not carry an offset
/// (`2026-01-20T21:35:00Z`, `2026-01-20T21:35:00.123456`, or a bare date).
/// Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// Source document
// ---------------------------------------------------------------------------

/// A document (source) belonging to a matter, as listed by the backend.
///
/// The citation count is only present when the backend computed it; the
/// listing endpoint omits it, so it stays `None` rather than reading as zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SourceDocument {
    pub id: String,
    #[serde(default)]
    pub matter_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub processing_status: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub citation_count: Option<u32>,
    #[serde(default)]
    pub ingested_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SourceDocument {
    /// Title if present, otherwise the original file name.
    pub fn display_name(&self) -> &str {
        [self.title.as_deref(), self.file_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(UNTITLED_DOCUMENT)
    }

    /// When the document was uploaded: ingestion time, falling back to the
    /// record creation time.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.ingested_at
            .as_deref()
            .and_then(parse_timestamp)
            .or_else(|| self.created_at.as_deref().and_then(parse_timestamp))
    }
}

/// Order documents newest upload first. Documents without a usable
/// timestamp go last.
pub fn sort_by_upload_date_desc(documents: &mut [SourceDocument]) {
    documents.sort_by_key(|doc| std::cmp::Reverse(doc.uploaded_at()));
}

/// Paginated document listing returned by `GET /api/documents`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub documents: Vec<SourceDocument>,
}

/// Backend-generated review summary for a single document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentSummary {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}
