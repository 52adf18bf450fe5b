use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::parse_timestamp;

/// A legal matter (case) as returned by `GET /api/matters`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Matter {
    pub id: String,
    pub matter_number: String,
    pub matter_name: String,
    #[serde(default)]
    pub matter_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub court_name: Option<String>,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Matter {
    /// "M-2024-001 · Smith v. Acme" style label used by pickers.
    pub fn label(&self) -> String {
        if self.matter_number.is_empty() {
            self.matter_name.clone()
        } else {
            format!("{} \u{b7} {}", self.matter_number, self.matter_name)
        }
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}

/// Order matters newest first; undated matters last.
pub fn sort_matters_newest_first(matters: &mut [Matter]) {
    matters.sort_by_key(|m| std::cmp::Reverse(m.created()));
}
