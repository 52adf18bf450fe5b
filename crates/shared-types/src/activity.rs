use serde::{Deserialize, Serialize};

/// An audit-log entry shown in a matter's activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Activity {
    pub id: String,
    pub action_type: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub resource_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Activity {
    /// Who performed the action, or "System" for backend-initiated entries.
    pub fn actor(&self) -> &str {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or("System")
    }
}
