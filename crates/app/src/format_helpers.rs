//! Shared formatting utilities for the UI layer.

use chrono::{DateTime, Utc};
use shared_types::parse_timestamp;

/// Longest document name shown in a table cell before truncation.
pub const MAX_NAME_CHARS: usize = 60;

const ELLIPSIS: char = '…';

/// Format a timestamp as "Jan 20, 2026".
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Format an optional timestamp, with a placeholder when it is missing.
pub fn format_optional_date(dt: Option<DateTime<Utc>>) -> String {
    dt.map(format_date).unwrap_or_else(|| "Unknown".to_string())
}

/// Format a raw backend timestamp string as "Jan 20, 2026".
pub fn format_date_human(raw: &str) -> String {
    format_optional_date(parse_timestamp(raw))
}

/// `"1 citation"`, `"0 citations"`, `"3 citations"`.
pub fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Shorten `name` to at most [`MAX_NAME_CHARS`] characters, ending in an
/// ellipsis when anything was cut. Counts characters, not bytes.
pub fn truncate_name(name: &str) -> String {
    truncate_chars(name, MAX_NAME_CHARS)
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}{ELLIPSIS}", kept.trim_end())
}

/// Convert a snake_case string to Title Case ("document_uploaded" → "Document Uploaded").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable file size ("2.0 KB", "1.4 MB").
pub fn format_file_size(bytes: i64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    if bytes < 1024 {
        return format!("{} B", bytes.max(0));
    }
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}
