use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Info => "info",
        }
    }

    /// Badge colour for a backend status string (matter status, document
    /// processing status, fact and entity review status).
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "active" | "open" | "completed" | "processed" | "approved" | "verified"
            | "accepted" => BadgeVariant::Success,
            "pending" | "processing" | "queued" | "in_review" | "needs_review"
            | "not_reviewed" => BadgeVariant::Warning,
            "failed" | "error" | "rejected" => BadgeVariant::Danger,
            "closed" | "archived" => BadgeVariant::Neutral,
            _ => BadgeVariant::Info,
        }
    }
}

/// Inline label for statuses and types.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_case_insensitive() {
        assert_eq!(BadgeVariant::for_status("Active"), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_status(" completed "), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_status("PROCESSING"), BadgeVariant::Warning);
    }

    #[test]
    fn review_statuses_have_distinct_colours() {
        assert_eq!(BadgeVariant::for_status("accepted"), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_status("not_reviewed"), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::for_status("rejected"), BadgeVariant::Danger);
    }

    #[test]
    fn failures_and_unknowns() {
        assert_eq!(BadgeVariant::for_status("failed"), BadgeVariant::Danger);
        assert_eq!(BadgeVariant::for_status("closed"), BadgeVariant::Neutral);
        assert_eq!(BadgeVariant::for_status("litigation"), BadgeVariant::Info);
        assert_eq!(BadgeVariant::for_status(""), BadgeVariant::Info);
    }
}
