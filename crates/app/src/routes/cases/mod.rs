pub mod detail;
pub mod list;
pub mod review;
pub mod tabs;

use shared_types::FeatureFlags;

/// Sub-page of a case, addressed by the last segment of `/cases/:id/:tab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTab {
    Documents,
    Facts,
    Entities,
    Activity,
}

impl CaseTab {
    pub const ALL: [CaseTab; 4] = [
        CaseTab::Documents,
        CaseTab::Facts,
        CaseTab::Entities,
        CaseTab::Activity,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            CaseTab::Documents => "documents",
            CaseTab::Facts => "facts",
            CaseTab::Entities => "entities",
            CaseTab::Activity => "activity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseTab::Documents => "Documents",
            CaseTab::Facts => "Facts",
            CaseTab::Entities => "Entities",
            CaseTab::Activity => "Activity",
        }
    }

    /// Parse a URL slug. Unknown slugs fall back to the documents tab.
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim().to_ascii_lowercase().as_str() {
            "facts" => CaseTab::Facts,
            "entities" => CaseTab::Entities,
            "activity" => CaseTab::Activity,
            _ => CaseTab::Documents,
        }
    }

    /// Whether the tab is available under the current feature flags.
    pub fn enabled(self, flags: &FeatureFlags) -> bool {
        match self {
            CaseTab::Activity => flags.activity_feed,
            _ => true,
        }
    }

    /// Tabs shown in the strip, in display order.
    pub fn visible(flags: &FeatureFlags) -> Vec<CaseTab> {
        Self::ALL.into_iter().filter(|t| t.enabled(flags)).collect()
    }

    /// The tab to render for a slug: disabled tabs fall back like unknown ones.
    pub fn resolve(slug: &str, flags: &FeatureFlags) -> Self {
        let tab = Self::from_slug(slug);
        if tab.enabled(flags) {
            tab
        } else {
            CaseTab::Documents
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(activity_feed: bool) -> FeatureFlags {
        FeatureFlags {
            activity_feed,
            ..Default::default()
        }
    }

    #[test]
    fn slugs_round_trip() {
        for tab in CaseTab::ALL {
            assert_eq!(CaseTab::from_slug(tab.slug()), tab);
        }
    }

    #[test]
    fn unknown_slug_shows_documents() {
        assert_eq!(CaseTab::from_slug("overview"), CaseTab::Documents);
        assert_eq!(CaseTab::from_slug(""), CaseTab::Documents);
        assert_eq!(CaseTab::from_slug("FACTS"), CaseTab::Facts);
    }

    #[test]
    fn activity_tab_follows_feature_flag() {
        assert_eq!(CaseTab::resolve("activity", &flags(true)), CaseTab::Activity);
        assert_eq!(CaseTab::resolve("activity", &flags(false)), CaseTab::Documents);
        assert_eq!(CaseTab::visible(&flags(false)).len(), 3);
        assert_eq!(CaseTab::visible(&flags(true)), CaseTab::ALL.to_vec());
    }
}
