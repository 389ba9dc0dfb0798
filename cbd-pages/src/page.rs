use anyhow::anyhow;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Title shown above every page.
pub const DASHBOARD_TITLE: &str = "New York Citi Bike Strategy Dashboard";
/// Sidebar heading.
pub const SIDEBAR_TITLE: &str = "STRUCTURE";
/// Label of the page selector.
pub const PAGE_SELECTOR_LABEL: &str = "Select part of analysis";

/// The five mutually exclusive dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Page {
    #[default]
    Intro,
    Stations,
    Weather,
    Map,
    Recommendations,
}

impl Page {
    /// Selector order.
    pub const ALL: [Page; 5] = [
        Page::Intro,
        Page::Stations,
        Page::Weather,
        Page::Map,
        Page::Recommendations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Intro => "Intro page",
            Page::Stations => "Most popular Citi Bike stations",
            Page::Weather => "Weather component and bike usage",
            Page::Map => "Interactive map with aggregation",
            Page::Recommendations => "Recommendations",
        }
    }

    /// Exact label match.
    pub fn from_label(label: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Short identifier used for DOM ids and CLI arguments.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Intro => "intro",
            Page::Stations => "stations",
            Page::Weather => "weather",
            Page::Map => "map",
            Page::Recommendations => "recommendations",
        }
    }

    /// Whether the sidebar filters belong to this page.
    pub fn has_filters(&self) -> bool {
        matches!(self, Page::Stations)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Page {
    type Err = anyhow::Error;

    /// Accepts either the full label or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Page::from_label(s)
            .or_else(|| Page::ALL.into_iter().find(|p| p.slug().eq_ignore_ascii_case(s)))
            .ok_or_else(|| anyhow!("unknown page '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn test_labels_resolve_to_their_page() {
        for page in Page::ALL {
            assert_eq!(Page::from_label(page.label()), Some(page));
            assert_eq!(page.label().parse::<Page>().unwrap(), page);
            assert_eq!(page.slug().parse::<Page>().unwrap(), page);
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        for a in Page::ALL {
            for b in Page::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }

    #[test]
    fn test_default_is_intro() {
        assert_eq!(Page::default(), Page::Intro);
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Page::from_label("Settings"), None);
        assert!("Settings".parse::<Page>().is_err());
    }

    #[test]
    fn test_only_stations_has_filters() {
        let with_filters: Vec<Page> = Page::ALL.into_iter().filter(|p| p.has_filters()).collect();
        assert_eq!(with_filters, vec![Page::Stations]);
    }
}
