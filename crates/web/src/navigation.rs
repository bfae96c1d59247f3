//! Site navigation.

use courtside_core::query::EventFilter;

/// A link in the navigation bar. Entries with children open a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub href: &'static str,
    pub children: &'static [NavEntry],
}

impl NavEntry {
    const fn link(title: &'static str, href: &'static str) -> Self {
        Self {
            title,
            href,
            children: &[],
        }
    }

    pub fn has_dropdown(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry::link("Home", "/"),
    NavEntry {
        title: "Schedule",
        href: "/schedule",
        children: &[
            NavEntry::link("All events", "/schedule"),
            NavEntry::link("Tournaments", "/schedule?event_type=tournament"),
            NavEntry::link("Open Gym", "/schedule?event_type=open_gym"),
        ],
    },
    NavEntry::link("Photos", "/photos"),
];

/// Open/closed state of the navigation bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    mobile_open: bool,
    open_dropdown: Option<&'static str>,
    current: String,
}

impl NavMenu {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        NAV_ENTRIES
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
        if !self.mobile_open {
            self.open_dropdown = None;
        }
    }

    /// Open the dropdown under `title`, closing any other. Toggling the open
    /// one closes it. Titles without a dropdown are ignored.
    pub fn toggle_dropdown(&mut self, title: &str) {
        let Some(entry) = NAV_ENTRIES.iter().find(|e| e.title == title && e.has_dropdown()) else {
            return;
        };
        self.open_dropdown = match self.open_dropdown {
            Some(open) if open == entry.title => None,
            _ => Some(entry.title),
        };
    }

    pub fn open_dropdown(&self) -> Option<&'static str> {
        self.open_dropdown
    }

    /// Follow a link: record it as current and close every menu.
    pub fn navigate(&mut self, href: &str) {
        self.current = href.to_string();
        self.mobile_open = false;
        self.open_dropdown = None;
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether `href` should be highlighted. A parent entry is active on any
    /// of its children's pages; `/` only matches itself.
    pub fn is_active(&self, href: &str) -> bool {
        let path = self.current.split('?').next().unwrap_or_default();
        if href == "/" {
            return path == "/";
        }
        if href.contains('?') {
            return self.current == href;
        }
        path == href || path.starts_with(&format!("{href}/"))
    }
}

/// The schedule filter a navigation link selects.
pub fn filter_for_href(href: &str) -> EventFilter {
    href.split_once('?')
        .map(|(_, query)| query)
        .into_iter()
        .flat_map(|query| query.split('&'))
        .filter_map(|pair| pair.strip_prefix("event_type="))
        .find_map(|value| value.parse().ok())
        .unwrap_or_default()
}
