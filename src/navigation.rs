//! Page sections, navbar state and route resolution.

use crate::constants::NAV_SCROLLED_OFFSET_PX;
use crate::content::Phrase;
use tracing::{debug, error};

/// Sections of the page in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Portfolio,
    About,
    Services,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Portfolio,
        Section::About,
        Section::Services,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Position of the section in the page's scroll list.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Portfolio => "#portfolio",
            Section::About => "#about",
            Section::Services => "#services",
            Section::Testimonials => "#testimonials",
            Section::Contact => "#contact",
        }
    }

    /// Accepts the anchor with or without the leading `#`.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let name = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL
            .into_iter()
            .find(|section| &section.anchor()[1..] == name)
    }

    pub fn label(self) -> Phrase {
        match self {
            Section::Home => Phrase::NavHome,
            Section::Portfolio => Phrase::NavPortfolio,
            Section::About => Phrase::NavAbout,
            Section::Services => Phrase::NavServices,
            Section::Testimonials => Phrase::NavTestimonials,
            Section::Contact => Phrase::NavContact,
        }
    }
}

/// Navbar state: solid style once scrolled, and the narrow-layout menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Track the page scroll offset. Returns true if the style flag changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let scrolled = offset > NAV_SCROLLED_OFFSET_PX;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a nav link closes the menu and yields the scroll target.
    pub fn follow_link(&mut self, section: Section) -> Section {
        self.menu_open = false;
        debug!(anchor = section.anchor(), "navigating to section");
        section
    }
}

/// Where a route string leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The page itself, optionally scrolled to a section
    Home { section: Option<Section> },
    /// Anything other than the root path
    NotFound { path: String },
}

impl Default for Route {
    fn default() -> Self {
        Route::Home { section: None }
    }
}

impl Route {
    /// Resolve a route string such as `/`, `/#contact` or `/gallery`.
    ///
    /// Unknown anchors on the root path are ignored; unknown paths are
    /// logged and resolve to [`Route::NotFound`].
    pub fn resolve(route: &str) -> Route {
        let route = route.trim();
        let (path, anchor) = match route.split_once('#') {
            Some((path, anchor)) => (path, Some(anchor)),
            None => (route, None),
        };

        if path.is_empty() || path == "/" {
            return Route::Home {
                section: anchor.and_then(Section::from_anchor),
            };
        }

        error!(
            path,
            "404 Error: User attempted to access non-existent route"
        );
        Route::NotFound {
            path: path.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}
