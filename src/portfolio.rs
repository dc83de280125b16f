//! Portfolio gallery: category filter, per-card reveal and lightbox.

use crate::content::{Category, Phrase, PortfolioItem, Text};
use crate::reveal::{RevealObserver, RevealOptions};
use tracing::debug;

/// Gallery filter. `All` is the sentinel that matches every item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Filter buttons in display order.
    pub fn options() -> [Filter; 5] {
        [
            Filter::All,
            Filter::Category(Category::Portraits),
            Filter::Category(Category::Landscapes),
            Filter::Category(Category::Weddings),
            Filter::Category(Category::Commercial),
        ]
    }

    #[inline]
    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => item.category == category,
        }
    }

    pub fn label(self) -> Text {
        match self {
            Filter::All => Phrase::FilterAll.text(),
            Filter::Category(category) => category.label(),
        }
    }
}

/// Items matching `filter`, in their original order.
pub fn filter_items(items: &[PortfolioItem], filter: Filter) -> Vec<&PortfolioItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Interaction state of the portfolio section.
#[derive(Clone, Debug)]
pub struct PortfolioState {
    items: &'static [PortfolioItem],
    filter: Filter,
    visible: Vec<&'static PortfolioItem>,
    reveal: RevealObserver,
    lightbox: Option<u32>,
}

impl PortfolioState {
    pub fn new(items: &'static [PortfolioItem], reveal_options: RevealOptions) -> Self {
        let visible = filter_items(items, Filter::All);
        let reveal = RevealObserver::new(visible.len(), reveal_options);
        Self {
            items,
            filter: Filter::All,
            visible,
            reveal,
            lightbox: None,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The filtered items, keyed by position for the reveal tracker.
    pub fn visible(&self) -> &[&'static PortfolioItem] {
        &self.visible
    }

    pub fn reveal(&self) -> &RevealObserver {
        &self.reveal
    }

    pub fn reveal_mut(&mut self) -> &mut RevealObserver {
        &mut self.reveal
    }

    /// Switch filters. Re-selecting the active filter changes nothing.
    ///
    /// A new filter restarts the reveal pipeline for the new item list.
    pub fn select_filter(&mut self, filter: Filter) -> bool {
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.visible = filter_items(self.items, filter);
        self.reveal.reset(self.visible.len());
        debug!(?filter, count = self.visible.len(), "portfolio filter changed");
        true
    }

    /// Open the lightbox for the item with `id`. Unknown ids are ignored.
    pub fn open_lightbox(&mut self, id: u32) -> bool {
        if self.items.iter().any(|item| item.id == id) {
            self.lightbox = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn lightbox(&self) -> Option<&'static PortfolioItem> {
        let id = self.lightbox?;
        self.items.iter().find(|item| item.id == id)
    }
}
