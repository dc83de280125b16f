//! Section handlers - navigation, carousels, portfolio, reveal and parallax.

use super::state::{Photocraft, RevealGroup};
use crate::carousel::Direction;
use crate::geometry::{Point, Rect};
use crate::navigation::{Route, Section};
use crate::portfolio::Filter;
use gpui::*;
use std::time::Instant;

/// Which carousel a control belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselId {
    Hero,
    Testimonials,
}

impl Photocraft {
    fn carousel_view(&mut self, id: CarouselId) -> &mut super::CarouselView {
        match id {
            CarouselId::Hero => &mut self.hero,
            CarouselId::Testimonials => &mut self.testimonials,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate_to(&mut self, section: Section, cx: &mut Context<Self>) {
        let section = self.page.nav.follow_link(section);
        self.page.route = Route::Home {
            section: Some(section),
        };
        self.page.scroll.scroll_to_item(section.index());
        cx.notify();
    }

    pub fn toggle_menu(&mut self, cx: &mut Context<Self>) {
        self.page.nav.toggle_menu();
        cx.notify();
    }

    /// Leave the not-found view.
    pub fn return_home(&mut self, cx: &mut Context<Self>) {
        self.page.route = Route::default();
        self.page.scroll.scroll_to_item(Section::Home.index());
        cx.notify();
    }

    pub fn toggle_locale(&mut self, cx: &mut Context<Self>) {
        self.page.locale = self.page.locale.toggled();
        tracing::info!(locale = %self.page.locale, "locale switched");
        cx.notify();
    }

    /// Track the scroll offset for the navbar style.
    pub(crate) fn sync_scroll_offset(&mut self) {
        let offset = -f32::from(self.page.scroll.offset().y);
        self.page.nav.on_scroll(offset);
    }

    /// Hand a `mailto:`, `tel:` or web link to the system handler.
    pub fn open_link(&mut self, link: &str) {
        if let Err(e) = open::that(link) {
            tracing::warn!("failed to open {}: {}", link, e);
        }
    }

    // ========================================================================
    // Carousels
    // ========================================================================

    pub fn carousel_step(&mut self, id: CarouselId, direction: Direction, cx: &mut Context<Self>) {
        if self.carousel_view(id).carousel.advance(direction, Instant::now()) {
            cx.notify();
        }
    }

    pub fn carousel_go_to(&mut self, id: CarouselId, index: usize, cx: &mut Context<Self>) {
        if self.carousel_view(id).carousel.go_to(index, Instant::now()) {
            cx.notify();
        }
    }

    pub fn carousel_drag_start(&mut self, id: CarouselId, x: f32) {
        self.carousel_view(id).gesture.press(x);
    }

    /// The pointer was released outside the carousel.
    pub fn carousel_drag_cancel(&mut self, id: CarouselId) {
        self.carousel_view(id).gesture.cancel();
    }

    /// Resolve a drag into a swipe once the pointer is released.
    pub fn carousel_drag_end(&mut self, id: CarouselId, x: f32, cx: &mut Context<Self>) {
        let view = self.carousel_view(id);
        let Some(start) = view.gesture.release() else {
            return;
        };
        if view.carousel.swipe(start, x, Instant::now()) {
            cx.notify();
        }
    }

    // ========================================================================
    // Portfolio
    // ========================================================================

    pub fn select_filter(&mut self, filter: Filter, cx: &mut Context<Self>) {
        if !self.sections.portfolio.select_filter(filter) {
            return;
        }
        if self.system.settings.reduce_motion {
            self.sections.portfolio.reveal_mut().reveal_all();
        }
        cx.notify();
    }

    pub fn open_lightbox(&mut self, id: u32, cx: &mut Context<Self>) {
        if self.sections.portfolio.open_lightbox(id) {
            cx.notify();
        }
    }

    pub fn close_lightbox(&mut self, cx: &mut Context<Self>) {
        self.sections.portfolio.close_lightbox();
        self.sections.lightbox_backdrop_pressed = false;
        cx.notify();
    }

    // ========================================================================
    // Reveal and parallax
    // ========================================================================

    /// Feed freshly painted bounds of a revealable group into its observer.
    pub(crate) fn on_reveal_bounds(
        &mut self,
        group: RevealGroup,
        bounds: &[Rect],
        cx: &mut Context<Self>,
    ) {
        let viewport = self.page.viewport;
        let observer = match group {
            RevealGroup::Portfolio => self.sections.portfolio.reveal_mut(),
            RevealGroup::Services => &mut self.sections.services,
            RevealGroup::AboutStats => &mut self.sections.about.stats,
        };
        if observer.observed_count() == 0 {
            return;
        }
        if !observer.update(viewport, bounds).is_empty() {
            cx.notify();
        }
    }

    pub(crate) fn on_about_bounds(&mut self, bounds: Rect) {
        self.sections.about_bounds = Some(bounds);
    }

    /// Page-wide pointer tracking for the about section's parallax frames.
    pub fn on_pointer_move(&mut self, position: Point, cx: &mut Context<Self>) {
        if self.system.settings.reduce_motion {
            return;
        }
        let Some(bounds) = self.sections.about_bounds else {
            return;
        };
        if self.sections.about.parallax.on_pointer_move(position, bounds) {
            cx.notify();
        }
    }
}
