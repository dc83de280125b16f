//! Rendering - the page composition and one module per section.
//!
//! Sections are plain functions over `&mut Photocraft` returning elements;
//! only [`Photocraft`] implements `Render`. Sections are the direct children
//! of the tracked scroll container, in `Section::index()` order, so anchor
//! navigation can use `ScrollHandle::scroll_to_item`.

mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod not_found;
mod overlays;
mod portfolio;
mod services;
mod testimonials;
mod toasts;
mod widgets;

use crate::app::Photocraft;
use crate::geometry::Rect;
use crate::navigation::Route;
use gpui::*;
use gpui_component::ActiveTheme as _;

impl Render for Photocraft {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let size = window.viewport_size();
        self.page.viewport = Rect::new(0.0, 0.0, f32::from(size.width), f32::from(size.height));
        self.sync_scroll_offset();
        self.sync_contact_inputs(window, cx);

        let bg = cx.theme().background;
        let fg = cx.theme().foreground;

        if let Route::NotFound { path } = &self.page.route {
            let path = path.clone();
            return div()
                .id("photocraft")
                .size_full()
                .bg(bg)
                .text_color(fg)
                .child(not_found::render_not_found(&path, self.page.locale, cx))
                .into_any_element();
        }

        let now = std::time::Instant::now();
        let fading = !self.system.settings.reduce_motion
            && self
                .system
                .toasts
                .toasts()
                .iter()
                .any(|t| t.opacity_at(now, false) < 1.0);
        if fading
            || self.hero.carousel.is_transitioning()
            || self.testimonials.carousel.is_transitioning()
        {
            window.request_animation_frame();
        }

        let narrow = f32::from(size.width) < crate::constants::NARROW_LAYOUT_WIDTH;

        let page = div()
            .id("page")
            .size_full()
            .overflow_y_scroll()
            .track_scroll(&self.page.scroll)
            .child(hero::render_hero(self, cx))
            .child(portfolio::render_portfolio(self, cx))
            .child(about::render_about(self, cx))
            .child(services::render_services(self, cx))
            .child(testimonials::render_testimonials(self, cx))
            .child(contact::render_contact(self, cx))
            .child(footer::render_footer(self, cx));

        div()
            .id("photocraft")
            .relative()
            .size_full()
            .bg(bg)
            .text_color(fg)
            .on_mouse_move(cx.listener(|this, event: &MouseMoveEvent, _, cx| {
                this.on_pointer_move(event.position.into(), cx);
            }))
            .child(page)
            .child(navbar::render_navbar(self, narrow, cx))
            .children(overlays::render_lightbox(self, cx))
            .child(toasts::render_toasts(self, cx))
            .into_any_element()
    }
}
