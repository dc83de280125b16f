//! Portfolio lightbox - the high-resolution photo with its title and description.

use super::modal_base::{modal_intercept_backdrop_clicks, render_modal_backdrop};
use crate::app::Photocraft;
use crate::content::Phrase;
use crate::render::widgets::photo;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

const LIGHTBOX_WIDTH: f32 = 960.0;
const LIGHTBOX_IMAGE_HEIGHT: f32 = 620.0;

pub fn render_lightbox(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Option<Deferred> {
    let item = this.sections.portfolio.lightbox()?;
    let locale = this.page.locale;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let bg = cx.theme().background;

    // The large rendition is cached under its own URL; fall back to the grid image.
    let large = item.lightbox_image();
    let image = if this.system.cached_images.contains_key(&large) {
        photo(&large, item.title.get(locale), this, cx)
    } else {
        photo(item.image, item.title.get(locale), this, cx)
    };

    let content = modal_intercept_backdrop_clicks(
        v_flex()
            .w(px(LIGHTBOX_WIDTH))
            .max_w_full()
            .rounded(px(8.0))
            .overflow_hidden()
            .bg(bg)
            .shadow_lg()
            .child(div().w_full().h(px(LIGHTBOX_IMAGE_HEIGHT)).child(image))
            .child(
                h_flex()
                    .p(px(20.0))
                    .gap(px(16.0))
                    .justify_between()
                    .child(
                        v_flex()
                            .gap(px(6.0))
                            .child(
                                div()
                                    .text_xl()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(fg)
                                    .child(item.title.get(locale)),
                            )
                            .child(
                                div()
                                    .text_color(muted_fg)
                                    .child(item.description.get(locale)),
                            ),
                    )
                    .child(
                        div()
                            .id("lightbox-close")
                            .px(px(12.0))
                            .py(px(6.0))
                            .rounded(px(4.0))
                            .cursor_pointer()
                            .text_color(fg)
                            .hover(|s| s.opacity(0.7))
                            .on_click(cx.listener(|this, _, _, cx| this.close_lightbox(cx)))
                            .child(Phrase::LightboxClose.get(locale)),
                    ),
            ),
    );

    Some(render_modal_backdrop(
        "lightbox-backdrop",
        cx,
        |this, _, _, _| {
            this.sections.lightbox_backdrop_pressed = true;
        },
        |this, _, _, cx| {
            if std::mem::take(&mut this.sections.lightbox_backdrop_pressed) {
                this.close_lightbox(cx);
            }
        },
        content,
    ))
}
