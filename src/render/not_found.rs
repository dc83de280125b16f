//! Not-found view for routes other than the page itself

use super::widgets::primary_button;
use crate::app::Photocraft;
use crate::content::{Locale, Phrase};
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};

pub fn render_not_found(path: &str, locale: Locale, cx: &mut Context<Photocraft>) -> Div {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    v_flex()
        .size_full()
        .items_center()
        .justify_center()
        .gap(px(16.0))
        .child(
            div()
                .text_size(px(72.0))
                .font_weight(FontWeight::BOLD)
                .text_color(fg)
                .child(Phrase::NotFoundTitle.get(locale)),
        )
        .child(div().text_xl().text_color(muted_fg).child(Phrase::NotFoundBody.get(locale)))
        .child(div().text_xs().text_color(muted_fg).child(path.to_string()))
        .child(
            primary_button("not-found-home", Phrase::NotFoundReturn.get(locale), cx)
                .mt(px(12.0))
                .on_click(cx.listener(|this, _, _, cx| this.return_home(cx))),
        )
}
