//! Portfolio rendering - filter bar and the revealed photo grid

use super::widgets::{content_column, photo, reveal, section, section_heading};
use crate::app::{Photocraft, RevealGroup};
use crate::content::Phrase;
use crate::geometry::Rect;
use crate::portfolio::Filter;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use std::time::Duration;

const CARD_SIZE: f32 = 340.0;

fn render_filter_bar(this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let locale = this.page.locale;
    let active = this.sections.portfolio.filter();
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;
    let muted = cx.theme().muted;
    let fg = cx.theme().foreground;

    let mut bar = h_flex().w_full().justify_center().flex_wrap().gap(px(8.0));
    for (ix, filter) in Filter::options().into_iter().enumerate() {
        let selected = filter == active;
        bar = bar.child(
            div()
                .id(("portfolio-filter", ix))
                .px(px(16.0))
                .py(px(8.0))
                .rounded(px(18.0))
                .cursor_pointer()
                .text_sm()
                .bg(if selected { primary } else { muted })
                .text_color(if selected { primary_fg } else { fg })
                .on_click(cx.listener(move |this, _, _, cx| this.select_filter(filter, cx)))
                .child(filter.label().get(locale)),
        );
    }
    bar
}

pub fn render_portfolio(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    let locale = this.page.locale;
    let reduce_motion = this.system.settings.reduce_motion;
    let filter = this.sections.portfolio.filter();
    let bg = cx.theme().background;
    let card_bg = cx.theme().secondary;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    let entity = cx.entity().downgrade();
    let mut grid = h_flex()
        .w_full()
        .flex_wrap()
        .justify_center()
        .gap(px(24.0))
        .on_children_prepainted(move |bounds, _, cx| {
            let rects: Vec<Rect> = bounds.into_iter().map(Rect::from).collect();
            entity
                .update(cx, |this, cx| {
                    this.on_reveal_bounds(RevealGroup::Portfolio, &rects, cx)
                })
                .ok();
        });

    let filter_key = format!("{:?}", filter);
    for (ix, item) in this.sections.portfolio.visible().iter().enumerate() {
        let id = item.id;
        let card = v_flex()
            .w(px(CARD_SIZE))
            .rounded(px(8.0))
            .overflow_hidden()
            .bg(card_bg)
            .shadow_md()
            .child(
                div()
                    .id(("portfolio-photo", id as usize))
                    .w(px(CARD_SIZE))
                    .h(px(CARD_SIZE))
                    .cursor_pointer()
                    .on_click(cx.listener(move |this, _, _, cx| this.open_lightbox(id, cx)))
                    .child(photo(item.image, item.title.get(locale), this, cx)),
            )
            .child(
                v_flex()
                    .p(px(16.0))
                    .gap(px(4.0))
                    .child(
                        div()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(fg)
                            .child(item.title.get(locale)),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(muted_fg)
                            .child(item.category.label().get(locale)),
                    ),
            );

        let revealed = this.sections.portfolio.reveal().is_revealed(ix);
        let anim_id = ElementId::Name(format!("portfolio-reveal-{}-{}", filter_key, id).into());
        grid = grid.child(reveal(anim_id, card, revealed, Duration::ZERO, reduce_motion));
    }

    section("portfolio", bg).child(
        content_column()
            .child(section_heading(
                Phrase::PortfolioHeading.get(locale),
                Some(Phrase::PortfolioSubheading.get(locale)),
                cx,
            ))
            .child(render_filter_bar(this, cx))
            .child(grid),
    )
}
