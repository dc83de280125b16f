//! About section rendering - portrait with parallax frames, story and stats

use super::widgets::{content_column, photo, reveal, section, section_heading};
use crate::app::{Photocraft, RevealGroup};
use crate::content::{ABOUT_IMAGE, ABOUT_PARAGRAPHS, BRAND, Phrase, STATS};
use crate::geometry::Rect;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use std::time::Duration;

const PORTRAIT_WIDTH: f32 = 420.0;
const PORTRAIT_HEIGHT: f32 = 520.0;

fn render_portrait(this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let [outer, inner, corner] = this.sections.about.parallax.offsets();
    let frame = cx.theme().primary.opacity(0.2);
    let secondary = cx.theme().secondary;

    div()
        .relative()
        .w(px(PORTRAIT_WIDTH))
        .h(px(PORTRAIT_HEIGHT))
        .flex_shrink_0()
        .child(
            div()
                .absolute()
                .size(px(160.0))
                .left(px(-24.0 + outer.x))
                .bottom(px(-24.0 - outer.y))
                .rounded(px(8.0))
                .border_2()
                .border_color(frame),
        )
        .child(
            div()
                .absolute()
                .size(px(160.0))
                .right(px(-24.0 - inner.x))
                .top(px(-24.0 + inner.y))
                .rounded(px(8.0))
                .border_2()
                .border_color(frame),
        )
        .child(
            div()
                .absolute()
                .size(px(80.0))
                .left(px(-16.0 + corner.x))
                .top(px(-16.0 + corner.y))
                .rounded(px(8.0))
                .bg(secondary),
        )
        .child(
            div()
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .rounded(px(8.0))
                .overflow_hidden()
                .shadow_lg()
                .child(photo(ABOUT_IMAGE, BRAND.get(this.page.locale), this, cx)),
        )
}

fn render_stats(this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let locale = this.page.locale;
    let accent = cx.theme().primary;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let card_bg = cx.theme().secondary;

    let mut row = h_flex().w_full().flex_wrap().gap(px(16.0));
    for stat in STATS.iter() {
        row = row.child(
            v_flex()
                .w(px(150.0))
                .p(px(16.0))
                .gap(px(4.0))
                .items_center()
                .rounded(px(8.0))
                .bg(card_bg)
                .child(div().text_xl().text_color(accent).child(stat.icon.glyph()))
                .child(
                    div()
                        .text_2xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(fg)
                        .child(stat.value),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(muted_fg)
                        .child(stat.label.get(locale)),
                ),
        );
    }

    let entity = cx.entity().downgrade();
    div()
        .w_full()
        .on_children_prepainted(move |bounds, _, cx| {
            let rects: Vec<Rect> = bounds.into_iter().map(Rect::from).collect();
            entity
                .update(cx, |this, cx| {
                    this.on_reveal_bounds(RevealGroup::AboutStats, &rects, cx)
                })
                .ok();
        })
        .child(reveal(
            "about-stats-reveal",
            row,
            this.sections.about.stats_revealed(),
            Duration::ZERO,
            this.system.settings.reduce_motion,
        ))
}

pub fn render_about(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    let locale = this.page.locale;
    let bg = cx.theme().muted.opacity(0.3);
    let fg = cx.theme().foreground;

    let mut story = v_flex().flex_1().min_w(px(320.0)).gap(px(20.0));
    for paragraph in ABOUT_PARAGRAPHS.iter() {
        story = story.child(
            div()
                .text_color(fg)
                .line_height(rems(1.7))
                .child(paragraph.get(locale)),
        );
    }
    story = story.child(render_stats(this, cx));

    let entity = cx.entity().downgrade();
    let body = h_flex()
        .w_full()
        .flex_wrap()
        .gap(px(64.0))
        .items_center()
        .child(render_portrait(this, cx))
        .child(story);

    section("about", bg).child(
        div()
            .w_full()
            .flex()
            .justify_center()
            .on_children_prepainted(move |bounds, _, cx| {
                if let Some(first) = bounds.first() {
                    let rect = Rect::from(*first);
                    entity.update(cx, |this, _| this.on_about_bounds(rect)).ok();
                }
            })
            .child(
                content_column()
                    .child(section_heading(Phrase::AboutHeading.get(locale), None, cx))
                    .child(body),
            ),
    )
}
