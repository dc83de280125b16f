//! Services rendering - offering cards revealed with a per-card stagger

use super::widgets::{content_column, outline_button, primary_button, reveal, section, section_heading};
use crate::app::{Photocraft, RevealGroup};
use crate::content::{Phrase, SERVICES};
use crate::geometry::Rect;
use crate::navigation::Section;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};

const CARD_WIDTH: f32 = 250.0;

pub fn render_services(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    let locale = this.page.locale;
    let reduce_motion = this.system.settings.reduce_motion;
    let bg = cx.theme().background;
    let card_bg = cx.theme().secondary;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let accent = cx.theme().primary;

    let entity = cx.entity().downgrade();
    let mut grid = h_flex()
        .w_full()
        .flex_wrap()
        .justify_center()
        .items_start()
        .gap(px(24.0))
        .on_children_prepainted(move |bounds, _, cx| {
            let rects: Vec<Rect> = bounds.into_iter().map(Rect::from).collect();
            entity
                .update(cx, |this, cx| {
                    this.on_reveal_bounds(RevealGroup::Services, &rects, cx)
                })
                .ok();
        });

    for (ix, service) in SERVICES.iter().enumerate() {
        let mut features = v_flex().gap(px(6.0));
        for feature in service.features {
            features = features.child(
                h_flex()
                    .gap(px(8.0))
                    .text_sm()
                    .text_color(fg)
                    .child(div().text_color(accent).child("✓"))
                    .child(feature.get(locale)),
            );
        }

        let card = v_flex()
            .w(px(CARD_WIDTH))
            .p(px(24.0))
            .gap(px(14.0))
            .rounded(px(8.0))
            .bg(card_bg)
            .shadow_sm()
            .child(div().text_3xl().text_color(accent).child(service.icon.glyph()))
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(fg)
                    .child(service.title.get(locale)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(muted_fg)
                    .child(service.description.get(locale)),
            )
            .child(features)
            .child(
                outline_button(("service-book", ix), Phrase::BookService.get(locale), cx)
                    .mt(px(8.0))
                    .on_click(cx.listener(|this, _, _, cx| this.navigate_to(Section::Contact, cx))),
            );

        let observer = &this.sections.services;
        grid = grid.child(reveal(
            ("service-reveal", ix),
            card,
            observer.is_revealed(ix),
            observer.transition_delay(ix),
            reduce_motion,
        ));
    }

    section("services", bg).child(
        content_column()
            .child(section_heading(
                Phrase::ServicesHeading.get(locale),
                Some(Phrase::ServicesSubheading.get(locale)),
                cx,
            ))
            .child(grid)
            .child(
                v_flex()
                    .w_full()
                    .items_center()
                    .gap(px(16.0))
                    .child(
                        div()
                            .text_color(muted_fg)
                            .text_center()
                            .child(Phrase::ServicesCustomPrompt.get(locale)),
                    )
                    .child(
                        primary_button("services-contact", Phrase::ContactMe.get(locale), cx)
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.navigate_to(Section::Contact, cx)
                            })),
                    ),
            ),
    )
}
