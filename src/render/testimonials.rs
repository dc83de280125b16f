//! Testimonials rendering - quote carousel with rating stars

use super::widgets::{content_column, photo, round_control, section, section_heading};
use crate::app::{CarouselId, Photocraft};
use crate::carousel::Direction;
use crate::content::{Phrase, TESTIMONIALS, Testimonial};
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use std::time::Instant;

fn render_card(testimonial: &Testimonial, opacity: f32, this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let locale = this.page.locale;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let star_on = cx.theme().warning;
    let star_off = cx.theme().muted;

    let mut stars = h_flex().gap(px(2.0));
    for lit in testimonial.stars() {
        stars = stars.child(div().text_color(if lit { star_on } else { star_off }).child("★"));
    }

    v_flex()
        .w_full()
        .items_center()
        .gap(px(20.0))
        .opacity(opacity)
        .child(
            div()
                .size(px(88.0))
                .rounded_full()
                .overflow_hidden()
                .child(photo(testimonial.image, testimonial.name.get(locale), this, cx)),
        )
        .child(stars)
        .child(
            div()
                .max_w(px(720.0))
                .text_lg()
                .italic()
                .text_center()
                .text_color(fg)
                .child(format!("“{}”", testimonial.quote.get(locale))),
        )
        .child(
            v_flex()
                .items_center()
                .child(
                    div()
                        .font_weight(FontWeight::SEMIBOLD)
                        .text_color(fg)
                        .child(testimonial.name.get(locale)),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(muted_fg)
                        .child(testimonial.role.get(locale)),
                ),
        )
}

pub fn render_testimonials(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    let locale = this.page.locale;
    let bg = cx.theme().muted.opacity(0.3);
    let accent = cx.theme().primary;
    let control_bg = cx.theme().secondary;
    let control_hover = cx.theme().muted;
    let fg = cx.theme().foreground;

    let carousel = &this.testimonials.carousel;
    let current = carousel.current();
    let target = carousel.target();
    let progress = carousel.transition_progress(Instant::now()).unwrap_or(0.0);

    // Cross-fade: the outgoing quote fades out during the first half, the
    // incoming one fades in during the second.
    let card = match target {
        Some(target) if progress >= 0.5 => {
            render_card(&TESTIMONIALS[target], (progress - 0.5) * 2.0, this, cx)
        }
        Some(_) => render_card(&TESTIMONIALS[current], 1.0 - progress * 2.0, this, cx),
        None => render_card(&TESTIMONIALS[current], 1.0, this, cx),
    };

    let active_dot = target.unwrap_or(current);
    let mut dots = h_flex().gap(px(8.0)).justify_center();
    for index in 0..TESTIMONIALS.len() {
        let dot_bg = if index == active_dot { accent } else { control_hover };
        dots = dots.child(
            round_control(("testimonial-dot", index), 10.0, dot_bg, accent).on_click(cx.listener(
                move |this, _, _, cx| this.carousel_go_to(CarouselId::Testimonials, index, cx),
            )),
        );
    }

    let stage = h_flex()
        .w_full()
        .gap(px(16.0))
        .items_center()
        .child(
            round_control("testimonial-prev", 40.0, control_bg, control_hover)
                .flex_shrink_0()
                .text_color(fg)
                .on_click(cx.listener(|this, _, _, cx| {
                    this.carousel_step(CarouselId::Testimonials, Direction::Backward, cx)
                }))
                .child("‹"),
        )
        .child(
            div()
                .id("testimonial-stage")
                .flex_1()
                .min_h(px(340.0))
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, event: &MouseDownEvent, _, _| {
                        this.carousel_drag_start(CarouselId::Testimonials, f32::from(event.position.x));
                    }),
                )
                .on_mouse_up(
                    MouseButton::Left,
                    cx.listener(|this, event: &MouseUpEvent, _, cx| {
                        this.carousel_drag_end(CarouselId::Testimonials, f32::from(event.position.x), cx);
                    }),
                )
                .on_mouse_up_out(
                    MouseButton::Left,
                    cx.listener(|this, _: &MouseUpEvent, _, _| {
                        this.carousel_drag_cancel(CarouselId::Testimonials);
                    }),
                )
                .child(card),
        )
        .child(
            round_control("testimonial-next", 40.0, control_bg, control_hover)
                .flex_shrink_0()
                .text_color(fg)
                .on_click(cx.listener(|this, _, _, cx| {
                    this.carousel_step(CarouselId::Testimonials, Direction::Forward, cx)
                }))
                .child("›"),
        );

    section("testimonials", bg).child(
        content_column()
            .child(section_heading(
                Phrase::TestimonialsHeading.get(locale),
                Some(Phrase::TestimonialsSubheading.get(locale)),
                cx,
            ))
            .child(stage)
            .child(dots),
    )
}
