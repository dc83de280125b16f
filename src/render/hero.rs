//! Hero carousel rendering - full-bleed slides with arrows, dots and drag swipes

use super::widgets::{photo, primary_button, round_control};
use crate::app::{CarouselId, Photocraft};
use crate::carousel::Direction;
use crate::constants::HERO_HEIGHT;
use crate::content::{Phrase, SLIDES};
use crate::navigation::Section;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use std::time::Instant;

fn render_slide(index: usize, opacity: f32, this: &Photocraft, cx: &mut Context<Photocraft>) -> Div {
    let slide = &SLIDES[index];
    let locale = this.page.locale;

    div()
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .opacity(opacity)
        .child(photo(slide.image, slide.title.get(locale), this, cx))
        .child(
            div()
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .bg(hsla(0.0, 0.0, 0.0, 0.45)),
        )
        .child(
            v_flex()
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .items_center()
                .justify_center()
                .gap(px(20.0))
                .px(px(32.0))
                .child(
                    div()
                        .text_size(px(52.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(white())
                        .text_center()
                        .child(slide.title.get(locale)),
                )
                .child(
                    div()
                        .max_w(px(680.0))
                        .text_xl()
                        .text_color(white().opacity(0.85))
                        .text_center()
                        .child(slide.subtitle.get(locale)),
                )
                .child(
                    primary_button(("hero-cta", index), Phrase::HeroCta.get(locale), cx)
                        .mt(px(12.0))
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.navigate_to(Section::Portfolio, cx);
                        })),
                ),
        )
}

pub fn render_hero(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Stateful<Div> {
    let carousel = &this.hero.carousel;
    let current = carousel.current();
    let target = carousel.target();
    let progress = carousel.transition_progress(Instant::now()).unwrap_or(0.0);
    let active_dot = target.unwrap_or(current);

    let control_bg = hsla(0.0, 0.0, 1.0, 0.2);
    let control_hover = hsla(0.0, 0.0, 1.0, 0.35);
    let accent = cx.theme().primary;

    let mut stage = div()
        .relative()
        .size_full()
        .overflow_hidden()
        .child(render_slide(current, 1.0 - progress * 0.3, this, cx));
    if let Some(target) = target {
        stage = stage.child(render_slide(target, progress, this, cx));
    }

    let mut dots = h_flex().gap(px(10.0));
    for index in 0..SLIDES.len() {
        let bg = if index == active_dot { accent } else { control_bg };
        dots = dots.child(
            round_control(("hero-dot", index), 12.0, bg, control_hover).on_click(cx.listener(
                move |this, _, _, cx| {
                    this.carousel_go_to(CarouselId::Hero, index, cx);
                },
            )),
        );
    }

    div()
        .id("home")
        .relative()
        .w_full()
        .h(px(HERO_HEIGHT))
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(|this, event: &MouseDownEvent, _, _| {
                this.carousel_drag_start(CarouselId::Hero, f32::from(event.position.x));
            }),
        )
        .on_mouse_up(
            MouseButton::Left,
            cx.listener(|this, event: &MouseUpEvent, _, cx| {
                this.carousel_drag_end(CarouselId::Hero, f32::from(event.position.x), cx);
            }),
        )
        .on_mouse_up_out(
            MouseButton::Left,
            cx.listener(|this, _: &MouseUpEvent, _, _| {
                this.carousel_drag_cancel(CarouselId::Hero);
            }),
        )
        .child(stage)
        .child(
            round_control("hero-prev", 44.0, control_bg, control_hover)
                .absolute()
                .left(px(24.0))
                .top(px(HERO_HEIGHT / 2.0 - 22.0))
                .text_color(white())
                .on_click(cx.listener(|this, _, _, cx| {
                    this.carousel_step(CarouselId::Hero, Direction::Backward, cx);
                }))
                .child("‹"),
        )
        .child(
            round_control("hero-next", 44.0, control_bg, control_hover)
                .absolute()
                .right(px(24.0))
                .top(px(HERO_HEIGHT / 2.0 - 22.0))
                .text_color(white())
                .on_click(cx.listener(|this, _, _, cx| {
                    this.carousel_step(CarouselId::Hero, Direction::Forward, cx);
                }))
                .child("›"),
        )
        .child(
            h_flex()
                .absolute()
                .bottom(px(28.0))
                .left_0()
                .w_full()
                .justify_center()
                .child(dots),
        )
}
