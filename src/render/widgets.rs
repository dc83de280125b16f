//! Shared building blocks - section headings, photos, reveal fades, buttons.

use crate::app::Photocraft;
use crate::constants::{CONTENT_MAX_WIDTH, SECTION_PADDING_Y};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{ActiveTheme as _, v_flex};
use std::path::PathBuf;
use std::time::Duration;

/// Length of the reveal fade, excluding any stagger delay.
const REVEAL_FADE: Duration = Duration::from_millis(600);

/// Vertical offset a hidden element starts from before sliding into place.
const REVEAL_RISE_PX: f32 = 24.0;

/// Full-width section with centred, width-limited content.
pub fn section(id: &'static str, bg: Hsla) -> Stateful<Div> {
    div()
        .id(id)
        .w_full()
        .py(px(SECTION_PADDING_Y))
        .px(px(24.0))
        .bg(bg)
        .flex()
        .justify_center()
}

pub fn content_column() -> Div {
    v_flex().w_full().max_w(px(CONTENT_MAX_WIDTH)).gap(px(48.0))
}

/// Centred heading with an optional sub-heading.
pub fn section_heading(title: &'static str, subtitle: Option<&'static str>, cx: &App) -> Div {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let accent = cx.theme().primary;

    v_flex()
        .w_full()
        .items_center()
        .gap(px(12.0))
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(fg)
                .child(title),
        )
        .child(div().w(px(64.0)).h(px(3.0)).rounded(px(2.0)).bg(accent))
        .when_some(subtitle, |d, subtitle| {
            d.child(
                div()
                    .max_w(px(640.0))
                    .text_center()
                    .text_color(muted_fg)
                    .child(subtitle),
            )
        })
}

/// A remote photo: the cached file if the prefetch has it, else its alt text.
pub fn photo(url: &str, alt: &'static str, this: &Photocraft, cx: &App) -> AnyElement {
    let cached: Option<PathBuf> = this.system.cached_images.get(url).cloned();
    let muted = cx.theme().muted;
    let muted_fg = cx.theme().muted_foreground;

    let alt_text = move || {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .p(px(12.0))
            .bg(muted)
            .text_sm()
            .text_color(muted_fg)
            .child(alt)
            .into_any_element()
    };

    match cached {
        Some(path) => img(path)
            .size_full()
            .object_fit(ObjectFit::Cover)
            .with_fallback(alt_text)
            .into_any_element(),
        None => alt_text(),
    }
}

/// Hidden until `revealed`, then fades and rises in after `delay`.
pub fn reveal(
    id: impl Into<ElementId>,
    element: Div,
    revealed: bool,
    delay: Duration,
    reduce_motion: bool,
) -> AnyElement {
    if !revealed {
        return element.opacity(0.0).into_any_element();
    }
    if reduce_motion {
        return element.into_any_element();
    }

    let total = delay + REVEAL_FADE;
    let delay_fraction = delay.as_secs_f32() / total.as_secs_f32();
    element
        .with_animation(id, Animation::new(total), move |el, delta| {
            let t = if delta <= delay_fraction {
                0.0
            } else {
                ((delta - delay_fraction) / (1.0 - delay_fraction)).clamp(0.0, 1.0)
            };
            el.opacity(t).mt(px(REVEAL_RISE_PX * (1.0 - t)))
        })
        .into_any_element()
}

/// Filled call-to-action button.
pub fn primary_button(id: impl Into<ElementId>, label: &'static str, cx: &App) -> Stateful<Div> {
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;
    let primary_hover = cx.theme().primary_hover;

    div()
        .id(id)
        .px(px(24.0))
        .py(px(12.0))
        .rounded(px(6.0))
        .bg(primary)
        .hover(move |s| s.bg(primary_hover))
        .cursor_pointer()
        .text_color(primary_fg)
        .font_weight(FontWeight::MEDIUM)
        .child(label)
}

/// Outlined secondary button.
pub fn outline_button(id: impl Into<ElementId>, label: &'static str, cx: &App) -> Stateful<Div> {
    let border = cx.theme().primary;
    let fg = cx.theme().primary;
    let hover = cx.theme().muted;

    div()
        .id(id)
        .px(px(20.0))
        .py(px(10.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(border)
        .hover(move |s| s.bg(hover))
        .cursor_pointer()
        .text_color(fg)
        .child(label)
}

/// Round carousel control (arrow or dot).
pub fn round_control(id: impl Into<ElementId>, size: f32, bg: Hsla, hover_bg: Hsla) -> Stateful<Div> {
    div()
        .id(id)
        .size(px(size))
        .rounded_full()
        .bg(bg)
        .hover(move |s| s.bg(hover_bg))
        .cursor_pointer()
        .flex()
        .items_center()
        .justify_center()
}
