//! Toast stack rendering - top-right, newest last

use crate::app::Photocraft;
use crate::constants::{NAVBAR_HEIGHT, TOAST_WIDTH};
use crate::notifications::ToastVariant;
use gpui::*;
use gpui_component::{ActiveTheme as _, h_flex, v_flex};
use std::time::Instant;

pub fn render_toasts(this: &mut Photocraft, cx: &mut Context<Photocraft>) -> Deferred {
    let now = Instant::now();
    let reduce_motion = this.system.settings.reduce_motion;
    let bg = cx.theme().background;
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;

    let mut stack = v_flex()
        .absolute()
        .top(px(NAVBAR_HEIGHT + 12.0))
        .right(px(16.0))
        .w(px(TOAST_WIDTH))
        .gap(px(8.0));

    for toast in this.system.toasts.toasts() {
        let accent = match toast.variant {
            ToastVariant::Success => cx.theme().success,
            ToastVariant::Info => cx.theme().info,
            ToastVariant::Warning => cx.theme().warning,
            ToastVariant::Error => cx.theme().danger,
        };
        let id = toast.id;

        let mut text = v_flex()
            .flex_1()
            .gap(px(2.0))
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(fg)
                    .child(toast.message.clone()),
            );
        if let Some(detail) = &toast.detail {
            text = text.child(div().text_xs().text_color(muted_fg).child(detail.clone()));
        }

        stack = stack.child(
            h_flex()
                .id(("toast", id as usize))
                .w_full()
                .p(px(12.0))
                .gap(px(10.0))
                .items_start()
                .rounded(px(8.0))
                .bg(bg)
                .border_1()
                .border_color(border)
                .border_l_4()
                .shadow_lg()
                .opacity(toast.opacity_at(now, reduce_motion))
                .cursor_pointer()
                .on_click(cx.listener(move |this, _, _, cx| {
                    this.system.toasts.remove(id);
                    cx.notify();
                }))
                .child(div().text_color(accent).child(toast.variant.icon()))
                .child(text),
        );
    }

    deferred(stack).with_priority(2000)
}
