//! Shared modal utilities - backdrop with click-to-close.

use crate::app::Photocraft;
use crate::constants::LIGHTBOX_BACKDROP_OPACITY;
use gpui::*;

// ============================================================================
// Backdrop Click-to-Close Pattern
// ============================================================================

/// Renders a modal backdrop with click-to-close behavior using state-tracking.
///
/// The flag set on mouse down is checked on mouse up: only a press and
/// release that both land on the backdrop (not the modal content) close it.
///
/// # Arguments
/// * `id` - Element ID for the backdrop
/// * `cx` - GPUI context
/// * `on_backdrop_mouse_down` - Listener for backdrop mouse down (should set flag)
/// * `on_backdrop_mouse_up` - Listener for backdrop mouse up (should check flag and close)
/// * `child` - The modal content element
pub fn render_modal_backdrop(
    id: impl Into<ElementId>,
    cx: &mut Context<Photocraft>,
    on_backdrop_mouse_down: impl Fn(&mut Photocraft, &MouseDownEvent, &mut Window, &mut Context<Photocraft>) + 'static,
    on_backdrop_mouse_up: impl Fn(&mut Photocraft, &MouseUpEvent, &mut Window, &mut Context<Photocraft>) + 'static,
    child: impl IntoElement,
) -> Deferred {
    deferred(
        div()
            .id(id)
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .bg(hsla(0.0, 0.0, 0.0, LIGHTBOX_BACKDROP_OPACITY))
            .flex()
            .items_center()
            .justify_center()
            .on_mouse_down(MouseButton::Left, cx.listener(on_backdrop_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(on_backdrop_mouse_up))
            .on_scroll_wheel(cx.listener(|_, _, _, _| {}))
            .child(child),
    )
    .with_priority(1500)
}

/// Stops presses on the modal content from reaching the backdrop.
pub fn modal_intercept_backdrop_clicks(div: Div) -> Div {
    div.on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
        .on_mouse_up(MouseButton::Left, |_, _, cx| cx.stop_propagation())
}
