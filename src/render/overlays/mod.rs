//! Overlays drawn above the page.

mod lightbox;
mod modal_base;

pub use lightbox::render_lightbox;
