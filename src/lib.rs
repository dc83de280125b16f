//! PhotoCraft: a single-page photography showcase.
//!
//! The crate is split into a framework-independent core and an optional
//! desktop presentation layer:
//!
//! - `content` - the static, locale-keyed copy and image catalogue
//! - `reveal`, `carousel`, `portfolio`, `contact`, `navigation`, `about` -
//!   per-section state machines, all deadline driven and unit tested
//! - `settings`, `settings_watcher`, `image_cache`, `notifications` -
//!   ambient services used by the app
//! - `app`, `render` (feature `desktop`) - the gpui window

pub mod about;
pub mod carousel;
pub mod constants;
pub mod contact;
pub mod content;
pub mod geometry;
pub mod image_cache;
pub mod navigation;
pub mod notifications;
pub mod portfolio;
pub mod reveal;
pub mod settings;
pub mod settings_watcher;

#[cfg(feature = "desktop")]
pub mod app;
#[cfg(feature = "desktop")]
pub mod render;
