//! Application module - the Photocraft window state and its handlers.
//!
//! This module is organized into several submodules:
//! - `state` - The Photocraft struct definition and sub-structs
//! - `lifecycle` - Initialization, settings reload and image prefetch
//! - `timers` - The host timer that polls every section's deadlines
//! - `section_handlers` - Navigation, carousels, portfolio, reveal, parallax
//! - `contact_handlers` - Contact inputs and submission

mod contact_handlers;
mod lifecycle;
mod section_handlers;
mod state;
mod timers;

pub use section_handlers::CarouselId;
pub use state::{
    CarouselView, ContactInputs, ContactState, LaunchOptions, PageState, Photocraft, RevealGroup,
    SectionsState, SystemState,
};
