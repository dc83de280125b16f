//! Application state - the Photocraft struct definition and sub-structs.

use crate::about::AboutState;
use crate::carousel::{Carousel, SwipeGesture};
use crate::contact::{ContactField, ContactForm, ContactTransport};
use crate::content::Locale;
use crate::geometry::Rect;
use crate::image_cache::{ImageCache, PrefetchEvent};
use crate::navigation::{NavState, Route};
use crate::notifications::ToastManager;
use crate::portfolio::PortfolioState;
use crate::reveal::RevealObserver;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use gpui::*;
use gpui_component::input::InputState;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

/// Startup options resolved from the command line and settings file.
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    /// Settings file to load and watch; `None` uses the platform default
    pub settings_path: Option<PathBuf>,
    /// Overrides the settings locale for this run
    pub locale: Option<Locale>,
    /// Initial route, e.g. `/` or `/#contact`
    pub route: String,
    /// Disables image prefetching for this run
    pub no_prefetch: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            settings_path: None,
            locale: None,
            route: "/".to_string(),
            no_prefetch: false,
        }
    }
}

/// Page-level state: route, locale, navbar and the scroll container.
pub struct PageState {
    pub route: Route,
    pub locale: Locale,
    pub nav: NavState,
    /// Tracks the page's section list; child index == `Section::index()`
    pub scroll: ScrollHandle,
    /// Window-space viewport used as the reveal root
    pub viewport: Rect,
}

/// A carousel plus the pointer drag that may become a swipe.
pub struct CarouselView {
    pub carousel: Carousel,
    pub gesture: SwipeGesture,
}

/// Which revealable group a batch of prepaint bounds belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealGroup {
    Portfolio,
    Services,
    AboutStats,
}

/// Portfolio, about and services sections.
pub struct SectionsState {
    pub portfolio: PortfolioState,
    /// Backdrop pressed; the lightbox closes only if the release lands there too
    pub lightbox_backdrop_pressed: bool,
    pub about: AboutState,
    /// Last painted bounds of the about section, for parallax
    pub about_bounds: Option<Rect>,
    pub services: RevealObserver,
}

/// gpui-component inputs mirroring the text fields of the form.
pub struct ContactInputs {
    pub name: Entity<InputState>,
    pub email: Entity<InputState>,
    pub phone: Entity<InputState>,
    pub message: Entity<InputState>,
}

impl ContactInputs {
    pub fn get(&self, field: ContactField) -> Option<&Entity<InputState>> {
        match field {
            ContactField::Name => Some(&self.name),
            ContactField::Email => Some(&self.email),
            ContactField::Phone => Some(&self.phone),
            ContactField::Message => Some(&self.message),
            ContactField::Subject => None,
        }
    }
}

/// Contact form state and the in-flight submission.
pub struct ContactState {
    pub form: ContactForm,
    pub inputs: ContactInputs,
    pub transport: Arc<dyn ContactTransport>,
    /// Locale the input placeholders were last written in
    pub placeholder_locale: Locale,
    /// A send succeeded; the input widgets are emptied on the next render
    pub clear_inputs_pending: bool,
    /// Dropping the task abandons the submission
    pub submit_task: Option<Task<()>>,
}

/// Settings, background services, toasts and the host timer.
pub struct SystemState {
    pub settings: Settings,
    /// `--locale` from the command line; file reloads never change it
    pub locale_override: Option<Locale>,
    pub settings_path: Option<PathBuf>,
    /// Settings file watcher for hot-reload
    pub settings_watcher: Option<SettingsWatcher>,
    pub toasts: ToastManager,
    pub image_cache: ImageCache,
    /// URL -> cached file, filled as the prefetch reports in
    pub cached_images: HashMap<String, PathBuf>,
    pub prefetch_events: Option<Receiver<PrefetchEvent>>,
    /// The single timer task driving every deadline on the page
    pub ticker: Option<Task<()>>,
}

/// Main application state - composed of focused sub-structs
pub struct Photocraft {
    pub page: PageState,
    pub hero: CarouselView,
    pub testimonials: CarouselView,
    pub sections: SectionsState,
    pub contact: ContactState,
    pub system: SystemState,
}
