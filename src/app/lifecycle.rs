//! Application lifecycle - initialization, settings reload and image prefetch.

use super::state::{
    CarouselView, ContactInputs, ContactState, LaunchOptions, PageState, Photocraft,
    SectionsState, SystemState,
};
use crate::about::AboutState;
use crate::carousel::{Carousel, SwipeGesture};
use crate::constants::{DEFAULT_WINDOW_SIZE, SERVICES_STAGGER};
use crate::contact::{ContactField, ContactForm, SimulatedTransport};
use crate::content::{self, Locale, Phrase, PORTFOLIO, SERVICES, SLIDES, TESTIMONIALS};
use crate::geometry::Rect;
use crate::image_cache::ImageCache;
use crate::navigation::{NavState, Route};
use crate::notifications::{Toast, ToastManager};
use crate::portfolio::PortfolioState;
use crate::reveal::{RevealObserver, RevealOptions};
use crate::settings::{Settings, default_settings_path};
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use gpui::*;
use gpui_component::input::InputState;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Every image the page can show: content images first, then the
/// high-resolution lightbox renditions.
fn all_image_urls() -> Vec<String> {
    content::image_urls()
        .into_iter()
        .map(str::to_string)
        .chain(PORTFOLIO.iter().map(|item| item.lightbox_image()))
        .collect()
}

fn reveal_observer(count: usize, options: RevealOptions, settings: &Settings) -> RevealObserver {
    if settings.reduce_motion {
        RevealObserver::unavailable(count, options)
    } else {
        RevealObserver::new(count, options)
    }
}

impl Photocraft {
    pub fn new(options: LaunchOptions, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let settings_path = options.settings_path.clone().or_else(default_settings_path);
        let settings = settings_path
            .as_deref()
            .map(Settings::load_or_create)
            .unwrap_or_default();
        let locale = options.locale.unwrap_or(settings.locale);
        let route = Route::resolve(&options.route);
        let now = Instant::now();

        let timing = settings.carousel_timing();
        let mut portfolio = PortfolioState::new(&PORTFOLIO, RevealOptions::default());
        if settings.reduce_motion {
            portfolio.reveal_mut().reveal_all();
        }
        let about = if settings.reduce_motion {
            AboutState::without_motion()
        } else {
            AboutState::new()
        };

        let inputs = ContactInputs {
            name: Self::new_contact_input(ContactField::Name, locale, window, cx),
            email: Self::new_contact_input(ContactField::Email, locale, window, cx),
            phone: Self::new_contact_input(ContactField::Phone, locale, window, cx),
            message: Self::new_contact_input(ContactField::Message, locale, window, cx),
        };

        let settings_watcher = settings_path.clone().and_then(|p| match SettingsWatcher::new(p) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::warn!("Settings hot reload disabled: {}", e);
                None
            }
        });

        let prefetch = settings.prefetch_images && !options.no_prefetch;
        let (width, height) = DEFAULT_WINDOW_SIZE;

        let mut this = Self {
            page: PageState {
                route,
                locale,
                nav: NavState::new(),
                scroll: ScrollHandle::new(),
                viewport: Rect::new(0.0, 0.0, width, height),
            },
            hero: CarouselView {
                carousel: Carousel::new(SLIDES.len(), timing, now),
                gesture: SwipeGesture::default(),
            },
            testimonials: CarouselView {
                carousel: Carousel::new(TESTIMONIALS.len(), timing, now),
                gesture: SwipeGesture::default(),
            },
            sections: SectionsState {
                portfolio,
                lightbox_backdrop_pressed: false,
                about,
                about_bounds: None,
                services: reveal_observer(
                    SERVICES.len(),
                    RevealOptions::default().with_stagger(SERVICES_STAGGER),
                    &settings,
                ),
            },
            contact: ContactState {
                form: ContactForm::new(),
                inputs,
                transport: Arc::new(SimulatedTransport::new()),
                placeholder_locale: locale,
                clear_inputs_pending: false,
                submit_task: None,
            },
            system: SystemState {
                settings,
                locale_override: options.locale,
                settings_path,
                settings_watcher,
                toasts: ToastManager::new(),
                image_cache: ImageCache::new(ImageCache::default_root()),
                cached_images: HashMap::new(),
                prefetch_events: None,
                ticker: None,
            },
        };

        this.subscribe_contact_inputs(cx);
        this.index_cached_images();
        if prefetch {
            this.start_prefetch();
        }
        if let Route::Home {
            section: Some(section),
        } = this.page.route
        {
            this.page.scroll.scroll_to_item(section.index());
        }
        this.start_ticker(cx);
        this
    }

    fn new_contact_input(
        field: ContactField,
        locale: Locale,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<InputState> {
        let placeholder = field.placeholder().map(|p| p.get(locale)).unwrap_or_default();
        cx.new(|cx| InputState::new(window, cx).placeholder(placeholder))
    }

    /// Record images that are already on disk from a previous run.
    fn index_cached_images(&mut self) {
        for url in all_image_urls() {
            if let Some(path) = self.system.image_cache.cached_path(&url) {
                self.system.cached_images.insert(url, path);
            }
        }
    }

    /// Queue every missing image, hero slides first.
    fn start_prefetch(&mut self) {
        let missing: Vec<String> = all_image_urls()
            .into_iter()
            .filter(|url| !self.system.cached_images.contains_key(url))
            .collect();
        if missing.is_empty() {
            return;
        }
        match self.system.image_cache.prefetch(missing) {
            Ok(handle) => self.system.prefetch_events = Some(handle.events),
            Err(e) => tracing::warn!("could not start image prefetch: {}", e),
        }
    }

    /// Move finished downloads into the lookup table. Returns true on change.
    pub(crate) fn drain_prefetch_events(&mut self) -> bool {
        let Some(rx) = &self.system.prefetch_events else {
            return false;
        };
        let mut changed = false;
        loop {
            match rx.try_recv() {
                Ok(event) => {
                    if let Ok(path) = event.result {
                        self.system.cached_images.insert(event.url, path);
                        changed = true;
                    }
                }
                Err(std::sync::mpsc::TryRecvError::Empty) => break,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.system.prefetch_events = None;
                    break;
                }
            }
        }
        changed
    }

    /// Check for settings file changes and reload if needed.
    pub(crate) fn check_settings_reload(&mut self, cx: &mut Context<Self>) {
        let Some(watcher) = self.system.settings_watcher.as_mut() else {
            return;
        };
        let Some(event) = watcher.poll() else {
            return;
        };
        let locale = self.page.locale;
        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                tracing::info!("Settings file changed, reloading...");
                let settings = self
                    .system
                    .settings_path
                    .as_deref()
                    .map(Settings::load_or_default)
                    .unwrap_or_default();
                self.apply_settings(settings);
                self.system
                    .toasts
                    .push(Toast::info(Phrase::SettingsReloaded.get(self.page.locale)));
                cx.notify();
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted");
                self.system
                    .toasts
                    .push(Toast::warning(Phrase::SettingsDeleted.get(locale)));
                cx.notify();
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
            }
        }
    }

    fn apply_settings(&mut self, settings: Settings) {
        let now = Instant::now();
        let change = self
            .system
            .settings
            .changes_to(&settings, self.system.locale_override);
        let timing = settings.carousel_timing();

        if change.autoplay.is_some() {
            self.hero.carousel.set_autoplay(timing.autoplay, now);
            self.testimonials.carousel.set_autoplay(timing.autoplay, now);
        }
        if let Some(reduce_motion) = change.reduce_motion {
            self.hero.carousel.set_transition(timing.transition);
            self.testimonials.carousel.set_transition(timing.transition);
            if reduce_motion {
                self.sections.portfolio.reveal_mut().reveal_all();
                self.sections.services.reveal_all();
                self.sections.about.stats.reveal_all();
                self.sections.about.parallax.reset();
            }
        }
        if let Some(locale) = change.locale {
            self.page.locale = locale;
        }
        self.system.settings = settings;
    }
}
