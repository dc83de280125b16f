//! User settings persisted as JSON in the platform config directory.
//!
//! Loading never fails from the caller's point of view: a missing file
//! yields defaults silently, a broken file yields defaults with a warning.

use crate::carousel::CarouselTiming;
use crate::content::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_DIR: &str = "photocraft";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SettingsError>;

/// `<config dir>/photocraft/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language of all page copy
    pub locale: Locale,
    /// Skip reveal animations, carousel transitions and toast fades
    pub reduce_motion: bool,
    /// Let the hero and testimonial carousels advance on their own
    pub autoplay: bool,
    /// Download remote images into the local cache at startup
    pub prefetch_images: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            reduce_motion: false,
            autoplay: true,
            prefetch_images: true,
        }
    }
}

/// What a reload changed relative to the settings in effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsChange {
    /// Locale to switch the page to. `None` when the file's locale is
    /// unchanged or a launch flag pins the locale for this run.
    pub locale: Option<Locale>,
    pub autoplay: Option<bool>,
    pub reduce_motion: Option<bool>,
}

impl SettingsChange {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn differs<T: PartialEq + Copy>(current: T, next: T) -> Option<T> {
    (current != next).then_some(next)
}

impl Settings {
    /// Carousel timing implied by these settings.
    pub fn carousel_timing(&self) -> CarouselTiming {
        let mut timing = CarouselTiming::default();
        if self.reduce_motion {
            timing.transition = std::time::Duration::ZERO;
        }
        if !self.autoplay {
            timing = timing.without_autoplay();
        }
        timing
    }

    /// Fields that differ in `next`.
    ///
    /// Only a locale edit in the file moves the page locale, so a session
    /// choice survives reloads that touch other fields.
    pub fn changes_to(&self, next: &Settings, locale_override: Option<Locale>) -> SettingsChange {
        SettingsChange {
            locale: match locale_override {
                Some(_) => None,
                None => differs(self.locale, next.locale),
            },
            autoplay: differs(self.autoplay, next.autoplay),
            reduce_motion: differs(self.reduce_motion, next.reduce_motion),
        }
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!(path = %path.display(), "no settings file; using defaults");
                Self::default()
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Like [`Settings::load_or_default`], but a missing file is created
    /// with the defaults so there is something to edit.
    pub fn load_or_create(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let settings = Self::default();
                match settings.save_to(path) {
                    Ok(()) => info!(path = %path.display(), "wrote default settings"),
                    Err(e) => warn!("{}; continuing with defaults", e),
                }
                settings
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Read settings from `path`. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SettingsError::Json {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write settings to `path`, creating parent directories.
    ///
    /// The file is written to a temporary sibling first and renamed into
    /// place so a watcher never observes a half-written file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(io_err)?;

        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        io::Write::write_all(&mut tmp, json.as_bytes()).map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}
