//! Hot reload of the settings file.
//!
//! The watcher observes the settings file's parent directory, because
//! editors and [`Settings::save_to`](crate::settings::Settings::save_to)
//! replace the file by rename. Events for other files are dropped. The app
//! polls from its timer tick; nothing is pushed into view state directly.

pub use crate::settings::default_settings_path;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, error};

/// A change to the settings file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<SettingsEvent>,
    // Dropping the watcher stops the OS subscription.
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let watched = path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| {
                let event = match res {
                    Ok(event) => match Self::convert(&event, &watched) {
                        Some(event) => event,
                        None => return,
                    },
                    Err(e) => SettingsEvent::Error(e.to_string()),
                };
                debug!(?event, "settings watch event");
                // The receiver is gone once the app shuts down.
                let _ = tx.send(event);
            },
            Config::default(),
        )?;

        // On a first run the config directory does not exist yet.
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(notify::Error::io)?;
        if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
            error!("Failed to watch settings directory {}: {}", dir.display(), e);
            return Err(e);
        }

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn convert(event: &Event, watched: &Path) -> Option<SettingsEvent> {
        let touches_settings = event
            .paths
            .iter()
            .any(|p| p.file_name() == watched.file_name());
        if !touches_settings {
            return None;
        }
        match event.kind {
            EventKind::Create(_) => Some(SettingsEvent::Created),
            EventKind::Modify(_) => Some(SettingsEvent::Modified),
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            _ => None,
        }
    }

    /// Next pending event, collapsing bursts into the most recent one.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(event) => latest = Some(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    return Some(SettingsEvent::Error(
                        "settings watcher channel disconnected".to_string(),
                    ));
                }
            }
        }
        latest
    }
}
