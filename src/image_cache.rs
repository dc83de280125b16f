//! On-disk cache for the remote photographs shown on the page.
//!
//! Every image is stored under the hex SHA-256 of its URL. Downloads are
//! written to a temporary file in the cache directory and renamed into
//! place, so a reader never sees a partial image. Prefetching runs on a
//! background thread and reports each outcome over a channel; the view
//! renders a cached file or, until then, the image's alt text.

use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_DIR: &str = "photocraft";
const IMAGES_DIR: &str = "images";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Error, Debug)]
pub enum ImageCacheError {
    #[error("image cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("image request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("image request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP client unavailable: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, ImageCacheError>;

/// Hex SHA-256 of `url`, used as the cache file name.
pub fn cache_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Outcome of prefetching one image.
#[derive(Debug)]
pub struct PrefetchEvent {
    pub url: String,
    pub result: Result<PathBuf>,
}

/// A running prefetch. Dropping it detaches the worker thread.
pub struct PrefetchHandle {
    pub events: Receiver<PrefetchEvent>,
    thread: JoinHandle<()>,
}

impl PrefetchHandle {
    /// Block until every queued image has been attempted.
    pub fn wait(self) -> Vec<PrefetchEvent> {
        let events: Vec<PrefetchEvent> = self.events.iter().collect();
        if self.thread.join().is_err() {
            warn!("image prefetch thread panicked");
        }
        events
    }
}

#[derive(Clone, Debug)]
pub struct ImageCache {
    root: PathBuf,
}

impl ImageCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<cache dir>/photocraft/images`, falling back to the temp dir.
    pub fn default_root() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join(IMAGES_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        self.root.join(cache_key(url))
    }

    pub fn is_cached(&self, url: &str) -> bool {
        self.path_for(url).is_file()
    }

    pub fn cached_path(&self, url: &str) -> Option<PathBuf> {
        let path = self.path_for(url);
        path.is_file().then_some(path)
    }

    fn client() -> Result<reqwest::blocking::Client> {
        Ok(reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?)
    }

    /// Return the cached file for `url`, downloading it first if needed.
    pub fn fetch(&self, url: &str) -> Result<PathBuf> {
        let client = Self::client()?;
        self.fetch_with(&client, url)
    }

    fn fetch_with(&self, client: &reqwest::blocking::Client, url: &str) -> Result<PathBuf> {
        if let Some(path) = self.cached_path(url) {
            debug!(url, "image cache hit");
            return Ok(path);
        }

        let response = client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageCacheError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes()?;

        let path = self.path_for(url);
        self.write_atomic(&path, &bytes)?;
        debug!(url, bytes = bytes.len(), "image cached");
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let io_err = |source| ImageCacheError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::create_dir_all(&self.root).map_err(io_err)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root).map_err(io_err)?;
        tmp.write_all(bytes).map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;
        Ok(())
    }

    /// Download `urls` in order on a background thread.
    ///
    /// Each URL produces exactly one [`PrefetchEvent`]; the channel closes
    /// when the list is exhausted.
    pub fn prefetch(&self, urls: Vec<String>) -> io::Result<PrefetchHandle> {
        let (tx, rx) = mpsc::channel();
        let cache = self.clone();

        let thread = thread::Builder::new()
            .name("image-prefetch".into())
            .spawn(move || {
                let client = Self::client().map_err(|e| e.to_string());
                if let Err(e) = &client {
                    warn!("image prefetch disabled: {}", e);
                }
                let total = urls.len();
                let mut cached = 0;
                for url in urls {
                    let result = match &client {
                        Ok(client) => cache.fetch_with(client, &url),
                        Err(e) => Err(ImageCacheError::Client(e.clone())),
                    };
                    match &result {
                        Ok(_) => cached += 1,
                        Err(e) => warn!("failed to prefetch {}: {}", url, e),
                    }
                    if tx.send(PrefetchEvent { url, result }).is_err() {
                        debug!("prefetch receiver dropped; stopping");
                        return;
                    }
                }
                info!(cached, total, "image prefetch finished");
            })?;

        Ok(PrefetchHandle { events: rx, thread })
    }
}
