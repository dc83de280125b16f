//! Reveal-on-intersect: one-shot visibility reveal for scroll animations.
//!
//! A [`RevealObserver`] tracks a set of targets keyed by position. Each time
//! the host reports geometry, targets whose visible fraction reaches the
//! threshold flip to revealed and stop being observed. Revealed targets never
//! hide again, even if they scroll away.
//!
//! ```text
//! Observed --(ratio >= threshold)--> Revealed (unobserved)
//! Observed --disconnect()----------> Unobserved (still hidden)
//! ```
//!
//! When no geometry can be produced, call [`RevealObserver::reveal_all`] so
//! content is never left permanently hidden.

use crate::constants::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
use crate::geometry::Rect;
use std::time::Duration;
use tracing::debug;

/// Tuning for a reveal observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction of the target required to reveal it (0.0..=1.0)
    pub threshold: f32,
    /// Pixels cut from the bottom of the viewport so reveals fire early
    pub bottom_margin: f32,
    /// Transition delay added per target index
    pub stagger: Duration,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN_PX,
            stagger: Duration::ZERO,
        }
    }
}

impl RevealOptions {
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_bottom_margin(mut self, margin: f32) -> Self {
        self.bottom_margin = margin;
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}

/// Visibility report for one target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub index: usize,
    pub ratio: f32,
}

/// Fraction of `target` inside `root`.
///
/// A zero-area target that touches the root counts as fully visible.
pub fn intersection_ratio(root: &Rect, target: &Rect) -> f32 {
    let Some(overlap) = root.intersection(target) else {
        return 0.0;
    };
    let area = target.area();
    if area <= f32::EPSILON {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

/// One-shot reveal tracker for a group of targets.
#[derive(Clone, Debug)]
pub struct RevealObserver {
    options: RevealOptions,
    revealed: Vec<bool>,
    observing: Vec<bool>,
    connected: bool,
}

impl RevealObserver {
    /// Observe `count` targets, all initially hidden.
    pub fn new(count: usize, options: RevealOptions) -> Self {
        Self {
            options,
            revealed: vec![false; count],
            observing: vec![true; count],
            connected: true,
        }
    }

    /// Fallback for hosts that cannot report geometry: everything starts revealed.
    pub fn unavailable(count: usize, options: RevealOptions) -> Self {
        let mut observer = Self::new(count, options);
        observer.reveal_all();
        observer
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Out-of-range indices report `false`.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    pub fn is_observing(&self, index: usize) -> bool {
        self.connected && self.observing.get(index).copied().unwrap_or(false)
    }

    /// Number of targets still waiting for their reveal.
    pub fn observed_count(&self) -> usize {
        if !self.connected {
            return 0;
        }
        self.observing.iter().filter(|o| **o).count()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Transition delay for the target at `index`.
    pub fn transition_delay(&self, index: usize) -> Duration {
        self.options.stagger * index as u32
    }

    /// Viewport after applying the bottom root margin.
    pub fn effective_root(&self, viewport: Rect) -> Rect {
        viewport.inset_bottom(self.options.bottom_margin)
    }

    /// Intersection entries for every still-observed target.
    ///
    /// `targets[i]` is the current bounds of target `i`; extra or missing
    /// bounds are ignored.
    pub fn measure(&self, viewport: Rect, targets: &[Rect]) -> Vec<IntersectionEntry> {
        let root = self.effective_root(viewport);
        targets
            .iter()
            .enumerate()
            .filter(|(index, _)| self.is_observing(*index))
            .map(|(index, bounds)| IntersectionEntry {
                index,
                ratio: intersection_ratio(&root, bounds),
            })
            .collect()
    }

    /// Apply intersection entries, returning the newly revealed indices.
    pub fn process(&mut self, entries: impl IntoIterator<Item = IntersectionEntry>) -> Vec<usize> {
        let mut newly_revealed = Vec::new();
        for entry in entries {
            if !self.is_observing(entry.index) {
                continue;
            }
            if entry.ratio > 0.0 && entry.ratio >= self.options.threshold {
                self.revealed[entry.index] = true;
                self.observing[entry.index] = false;
                newly_revealed.push(entry.index);
            }
        }
        if !newly_revealed.is_empty() {
            debug!(indices = ?newly_revealed, "revealed targets");
        }
        newly_revealed
    }

    /// Measure and process in one step.
    pub fn update(&mut self, viewport: Rect, targets: &[Rect]) -> Vec<usize> {
        let entries = self.measure(viewport, targets);
        self.process(entries)
    }

    /// Reveal every target that is still hidden and stop observing all of them.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let newly_revealed: Vec<usize> = self
            .revealed
            .iter()
            .enumerate()
            .filter(|(_, revealed)| !**revealed)
            .map(|(index, _)| index)
            .collect();
        self.revealed.iter_mut().for_each(|r| *r = true);
        self.observing.iter_mut().for_each(|o| *o = false);
        newly_revealed
    }

    /// Replace the target set (e.g. after the gallery filter changes).
    ///
    /// Every new target starts hidden and observed.
    pub fn reset(&mut self, count: usize) {
        self.revealed = vec![false; count];
        self.observing = vec![true; count];
        self.connected = true;
    }

    /// Release all observations. Revealed flags are kept.
    pub fn disconnect(&mut self) {
        if self.connected {
            debug!(pending = self.observed_count(), "reveal observer disconnected");
        }
        self.connected = false;
        self.observing.iter_mut().for_each(|o| *o = false);
    }
}
