//! About section: parallax decoration and the stats reveal.

use crate::constants::{PARALLAX_LAYER_SPEEDS, REVEAL_THRESHOLD};
use crate::content::STATS;
use crate::geometry::{Point, Rect};
use crate::reveal::{RevealObserver, RevealOptions};

/// Pointer position relative to the centre of `bounds`, in section units.
///
/// The centre maps to `(0, 0)` and the edges to `±0.5`. The pointer is
/// tracked page-wide, so positions outside the section go beyond that range.
/// Degenerate bounds yield `(0, 0)`.
pub fn pointer_fraction(pointer: Point, bounds: Rect) -> Point {
    if bounds.width <= f32::EPSILON || bounds.height <= f32::EPSILON {
        return Point::default();
    }
    Point::new(
        (pointer.x - bounds.left()) / bounds.width - 0.5,
        (pointer.y - bounds.top()) / bounds.height - 0.5,
    )
}

/// Translation of a decorative layer moving at `speed`.
#[inline]
pub fn layer_offset(fraction: Point, speed: f32) -> Point {
    Point::new(fraction.x * speed, fraction.y * speed)
}

/// Offsets of the three decorative frames around the portrait.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parallax {
    offsets: [Point; 3],
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every layer from a pointer move. Returns true on change.
    pub fn on_pointer_move(&mut self, pointer: Point, section: Rect) -> bool {
        let fraction = pointer_fraction(pointer, section);
        let offsets = PARALLAX_LAYER_SPEEDS.map(|speed| layer_offset(fraction, speed));
        if offsets == self.offsets {
            return false;
        }
        self.offsets = offsets;
        true
    }

    pub fn offsets(&self) -> [Point; 3] {
        self.offsets
    }

    pub fn reset(&mut self) {
        self.offsets = Default::default();
    }
}

/// Interaction state of the about section.
#[derive(Clone, Debug)]
pub struct AboutState {
    pub parallax: Parallax,
    /// The stats row reveals as a single target
    pub stats: RevealObserver,
}

impl AboutState {
    pub fn new() -> Self {
        let options = RevealOptions::default()
            .with_threshold(REVEAL_THRESHOLD)
            .with_bottom_margin(0.0);
        Self {
            parallax: Parallax::new(),
            stats: RevealObserver::new(1, options),
        }
    }

    /// Used when motion is reduced: stats are shown at once and frames stay put.
    pub fn without_motion() -> Self {
        let mut state = Self::new();
        state.stats.reveal_all();
        state
    }

    pub fn stats_revealed(&self) -> bool {
        self.stats.is_revealed(0)
    }

    pub fn stat_count(&self) -> usize {
        STATS.len()
    }
}

impl Default for AboutState {
    fn default() -> Self {
        Self::new()
    }
}
