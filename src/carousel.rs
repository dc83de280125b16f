//! Carousel state machine shared by the hero and testimonial sections.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Transitioning     (advance / go_to / swipe / autoplay)
//! Transitioning -> Idle     (poll after the transition delay; commits the index)
//! Transitioning -> (same)   (any further request is ignored, nothing is queued)
//! ```
//!
//! The carousel is deadline driven: it never owns a timer. The host asks for
//! [`Carousel::next_deadline`], sleeps until then and calls [`Carousel::poll`].
//! Autoplay is re-armed every time the index commits, which gives the
//! "restart the interval whenever the slide changes" behaviour.

use crate::constants::{CAROUSEL_AUTOPLAY_INTERVAL, CAROUSEL_TRANSITION, SWIPE_THRESHOLD_PX};
use std::time::{Duration, Instant};
use tracing::debug;

/// Direction of a carousel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Index reached from `current` by one step in `direction`, wrapping at both ends.
pub fn next_index(current: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((current as isize + direction.step() + len) % len) as usize
}

/// Direction selected by a horizontal drag from `start_x` to `end_x`.
///
/// Drags of `threshold` pixels or less are ignored. Dragging leftward
/// (start right of end) moves forward.
pub fn swipe_direction(start_x: f32, end_x: f32, threshold: f32) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    Some(if diff > 0.0 {
        Direction::Forward
    } else {
        Direction::Backward
    })
}

/// A pointer drag over a carousel that may turn into a swipe.
///
/// Only a release over the carousel resolves the drag. A release anywhere
/// else cancels it, so a later release cannot pair with a stale press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeGesture {
    start_x: Option<f32>,
}

impl SwipeGesture {
    pub fn press(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    /// End the drag, returning where it started.
    pub fn release(&mut self) -> Option<f32> {
        self.start_x.take()
    }
}

/// Timing of a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselTiming {
    /// Delay between starting a transition and committing the new index
    pub transition: Duration,
    /// Autoplay interval; `None` disables autoplay
    pub autoplay: Option<Duration>,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            transition: CAROUSEL_TRANSITION,
            autoplay: Some(CAROUSEL_AUTOPLAY_INTERVAL),
        }
    }
}

impl CarouselTiming {
    pub fn without_autoplay(mut self) -> Self {
        self.autoplay = None;
        self
    }
}

/// Current phase of the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselPhase {
    Idle,
    Transitioning {
        /// Index that becomes current once the transition commits
        target: usize,
        started_at: Instant,
        commit_at: Instant,
    },
}

/// Something observable that happened during [`Carousel::poll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Autoplay started a transition toward `target`
    AutoplayStarted { target: usize },
    /// Autoplay fired while a transition was running and was ignored
    AutoplayRejected,
    /// A transition finished and `index` is now current
    Committed { index: usize },
}

/// Cyclic carousel with a re-entrancy guard and optional autoplay.
#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    current: usize,
    phase: CarouselPhase,
    timing: CarouselTiming,
    autoplay_due: Option<Instant>,
}

impl Carousel {
    pub fn new(len: usize, timing: CarouselTiming, now: Instant) -> Self {
        Self {
            len,
            current: 0,
            phase: CarouselPhase::Idle,
            timing,
            autoplay_due: timing.autoplay.map(|interval| now + interval),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The committed (displayed) index.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, CarouselPhase::Transitioning { .. })
    }

    /// Index the running transition is heading to.
    pub fn target(&self) -> Option<usize> {
        match self.phase {
            CarouselPhase::Transitioning { target, .. } => Some(target),
            CarouselPhase::Idle => None,
        }
    }

    /// Elapsed fraction (0.0..=1.0) of the running transition.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        match self.phase {
            CarouselPhase::Transitioning {
                started_at,
                commit_at,
                ..
            } => {
                let total = commit_at.saturating_duration_since(started_at).as_secs_f32();
                if total <= f32::EPSILON {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
                Some((elapsed / total).clamp(0.0, 1.0))
            }
            CarouselPhase::Idle => None,
        }
    }

    /// When autoplay will next fire, if enabled.
    pub fn autoplay_due(&self) -> Option<Instant> {
        self.autoplay_due
    }

    /// Step one slide. Ignored (returns `false`) while a transition is running.
    pub fn advance(&mut self, direction: Direction, now: Instant) -> bool {
        if self.is_empty() || self.is_transitioning() {
            return false;
        }
        let target = next_index(self.current, direction, self.len);
        self.begin(target, now);
        true
    }

    /// Jump to `index` (indicator dots). Same guard as [`Carousel::advance`];
    /// the current index and out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Instant) -> bool {
        if self.is_transitioning() || index >= self.len || index == self.current {
            return false;
        }
        self.begin(index, now);
        true
    }

    /// Resolve a horizontal drag into a step, if it was long enough.
    pub fn swipe(&mut self, start_x: f32, end_x: f32, now: Instant) -> bool {
        match swipe_direction(start_x, end_x, SWIPE_THRESHOLD_PX) {
            Some(direction) => self.advance(direction, now),
            None => false,
        }
    }

    fn begin(&mut self, target: usize, now: Instant) {
        debug!(from = self.current, to = target, "carousel transition started");
        self.phase = CarouselPhase::Transitioning {
            target,
            started_at: now,
            commit_at: now + self.timing.transition,
        };
    }

    /// Earliest instant at which [`Carousel::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let commit = match self.phase {
            CarouselPhase::Transitioning { commit_at, .. } => Some(commit_at),
            CarouselPhase::Idle => None,
        };
        match (commit, self.autoplay_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Commit a due transition, then fire autoplay if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<CarouselEvent> {
        if let CarouselPhase::Transitioning {
            target, commit_at, ..
        } = self.phase
        {
            if now >= commit_at {
                self.current = target;
                self.phase = CarouselPhase::Idle;
                self.autoplay_due = self.timing.autoplay.map(|interval| now + interval);
                debug!(index = target, "carousel committed");
                return Some(CarouselEvent::Committed { index: target });
            }
        }

        let due = self.autoplay_due?;
        if now < due {
            return None;
        }
        let interval = self.timing.autoplay?;
        if self.advance(Direction::Forward, now) {
            self.autoplay_due = Some(now + interval);
            self.target()
                .map(|target| CarouselEvent::AutoplayStarted { target })
        } else {
            self.autoplay_due = Some(now + interval);
            Some(CarouselEvent::AutoplayRejected)
        }
    }

    /// Change the transition delay. A running transition keeps its commit time.
    pub fn set_transition(&mut self, transition: Duration) {
        self.timing.transition = transition;
    }

    /// Enable or disable autoplay. Enabling arms a full interval from `now`.
    pub fn set_autoplay(&mut self, interval: Option<Duration>, now: Instant) {
        self.timing.autoplay = interval;
        self.autoplay_due = interval.map(|interval| now + interval);
    }
}
