//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestClock` - a virtual clock for driving deadline-based state machines
//! - `ContactFormBuilder` - builder for filled-in contact forms
//! - Geometry helpers for reveal and parallax tests

#![allow(dead_code)]

use photocraft::contact::{ContactField, ContactForm};
use photocraft::geometry::Rect;
use std::time::{Duration, Instant};

// ============================================================================
// TestClock - virtual time for deadline-driven components
// ============================================================================

/// Virtual clock. Components take `now` explicitly, so tests never sleep.
///
/// # Example
/// ```ignore
/// let mut clock = TestClock::new();
/// let mut carousel = Carousel::new(3, CarouselTiming::default(), clock.now());
/// clock.advance_ms(6000);
/// carousel.poll(clock.now());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TestClock {
    start: Instant,
    elapsed: Duration,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Instant {
        self.start + self.elapsed
    }

    pub fn advance(&mut self, by: Duration) -> Instant {
        self.elapsed += by;
        self.now()
    }

    pub fn advance_ms(&mut self, ms: u64) -> Instant {
        self.advance(Duration::from_millis(ms))
    }
}

// ============================================================================
// ContactFormBuilder - filled-in forms
// ============================================================================

/// Builder for contact forms with preset values.
///
/// # Example
/// ```ignore
/// let form = ContactFormBuilder::valid().with(ContactField::Email, "bad").build();
/// ```
#[derive(Default)]
pub struct ContactFormBuilder {
    values: Vec<(ContactField, String)>,
}

impl ContactFormBuilder {
    /// Start from an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a form that passes validation.
    pub fn valid() -> Self {
        Self::new()
            .with(ContactField::Name, "Jane Doe")
            .with(ContactField::Email, "jane@example.com")
            .with(ContactField::Message, "I would like to book a portrait session.")
    }

    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.values.push((field, value.into()));
        self
    }

    pub fn build(self) -> ContactForm {
        let mut form = ContactForm::new();
        for (field, value) in self.values {
            form.set_value(field, value);
        }
        form
    }
}

// ============================================================================
// Geometry helpers
// ============================================================================

/// A 1000x800 viewport at the origin.
pub fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 800.0)
}

/// A 200x200 card whose top edge sits at `top`.
pub fn card_at(top: f32) -> Rect {
    Rect::new(100.0, top, 200.0, 200.0)
}

/// Assert two floats are equal within a small tolerance.
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
