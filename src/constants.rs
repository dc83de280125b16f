//! Application-wide constants.
//!
//! Centralizes timing, threshold and layout values so the section state
//! machines and the desktop renderer agree on them.

use std::time::Duration;

// ============================================================================
// Carousel Timing
// ============================================================================

/// Visual transition length before a carousel commits its next index
pub const CAROUSEL_TRANSITION: Duration = Duration::from_millis(500);

/// Autoplay interval for the hero and testimonial carousels
pub const CAROUSEL_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6000);

/// Minimum horizontal drag distance (exclusive) that counts as a swipe
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

// ============================================================================
// Reveal-on-intersect
// ============================================================================

/// Fraction of a target that must be visible before it reveals
pub const REVEAL_THRESHOLD: f32 = 0.2;

/// Bottom root margin: the reveal fires this many pixels before the viewport edge
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 100.0;

/// Per-card stagger for the services grid
pub const SERVICES_STAGGER: Duration = Duration::from_millis(100);

// ============================================================================
// Contact Form
// ============================================================================

/// Latency of the simulated contact transport
pub const SIMULATED_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// How long the "thank you" state is shown before the form is reusable
pub const SUBMITTED_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Lifetime of the "message sent" confirmation toast
pub const CONFIRMATION_TOAST_DURATION: Duration = Duration::from_millis(5000);

// ============================================================================
// Navigation & Parallax
// ============================================================================

/// Scroll offset after which the navbar switches to its solid style
pub const NAV_SCROLLED_OFFSET_PX: f32 = 50.0;

/// Parallax speeds of the three decorative frames in the about section
pub const PARALLAX_LAYER_SPEEDS: [f32; 3] = [8.0, 5.0, 10.0];

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the fixed navigation bar in pixels
pub const NAVBAR_HEIGHT: f32 = 64.0;

/// Height of the hero section in pixels
pub const HERO_HEIGHT: f32 = 640.0;

/// Maximum content width of a section
pub const CONTENT_MAX_WIDTH: f32 = 1120.0;

/// Vertical padding of a regular section
pub const SECTION_PADDING_Y: f32 = 96.0;

/// Width of the narrow-layout breakpoint (mobile menu instead of links)
pub const NARROW_LAYOUT_WIDTH: f32 = 768.0;

/// Default window size
pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (1280.0, 860.0);

/// Backdrop opacity behind the lightbox
pub const LIGHTBOX_BACKDROP_OPACITY: f32 = 0.9;

/// Width of the toast stack
pub const TOAST_WIDTH: f32 = 340.0;
