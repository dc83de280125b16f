//! Toast notifications shown in the top-right corner of the window.
//!
//! Toasts carry their own creation time and lifetime. The host prunes
//! expired toasts from its timer tick; nothing here owns a timer.

use std::time::{Duration, Instant};

/// Fraction of the lifetime over which a toast fades out.
const FADE_FRACTION: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(self) -> Duration {
        match self {
            ToastVariant::Success | ToastVariant::Info => Duration::from_secs(3),
            ToastVariant::Warning => Duration::from_secs(4),
            ToastVariant::Error => Duration::from_secs(5),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "✗",
            ToastVariant::Info => "ℹ",
            ToastVariant::Warning => "⚠",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    /// Second line under the message
    pub detail: Option<String>,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            id: 0,
            message: message.into(),
            detail: None,
            variant,
            created_at: Instant::now(),
            duration: variant.default_duration(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Moves the creation time, for hosts and tests driving a virtual clock.
    pub fn created(mut self, at: Instant) -> Self {
        self.created_at = at;
        self
    }

    pub fn expires_at(&self) -> Instant {
        self.created_at + self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }

    /// Remaining lifetime as a fraction in `0.0..=1.0`.
    pub fn remaining_percent(&self) -> f32 {
        self.remaining_percent_at(Instant::now())
    }

    pub fn remaining_percent_at(&self, now: Instant) -> f32 {
        let total = self.duration.as_secs_f32();
        if total <= f32::EPSILON {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }

    /// Opacity for rendering. Reduced motion disables the fade.
    pub fn opacity(&self, reduce_motion: bool) -> f32 {
        self.opacity_at(Instant::now(), reduce_motion)
    }

    pub fn opacity_at(&self, now: Instant, reduce_motion: bool) -> f32 {
        if reduce_motion {
            return 1.0;
        }
        let remaining = self.remaining_percent_at(now);
        if remaining >= FADE_FRACTION {
            1.0
        } else {
            remaining / FADE_FRACTION
        }
    }
}

/// Ordered stack of live toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast and return its id.
    pub fn push(&mut self, mut toast: Toast) -> u64 {
        self.next_id += 1;
        toast.id = self.next_id;
        tracing::debug!(id = toast.id, variant = ?toast.variant, "toast pushed");
        self.toasts.push(toast);
        self.next_id
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn prune_expired(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired_at(now));
        self.toasts.len() != before
    }

    /// When the next toast expires, if any are live.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.toasts.iter().map(Toast::expires_at).min()
    }
}
