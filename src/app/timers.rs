//! The host timer: one task that sleeps until the earliest deadline on the
//! page and then polls every section.
//!
//! The task lives in `SystemState::ticker`. Replacing the field cancels the
//! previous task and dropping the view cancels it for good.

use super::state::Photocraft;
use crate::carousel::{Carousel, CarouselEvent};
use gpui::*;
use std::time::{Duration, Instant};

/// Upper bound on the sleep, so the settings watcher and prefetch channel
/// are drained even when no section has a deadline.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Poll a carousel until it has nothing more to do at `now`.
fn drain_carousel(carousel: &mut Carousel, now: Instant) -> bool {
    let mut changed = false;
    // A commit and an autoplay start can both be due in one tick.
    for _ in 0..4 {
        match carousel.poll(now) {
            Some(CarouselEvent::AutoplayRejected) => {}
            Some(_) => changed = true,
            None => break,
        }
    }
    changed
}

impl Photocraft {
    pub(crate) fn start_ticker(&mut self, cx: &mut Context<Self>) {
        self.system.ticker = Some(cx.spawn(async move |this, cx| {
            loop {
                let Ok(delay) = this.update(cx, |this, _| this.next_wake(Instant::now())) else {
                    break;
                };
                cx.background_executor().timer(delay).await;
                if this
                    .update(cx, |this, cx| this.tick(Instant::now(), cx))
                    .is_err()
                {
                    break;
                }
            }
        }));
    }

    /// Time until the next deadline of any section, capped at [`IDLE_POLL`].
    pub(crate) fn next_wake(&self, now: Instant) -> Duration {
        [
            self.hero.carousel.next_deadline(),
            self.testimonials.carousel.next_deadline(),
            self.contact.form.next_deadline(),
            self.system.toasts.next_expiry(),
        ]
        .into_iter()
        .flatten()
        .min()
        .map(|deadline| deadline.saturating_duration_since(now))
        .unwrap_or(IDLE_POLL)
        .min(IDLE_POLL)
    }

    fn tick(&mut self, now: Instant, cx: &mut Context<Self>) {
        let mut changed = drain_carousel(&mut self.hero.carousel, now);
        changed |= drain_carousel(&mut self.testimonials.carousel, now);
        changed |= self.contact.form.poll(now);
        changed |= self.system.toasts.prune_expired(now);
        changed |= self.drain_prefetch_events();
        self.check_settings_reload(cx);

        if changed {
            cx.notify();
        }
    }
}
