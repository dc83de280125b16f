//! Hero and testimonial carousels driven the way the host ticker drives them.

use crate::helpers::TestClock;
use photocraft::carousel::{Carousel, CarouselEvent, CarouselTiming, Direction};
use photocraft::content::{SLIDES, TESTIMONIALS};
use std::time::Duration;

/// Sleep until the next deadline and poll, like the app's timer task.
fn tick(carousel: &mut Carousel, clock: &mut TestClock) -> Option<CarouselEvent> {
    let deadline = carousel.next_deadline()?;
    let wait = deadline.saturating_duration_since(clock.now());
    clock.advance(wait);
    carousel.poll(clock.now())
}

fn committed_indices(carousel: &mut Carousel, clock: &mut TestClock, count: usize) -> Vec<usize> {
    let mut indices = Vec::new();
    while indices.len() < count {
        if let Some(CarouselEvent::Committed { index }) = tick(carousel, clock) {
            indices.push(index);
        }
    }
    indices
}

#[test]
fn test_hero_autoplay_cycles_and_wraps() {
    let mut clock = TestClock::new();
    let mut hero = Carousel::new(SLIDES.len(), CarouselTiming::default(), clock.now());

    let indices = committed_indices(&mut hero, &mut clock, 4);
    assert_eq!(indices, vec![1, 2, 0, 1]);
}

#[test]
fn test_autoplay_period_includes_transition() {
    let mut clock = TestClock::new();
    let start = clock.now();
    let mut hero = Carousel::new(SLIDES.len(), CarouselTiming::default(), start);

    committed_indices(&mut hero, &mut clock, 2);
    // Each cycle: 6s interval, then the 0.5s transition before commit
    assert_eq!(clock.now() - start, Duration::from_millis(13_000));
}

#[test]
fn test_manual_step_resets_autoplay_countdown() {
    let mut clock = TestClock::new();
    let mut testimonials =
        Carousel::new(TESTIMONIALS.len(), CarouselTiming::default(), clock.now());

    clock.advance_ms(5_000);
    assert!(testimonials.advance(Direction::Backward, clock.now()));
    assert_eq!(
        tick(&mut testimonials, &mut clock),
        Some(CarouselEvent::Committed { index: 3 })
    );

    let committed_at = clock.now();
    assert_eq!(
        tick(&mut testimonials, &mut clock),
        Some(CarouselEvent::AutoplayStarted { target: 0 })
    );
    assert_eq!(clock.now() - committed_at, Duration::from_millis(6_000));
}

#[test]
fn test_reduced_motion_timing_commits_immediately() {
    let mut clock = TestClock::new();
    let timing = CarouselTiming {
        transition: Duration::ZERO,
        autoplay: None,
    };
    let mut hero = Carousel::new(SLIDES.len(), timing, clock.now());

    assert!(hero.go_to(2, clock.now()));
    assert_eq!(
        tick(&mut hero, &mut clock),
        Some(CarouselEvent::Committed { index: 2 })
    );
    assert_eq!(hero.next_deadline(), None);
}

#[test]
fn test_swipe_then_dots() {
    let mut clock = TestClock::new();
    let mut testimonials = Carousel::new(
        TESTIMONIALS.len(),
        CarouselTiming::default().without_autoplay(),
        clock.now(),
    );

    assert!(testimonials.swipe(100.0, 300.0, clock.now()));
    tick(&mut testimonials, &mut clock);
    assert_eq!(testimonials.current(), TESTIMONIALS.len() - 1);

    assert!(testimonials.go_to(1, clock.now()));
    tick(&mut testimonials, &mut clock);
    assert_eq!(testimonials.current(), 1);
}

#[test]
fn test_enabling_autoplay_arms_full_interval() {
    let mut clock = TestClock::new();
    let mut hero = Carousel::new(
        SLIDES.len(),
        CarouselTiming::default().without_autoplay(),
        clock.now(),
    );
    clock.advance_ms(20_000);
    hero.set_autoplay(Some(Duration::from_secs(6)), clock.now());
    assert_eq!(hero.next_deadline(), Some(clock.now() + Duration::from_secs(6)));
}
