//! Unit tests for reveal module.

use crate::helpers::{assert_close, card_at, viewport};
use photocraft::geometry::Rect;
use photocraft::reveal::{IntersectionEntry, RevealObserver, RevealOptions, intersection_ratio};
use std::time::Duration;

fn observer(count: usize) -> RevealObserver {
    RevealObserver::new(count, RevealOptions::default())
}

#[test]
fn test_new_observer_hides_everything() {
    let observer = observer(3);
    assert_eq!(observer.len(), 3);
    assert_eq!(observer.revealed_count(), 0);
    assert_eq!(observer.observed_count(), 3);
    assert!(observer.is_connected());
}

#[test]
fn test_intersection_ratio() {
    let root = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_close(intersection_ratio(&root, &Rect::new(0.0, 50.0, 100.0, 100.0)), 0.5);
    assert_close(intersection_ratio(&root, &Rect::new(10.0, 10.0, 20.0, 20.0)), 1.0);
    assert_close(intersection_ratio(&root, &Rect::new(0.0, 300.0, 10.0, 10.0)), 0.0);
}

#[test]
fn test_zero_area_target_touching_root_counts_as_visible() {
    let root = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_close(intersection_ratio(&root, &Rect::new(50.0, 50.0, 0.0, 0.0)), 1.0);
}

#[test]
fn test_bottom_margin_shrinks_root() {
    let observer = observer(1);
    let root = observer.effective_root(viewport());
    assert_close(root.height, 700.0);
    assert_close(root.width, 1000.0);
}

#[test]
fn test_target_reveals_at_threshold() {
    let mut observer = observer(1);
    // 40px of a 200px card inside the 700px root: exactly 0.2
    let revealed = observer.update(viewport(), &[card_at(660.0)]);
    assert_eq!(revealed, vec![0]);
    assert!(observer.is_revealed(0));
    assert!(!observer.is_observing(0));
}

#[test]
fn test_target_below_threshold_stays_hidden() {
    let mut observer = observer(1);
    let revealed = observer.update(viewport(), &[card_at(680.0)]);
    assert!(revealed.is_empty());
    assert!(!observer.is_revealed(0));
    assert!(observer.is_observing(0));
}

#[test]
fn test_target_inside_bottom_margin_stays_hidden() {
    let mut observer = observer(1);
    // Fully inside the viewport but entirely within the 100px bottom margin
    let revealed = observer.update(viewport(), &[Rect::new(0.0, 710.0, 200.0, 80.0)]);
    assert!(revealed.is_empty());
}

#[test]
fn test_reveal_is_one_shot() {
    let mut observer = observer(2);
    observer.update(viewport(), &[card_at(100.0), card_at(2000.0)]);
    assert!(observer.is_revealed(0));
    assert!(!observer.is_revealed(1));

    // Scroll the first card away: it stays revealed
    let revealed = observer.update(viewport(), &[card_at(-5000.0), card_at(2000.0)]);
    assert!(revealed.is_empty());
    assert!(observer.is_revealed(0));
}

#[test]
fn test_revealed_count_never_decreases() {
    let mut observer = observer(4);
    let positions = [
        [2000.0, 2000.0, 2000.0, 2000.0],
        [100.0, 2000.0, 2000.0, 2000.0],
        [-900.0, 300.0, 2000.0, 2000.0],
        [-2000.0, -900.0, 2000.0, 2000.0],
        [-3000.0, -2000.0, 400.0, 500.0],
    ];
    let mut last = 0;
    for frame in positions {
        let targets: Vec<Rect> = frame.iter().map(|top| card_at(*top)).collect();
        observer.update(viewport(), &targets);
        assert!(observer.revealed_count() >= last);
        last = observer.revealed_count();
    }
    assert!(observer.all_revealed());
}

#[test]
fn test_process_ignores_unobserved_and_zero_ratio() {
    let mut observer = RevealObserver::new(2, RevealOptions::default().with_threshold(0.0));
    let revealed = observer.process([
        IntersectionEntry { index: 0, ratio: 0.0 },
        IntersectionEntry { index: 7, ratio: 1.0 },
    ]);
    assert!(revealed.is_empty());
    assert_eq!(observer.revealed_count(), 0);
}

#[test]
fn test_reveal_all_reports_only_hidden_targets() {
    let mut observer = observer(3);
    observer.update(viewport(), &[card_at(100.0), card_at(2000.0), card_at(2000.0)]);

    let newly = observer.reveal_all();
    assert_eq!(newly, vec![1, 2]);
    assert!(observer.all_revealed());
    assert_eq!(observer.observed_count(), 0);
}

#[test]
fn test_unavailable_starts_revealed() {
    let observer = RevealObserver::unavailable(5, RevealOptions::default());
    assert!(observer.all_revealed());
    assert_eq!(observer.observed_count(), 0);
}

#[test]
fn test_disconnect_keeps_revealed_flags() {
    let mut observer = observer(2);
    observer.update(viewport(), &[card_at(100.0), card_at(2000.0)]);
    observer.disconnect();

    assert!(!observer.is_connected());
    assert!(observer.is_revealed(0));
    assert!(!observer.is_revealed(1));

    // A disconnected observer no longer reveals anything
    let revealed = observer.update(viewport(), &[card_at(100.0), card_at(100.0)]);
    assert!(revealed.is_empty());
    assert!(!observer.is_revealed(1));
}

#[test]
fn test_reset_starts_over() {
    let mut observer = observer(2);
    observer.reveal_all();
    observer.reset(4);

    assert_eq!(observer.len(), 4);
    assert_eq!(observer.revealed_count(), 0);
    assert_eq!(observer.observed_count(), 4);
}

#[test]
fn test_stagger_delay_grows_with_index() {
    let observer = RevealObserver::new(
        4,
        RevealOptions::default().with_stagger(Duration::from_millis(100)),
    );
    assert_eq!(observer.transition_delay(0), Duration::ZERO);
    assert_eq!(observer.transition_delay(3), Duration::from_millis(300));
}

#[test]
fn test_threshold_is_clamped() {
    let options = RevealOptions::default().with_threshold(3.0);
    assert_close(options.threshold, 1.0);
}

#[test]
fn test_out_of_range_index_is_hidden() {
    let observer = observer(1);
    assert!(!observer.is_revealed(10));
    assert!(!observer.is_observing(10));
}
