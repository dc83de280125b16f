//! Page-level flows across navigation, gallery, reveal, settings and toasts.

use crate::helpers::{TestClock, card_at, viewport};
use photocraft::about::AboutState;
use photocraft::constants::{CONFIRMATION_TOAST_DURATION, SERVICES_STAGGER};
use photocraft::content::{Category, Locale, PORTFOLIO, Phrase, SERVICES};
use photocraft::geometry::Rect;
use photocraft::navigation::{NavState, Route, Section};
use photocraft::notifications::{Toast, ToastManager, ToastVariant};
use photocraft::portfolio::{Filter, PortfolioState};
use photocraft::reveal::{RevealObserver, RevealOptions};
use photocraft::settings::Settings;
use serde::Serialize;
use tempfile::tempdir;

/// Bounds of `count` cards laid out in rows of three, 300px per row.
fn grid(count: usize, top: f32) -> Vec<Rect> {
    (0..count)
        .map(|ix| card_at(top + (ix / 3) as f32 * 300.0))
        .collect()
}

#[test]
fn test_deep_link_opens_section_and_closes_menu() {
    let mut nav = NavState::new();
    nav.toggle_menu();

    let Route::Home { section } = Route::resolve("/#services") else {
        panic!("root path resolves home");
    };
    let target = nav.follow_link(section.unwrap_or(Section::Home));
    assert_eq!(target, Section::Services);
    assert_eq!(target.index(), 3);
    assert!(!nav.is_menu_open());
}

#[test]
fn test_gallery_scroll_reveal_then_filter() {
    let mut portfolio = PortfolioState::new(&PORTFOLIO, RevealOptions::default());

    // Grid starts below the fold
    portfolio.reveal_mut().update(viewport(), &grid(PORTFOLIO.len(), 900.0));
    assert_eq!(portfolio.reveal().revealed_count(), 0);

    // First row scrolls into view, second row still at the margin edge
    portfolio.reveal_mut().update(viewport(), &grid(PORTFOLIO.len(), 400.0));
    assert_eq!(portfolio.reveal().revealed_count(), 3);

    // Both rows visible
    portfolio.reveal_mut().update(viewport(), &grid(PORTFOLIO.len(), 100.0));
    assert!(portfolio.reveal().all_revealed());

    portfolio.select_filter(Filter::Category(Category::Landscapes));
    assert_eq!(portfolio.reveal().revealed_count(), 0);
    let visible_len = portfolio.visible().len();
    portfolio.reveal_mut().update(viewport(), &grid(visible_len, 100.0));
    assert!(portfolio.reveal().all_revealed());
}

#[test]
fn test_services_stagger() {
    let mut services = RevealObserver::new(
        SERVICES.len(),
        RevealOptions::default().with_stagger(SERVICES_STAGGER),
    );
    let revealed = services.update(viewport(), &grid(SERVICES.len(), 0.0));
    assert_eq!(revealed, (0..SERVICES.len()).collect::<Vec<_>>());

    let delays: Vec<u128> = (0..SERVICES.len())
        .map(|ix| services.transition_delay(ix).as_millis())
        .collect();
    assert_eq!(delays, vec![0, 100, 200, 300]);
}

#[test]
fn test_reduced_motion_reveals_everything() {
    let settings = Settings {
        reduce_motion: true,
        ..Default::default()
    };
    let about = if settings.reduce_motion {
        AboutState::without_motion()
    } else {
        AboutState::new()
    };
    let services = RevealObserver::unavailable(SERVICES.len(), RevealOptions::default());

    assert!(about.stats_revealed());
    assert!(services.all_revealed());
}

#[test]
fn test_settings_reload_changes_locale() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let before = Settings::load_or_default(&path);
    assert_eq!(before.locale, Locale::En);

    Settings {
        locale: Locale::Ru,
        ..before.clone()
    }
    .save_to(&path)
    .unwrap();

    let after = Settings::load_or_default(&path);
    assert_eq!(after.locale, Locale::Ru);
    assert_eq!(
        Phrase::SettingsReloaded.get(after.locale),
        "Настройки перезагружены"
    );
}

#[test]
fn test_confirmation_toast_lifecycle() {
    let mut clock = TestClock::new();
    let mut toasts = ToastManager::new();
    let locale = Locale::En;

    toasts.push(
        Toast::success(Phrase::ToastSentTitle.get(locale))
            .with_detail(Phrase::ToastSentBody.get(locale))
            .with_duration(CONFIRMATION_TOAST_DURATION)
            .created(clock.now()),
    );
    toasts.push(Toast::info(Phrase::SettingsReloaded.get(locale)).created(clock.now()));

    clock.advance_ms(3_000);
    toasts.prune_expired(clock.now());
    assert_eq!(toasts.count(), 1);
    assert_eq!(toasts.toasts()[0].variant, ToastVariant::Success);

    clock.advance(CONFIRMATION_TOAST_DURATION);
    toasts.prune_expired(clock.now());
    assert_eq!(toasts.count(), 0);
    assert_eq!(toasts.next_expiry(), None);
}

#[test]
fn test_not_found_route() {
    let route = Route::resolve("/studio/booking");
    assert!(route.is_not_found());
    assert_eq!(Phrase::NotFoundTitle.get(Locale::Ru), "404");
}

#[derive(Serialize)]
struct GallerySummary {
    filter: &'static str,
    visible: Vec<&'static str>,
    lightbox: Option<u32>,
}

#[test]
fn snapshot_filtered_gallery() {
    let mut portfolio = PortfolioState::new(&PORTFOLIO, RevealOptions::default());
    portfolio.select_filter(Filter::Category(Category::Portraits));
    portfolio.open_lightbox(5);

    let summary = GallerySummary {
        filter: portfolio.filter().label().get(Locale::En),
        visible: portfolio
            .visible()
            .iter()
            .map(|item| item.title.get(Locale::En))
            .collect(),
        lightbox: portfolio.lightbox().map(|item| item.id),
    };
    insta::assert_json_snapshot!(summary, @r#"
    {
      "filter": "Portraits",
      "visible": [
        "Urban Portrait",
        "City Lights"
      ],
      "lightbox": 5
    }
    "#);
}
