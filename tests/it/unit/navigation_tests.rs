//! Unit tests for navigation module.

use photocraft::content::{Locale, Phrase};
use photocraft::navigation::{NavState, Route, Section};

#[test]
fn test_sections_in_scroll_order() {
    for (ix, section) in Section::ALL.iter().enumerate() {
        assert_eq!(section.index(), ix);
    }
    assert_eq!(Section::Home.anchor(), "#home");
    assert_eq!(Section::Contact.anchor(), "#contact");
}

#[test]
fn test_from_anchor_accepts_both_forms() {
    assert_eq!(Section::from_anchor("#portfolio"), Some(Section::Portfolio));
    assert_eq!(Section::from_anchor("services"), Some(Section::Services));
    assert_eq!(Section::from_anchor("#gallery"), None);
    assert_eq!(Section::from_anchor(""), None);
}

#[test]
fn test_anchor_round_trips_for_every_section() {
    for section in Section::ALL {
        assert_eq!(Section::from_anchor(section.anchor()), Some(section));
    }
}

#[test]
fn test_section_labels() {
    assert_eq!(Section::About.label(), Phrase::NavAbout);
    assert_eq!(Section::Home.label().get(Locale::En), "Home");
}

#[test]
fn test_navbar_becomes_solid_after_threshold() {
    let mut nav = NavState::new();
    assert!(!nav.on_scroll(50.0), "exactly at the threshold is not scrolled");
    assert!(!nav.is_scrolled());

    assert!(nav.on_scroll(50.5));
    assert!(nav.is_scrolled());
    assert!(!nav.on_scroll(400.0), "no change while staying scrolled");

    assert!(nav.on_scroll(0.0));
    assert!(!nav.is_scrolled());
}

#[test]
fn test_following_a_link_closes_menu() {
    let mut nav = NavState::new();
    nav.toggle_menu();
    assert!(nav.is_menu_open());

    let target = nav.follow_link(Section::Testimonials);
    assert_eq!(target, Section::Testimonials);
    assert!(!nav.is_menu_open());
}

#[test]
fn test_toggle_menu_twice() {
    let mut nav = NavState::new();
    nav.toggle_menu();
    nav.toggle_menu();
    assert!(!nav.is_menu_open());
}

#[test]
fn test_root_routes_resolve_home() {
    assert_eq!(Route::resolve("/"), Route::Home { section: None });
    assert_eq!(Route::resolve(""), Route::Home { section: None });
    assert_eq!(Route::resolve("  /  "), Route::Home { section: None });
    assert_eq!(Route::resolve("/#contact"), Route::Home {
        section: Some(Section::Contact)
    });
    assert_eq!(Route::resolve("#about"), Route::Home {
        section: Some(Section::About)
    });
}

#[test]
fn test_unknown_anchor_still_shows_page() {
    assert_eq!(Route::resolve("/#pricing"), Route::Home { section: None });
}

#[test]
fn test_unknown_path_is_not_found() {
    let route = Route::resolve("/gallery#portfolio");
    assert!(route.is_not_found());
    assert_eq!(route, Route::NotFound {
        path: "/gallery".to_string()
    });
    assert!(!Route::default().is_not_found());
}
