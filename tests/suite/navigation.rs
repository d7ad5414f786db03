//! Navigation tests driven through the real draw loop: layout measurement,
//! section jumps, glides, and the active-section readout.

use std::time::Duration;

use folio_engine::{App, Section, UiOptions};
use folio_types::ACTIVE_REFERENCE_ROWS;

use crate::common::{buffer_text, render, still_app};

#[test]
fn one_frame_measures_every_section() {
    let app = still_app(None);
    for section in Section::ALL {
        assert!(
            app.view.extents.get(section).is_some(),
            "{section} has no extent"
        );
    }
    assert!(app.view.scroll_max > 0);
}

#[test]
fn the_page_opens_at_the_top_with_about_active() {
    let app = still_app(None);
    assert_eq!(app.view.scroll.offset(), 0);
    assert_eq!(app.view.active_section, Some(Section::About));
}

#[test]
fn start_section_lands_on_launch() {
    let app = still_app(Some(Section::Skills));
    let top = app.view.extents.get(Section::Skills).expect("extent").top;
    let expected = top
        .saturating_sub(ACTIVE_REFERENCE_ROWS)
        .min(app.view.scroll_max);
    assert_eq!(app.view.scroll.offset(), expected);
    assert_eq!(app.view.active_section, Some(Section::Skills));
}

#[test]
fn jumps_land_on_every_section() {
    let mut app = still_app(None);
    for section in Section::ALL {
        app.jump_to_section(section);
        render(&mut app);
        assert_eq!(
            app.view.active_section,
            Some(section),
            "after jump to {section}"
        );
    }
}

#[test]
fn next_and_previous_walk_the_page_order() {
    let mut app = still_app(None);
    app.jump_to_next_section();
    assert_eq!(app.view.active_section, Some(Section::Education));
    app.jump_to_next_section();
    assert_eq!(app.view.active_section, Some(Section::Experience));
    app.jump_to_previous_section();
    assert_eq!(app.view.active_section, Some(Section::Education));
}

#[test]
fn previous_at_the_top_stays_put() {
    let mut app = still_app(None);
    app.jump_to_previous_section();
    assert_eq!(app.view.scroll.offset(), 0);
    assert_eq!(app.view.active_section, Some(Section::About));
}

#[test]
fn scroll_to_bottom_activates_contact() {
    let mut app = still_app(None);
    app.scroll_to_bottom();
    assert_eq!(app.view.scroll.offset(), app.view.scroll_max);
    render(&mut app);
    assert_eq!(app.view.active_section, Some(Section::Contact));
}

#[test]
fn the_status_bar_names_the_active_anchor() {
    let mut app = still_app(None);
    app.jump_to_section(Section::Projects);
    let buffer = render(&mut app);
    let text = buffer_text(&buffer);
    assert!(text.contains("#projects"));
    assert!(!text.contains("#about"));
}

#[test]
fn a_jump_glides_when_motion_is_enabled() {
    let mut app = App::new(UiOptions::default(), None);
    render(&mut app);

    app.jump_to_section(Section::Contact);
    assert_eq!(app.view.scroll.offset(), 0, "glide starts from the top");
    assert!(app.view.glide.is_some());

    let target = app
        .view
        .extents
        .get(Section::Contact)
        .expect("extent")
        .top
        .saturating_sub(ACTIVE_REFERENCE_ROWS)
        .min(app.view.scroll_max);

    app.advance(Duration::from_millis(100));
    let mid = app.view.scroll.offset();
    assert!(mid > 0, "glide has moved");
    assert!(mid < target, "glide has not landed yet");

    app.advance(Duration::from_millis(300));
    assert_eq!(app.view.scroll.offset(), target);
    assert!(app.view.glide.is_none());
}

#[test]
fn manual_scrolling_cancels_a_glide() {
    let mut app = App::new(UiOptions::default(), None);
    render(&mut app);

    app.jump_to_section(Section::Contact);
    assert!(app.view.glide.is_some());

    app.scroll_down();
    assert!(app.view.glide.is_none());
    assert_eq!(app.view.scroll.offset(), 3);
}
