//! Unit tests for the app state machine.

use std::time::Duration;

use super::App;
use folio_types::particle::SEED_BURST;
use folio_types::ui::{FormField, InputMode, UiOptions};
use folio_types::{Section, SectionExtent, SectionExtents};

/// Extents laid out back to back, 40 rows each. Document height 240 against
/// a 24-row viewport gives a scroll range of 0..=216.
fn stacked_extents() -> SectionExtents {
    let mut extents = SectionExtents::default();
    for (index, section) in Section::ALL.into_iter().enumerate() {
        let top = (index as u16) * 40;
        extents.record(section, SectionExtent::new(top, top + 39));
    }
    extents
}

fn laid_out_app(options: UiOptions) -> App {
    let mut app = App::new(options, None);
    app.update_layout(stacked_extents(), 216, (80, 24));
    app
}

fn reduced_motion() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    }
}

#[test]
fn new_app_defaults() {
    let app = App::new(UiOptions::default(), None);
    assert_eq!(app.input_mode, InputMode::Browse);
    assert!(!app.should_quit);
    assert!(app.particles.is_empty());
    assert_eq!(app.view.scroll.offset(), 0);
    assert_eq!(app.view.active_section, None);
}

#[test]
fn advance_without_layout_spawns_nothing() {
    let mut app = App::new(UiOptions::default(), None);
    app.advance(Duration::from_secs(2));
    assert!(app.particles.is_empty());
}

#[test]
fn first_advance_after_layout_seeds_particles() {
    let mut app = laid_out_app(UiOptions::default());
    app.advance(Duration::ZERO);
    assert_eq!(app.particles.len(), SEED_BURST);
}

#[test]
fn reduced_motion_keeps_field_empty() {
    let mut app = laid_out_app(reduced_motion());
    app.advance(Duration::from_secs(1));
    assert!(app.particles.is_empty());
}

#[test]
fn particles_flag_off_keeps_field_empty() {
    let options = UiOptions {
        particles: false,
        ..UiOptions::default()
    };
    let mut app = laid_out_app(options);
    app.advance(Duration::from_secs(1));
    assert!(app.particles.is_empty());
}

#[test]
fn toggling_reduced_motion_clears_and_reseeds() {
    let mut app = laid_out_app(UiOptions::default());
    app.advance(Duration::ZERO);
    assert!(!app.particles.is_empty());

    app.toggle_reduced_motion();
    app.advance(Duration::ZERO);
    assert!(app.particles.is_empty());

    app.toggle_reduced_motion();
    app.advance(Duration::ZERO);
    assert_eq!(app.particles.len(), SEED_BURST);
}

#[test]
fn active_section_tracks_scroll() {
    let mut app = laid_out_app(UiOptions::default());
    assert_eq!(app.view.active_section, Some(Section::About));

    app.scroll_to_bottom();
    assert_eq!(app.view.scroll.offset(), 216);
    assert_eq!(app.view.active_section, Some(Section::Contact));

    app.scroll_to_top();
    assert_eq!(app.view.active_section, Some(Section::About));
}

#[test]
fn jump_starts_glide_with_motion_enabled() {
    let mut app = laid_out_app(UiOptions::default());
    app.jump_to_section(Section::Projects);

    let glide = app.view.glide.as_ref().expect("glide should be running");
    // Projects tops out at row 120; the reference line sits 5 rows in.
    assert_eq!(glide.target(), 115);
    assert_eq!(app.view.scroll.offset(), 0, "no movement until advanced");
}

#[test]
fn glide_reaches_target_and_ends() {
    let mut app = laid_out_app(UiOptions::default());
    app.jump_to_section(Section::Projects);
    app.advance(Duration::from_millis(400));

    assert!(app.view.glide.is_none());
    assert_eq!(app.view.scroll.offset(), 115);
    assert_eq!(app.view.active_section, Some(Section::Projects));
}

#[test]
fn jump_lands_instantly_under_reduced_motion() {
    let mut app = laid_out_app(reduced_motion());
    app.jump_to_section(Section::Projects);

    assert!(app.view.glide.is_none());
    assert_eq!(app.view.scroll.offset(), 115);
    assert_eq!(app.view.active_section, Some(Section::Projects));
}

#[test]
fn jump_without_measured_extent_is_skipped() {
    let mut app = App::new(UiOptions::default(), None);
    app.jump_to_section(Section::Contact);
    assert!(app.view.glide.is_none());
    assert_eq!(app.view.scroll.offset(), 0);
}

#[test]
fn manual_scroll_cancels_glide() {
    let mut app = laid_out_app(UiOptions::default());
    app.jump_to_section(Section::Contact);
    app.advance(Duration::from_millis(8));
    assert!(app.view.glide.is_some());

    app.scroll_down();
    assert!(app.view.glide.is_none());
}

#[test]
fn layout_reclamps_scroll_after_resize() {
    let mut app = laid_out_app(UiOptions::default());
    app.scroll_to_bottom();
    assert_eq!(app.view.scroll.offset(), 216);

    // A wider terminal shrinks the wrapped document.
    app.update_layout(stacked_extents(), 100, (120, 24));
    assert_eq!(app.view.scroll.offset(), 100);
}

#[test]
fn start_section_lands_on_first_layout() {
    let mut app = App::new(UiOptions::default(), Some(Section::Skills));
    app.update_layout(stacked_extents(), 216, (80, 24));

    assert!(app.view.glide.is_none(), "startup placement does not glide");
    assert_eq!(app.view.scroll.offset(), 155);
    assert_eq!(app.view.active_section, Some(Section::Skills));
}

#[test]
fn tab_jumps_relative_to_active_section() {
    let mut app = laid_out_app(reduced_motion());
    assert_eq!(app.view.active_section, Some(Section::About));

    app.jump_to_next_section();
    assert_eq!(app.view.active_section, Some(Section::Education));

    app.jump_to_previous_section();
    assert_eq!(app.view.active_section, Some(Section::About));
}

#[test]
fn open_form_jumps_to_contact() {
    let mut app = laid_out_app(reduced_motion());
    app.open_form();

    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.view.active_section, Some(Section::Contact));
}

#[test]
fn closing_form_keeps_drafts() {
    let mut app = laid_out_app(reduced_motion());
    app.open_form();
    app.form
        .draft_mut(FormField::Name)
        .expect("name draft")
        .insert_str("Ada");
    app.close_form();

    assert_eq!(app.input_mode, InputMode::Browse);
    assert_eq!(app.form.draft(FormField::Name).expect("name draft").text(), "Ada");
}

#[test]
fn press_send_changes_nothing() {
    let mut app = laid_out_app(reduced_motion());
    app.open_form();
    app.form
        .draft_mut(FormField::Message)
        .expect("message draft")
        .insert_str("hello");
    app.form.focus = FormField::Send;

    app.press_send();

    assert_eq!(app.input_mode, InputMode::Form);
    assert!(!app.should_quit);
    assert_eq!(
        app.form.draft(FormField::Message).expect("message draft").text(),
        "hello"
    );
}
