//! Contact form tests driven through the full draw loop.

use folio_engine::Section;
use folio_types::ui::{FormField, InputMode};
use ratatui::style::Modifier;

use crate::common::{HEIGHT, buffer_text, render, render_tall, row_text, still_app, still_options};

#[test]
fn opening_the_form_activates_contact() {
    let mut app = still_app(None);
    app.open_form();
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.form.focus, FormField::Name);

    render(&mut app);
    assert_eq!(app.view.active_section, Some(Section::Contact));
}

#[test]
fn every_field_label_renders_in_the_contact_section() {
    let mut app = still_app(None);
    app.open_form();
    let buffer = render_tall(&mut app);
    let text = buffer_text(&buffer);

    for label in ["Name", "Email", "Subject", "Message", "Send Message"] {
        assert!(text.contains(label), "missing label {label}");
    }
}

#[test]
fn typed_text_shows_up_in_the_rendered_field() {
    let mut app = still_app(None);
    app.open_form();
    if let Some(draft) = app.form.focused_draft_mut() {
        draft.insert_str("Ada Lovelace");
    }
    let buffer = render_tall(&mut app);
    assert!(buffer_text(&buffer).contains("Ada Lovelace"));
}

#[test]
fn form_mode_renders_exactly_one_cursor_cell() {
    let mut app = still_app(None);
    app.open_form();
    let buffer = render_tall(&mut app);

    let mut reversed = 0;
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).expect("cell");
            if cell.style().add_modifier.contains(Modifier::REVERSED) {
                reversed += 1;
            }
        }
    }
    assert_eq!(reversed, 1);
}

#[test]
fn browse_mode_renders_no_cursor() {
    let mut app = still_app(None);
    app.scroll_to_bottom();
    let buffer = render_tall(&mut app);

    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).expect("cell");
            assert!(!cell.style().add_modifier.contains(Modifier::REVERSED));
        }
    }
}

#[test]
fn send_focus_fills_the_button() {
    let mut app = still_app(None);
    app.open_form();
    for _ in 0..4 {
        app.form.focus_next();
    }
    assert_eq!(app.form.focus, FormField::Send);

    let buffer = render_tall(&mut app);
    let palette = folio_tui::palette(still_options());
    let mut filled = false;
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).expect("cell");
            if cell.style().bg == Some(palette.primary) {
                filled = true;
            }
        }
    }
    assert!(filled, "focused send button is filled with the primary color");
}

#[test]
fn closing_the_form_keeps_the_drafts() {
    let mut app = still_app(None);
    app.open_form();
    if let Some(draft) = app.form.focused_draft_mut() {
        draft.insert_str("hello");
    }
    app.close_form();
    assert_eq!(app.input_mode, InputMode::Browse);

    app.open_form();
    let draft = app.form.draft(FormField::Name).expect("name draft");
    assert_eq!(draft.text(), "hello");
}

#[test]
fn the_message_field_renders_multiple_lines() {
    let mut app = still_app(None);
    app.open_form();
    app.form.focus = FormField::Message;
    if let Some(draft) = app.form.focused_draft_mut() {
        draft.insert_str("first line");
        draft.insert_newline();
        draft.insert_str("second line");
    }
    let buffer = render_tall(&mut app);
    let text = buffer_text(&buffer);
    assert!(text.contains("first line"));
    assert!(text.contains("second line"));
}

#[test]
fn the_status_bar_switches_hints_with_the_mode() {
    let mut app = still_app(None);
    let browse = row_text(&render(&mut app), HEIGHT - 2);
    assert!(browse.contains("q quit"));

    app.open_form();
    let form = row_text(&render(&mut app), HEIGHT - 2);
    assert!(form.contains("Esc browse"));
    assert!(!form.contains("q quit"));
}
