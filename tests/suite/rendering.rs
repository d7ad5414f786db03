//! Frame content tests: the rendered document, nav bar, and display toggles.

use std::time::Duration;

use folio_engine::{App, Section, UiOptions};
use ratatui::style::Modifier;

use crate::common::{HEIGHT, WIDTH, buffer_text, render, render_sized, row_text, still_options};

#[test]
fn the_first_frame_carries_the_hero() {
    let mut app = App::new(still_options(), None);
    let buffer = render(&mut app);
    let text = buffer_text(&buffer);
    assert!(text.contains("Astha Soni"));
    assert!(text.contains("Data Scientist | Data Analyst | AI&ML Engineer"));
    assert!(text.contains("Where Data Science Meets Creativity and Purpose"));
}

#[test]
fn the_nav_lists_every_section_label() {
    let mut app = App::new(still_options(), None);
    let buffer = render(&mut app);
    let nav = row_text(&buffer, 1);
    for section in Section::ALL {
        assert!(nav.contains(section.nav_label()), "nav misses {section}");
    }
}

#[test]
fn only_the_active_label_is_underlined() {
    let mut app = App::new(still_options(), None);
    let buffer = render(&mut app);

    let mut underlined = String::new();
    for x in 0..WIDTH {
        let cell = buffer.cell((x, 1)).expect("nav cell");
        if cell.style().add_modifier.contains(Modifier::UNDERLINED) {
            underlined.push_str(cell.symbol());
        }
    }
    assert_eq!(underlined, "About");
}

#[test]
fn ascii_frames_contain_only_ascii() {
    let options = UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    };
    let mut app = App::new(options, None);
    render(&mut app);
    // Seed and grow the particle field so the overlay is exercised too.
    app.advance(Duration::from_secs(1));
    let buffer = render(&mut app);

    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let symbol = buffer.cell((x, y)).expect("cell").symbol();
            assert!(symbol.is_ascii(), "non-ascii {symbol:?} at ({x}, {y})");
        }
    }
}

#[test]
fn decorated_frames_use_the_unicode_glyphs() {
    let mut app = App::new(still_options(), None);
    let buffer = render(&mut app);
    let text = buffer_text(&buffer);
    assert!(text.contains('─'), "hero rule");
    assert!(text.contains('│'), "scrollbar track");
}

#[test]
fn the_high_contrast_palette_changes_the_frame() {
    let mut plain = App::new(still_options(), None);
    let mut contrast = App::new(
        UiOptions {
            high_contrast: true,
            ..still_options()
        },
        None,
    );
    assert_ne!(render(&mut plain), render(&mut contrast));
}

#[test]
fn toggling_ascii_switches_the_live_frame() {
    let mut app = App::new(still_options(), None);
    let unicode = render(&mut app);
    app.toggle_ascii_only();
    let ascii = render(&mut app);
    assert_ne!(unicode, ascii);
}

#[test]
fn a_resize_reclamps_the_scroll_offset() {
    let mut app = App::new(still_options(), None);
    render_sized(&mut app, WIDTH, HEIGHT);
    app.scroll_to_bottom();
    let short_max = app.view.scroll_max;

    render_sized(&mut app, WIDTH, 60);
    assert!(app.view.scroll_max < short_max, "taller viewport, less travel");
    assert!(app.view.scroll.offset() <= app.view.scroll_max);
}

#[test]
fn tiny_terminals_render_without_panic() {
    let mut app = App::new(UiOptions::default(), None);
    render_sized(&mut app, 8, 3);
    render_sized(&mut app, 2, 2);
    render_sized(&mut app, 1, 1);
}
