//! Shared test utilities and fixtures
//!
//! Common infrastructure for the full-frame integration tests: apps with
//! deterministic options and draw passes against a [`TestBackend`].

#![allow(dead_code)]

use folio_engine::{App, Section, UiOptions};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 24;

/// Tall enough to show the whole contact section in one frame.
pub const TALL_HEIGHT: u16 = 48;

/// Options with motion disabled: jumps land instantly and the particle
/// field stays empty, so frames are deterministic.
pub fn still_options() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    }
}

/// A motion-free app that has been laid out by one draw pass at the
/// default test size, so section extents are already measured.
pub fn still_app(start_section: Option<Section>) -> App {
    let mut app = App::new(still_options(), start_section);
    render(&mut app);
    app
}

/// Draw one frame at the default test size and return the buffer.
pub fn render(app: &mut App) -> Buffer {
    render_sized(app, WIDTH, HEIGHT)
}

/// Draw one frame at the tall test size and return the buffer.
pub fn render_tall(app: &mut App) -> Buffer {
    render_sized(app, WIDTH, TALL_HEIGHT)
}

pub fn render_sized(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| folio_tui::draw(frame, app))
        .expect("draw");
    terminal.backend().buffer().clone()
}

/// Every cell of the buffer as one string, rows separated by newlines.
pub fn buffer_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        text.push_str(&row_text(buffer, y));
        text.push('\n');
    }
    text
}

/// The rendered symbols of a single buffer row.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let mut row = String::new();
    for x in 0..buffer.area.width {
        if let Some(cell) = buffer.cell((x, y)) {
            row.push_str(cell.symbol());
        }
    }
    row
}
