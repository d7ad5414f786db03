//! Background overlays: floating particles and parallax color blobs.
//!
//! Overlays draw after the document so they can see what is under them.
//! A cell is only filled when it sits in a blank run, so document text
//! always wins over decoration.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

use folio_engine::App;

use crate::theme::{Glyphs, Palette};

pub(crate) fn render_overlays(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    draw_particles(buf, app, area, glyphs);
    draw_blobs(buf, app, area, palette, glyphs);
}

fn draw_particles(buf: &mut Buffer, app: &App, area: Rect, glyphs: &Glyphs) {
    for particle in app.particles.particles() {
        let col = particle.x.round() as i32;
        let row = (particle.y + particle.float_offset()).round() as i32;
        if col < 0 || row < 0 || col >= i32::from(area.width) || row >= i32::from(area.height) {
            continue;
        }
        let x = area.x + col as u16;
        let y = area.y + row as u16;
        if !in_blank_run(buf, area, x, y) {
            continue;
        }
        let Some(glyph) = glyphs.particles.get(particle.size_class()) else {
            continue;
        };
        let (r, g, b) = particle.color.rgb();
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(glyph);
            cell.set_style(
                Style::default()
                    .fg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::DIM),
            );
        }
    }
}

/// Soft color washes behind the content, echoing the page's background
/// gradients. They drift against the scroll direction a little slower than
/// the text, and hold still under reduced motion.
struct Blob {
    x_frac: f32,
    y_frac: f32,
    factor: f32,
}

const BLOBS: [Blob; 4] = [
    Blob {
        x_frac: 0.15,
        y_frac: 0.20,
        factor: 0.05,
    },
    Blob {
        x_frac: 0.75,
        y_frac: 0.50,
        factor: 0.08,
    },
    Blob {
        x_frac: 0.30,
        y_frac: 0.80,
        factor: 0.06,
    },
    Blob {
        x_frac: 0.85,
        y_frac: 0.30,
        factor: 0.04,
    },
];

fn blob_color(index: usize, palette: &Palette) -> Color {
    match index {
        0 => palette.primary,
        1 => palette.accent,
        2 => palette.pink,
        _ => palette.green,
    }
}

fn draw_blobs(buf: &mut Buffer, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let width = i32::from(area.width);
    let height = i32::from(area.height);
    let reduced = app.view.ui_options.reduced_motion;
    let scroll = f32::from(app.view.scroll.offset());
    for (index, blob) in BLOBS.iter().enumerate() {
        let base_col = (blob.x_frac * (width - 1).max(0) as f32).round() as i32;
        let base_row = (blob.y_frac * (height - 1).max(0) as f32).round() as i32;
        let shift = if reduced {
            0
        } else {
            (scroll * blob.factor).round() as i32
        };
        let center_row = (base_row - shift).rem_euclid(height.max(1));
        let style = Style::default()
            .fg(blob_color(index, palette))
            .add_modifier(Modifier::DIM);
        for dy in -1i32..=1 {
            let half = if dy == 0 { 3 } else { 2 };
            // Rows wrap with the center, so a blob straddling the top edge
            // continues on the bottom row instead of being clipped.
            let row = (center_row + dy).rem_euclid(height.max(1));
            for dx in -half..=half {
                let col = base_col + dx;
                if col < 0 || col >= width {
                    continue;
                }
                let x = area.x + col as u16;
                let y = area.y + row as u16;
                if !in_blank_run(buf, area, x, y) {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(glyphs.blob);
                    cell.set_style(style);
                }
            }
        }
    }
}

/// The cell and both horizontal neighbors are blank; neighbors outside the
/// area count as blank. Keeps decoration a full cell away from text.
fn in_blank_run(buf: &Buffer, area: Rect, x: u16, y: u16) -> bool {
    if !is_blank(buf, x, y) {
        return false;
    }
    let left = x == area.x || is_blank(buf, x - 1, y);
    let right = x + 1 >= area.x.saturating_add(area.width) || is_blank(buf, x + 1, y);
    left && right
}

fn is_blank(buf: &Buffer, x: u16, y: u16) -> bool {
    buf.cell((x, y)).is_some_and(|cell| cell.symbol() == " ")
}
