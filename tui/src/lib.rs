//! TUI rendering for folio using ratatui.

mod effects;
mod input;
mod sections;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use folio_engine::App;
use folio_types::Section;
use folio_types::ui::InputMode;

use self::sections::build_document;

/// Main draw function.
///
/// The document draws first: building it measures the section extents and
/// the scroll range, and those flow back into the app before the nav and
/// status bar read the active section. Overlays draw last so they can see
/// which cells hold text.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.view.ui_options;
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Nav header
            Constraint::Min(1),    // Document
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_document(frame, app, chunks[1], &palette, &glyphs);
    draw_nav(frame, app, chunks[0], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette);
}

fn draw_document(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let document_block = Block::default().padding(Padding::horizontal(2));
    let inner = document_block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let doc = build_document(app, inner.width, palette, glyphs);
    let total_rows = u16::try_from(doc.total_rows()).unwrap_or(u16::MAX);
    let max_scroll = total_rows.saturating_sub(inner.height);
    app.update_layout(doc.extents, max_scroll, (inner.width, inner.height));
    let scroll_offset = app.view.scroll.offset();

    // Lines are pre-wrapped to the inner width, so no widget-level wrap:
    // the scroll offset maps one to one onto document rows.
    let document = Paragraph::new(doc.lines)
        .block(document_block)
        .scroll((scroll_offset, 0));
    frame.render_widget(document, area);

    effects::render_overlays(frame, app, inner, palette, glyphs);

    if max_scroll > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(glyphs.arrow_up))
            .end_symbol(Some(glyphs.arrow_down))
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));

        // content_length is the scrollable range, not the row total, so the
        // thumb bottoms out exactly when the scroll does.
        let mut scrollbar_state =
            ScrollbarState::new(usize::from(max_scroll)).position(usize::from(scroll_offset));

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn draw_nav(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let active = app.view.active_section;
    let mut spans = vec![
        Span::styled(app.profile.name.to_string(), styles::nav_brand(palette)),
        Span::raw("   "),
    ];
    for (index, section) in Section::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if active == Some(section) {
            styles::nav_active(palette)
        } else {
            styles::nav_inactive(palette)
        };
        spans.push(Span::styled(section.nav_label().to_string(), style));
    }

    let rule = glyphs.rule.repeat(usize::from(area.width));
    let lines = vec![
        Line::from(spans),
        Line::styled(rule, Style::default().fg(palette.bg_border)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Browse => &[
            ("j/k", "scroll"),
            ("Tab", "section"),
            ("1-6", "jump"),
            ("i", "write"),
            ("q", "quit"),
        ],
        InputMode::Form => &[
            ("Tab", "next field"),
            ("Enter", "advance"),
            ("Esc", "browse"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            styles::key_highlight(palette),
        ));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }

    if let Some(active) = app.view.active_section {
        let anchor = Span::styled(
            format!("#{}", active.anchor()),
            Style::default().fg(palette.primary),
        );
        let used: usize = spans.iter().map(Span::width).sum::<usize>() + anchor.width() + 1;
        spans.push(Span::raw(
            " ".repeat(usize::from(area.width).saturating_sub(used)),
        ));
        spans.push(anchor);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
