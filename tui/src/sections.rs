//! Document layout: the whole portfolio as one tall column of lines.
//!
//! Lines are wrapped here, to the content width, so the paragraph that
//! renders them needs no widget-level wrapping. Row counts stay exact and
//! the section extents recorded during the build match what lands on
//! screen row for row.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use folio_engine::App;
use folio_types::ui::{FieldDraft, FormField, InputMode};
use folio_types::{Profile, Section, SectionExtent, SectionExtents};

use crate::theme::{Glyphs, Palette, styles};

/// A fully laid out document plus where each section landed in it.
pub(crate) struct DocumentLayout {
    pub(crate) lines: Vec<Line<'static>>,
    pub(crate) extents: SectionExtents,
}

impl DocumentLayout {
    pub(crate) fn total_rows(&self) -> usize {
        self.lines.len()
    }
}

/// Builds the document at the given content width.
///
/// The hero block is folded into the About extent so the top of the page
/// activates exactly one nav label. Gap rows between sections are charged
/// to the earlier section, keeping coverage contiguous from the first row
/// to the last.
pub(crate) fn build_document(
    app: &App,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> DocumentLayout {
    let mut doc = DocumentBuilder {
        lines: Vec::new(),
        extents: SectionExtents::default(),
        width: usize::from(width.max(1)),
        palette,
        glyphs,
    };

    doc.hero(app.profile);
    for section in Section::ALL {
        let top = if section == Section::About {
            0
        } else {
            doc.lines.len()
        };
        doc.section_header(section);
        match section {
            Section::About => doc.about(app.profile),
            Section::Education => doc.education(app.profile),
            Section::Experience => doc.experience(app.profile),
            Section::Projects => doc.projects(app.profile),
            Section::Skills => doc.skills(app.profile),
            Section::Contact => doc.contact(app),
        }
        if section != Section::Contact {
            doc.blank();
            doc.blank();
        }
        let bottom = doc.lines.len().saturating_sub(1);
        doc.extents
            .record(section, SectionExtent::new(row(top), row(bottom)));
    }

    DocumentLayout {
        lines: doc.lines,
        extents: doc.extents,
    }
}

fn row(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}

struct DocumentBuilder<'a> {
    lines: Vec<Line<'static>>,
    extents: SectionExtents,
    width: usize,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
}

impl DocumentBuilder<'_> {
    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    /// Wrapped prose, one span per row.
    fn text(&mut self, text: &str, style: Style) {
        for part in wrap_text(text, self.width) {
            self.lines.push(Line::styled(part, style));
        }
    }

    fn rule(&mut self) {
        let rule = self.glyphs.rule.repeat(self.width);
        self.lines
            .push(Line::styled(rule, Style::default().fg(self.palette.bg_border)));
    }

    fn hero(&mut self, profile: &Profile) {
        self.text(profile.name, styles::hero_name(self.palette));
        self.text(profile.tagline, styles::hero_tagline(self.palette));
        self.text(profile.motto, styles::hero_motto(self.palette));
        self.blank();
        self.rule();
        self.blank();
    }

    fn section_header(&mut self, section: Section) {
        self.text(section.kicker(), styles::kicker(self.palette));
        self.text(section.title(), styles::heading(self.palette));
        if let Some(lede) = section.lede() {
            self.text(lede, styles::lede(self.palette));
        }
        self.blank();
    }

    /// A bullet with hanging indent on continuation rows.
    fn bullet(&mut self, text: &str, style: Style) {
        let indent = self.glyphs.bullet.width() + 1;
        let parts = wrap_text(text, self.width.saturating_sub(indent).max(1));
        for (index, part) in parts.into_iter().enumerate() {
            let prefix = if index == 0 {
                Span::styled(
                    format!("{} ", self.glyphs.bullet),
                    Style::default().fg(self.palette.primary),
                )
            } else {
                Span::raw(" ".repeat(indent))
            };
            self.lines.push(Line::from(vec![prefix, Span::styled(part, style)]));
        }
    }

    /// Badge chips flowed across as many rows as needed.
    fn badges(&mut self, items: &[&str]) {
        let style = styles::badge(self.palette);
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut col = 0usize;
        for item in items {
            let label = format!(" {item} ");
            let label_width = label.width();
            if !spans.is_empty() {
                if col + 1 + label_width > self.width {
                    self.lines.push(Line::from(std::mem::take(&mut spans)));
                    col = 0;
                } else {
                    spans.push(Span::raw(" "));
                    col += 1;
                }
            }
            spans.push(Span::styled(label, style));
            col += label_width;
        }
        if !spans.is_empty() {
            self.lines.push(Line::from(spans));
        }
    }

    fn about(&mut self, profile: &Profile) {
        for (index, paragraph) in profile.about.iter().enumerate() {
            if index > 0 {
                self.blank();
            }
            self.text(paragraph, styles::body(self.palette));
        }
    }

    fn education(&mut self, profile: &Profile) {
        for (index, entry) in profile.education.iter().enumerate() {
            if index > 0 {
                self.blank();
            }
            self.text(entry.degree, styles::entry_title(self.palette));
            self.text(entry.school, styles::body(self.palette));
            self.text(entry.period, styles::meta(self.palette));
            self.text(entry.summary, styles::body(self.palette));
            self.badges(entry.coursework);
        }
    }

    fn experience(&mut self, profile: &Profile) {
        for (index, entry) in profile.experience.iter().enumerate() {
            if index > 0 {
                self.blank();
            }
            self.text(entry.role, styles::entry_title(self.palette));
            self.lines.push(Line::from(vec![
                Span::styled(
                    entry.company.to_string(),
                    Style::default().fg(self.palette.accent),
                ),
                Span::styled(format!("  {}", entry.period), styles::meta(self.palette)),
            ]));
            for highlight in entry.highlights {
                self.bullet(highlight, styles::body(self.palette));
            }
            self.badges(entry.stack);
        }
    }

    fn projects(&mut self, profile: &Profile) {
        for (index, project) in profile.projects.iter().enumerate() {
            if index > 0 {
                self.blank();
            }
            self.text(project.name, styles::entry_title(self.palette));
            for highlight in project.highlights {
                self.bullet(highlight, styles::body(self.palette));
            }
            self.badges(project.stack);
        }
    }

    fn skills(&mut self, profile: &Profile) {
        for (index, group) in profile.skills.iter().enumerate() {
            if index > 0 {
                self.blank();
            }
            self.text(group.name, styles::entry_title(self.palette));
            self.badges(group.items);
        }
    }

    fn contact(&mut self, app: &App) {
        let contact = app.profile.contact;
        let icon = Style::default().fg(self.palette.primary);
        let link = styles::link(self.palette);
        for (glyph, target) in [
            (self.glyphs.mail, contact.email),
            (self.glyphs.link, contact.github),
            (self.glyphs.link, contact.linkedin),
            (self.glyphs.resume, contact.resume),
        ] {
            self.lines.push(Line::from(vec![
                Span::styled(format!("{glyph} "), icon),
                Span::styled(target.to_string(), link),
            ]));
        }
        self.blank();

        let editing = app.input_mode == InputMode::Form;
        for field in FormField::ALL {
            let focused = editing && app.form.focus == field;
            match app.form.draft(field) {
                Some(draft) => self.form_field(field, draft, focused),
                None => self.send_button(focused),
            }
        }

        self.blank();
        self.rule();
        let copyright = if app.view.ui_options.ascii_only {
            "(c) 2025 Astha Soni. All rights reserved."
        } else {
            "© 2025 Astha Soni. All rights reserved."
        };
        self.text(copyright, styles::footer(self.palette));
    }

    fn focus_prefix(&self, focused: bool) -> Span<'static> {
        if focused {
            Span::styled(
                format!("{} ", self.glyphs.focus_marker),
                Style::default().fg(self.palette.primary),
            )
        } else {
            Span::raw("  ")
        }
    }

    fn form_field(&mut self, field: FormField, draft: &FieldDraft, focused: bool) {
        let label_style = if focused {
            Style::default()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            styles::form_label(self.palette)
        };
        self.lines.push(Line::from(vec![
            self.focus_prefix(focused),
            Span::styled(field.label().to_string(), label_style),
        ]));

        let field_width = self.width.saturating_sub(2).max(1);
        let base = if focused {
            styles::form_value_focused(self.palette)
        } else {
            styles::form_value(self.palette)
        };
        let rows = if draft.is_empty() {
            let mut placeholder = styles::form_placeholder(self.palette);
            if focused {
                placeholder = placeholder.bg(self.palette.bg_highlight);
            }
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(
                    " ".to_string(),
                    base.add_modifier(Modifier::REVERSED),
                ));
            }
            spans.push(Span::styled(field.placeholder().to_string(), placeholder));
            vec![spans]
        } else {
            field_rows(draft, field_width, base, focused)
        };
        for spans in rows {
            self.lines.push(pad_field_row(spans, field_width, base));
        }
        self.blank();
    }

    fn send_button(&mut self, focused: bool) {
        let style = if focused {
            styles::send_button_focused(self.palette)
        } else {
            styles::send_button(self.palette)
        };
        self.lines.push(Line::from(vec![
            self.focus_prefix(focused),
            Span::styled(format!("  {}  ", FormField::Send.label()), style),
        ]));
    }
}

/// Pads a field row to the full field width so the background reads as an
/// input box, with a two-space indent in front.
fn pad_field_row(spans: Vec<Span<'static>>, field_width: usize, base: Style) -> Line<'static> {
    let used: usize = spans.iter().map(Span::width).sum();
    let mut padded = Vec::with_capacity(spans.len() + 2);
    padded.push(Span::raw("  "));
    padded.extend(spans);
    if used < field_width {
        padded.push(Span::styled(" ".repeat(field_width - used), base));
    }
    Line::from(padded)
}

/// Lays a draft out into rows of spans, hard-wrapped at the field width,
/// with the grapheme under the cursor reversed when the field is focused.
fn field_rows(
    draft: &FieldDraft,
    width: usize,
    base: Style,
    show_cursor: bool,
) -> Vec<Vec<Span<'static>>> {
    fn flush(spans: &mut Vec<Span<'static>>, current: &mut String, base: Style) {
        if !current.is_empty() {
            spans.push(Span::styled(std::mem::take(current), base));
        }
    }

    let cursor_style = base.add_modifier(Modifier::REVERSED);
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut col = 0usize;

    for (index, grapheme) in draft.text().graphemes(true).enumerate() {
        let at_cursor = show_cursor && index == draft.cursor();
        if grapheme == "\n" {
            if at_cursor {
                flush(&mut spans, &mut current, base);
                spans.push(Span::styled(" ".to_string(), cursor_style));
            }
            flush(&mut spans, &mut current, base);
            rows.push(std::mem::take(&mut spans));
            col = 0;
            continue;
        }
        let grapheme_width = grapheme.width().max(1);
        if col + grapheme_width > width {
            flush(&mut spans, &mut current, base);
            rows.push(std::mem::take(&mut spans));
            col = 0;
        }
        if at_cursor {
            flush(&mut spans, &mut current, base);
            spans.push(Span::styled(grapheme.to_string(), cursor_style));
        } else {
            current.push_str(grapheme);
        }
        col += grapheme_width;
    }

    if show_cursor && draft.cursor() >= draft.grapheme_count() {
        if col >= width {
            flush(&mut spans, &mut current, base);
            rows.push(std::mem::take(&mut spans));
        }
        flush(&mut spans, &mut current, base);
        spans.push(Span::styled(" ".to_string(), cursor_style));
    }
    flush(&mut spans, &mut current, base);
    rows.push(spans);
    rows
}

/// Greedy word wrap; words wider than the line are hard-broken.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut col = 0usize;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if col > 0 && col + 1 + word_width > width {
            rows.push(std::mem::take(&mut current));
            col = 0;
        } else if col > 0 {
            current.push(' ');
            col += 1;
        }
        if word_width <= width {
            current.push_str(word);
            col += word_width;
        } else {
            for grapheme in word.graphemes(true) {
                let grapheme_width = grapheme.width().max(1);
                if col + grapheme_width > width {
                    rows.push(std::mem::take(&mut current));
                    col = 0;
                }
                current.push_str(grapheme);
                col += grapheme_width;
            }
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
