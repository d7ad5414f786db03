//! Input mode and contact form drafts.

use unicode_segmentation::UnicodeSegmentation;

/// Which set of key bindings is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Scrolling around the page.
    #[default]
    Browse,
    /// Editing the contact form.
    Form,
}

/// Focus stops in the contact form, in visual order.
///
/// `Send` is a focusable control but not a text field; the page shipped a
/// submit button with nothing wired behind it, and activation here does
/// nothing either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    Send,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Subject,
        Self::Message,
        Self::Send,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::Send => "Send Message",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Your email",
            Self::Subject => "Subject",
            Self::Message => "Your message",
            Self::Send => "",
        }
    }

    /// Whether Enter inserts a newline instead of moving focus.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }

    #[must_use]
    pub const fn is_text(self) -> bool {
        !matches!(self, Self::Send)
    }

    /// Next focus stop, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous focus stop, wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Text being edited in one form field, with proper Unicode grapheme
/// cluster support. The cursor is a grapheme index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldDraft {
    text: String,
    cursor: usize,
}

impl FieldDraft {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        let index = self.byte_index();
        self.text.insert(index, ch);
        self.cursor_right();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let index = self.byte_index();
        self.text.insert_str(index, text);
        let inserted = text.graphemes(true).count();
        self.cursor = (self.cursor + inserted).min(self.grapheme_count());
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Delete back to the start of the previous word.
    pub fn delete_word_back(&mut self) {
        while self.cursor > 0 && self.grapheme_is_whitespace(self.cursor - 1) {
            self.backspace();
        }
        while self.cursor > 0 && !self.grapheme_is_whitespace(self.cursor - 1) {
            self.backspace();
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Byte index of the cursor in the underlying string.
    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|grapheme| grapheme.chars().all(char::is_whitespace))
    }
}

/// The contact form: four drafts plus the inert Send stop.
///
/// Drafts persist across mode switches; leaving the form does not clear
/// what was typed.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    pub focus: FormField,
    name: FieldDraft,
    email: FieldDraft,
    subject: FieldDraft,
    message: FieldDraft,
}

impl ContactForm {
    /// Draft for a text field; `None` for the Send stop.
    #[must_use]
    pub fn draft(&self, field: FormField) -> Option<&FieldDraft> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Email => Some(&self.email),
            FormField::Subject => Some(&self.subject),
            FormField::Message => Some(&self.message),
            FormField::Send => None,
        }
    }

    pub fn draft_mut(&mut self, field: FormField) -> Option<&mut FieldDraft> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Subject => Some(&mut self.subject),
            FormField::Message => Some(&mut self.message),
            FormField::Send => None,
        }
    }

    pub fn focused_draft_mut(&mut self) -> Option<&mut FieldDraft> {
        self.draft_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .into_iter()
            .filter_map(|field| self.draft(field))
            .all(FieldDraft::is_empty)
    }
}
