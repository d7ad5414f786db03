//! Scroll position for the document view.

const LINE_STEP: u16 = 3;
const PAGE_STEP: u16 = 10;

/// Offset from the top of the rendered document.
///
/// The document is static and anchored at the top, so this is a plain
/// clamped offset; the maximum comes from rendering (content height minus
/// viewport height) and is re-applied every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    offset: u16,
}

impl ScrollPosition {
    #[must_use]
    pub fn offset(self) -> u16 {
        self.offset
    }

    pub fn set(&mut self, offset: u16, max: u16) {
        self.offset = offset.min(max);
    }

    /// Re-clamp after the content or viewport changed size.
    pub fn clamp_to(&mut self, max: u16) {
        self.offset = self.offset.min(max);
    }

    pub fn line_up(&mut self) {
        self.offset = self.offset.saturating_sub(LINE_STEP);
    }

    pub fn line_down(&mut self, max: u16) {
        self.offset = self.offset.saturating_add(LINE_STEP).min(max);
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(PAGE_STEP);
    }

    pub fn page_down(&mut self, max: u16) {
        self.offset = self.offset.saturating_add(PAGE_STEP).min(max);
    }

    /// Scroll up by 20% of total scrollable content.
    pub fn chunk_up(&mut self, max: u16) {
        let delta = (max / 5).max(1);
        self.offset = self.offset.saturating_sub(delta);
    }

    /// Scroll down by 20% of total scrollable content.
    pub fn chunk_down(&mut self, max: u16) {
        let delta = (max / 5).max(1);
        self.offset = self.offset.saturating_add(delta).min(max);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self, max: u16) {
        self.offset = max;
    }

    #[must_use]
    pub fn is_at_top(self) -> bool {
        self.offset == 0
    }

    #[must_use]
    pub fn is_at_bottom(self, max: u16) -> bool {
        self.offset >= max
    }
}
