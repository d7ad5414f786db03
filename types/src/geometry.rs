//! Section geometry and the active-section rule.
//!
//! Rendering measures where each section landed in the document and records
//! the extents here; [`active_section`] is then a pure function over the
//! scroll offset and those measurements, recomputed on every scroll change
//! and once at startup.

use crate::Section;

/// Rows below the viewport top where the activation line sits.
///
/// The page drew this line 100px under the top edge; at the conventional
/// 20px line height that is five terminal rows.
pub const ACTIVE_REFERENCE_ROWS: u16 = 5;

/// A section's bounding box in document rows. `bottom` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub top: u16,
    pub bottom: u16,
}

impl SectionExtent {
    #[must_use]
    pub const fn new(top: u16, bottom: u16) -> Self {
        Self { top, bottom }
    }

    #[must_use]
    pub const fn contains_row(self, row: u16) -> bool {
        self.top <= row && self.bottom >= row
    }

    #[must_use]
    pub const fn height(self) -> u16 {
        self.bottom.saturating_sub(self.top).saturating_add(1)
    }
}

/// Measured extents per section. A missing slot means the section was not
/// rendered; the active scan skips it silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionExtents {
    slots: [Option<SectionExtent>; Section::ALL.len()],
}

impl SectionExtents {
    pub fn record(&mut self, section: Section, extent: SectionExtent) {
        self.slots[section.index()] = Some(extent);
    }

    #[must_use]
    pub fn get(&self, section: Section) -> Option<SectionExtent> {
        self.slots[section.index()]
    }

    pub fn clear(&mut self) {
        self.slots = [None; Section::ALL.len()];
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// First section in page order whose box crosses the activation line.
///
/// Stateless and idempotent: the same offset and extents always produce the
/// same answer, so at most one section is active at a time and ties between
/// touching extents resolve to the earlier section.
#[must_use]
pub fn active_section(scroll_offset: u16, extents: &SectionExtents) -> Option<Section> {
    let line = scroll_offset.saturating_add(ACTIVE_REFERENCE_ROWS);
    Section::ALL
        .into_iter()
        .find(|section| extents.get(*section).is_some_and(|e| e.contains_row(line)))
}
