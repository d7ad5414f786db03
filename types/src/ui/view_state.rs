//! View state for rendering.
//!
//! Groups the state rendering reads and writes each frame, separate from
//! the orchestration concerns in the engine's `App`.

use std::time::Instant;

use crate::geometry::SectionExtents;
use crate::section::Section;

use super::animation::ScrollGlide;
use super::scroll::ScrollPosition;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
    /// Whether the ambient particle field runs at all.
    pub particles: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            reduced_motion: false,
            particles: true,
        }
    }
}

impl UiOptions {
    /// Particles need both the feature switch and motion.
    #[must_use]
    pub fn particles_enabled(&self) -> bool {
        self.particles && !self.reduced_motion
    }
}

/// State rendering reads and updates every frame.
#[derive(Debug)]
pub struct ViewState {
    pub scroll: ScrollPosition,
    /// Maximum scroll offset (content height - viewport), measured by
    /// rendering.
    pub scroll_max: u16,
    /// Document viewport size (width, height), measured by rendering.
    pub viewport: (u16, u16),
    /// Where each section landed in the document, measured by rendering.
    pub extents: SectionExtents,
    /// Section currently crossing the activation line.
    pub active_section: Option<Section>,
    /// In-flight eased section jump.
    pub glide: Option<ScrollGlide>,
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scroll: ScrollPosition::default(),
            scroll_max: 0,
            viewport: (0, 0),
            extents: SectionExtents::default(),
            active_section: None,
            glide: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UiOptions;

    #[test]
    fn particles_default_on() {
        let options = UiOptions::default();
        assert!(options.particles);
        assert!(options.particles_enabled());
    }

    #[test]
    fn reduced_motion_disables_particles() {
        let options = UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        };
        assert!(!options.particles_enabled());
    }

    #[test]
    fn particle_switch_disables_particles() {
        let options = UiOptions {
            particles: false,
            ..UiOptions::default()
        };
        assert!(!options.particles_enabled());
    }
}
