//! Application state machine for folio.
//!
//! [`App`] owns everything the frame loop mutates: the scroll position and
//! glide animation, the measured section extents, the ambient particle
//! field, and the contact form drafts. The TUI layer reads state from `App`
//! and forwards input back to it. No rendering logic lives in this crate.
//!
//! Layout facts (section extents, scroll maximum, viewport size) flow the
//! other way: rendering measures them each frame and pushes them back in
//! through [`App::update_layout`] before the frame is drawn, so the active
//! section and scroll clamping always reflect the current terminal width.

use std::time::{Duration, Instant};

use folio_types::ui::{
    ContactForm, FieldDraft, FormField, InputMode, ScrollGlide, UiOptions, ViewState,
};
use folio_types::{ACTIVE_REFERENCE_ROWS, Profile, Section, SectionExtents, active_section};

use crate::particles::ParticleField;

pub struct App {
    pub profile: &'static Profile,
    pub view: ViewState,
    pub particles: ParticleField,
    pub form: ContactForm,
    pub input_mode: InputMode,
    pub should_quit: bool,
    /// Section to land on once the first layout pass has measured extents.
    pending_start: Option<Section>,
    particles_seeded: bool,
}

impl App {
    #[must_use]
    pub fn new(options: UiOptions, start_section: Option<Section>) -> Self {
        Self {
            profile: Profile::standard(),
            view: ViewState::new(options),
            particles: ParticleField::new(),
            form: ContactForm::default(),
            input_mode: InputMode::Browse,
            should_quit: false,
            pending_start: start_section,
            particles_seeded: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations by the wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        self.advance(dt);
    }

    /// Advance animations by an explicit delta. [`App::tick`] measures the
    /// delta from wall-clock time; this is the deterministic core.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(mut glide) = self.view.glide.take() {
            glide.advance(dt);
            self.view
                .scroll
                .set(glide.current_offset(), self.view.scroll_max);
            if !glide.is_finished() {
                self.view.glide = Some(glide);
            }
        }

        if self.view.ui_options.particles_enabled() {
            let viewport = self.view.viewport;
            if !self.particles_seeded && viewport.0 > 0 && viewport.1 > 0 {
                self.particles.seed_burst(viewport);
                self.particles_seeded = true;
            }
            self.particles.tick(dt.as_secs_f32(), viewport);
        } else if !self.particles.is_empty() {
            self.particles.clear();
        }

        self.refresh_active_section();
    }

    /// Push the layout facts rendering measured for the current frame.
    /// The scroll offset is re-clamped against the new maximum so a terminal
    /// resize cannot leave the view past the end of the document.
    pub fn update_layout(&mut self, extents: SectionExtents, scroll_max: u16, viewport: (u16, u16)) {
        self.view.extents = extents;
        self.view.scroll_max = scroll_max;
        self.view.viewport = viewport;
        self.view.scroll.clamp_to(scroll_max);

        if let Some(section) = self.pending_start.take() {
            self.jump_instant(section);
        }

        self.refresh_active_section();
    }

    fn refresh_active_section(&mut self) {
        self.view.active_section = active_section(self.view.scroll.offset(), &self.view.extents);
    }

    // Scrolling. Every manual movement cancels a running glide so the user
    // always wins over the animation.

    pub fn scroll_up(&mut self) {
        self.view.glide = None;
        self.view.scroll.line_up();
        self.refresh_active_section();
    }

    pub fn scroll_down(&mut self) {
        self.view.glide = None;
        self.view.scroll.line_down(self.view.scroll_max);
        self.refresh_active_section();
    }

    pub fn scroll_page_up(&mut self) {
        self.view.glide = None;
        self.view.scroll.page_up();
        self.refresh_active_section();
    }

    pub fn scroll_page_down(&mut self) {
        self.view.glide = None;
        self.view.scroll.page_down(self.view.scroll_max);
        self.refresh_active_section();
    }

    /// Scroll up by 20% of total scrollable content.
    pub fn scroll_up_chunk(&mut self) {
        self.view.glide = None;
        self.view.scroll.chunk_up(self.view.scroll_max);
        self.refresh_active_section();
    }

    /// Scroll down by 20% of total scrollable content.
    pub fn scroll_down_chunk(&mut self) {
        self.view.glide = None;
        self.view.scroll.chunk_down(self.view.scroll_max);
        self.refresh_active_section();
    }

    pub fn scroll_to_top(&mut self) {
        self.view.glide = None;
        self.view.scroll.to_top();
        self.refresh_active_section();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.view.glide = None;
        self.view.scroll.to_bottom(self.view.scroll_max);
        self.refresh_active_section();
    }

    /// Scroll so the section's top sits at the active-section reference
    /// line. Glides when motion is enabled, lands instantly otherwise. A
    /// section without a measured extent is skipped.
    pub fn jump_to_section(&mut self, section: Section) {
        let Some(target) = self.jump_target(section) else {
            return;
        };
        if self.view.ui_options.reduced_motion {
            self.view.glide = None;
            self.view.scroll.set(target, self.view.scroll_max);
            self.refresh_active_section();
        } else {
            self.view.glide = Some(ScrollGlide::new(self.view.scroll.offset(), target));
        }
    }

    /// Jump one section forward in page order; does nothing at the last
    /// section or before any layout has been measured.
    pub fn jump_to_next_section(&mut self) {
        let target = match self.view.active_section {
            Some(active) => active.next(),
            None => Some(Section::About),
        };
        if let Some(section) = target {
            self.jump_to_section(section);
        }
    }

    /// Jump one section back in page order; does nothing at the first.
    pub fn jump_to_previous_section(&mut self) {
        let target = match self.view.active_section {
            Some(active) => active.previous(),
            None => Some(Section::Contact),
        };
        if let Some(section) = target {
            self.jump_to_section(section);
        }
    }

    fn jump_instant(&mut self, section: Section) {
        if let Some(target) = self.jump_target(section) {
            self.view.glide = None;
            self.view.scroll.set(target, self.view.scroll_max);
            self.refresh_active_section();
        }
    }

    fn jump_target(&self, section: Section) -> Option<u16> {
        let extent = self.view.extents.get(section)?;
        Some(
            extent
                .top
                .saturating_sub(ACTIVE_REFERENCE_ROWS)
                .min(self.view.scroll_max),
        )
    }

    // Contact form.

    /// Open the contact form: jump to the contact section and switch to
    /// form input. Drafts keep whatever was typed last time.
    pub fn open_form(&mut self) {
        self.input_mode = InputMode::Form;
        self.jump_to_section(Section::Contact);
    }

    /// Leave the form without touching the drafts.
    pub fn close_form(&mut self) {
        self.input_mode = InputMode::Browse;
    }

    /// The send button is an inert focus stop. Nothing is delivered and no
    /// endpoint exists; the press is only worth a debug line.
    pub fn press_send(&mut self) {
        debug_assert_eq!(self.form.focus, FormField::Send);
        let field_len = |field| self.form.draft(field).map_or(0, FieldDraft::grapheme_count);
        tracing::debug!(
            name_len = field_len(FormField::Name),
            message_len = field_len(FormField::Message),
            "contact form send pressed; no delivery is wired"
        );
    }

    // Display toggles.

    pub fn toggle_ascii_only(&mut self) {
        self.view.ui_options.ascii_only = !self.view.ui_options.ascii_only;
    }

    /// Toggle reduced motion. Enabling it finishes a running glide at its
    /// target and clears the particle field; disabling re-seeds the field on
    /// the next frame.
    pub fn toggle_reduced_motion(&mut self) {
        self.view.ui_options.reduced_motion = !self.view.ui_options.reduced_motion;
        if self.view.ui_options.reduced_motion {
            if let Some(glide) = self.view.glide.take() {
                self.view.scroll.set(glide.target(), self.view.scroll_max);
                self.refresh_active_section();
            }
            self.particles.clear();
        } else {
            self.particles_seeded = false;
        }
    }
}

#[cfg(test)]
mod tests;
