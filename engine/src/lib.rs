//! Application engine for folio - state machine, animation timing, config.
//!
//! This crate contains the [`App`] state machine without TUI dependencies:
//!
//! - **Application state**: scroll position, glide animation, active section
//! - **Particle field**: timer-driven pool of ambient decorative particles
//! - **Contact form**: focus cycling over the grapheme-aware drafts
//! - **Config**: optional `~/.folio/config.toml` plus the `FOLIO_MOTION`
//!   environment override
//!
//! The TUI layer reads state from [`App`], forwards input back to it, and
//! pushes measured layout facts in through [`App::update_layout`].

// Re-export the domain types callers pair with the engine API.
pub use folio_types::ui::UiOptions;
pub use folio_types::{Profile, Section, SectionExtent, SectionExtents};

mod app;
mod config;
mod particles;

pub use app::App;
pub use config::{ConfigError, FolioConfig, UiConfig, apply_motion_env, config_path};
pub use particles::{MAX_PARTICLES, ParticleField};
