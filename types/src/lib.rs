//! Core domain types for folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod content;
mod geometry;
pub mod particle;
mod section;
pub mod ui;

pub use content::{
    ContactInfo, EducationEntry, ExperienceEntry, Profile, ProjectEntry, SkillGroup,
};
pub use geometry::{ACTIVE_REFERENCE_ROWS, SectionExtent, SectionExtents, active_section};
pub use particle::{Particle, ParticleColor};
pub use section::{Section, SectionParseError};
