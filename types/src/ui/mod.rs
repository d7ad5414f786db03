//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod input;
mod scroll;
mod view_state;

pub use animation::{EffectTimer, ScrollGlide, ease_out_cubic};
pub use input::{ContactForm, FieldDraft, FormField, InputMode};
pub use scroll::ScrollPosition;
pub use view_state::{UiOptions, ViewState};
