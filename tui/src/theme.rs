//! Color theme and glyphs for the folio TUI.
//!
//! Dark slate palette with the portfolio's violet/blue accent ramp and an
//! optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_types::ui::UiOptions;

/// Page palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (deep slate) ===
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_PANEL: Color = Color::Rgb(30, 41, 59);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(51, 65, 85);
    pub const BG_BORDER: Color = Color::Rgb(71, 85, 105);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249);
    pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

    // === Accent ramp ===
    // The first five match the particle palette exactly.
    pub const VIOLET: Color = Color::Rgb(147, 51, 234);
    pub const BLUE: Color = Color::Rgb(59, 130, 246);
    pub const PINK: Color = Color::Rgb(236, 72, 153);
    pub const GREEN: Color = Color::Rgb(16, 185, 129);
    pub const YELLOW: Color = Color::Rgb(245, 158, 11);
    pub const VIOLET_DIM: Color = Color::Rgb(109, 40, 217);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub pink: Color,
    pub green: Color,
    pub yellow: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::VIOLET,
            primary_dim: colors::VIOLET_DIM,
            accent: colors::BLUE,
            pink: colors::PINK,
            green: colors::GREEN,
            yellow: colors::YELLOW,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::Magenta,
            primary_dim: Color::Magenta,
            accent: Color::Cyan,
            pink: Color::Magenta,
            green: Color::Green,
            yellow: Color::Yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for icons and decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub bullet: &'static str,
    pub rule: &'static str,
    pub selected: &'static str,
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
    pub mail: &'static str,
    pub link: &'static str,
    pub resume: &'static str,
    pub focus_marker: &'static str,
    /// Particle glyph ramp, small to large. Indexed by size class.
    pub particles: &'static [&'static str],
    /// Soft fill for the parallax background blobs.
    pub blob: &'static str,
}

const PARTICLE_RAMP: &[&str] = &["·", "•", "●", "✦"];
const PARTICLE_RAMP_ASCII: &[&str] = &[".", "o", "O", "*"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            bullet: "*",
            rule: "-",
            selected: ">",
            arrow_up: "^",
            arrow_down: "v",
            track: "|",
            thumb: "#",
            mail: "@",
            link: ">",
            resume: "#",
            focus_marker: "|",
            particles: PARTICLE_RAMP_ASCII,
            blob: ".",
        }
    } else {
        Glyphs {
            bullet: "•",
            rule: "─",
            selected: "▸",
            arrow_up: "↑",
            arrow_down: "↓",
            track: "│",
            thumb: "█",
            mail: "✉",
            link: "↗",
            resume: "⇩",
            focus_marker: "▌",
            particles: PARTICLE_RAMP,
            blob: "░",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn nav_brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn nav_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn nav_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn hero_name(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn hero_tagline(palette: &Palette) -> Style {
        Style::default().fg(palette.accent)
    }

    #[must_use]
    pub fn hero_motto(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn kicker(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn lede(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn entry_title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn meta(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn badge(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn form_label(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn form_value(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn form_value_focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn form_placeholder(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn send_button(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn send_button_focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn footer(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.yellow)
            .add_modifier(Modifier::BOLD)
    }
}
