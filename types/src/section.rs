//! Page section identifiers.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named region of the page, in page order.
///
/// The order of [`Section::ALL`] is the order sections render in and the
/// order the active-section scan resolves ties in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Contact,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section anchor: {0}")]
pub struct SectionParseError(String);

impl Section {
    pub const ALL: [Self; 6] = [
        Self::About,
        Self::Education,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    /// In-page anchor name, as used in `start_section` config.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    /// Short label for the navigation header.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Kicker line shown above the section heading.
    #[must_use]
    pub const fn kicker(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "Data Science Professional",
            Self::Education => "Academic Background",
            Self::Experience => "Professional Experience",
            Self::Projects => "Selected Projects",
            Self::Skills => "Technical Skills",
            Self::Contact => "Get In Touch",
        }
    }

    /// Lede paragraph under the heading, where the page has one.
    #[must_use]
    pub const fn lede(self) -> Option<&'static str> {
        match self {
            Self::About => None,
            Self::Education => Some("My educational journey in data science and technology"),
            Self::Experience => Some("My journey in the data science and technology industry"),
            Self::Projects => Some("Showcasing my technical skills and problem-solving abilities"),
            Self::Skills => Some("Technologies and tools I work with"),
            Self::Contact => Some("Have a project in mind or want to chat? Feel free to reach out!"),
        }
    }

    /// Position in page order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section in page order, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Previous section in page order, if any.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let anchor = raw.trim().trim_start_matches('#').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
            .ok_or_else(|| SectionParseError(raw.trim().to_string()))
    }
}
