use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use folio_types::Section;
use folio_types::ui::UiOptions;

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub ui: Option<UiConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config at {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Use ASCII-only glyphs for bullets, rules, and particles.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable scroll glides and ambient particle motion.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Render the floating particle field behind the page.
    #[serde(default = "default_true")]
    pub particles: bool,
    /// Section anchor to open on launch (e.g. "projects").
    pub start_section: Option<String>,
}

impl FolioConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        Self::load_from(&path)
    }

    /// Load from an explicit path. Absent file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Resolve display options from the `[ui]` table. Missing table means defaults.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        match &self.ui {
            Some(ui) => UiOptions {
                ascii_only: ui.ascii_only,
                high_contrast: ui.high_contrast,
                reduced_motion: ui.reduced_motion,
                particles: ui.particles,
            },
            None => UiOptions::default(),
        }
    }

    /// The section to open on launch, if one is configured and recognized.
    /// Unknown anchors are logged and skipped so the page opens at the top.
    #[must_use]
    pub fn start_section(&self) -> Option<Section> {
        let raw = self.ui.as_ref()?.start_section.as_deref()?;
        match Section::from_str(raw) {
            Ok(section) => Some(section),
            Err(err) => {
                tracing::warn!("Ignoring start_section: {}", err);
                None
            }
        }
    }
}

/// Apply the `FOLIO_MOTION` environment override on top of configured options.
/// `reduced` forces reduced motion, `full` forces it off; anything else is
/// logged and ignored.
pub fn apply_motion_env(options: &mut UiOptions) {
    if let Ok(value) = env::var("FOLIO_MOTION") {
        apply_motion_value(options, &value);
    }
}

fn apply_motion_value(options: &mut UiOptions, value: &str) {
    match value.to_ascii_lowercase().as_str() {
        "reduced" => options.reduced_motion = true,
        "full" => options.reduced_motion = false,
        other => {
            tracing::warn!("Ignoring unrecognized FOLIO_MOTION value: {other:?}");
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
