//! Light/dark theme preference and its on-disk home
//!
//! The preference starts out [`ThemePreference::Uninitialized`] and is
//! resolved once at startup. Persistence is a small JSON file in the platform
//! config directory; the view treats it as an opaque collaborator.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeStoreError;

/// A resolved theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme state held by the view, including the pre-startup state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Uninitialized,
    Light,
    Dark,
}

impl ThemePreference {
    /// The resolved theme, or `None` before startup completes.
    pub fn resolved(self) -> Option<Theme> {
        match self {
            ThemePreference::Uninitialized => None,
            ThemePreference::Light => Some(Theme::Light),
            ThemePreference::Dark => Some(Theme::Dark),
        }
    }

    pub fn is_initialized(self) -> bool {
        self.resolved().is_some()
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

/// Pick the startup theme: explicit override, then saved preference, then dark.
pub fn resolve_startup_theme(preferred: Option<Theme>, saved: Option<Theme>) -> Theme {
    preferred.or(saved).unwrap_or_default()
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeRecord {
    theme: Theme,
}

/// JSON file holding the saved theme: `{"theme": "dark"}`
#[derive(Debug, Clone)]
pub struct ThemeFile {
    path: PathBuf,
}

impl ThemeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/skyplan/theme.json`
    pub fn default_location() -> Result<Self, ThemeStoreError> {
        let dir = dirs::config_dir().ok_or(ThemeStoreError::NoConfigDir)?;
        Ok(Self::new(dir.join("skyplan").join("theme.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved theme. A missing file is not an error.
    pub fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let record: ThemeRecord = serde_json::from_str(&contents)?;
        Ok(Some(record.theme))
    }

    /// Write the theme, creating parent directories as needed.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&ThemeRecord { theme })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
