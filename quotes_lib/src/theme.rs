//! Light/dark display preference, passed explicitly to every renderer.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::QuotesError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Guesses the terminal background from a `COLORFGBG` value such as `15;0`.
    ///
    /// The last field is the background palette index; 0-6 and 8 are dark.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
        Some(match bg {
            0..=6 | 8 => ThemeMode::Dark,
            _ => ThemeMode::Light,
        })
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ThemeFile {
    mode: ThemeMode,
}

/// The active theme plus where it is persisted.
///
/// Created once at startup and handed to whatever renders output. Changes
/// are written back only when [`persist`](Self::persist) is called.
#[derive(Clone, Debug)]
pub struct ThemeContext {
    mode: ThemeMode,
    path: PathBuf,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode, path: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            path: path.into(),
        }
    }

    /// Reads the saved preference from `path`, falling back to `system_default`
    /// when nothing usable is saved.
    pub fn load(path: impl Into<PathBuf>, system_default: ThemeMode) -> Self {
        let path = path.into();
        let mode = read_saved(&path).unwrap_or(system_default);
        Self { mode, path }
    }

    /// [`load`](Self::load) using `COLORFGBG` as the system default.
    pub fn load_with_system_default(path: impl Into<PathBuf>) -> Self {
        let system = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| ThemeMode::from_colorfgbg(&v))
            .unwrap_or_default();
        Self::load(path, system)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flips between light and dark and returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Writes the current mode to the theme file.
    pub fn persist(&self) -> Result<(), QuotesError> {
        let body = toml::to_string(&ThemeFile { mode: self.mode })
            .map_err(|e| QuotesError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, body)?;
        tracing::debug!("Saved theme '{}' to {}", self.mode, self.path.display());
        Ok(())
    }
}

fn read_saved(path: &Path) -> Option<ThemeMode> {
    let text = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<ThemeFile>(&text) {
        Ok(file) => Some(file.mode),
        Err(e) => {
            tracing::warn!("Ignoring unreadable theme file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("daily-quotes-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn toggle_flips_mode() {
        let mut ctx = ThemeContext::new(ThemeMode::Light, temp_path("toggle"));
        assert_eq!(ctx.toggle(), ThemeMode::Dark);
        assert_eq!(ctx.toggle(), ThemeMode::Light);
    }

    #[test]
    fn missing_file_uses_system_default() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        assert_eq!(ThemeContext::load(&path, ThemeMode::Dark).mode(), ThemeMode::Dark);
    }

    #[test]
    fn persisted_preference_wins_over_system() {
        let path = temp_path("persist");
        let mut ctx = ThemeContext::new(ThemeMode::Light, &path);
        ctx.toggle();
        ctx.persist().unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("mode = \"dark\""), "{}", saved);
        assert_eq!(ThemeContext::load(&path, ThemeMode::Light).mode(), ThemeMode::Dark);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_is_ignored() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "mode = \"sepia\"").unwrap();
        assert_eq!(ThemeContext::load(&path, ThemeMode::Light).mode(), ThemeMode::Light);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn colorfgbg_detection() {
        assert_eq!(ThemeMode::from_colorfgbg("15;0"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_colorfgbg("0;15"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_colorfgbg("12;default;8"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_colorfgbg("garbage"), None);
    }
}
