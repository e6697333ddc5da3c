//! Tip settings management

use crate::domain::{CurrencyDisplayMode, Sats};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default preset amounts offered on the tip screen
pub const DEFAULT_PRESETS: [Sats; 4] = [1_000, 2_100, 5_000, 10_000];

/// Tip settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipSettings {
    /// Unit amounts are shown in
    pub display_mode: CurrencyDisplayMode,
    /// Preset amounts in sats, in display order
    pub presets: Vec<Sats>,
}

impl Default for TipSettings {
    fn default() -> Self {
        Self {
            display_mode: CurrencyDisplayMode::Native,
            presets: DEFAULT_PRESETS.to_vec(),
        }
    }
}

impl TipSettings {
    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from a file, writing defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let mut settings: TipSettings = toml::from_str(&contents)?;
            settings.normalize();
            Ok(settings)
        } else {
            tracing::debug!(path = %path.display(), "No tip settings found, writing defaults");
            let settings = Self::default();
            settings.save_to(path)?;
            Ok(settings)
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save settings to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get settings file path
    pub fn config_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".openagents").join("tip.toml"))
    }

    /// Flip between sats and fiat display
    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    // Drop zero and duplicate presets, keeping first occurrence order
    fn normalize(&mut self) {
        let mut seen: Vec<Sats> = Vec::with_capacity(self.presets.len());
        self.presets.retain(|amount| {
            if *amount == 0 || seen.contains(amount) {
                false
            } else {
                seen.push(*amount);
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = TipSettings::default();
        assert_eq!(settings.display_mode, CurrencyDisplayMode::Native);
        assert_eq!(settings.presets, vec![1000, 2100, 5000, 10000]);
    }

    #[test]
    fn test_serialize_settings() {
        let settings = TipSettings::default();
        let toml_str = toml::to_string(&settings).unwrap();
        assert!(toml_str.contains("display_mode = \"native\""));
        assert!(toml_str.contains("presets"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: TipSettings = toml::from_str("display_mode = \"fiat\"").unwrap();
        assert_eq!(settings.display_mode, CurrencyDisplayMode::Fiat);
        assert_eq!(settings.presets, DEFAULT_PRESETS.to_vec());
    }

    #[test]
    fn test_toggle_display_mode() {
        let mut settings = TipSettings::default();
        settings.toggle_display_mode();
        assert_eq!(settings.display_mode, CurrencyDisplayMode::Fiat);
        settings.toggle_display_mode();
        assert_eq!(settings.display_mode, CurrencyDisplayMode::Native);
    }

    #[test]
    fn test_normalize_drops_zero_and_duplicates() {
        let mut settings = TipSettings {
            display_mode: CurrencyDisplayMode::Native,
            presets: vec![0, 500, 1000, 500, 0, 2000],
        };
        settings.normalize();
        assert_eq!(settings.presets, vec![500, 1000, 2000]);
    }
}
