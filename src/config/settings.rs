use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{CoffeeCount, HourFormat, OutOfRangePolicy, Preset};

fn default_coffees() -> CoffeeCount {
    CoffeeCount::clamped(2)
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Where the slider starts.
    #[serde(default = "default_coffees")]
    pub default_coffees: CoffeeCount,
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            default_coffees: default_coffees(),
            preset: Preset::default(),
            out_of_range: OutOfRangePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub hour_format: HourFormat,
    /// Draw an energy bar next to each row of `curve`.
    #[serde(default = "default_true")]
    pub show_bars: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hour_format: HourFormat::default(),
            show_bars: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub curve: CurveConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "coffee-curve")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        log::info!("Wrote config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.curve.default_coffees.get(), 2);
        assert_eq!(config.curve.preset, Preset::Slider);
        assert_eq!(config.curve.out_of_range, OutOfRangePolicy::Reject);
        assert!(config.display.show_bars);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [curve]
            preset = "two-shot"

            [display]
            hour_format = "compact"
            "#,
        )
        .unwrap();
        assert_eq!(config.curve.preset, Preset::TwoShot);
        assert_eq!(config.curve.default_coffees.get(), 2);
        assert_eq!(config.display.hour_format, HourFormat::Compact);
        assert!(config.display.show_bars);
    }

    #[test]
    fn out_of_range_default_coffees_is_rejected() {
        let parsed: Result<AppConfig, _> = toml::from_str("[curve]\ndefault_coffees = 7\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.curve.default_coffees = CoffeeCount::clamped(4);
        config.curve.out_of_range = OutOfRangePolicy::Clamp;
        config.display.show_bars = false;

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }
}
