use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::presentation::{self, Mode, Settings};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "teleprompter";

pub const VALID_KEYS: &str =
    "defaults.theme, defaults.mode, defaults.speed, defaults.font_size, defaults.mirrored";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirrored: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `teleprompter config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::debug!("using default config: {e}");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("# Teleprompter configuration\n{yaml}"))
    }

    pub fn theme_name(&self) -> &str {
        self.defaults
            .as_ref()
            .and_then(|d| d.theme.as_deref())
            .unwrap_or("dark")
    }

    /// Presentation settings from the config, falling back to built-in
    /// defaults and clamping numbers into range.
    pub fn presentation_settings(&self) -> Settings {
        let base = Settings::default();
        let Some(d) = &self.defaults else {
            return base;
        };
        Settings {
            mode: d.mode.unwrap_or(base.mode),
            speed: d.speed.unwrap_or(base.speed),
            font_size: d.font_size.unwrap_or(base.font_size),
            mirrored: d.mirrored.unwrap_or(base.mirrored),
        }
        .clamped()
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                defaults.theme = Some(value.to_string());
            }
            "defaults.mode" => {
                let Some(mode) = Mode::from_name(value) else {
                    anyhow::bail!("Invalid mode: {value}. Must be 'scroll' or 'typewriter'.");
                };
                defaults.mode = Some(mode);
            }
            "defaults.speed" => {
                defaults.speed = Some(parse_in_range(
                    "speed",
                    value,
                    presentation::SPEED_RANGE,
                )?);
            }
            "defaults.font_size" => {
                defaults.font_size = Some(parse_in_range(
                    "font_size",
                    value,
                    presentation::FONT_SIZE_RANGE,
                )?);
            }
            "defaults.mirrored" => {
                let mirrored = match value {
                    "true" => true,
                    "false" => false,
                    _ => anyhow::bail!("Invalid mirrored: {value}. Must be 'true' or 'false'."),
                };
                defaults.mirrored = Some(mirrored);
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }
}

fn parse_in_range(name: &str, value: &str, range: std::ops::RangeInclusive<u32>) -> Result<u32> {
    match value.parse::<u32>() {
        Ok(n) if range.contains(&n) => Ok(n),
        _ => anyhow::bail!(
            "Invalid {name}: {value}. Must be a number from {} to {}.",
            range.start(),
            range.end()
        ),
    }
}
