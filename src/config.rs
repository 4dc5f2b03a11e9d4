use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::library::DEFAULT_TONE_ID;
use crate::DEFAULT_HASHTAG_COUNT;

/// Field defaults applied by the CLI and server when a request leaves them
/// unset. The core generator itself never reads configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerDefaults {
    pub tone: String,
    pub intent: String,
    pub length: String,
    pub hashtag_count: usize,
}

impl Default for ComposerDefaults {
    fn default() -> Self {
        Self {
            tone: DEFAULT_TONE_ID.to_string(),
            intent: "awareness".to_string(),
            length: "standard".to_string(),
            hashtag_count: DEFAULT_HASHTAG_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComposerConfig {
    pub defaults: ComposerDefaults,
}

impl ComposerConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                ComposerConfig::default()
            }
        } else {
            ComposerConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload).map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(tone) = env::var("POSTCRAFT_TONE") {
            if !tone.trim().is_empty() {
                self.defaults.tone = tone;
            }
        }
        if let Ok(intent) = env::var("POSTCRAFT_INTENT") {
            if !intent.trim().is_empty() {
                self.defaults.intent = intent;
            }
        }
        if let Ok(length) = env::var("POSTCRAFT_LENGTH") {
            if !length.trim().is_empty() {
                self.defaults.length = length;
            }
        }
        if let Ok(count) = env::var("POSTCRAFT_HASHTAG_COUNT") {
            if let Ok(value) = count.parse::<usize>() {
                self.defaults.hashtag_count = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("POSTCRAFT_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/postcraft.toml")))
}
