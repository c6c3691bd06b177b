//! Application configuration for Fireside
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/fireside/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FiresideConfig {
    /// Clip upload settings
    pub upload: UploadConfig,
    /// Window settings
    pub window: WindowConfig,
    /// Directory holding the player asset bundles (covers, clips, audio)
    /// Default: ~/Music/fireside-assets
    pub assets_path: PathBuf,
}

impl Default for FiresideConfig {
    fn default() -> Self {
        let assets_path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Music")
            .join("fireside-assets");

        Self {
            upload: UploadConfig::default(),
            window: WindowConfig::default(),
            assets_path,
        }
    }
}

/// Upload endpoint section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Endpoint receiving the recorded clip as multipart form data
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://fireside-demo.example.com/api/moments".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Window section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        // Portrait layout, the experience is phone-shaped
        Self {
            width: 480.0,
            height: 860.0,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/fireside/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("fireside")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> FiresideConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return FiresideConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<FiresideConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - endpoint: {}, assets: {:?}",
                    config.upload.endpoint,
                    config.assets_path
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                FiresideConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            FiresideConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &FiresideConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FiresideConfig::default();
        assert!(config.upload.endpoint.starts_with("https://"));
        assert_eq!(config.upload.timeout_secs, 30);
        assert_eq!(config.window.width, 480.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config(Path::new("/definitely/not/a/config.yaml"));
        assert_eq!(config.upload.timeout_secs, 30);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = FiresideConfig {
            upload: UploadConfig {
                endpoint: "http://localhost:9999/upload".to_string(),
                timeout_secs: 5,
            },
            window: WindowConfig {
                width: 800.0,
                height: 600.0,
            },
            assets_path: PathBuf::from("/tmp/fireside-assets"),
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: FiresideConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.upload.endpoint, "http://localhost:9999/upload");
        assert_eq!(parsed.upload.timeout_secs, 5);
        assert_eq!(parsed.window.height, 600.0);
        assert_eq!(parsed.assets_path, PathBuf::from("/tmp/fireside-assets"));
    }
}
