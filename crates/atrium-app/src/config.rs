//! Page configuration for atrium
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/atrium/config.yaml

use anyhow::{Context, Result};
use atrium_core::tagline::TaglineTimings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    /// Player surface backend selection
    pub player: PlayerConfig,
    /// Page identity and link list
    pub content: ContentConfig,
    /// Tagline animation strings and timings
    pub tagline: TaglineConfig,
    /// Window-title animation
    pub title: TitleConfig,
    /// View counter strategy
    pub counter: CounterConfig,
    /// Device classification override
    pub device: DeviceConfig,
    /// Anti-inspection guard
    pub guard: GuardConfig,
}

/// Which surface backend to attach
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// External embed player over JSON IPC
    Embed,
    /// No video; degraded surface
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub backend: BackendKind,
    /// Address of the embed player's control socket
    pub address: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Embed,
            address: "127.0.0.1:7781".to_string(),
            connect_timeout_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Name shown on the landing surface and content header
    pub display_name: String,
    /// Link labels on the content page
    pub links: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            display_name: "atrium".to_string(),
            links: vec![
                "github".to_string(),
                "mail".to_string(),
                "discord".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaglineConfig {
    pub strings: Vec<String>,
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_full_ms: u64,
    pub hold_empty_ms: u64,
    pub start_delay_ms: u64,
}

impl Default for TaglineConfig {
    fn default() -> Self {
        Self {
            strings: vec![
                "hey, i'm atrium".to_string(),
                "welcome to my corner of the web".to_string(),
                "always upgrading".to_string(),
            ],
            type_ms: 135,
            delete_ms: 135,
            hold_full_ms: 2500,
            hold_empty_ms: 500,
            start_delay_ms: 500,
        }
    }
}

impl TaglineConfig {
    pub fn timings(&self) -> TaglineTimings {
        TaglineTimings {
            type_ms: self.type_ms,
            delete_ms: self.delete_ms,
            hold_full_ms: self.hold_full_ms,
            hold_empty_ms: self.hold_empty_ms,
            start_delay_ms: self.start_delay_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// Handle typed into the window title
    pub handle: String,
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_full_ms: u64,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            handle: "@atrium".to_string(),
            type_ms: 200,
            delete_ms: 150,
            hold_full_ms: 900,
        }
    }
}

impl TitleConfig {
    pub fn timings(&self) -> TaglineTimings {
        TaglineTimings {
            type_ms: self.type_ms,
            delete_ms: self.delete_ms,
            hold_full_ms: self.hold_full_ms,
            // After the title empties, the next character follows at the
            // typing interval
            hold_empty_ms: self.type_ms,
            start_delay_ms: 0,
        }
    }
}

/// How the view count is obtained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CounterStrategy {
    /// Local embedded record with floor + fallback store
    Local,
    /// Remote badge image
    Badge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub strategy: CounterStrategy,
    /// Page id for the badge service
    pub badge_page_id: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            strategy: CounterStrategy::Local,
            badge_page_id: "atrium.example".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeviceConfig {
    /// Force the device class instead of detecting it (touch kiosks)
    pub force_mobile: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    pub enabled: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/atrium/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("atrium")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PageConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PageConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PageConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - backend: {:?}, counter: {:?}, guard: {}",
                    config.player.backend,
                    config.counter.strategy,
                    config.guard.enabled
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PageConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PageConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PageConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}
