//! Configuration loading and validation.
//!
//! Channel defaults (recipient address, phone number) live in an optional
//! `config.toml`. Every field has a default, so the demo runs without any
//! file, flags, or environment variables.

use std::path::Path;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Delivery channel configuration.
    #[serde(default)]
    pub channels: ChannelsConfig,
}

/// Channel configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ChannelsConfig {
    /// Email channel settings.
    #[serde(default)]
    pub email: EmailChannelConfig,

    /// SMS channel settings.
    #[serde(default)]
    pub sms: SmsChannelConfig,
}

/// Email channel settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailChannelConfig {
    /// Fallback recipient address used when no override is supplied.
    #[serde(default = "default_recipient")]
    pub default_recipient: String,
}

impl Default for EmailChannelConfig {
    fn default() -> Self {
        Self {
            default_recipient: default_recipient(),
        }
    }
}

/// SMS channel settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsChannelConfig {
    /// Fallback phone number used when the header carries no override.
    #[serde(default = "default_number")]
    pub default_number: String,
}

impl Default for SmsChannelConfig {
    fn default() -> Self {
        Self {
            default_number: default_number(),
        }
    }
}

fn default_recipient() -> String {
    "admin@company.com".to_owned()
}

fn default_number() -> String {
    "+79991234567".to_owned()
}

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config at {}: {e}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse config at {}: {e}", path.display()))?;
    Ok(config)
}

/// Load configuration from `path` when the file exists, defaults otherwise.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or parsed.
pub fn load_or_default(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
