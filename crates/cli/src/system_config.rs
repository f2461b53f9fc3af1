//! System-wide configuration
//!
//! Lives at `$LADDER_CONFIG` when set, otherwise
//! `<config_dir>/ladder/config.toml`. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use session::EnvironmentCatalog;
use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "LADDER_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    pub environments: EnvironmentsConfig,
    pub draft: DraftConfig,
    pub submit: SubmitConfig,
}

/// Organization-defined environment types
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentsConfig {
    pub custom: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Label used by `ladder open` without `--label`
    pub default_label: String,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            default_label: "development".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Outbox for submitted schedules; unset means `.ladder/outbox`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbox_dir: Option<PathBuf>,
}

impl SystemConfig {
    pub fn catalog(&self) -> EnvironmentCatalog {
        EnvironmentCatalog::new(&self.environments.custom)
    }

    /// Check values before they are saved or used
    pub fn validate(&self) -> Result<()> {
        for label in &self.environments.custom {
            if !is_valid_label(label) {
                anyhow::bail!(
                    "environments.custom: '{}' must be lowercase letters, digits, '-' or '_'",
                    label
                );
            }
        }

        self.catalog()
            .resolve(&self.draft.default_label)
            .context("draft.default_label is not a known environment")?;

        if let Some(dir) = &self.submit.outbox_dir {
            if dir.as_os_str().is_empty() {
                anyhow::bail!("submit.outbox_dir must not be empty (remove it to use the default)");
            }
        }

        Ok(())
    }
}

fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Location of the config file
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("ladder").join("config.toml"))
}

/// Load the config, falling back to defaults when no file exists
pub fn load() -> Result<SystemConfig> {
    let Some(path) = config_file_path() else {
        return Ok(SystemConfig::default());
    };
    if !path.exists() {
        return Ok(SystemConfig::default());
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: SystemConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), "loaded system config");
    Ok(config)
}

/// Write the config file, creating its directory
pub fn save(config: &SystemConfig) -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    let dir = path
        .parent()
        .context("Config file path has no parent directory")?
        .to_path_buf();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {}", dir.display()))?;

    let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
    session::draft::atomic_write(&dir, &path, text.as_bytes())
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Write a default config file if none exists
pub fn init_if_missing() -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    if !path.exists() {
        save(&SystemConfig::default())?;
    }
    Ok(())
}

/// Annotated example configuration
pub fn example_config() -> &'static str {
    r#"# ladder system configuration

[environments]
# Organization-defined environment types, in addition to
# development, staging and production
custom = ["qa", "preview"]

[draft]
# Label used by `ladder open` when --label is not given
default_label = "development"

[submit]
# Where `ladder submit` writes schedules (default: .ladder/outbox)
# outbox_dir = "/var/spool/ladder"
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = SystemConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.draft.default_label, "development");
        assert!(config.submit.outbox_dir.is_none());
    }

    #[test]
    fn test_example_parses() {
        let config: SystemConfig = toml::from_str(example_config()).unwrap();
        assert_eq!(config.environments.custom, vec!["qa", "preview"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: SystemConfig = toml::from_str("[environments]\ncustom = [\"qa\"]\n").unwrap();
        assert_eq!(config.draft.default_label, "development");
        assert!(config.catalog().contains("qa"));
    }

    #[test]
    fn test_rejects_bad_labels() {
        let mut config = SystemConfig::default();
        config.environments.custom = vec!["Has Space".to_string()];
        assert!(config.validate().is_err());

        let mut config = SystemConfig::default();
        config.draft.default_label = "qa".to_string();
        assert!(config.validate().is_err());
        config.environments.custom = vec!["qa".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_round_trip_without_outbox() {
        let config = SystemConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(!text.contains("outbox_dir"));
        let back: SystemConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
