//! Configuration management command
//!
//! Provides CLI interface to view and edit system configuration.

use crate::system_config::{self, SystemConfig};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use session::BUILTIN_ENVIRONMENTS;
use std::path::PathBuf;

const KEYS: [&str; 3] = [
    "environments.custom",
    "draft.default_label",
    "submit.outbox_dir",
];

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown config key: {}. Use 'ladder config list' to see available keys.",
        key
    )
}

fn get_value(config: &SystemConfig, key: &str) -> Result<String> {
    let value = match key {
        "environments.custom" => config.environments.custom.join(","),
        "draft.default_label" => config.draft.default_label.clone(),
        "submit.outbox_dir" => config
            .submit
            .outbox_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default(),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

/// List all configuration values
pub async fn run_list() -> Result<()> {
    let config = system_config::load()?;
    let config_path =
        system_config::config_file_path().context("Could not determine config file path")?;

    println!("{}", "System Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    println!("{}", "[environments]".yellow());
    println!(
        "  {} = [{}] {}",
        "custom".cyan(),
        config.environments.custom.join(", "),
        format!("(built in: {})", BUILTIN_ENVIRONMENTS.join(", ")).dimmed()
    );

    println!("\n{}", "[draft]".yellow());
    println!("  {} = {}", "default_label".cyan(), config.draft.default_label);

    println!("\n{}", "[submit]".yellow());
    match &config.submit.outbox_dir {
        Some(dir) => println!("  {} = {}", "outbox_dir".cyan(), dir.display()),
        None => println!(
            "  {} = {}",
            "outbox_dir".cyan(),
            "(unset, uses .ladder/outbox)".dimmed()
        ),
    }

    println!("\n{}", "Keys:".bold());
    for key in KEYS {
        println!("  {}", key);
    }

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(key: &str) -> Result<()> {
    let config = system_config::load()?;
    println!("{}", get_value(&config, key)?);
    Ok(())
}

/// Set a configuration value
///
/// `environments.custom` takes a comma-separated list. An empty value clears
/// `environments.custom` and `submit.outbox_dir`.
pub async fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = system_config::load()?;

    match key {
        "environments.custom" => {
            config.environments.custom = value
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect();
        }
        "draft.default_label" => {
            config.draft.default_label = value.trim().to_string();
        }
        "submit.outbox_dir" => {
            let value = value.trim();
            config.submit.outbox_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        _ => return Err(unknown_key(key)),
    }

    // Validate before saving
    config.validate().context("Invalid configuration value")?;

    system_config::save(&config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), get_value(&config, key)?);
    Ok(())
}

/// Show the config file path and optionally create it
pub async fn run_path(create: bool) -> Result<()> {
    let config_path =
        system_config::config_file_path().context("Could not determine config file path")?;

    if create && !config_path.exists() {
        system_config::init_if_missing()?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else {
        println!("{}", config_path.display());
        if !config_path.exists() {
            println!("{}", "File does not exist. Use --create to create it.".yellow());
        }
    }

    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    println!("{}", system_config::example_config());
    Ok(())
}
