//! Config command - inspect and manage the config file.

use std::path::Path;

use clap::{Args, Subcommand};
use console::style;

use quotext_core::QuotextConfig;

const DEFAULT_CONFIG_PATH: &str = "quotext.json";

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a starter config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Set a batch default in the config file
    Set {
        /// One of: referral-manager, referral-email, brand
        key: String,
        value: String,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = Path::new(config_path.unwrap_or(DEFAULT_CONFIG_PATH));

    match args.action {
        ConfigAction::Show => show(path),
        ConfigAction::Init { force } => init(path, force),
        ConfigAction::Set { key, value } => set(path, &key, &value),
    }
}

fn show(path: &Path) -> anyhow::Result<()> {
    let config = if path.exists() {
        println!("Config file: {}", path.display());
        QuotextConfig::from_file(path)?
    } else {
        println!("No config file at {} (showing defaults)", path.display());
        QuotextConfig::default()
    };

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = QuotextConfig::default();
    config.save(path)?;
    println!(
        "{} Config file written to {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

fn set(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = if path.exists() {
        QuotextConfig::from_file(path)?
    } else {
        QuotextConfig::default()
    };

    match key {
        "referral-manager" => {
            config.defaults.fallback_referral_manager = Some(value.to_string());
        }
        "referral-email" => {
            config.defaults.referral_email = Some(value.to_string());
        }
        "brand" => {
            config.defaults.brand = Some(value.to_string());
        }
        other => anyhow::bail!(
            "Unknown config key: {} (expected referral-manager, referral-email, or brand)",
            other
        ),
    }

    config.save(path)?;
    println!("{} Set {} = {}", style("✓").green(), key, value);
    Ok(())
}
