//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use quotext_core::{BatchDefaults, QuotextConfig};

/// Load configuration from a file when given, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<QuotextConfig> {
    match config_path {
        Some(path) => Ok(QuotextConfig::from_file(Path::new(path))?),
        None => Ok(QuotextConfig::default()),
    }
}

/// Per-batch default flags shared by the process and batch commands.
/// Flag values override the config file.
#[derive(clap::Args)]
pub struct DefaultsArgs {
    /// Fallback referral manager (used only if the PDF has no Salesperson)
    #[arg(long)]
    referral_manager: Option<String>,

    /// Referral email placed in every row
    #[arg(long)]
    referral_email: Option<String>,

    /// Brand placed in every row
    #[arg(long)]
    brand: Option<String>,
}

impl DefaultsArgs {
    /// Merge flags over the config file's defaults.
    pub fn merge_into(&self, config: &QuotextConfig) -> BatchDefaults {
        let base = &config.defaults;
        BatchDefaults {
            fallback_referral_manager: self
                .referral_manager
                .clone()
                .or_else(|| base.fallback_referral_manager.clone()),
            referral_email: self
                .referral_email
                .clone()
                .or_else(|| base.referral_email.clone()),
            brand: self.brand.clone().or_else(|| base.brand.clone()),
        }
    }
}
