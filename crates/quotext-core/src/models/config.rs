//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for a quotext run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotextConfig {
    /// Per-batch default values merged into every output row.
    pub defaults: BatchDefaults,
}

/// Optional per-batch defaults.
///
/// Empty strings are treated the same as absent values by the row builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchDefaults {
    /// Used for ReferralManager only when the document has no Salesperson.
    pub fallback_referral_manager: Option<String>,

    /// Goes into the ReferralEmail column verbatim.
    pub referral_email: Option<String>,

    /// Goes into the Brand column verbatim.
    pub brand: Option<String>,
}

impl QuotextConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

impl BatchDefaults {
    /// Fallback referral manager, with empty strings treated as unset.
    pub fn fallback_referral_manager(&self) -> Option<&str> {
        self.fallback_referral_manager
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    /// Referral email, with empty strings treated as unset.
    pub fn referral_email(&self) -> Option<&str> {
        self.referral_email.as_deref().filter(|s| !s.is_empty())
    }

    /// Brand, with empty strings treated as unset.
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref().filter(|s| !s.is_empty())
    }
}
