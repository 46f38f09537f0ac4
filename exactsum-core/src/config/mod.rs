pub mod constants;
pub mod profiles;
pub mod types;

pub use profiles::ProfileName;
pub use types::*;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl FuzzConfig {
    /// Load configuration from a JSON file; missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();

        let raw = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read configuration {}", config_path.display()))?;

        let cfg: FuzzConfig =
            serde_json::from_str(&raw).context("Failed to deserialize configuration")?;

        cfg.validate()?;

        Ok(cfg)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            anyhow::bail!("trials must be positive");
        }

        if self.min_len == 0 {
            anyhow::bail!("min_len must be at least 1");
        }

        if self.min_len > self.max_len {
            anyhow::bail!(
                "min_len ({}) cannot exceed max_len ({})",
                self.min_len,
                self.max_len
            );
        }

        if self.progress_interval == 0 {
            anyhow::bail!("progress_interval must be positive");
        }

        Ok(())
    }
}
