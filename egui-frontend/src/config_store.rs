//! # Config Store
//!
//! Loads the wallet configuration from a YAML file in the user's config
//! directory:
//!
//! ```text
//! <config_dir>/
//! └── anon-cbdc-wallet/
//!     └── wallet.yaml
//! ```
//!
//! A missing file is created with the default settings so users have
//! something to edit. Writes use a temp file plus rename.

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use shared::WalletConfig;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIRECTORY: &str = "anon-cbdc-wallet";
const CONFIG_FILE: &str = "wallet.yaml";

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the platform config directory
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| anyhow!("No config directory on this platform"))?;
        Ok(Self::new(base.join(APP_DIRECTORY).join(CONFIG_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, writing defaults first if the file does not exist
    pub fn load_or_init(&self) -> Result<WalletConfig> {
        if !self.path.exists() {
            warn!("No wallet config at {:?}, writing defaults", self.path);
            let config = WalletConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let yaml_content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {:?}", self.path))?;
        let config: WalletConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse {:?}", self.path))?;
        config
            .validate()
            .with_context(|| format!("Invalid wallet config in {:?}", self.path))?;

        info!("Loaded wallet config from {:?}", self.path);
        Ok(config)
    }

    pub fn save(&self, config: &WalletConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory {:?}", parent))?;
                info!("Created config directory {:?}", parent);
            }
        }

        let yaml_content = serde_yaml::to_string(config)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Saved wallet config to {:?}", self.path);
        Ok(())
    }
}
