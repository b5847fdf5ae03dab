use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "backoffice_user";
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_STORAGE_DIR: &str = ".backoffice";

// Session configuration sourced from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    // Key the signed-in principal is persisted under.
    pub storage_key: String,
    // Simulated latency applied before every login attempt.
    pub login_delay_ms: u64,
    // Directory used by file-backed storage.
    pub storage_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionConfigOverride {
    storage_key: Option<String>,
    login_delay_ms: Option<u64>,
    storage_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl SessionConfig {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("BACKOFFICE_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read BACKOFFICE_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup("BACKOFFICE_STORAGE_KEY") {
            config.storage_key = value;
        }
        if let Some(value) = lookup("BACKOFFICE_LOGIN_DELAY_MS") {
            config.login_delay_ms = value
                .parse()
                .with_context(|| "parse BACKOFFICE_LOGIN_DELAY_MS")?;
        }
        if let Some(value) = lookup("BACKOFFICE_STORAGE_DIR") {
            config.storage_dir = PathBuf::from(value);
        }
        config.validate()?;
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: SessionConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse session config yaml")?;
        if let Some(value) = override_cfg.storage_key {
            self.storage_key = value;
        }
        if let Some(value) = override_cfg.login_delay_ms {
            self.login_delay_ms = value;
        }
        if let Some(value) = override_cfg.storage_dir {
            self.storage_dir = value;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        backoffice_storage::validate_key(&self.storage_key)
            .with_context(|| "validate storage_key")?;
        Ok(())
    }
}
