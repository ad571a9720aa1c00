//! Connection settings: flags, environment, and profile file.
//!
//! Each field resolves independently, first match wins:
//! command-line flag, environment variable, profile file, library default.
//!
//! Profile files are TOML:
//!
//! ```toml
//! base_url = "http://emqx.internal:8080"
//! app_id = "admin"
//! app_secret = "public"
//! timeout_secs = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Args;
use emqx_client::ClientConfig;
use serde::Deserialize;

/// Connection flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Management API base URL [default: http://localhost:8080]
    #[arg(long, global = true, env = "EMQX_BASE_URL")]
    pub base_url: Option<String>,

    /// Application ID
    #[arg(long, global = true, env = "EMQX_APP_ID")]
    pub app_id: Option<String>,

    /// Application secret
    #[arg(long, global = true, env = "EMQX_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// Request timeout in seconds [default: 5]
    #[arg(long, global = true, env = "EMQX_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// TOML profile with base_url, app_id, app_secret, timeout_secs
    #[arg(long, global = true, env = "EMQX_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Settings read from a profile file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub base_url: Option<String>,
    pub app_id: Option<String>,
    pub app_secret: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Profile {
    /// Parse a profile from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid profile")
    }

    /// Load a profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Merge flags, environment and profile into a client config.
///
/// Unset values stay empty/zero so the client applies its own defaults.
pub fn resolve(args: &ConnectionArgs) -> Result<ClientConfig> {
    let profile = match &args.config {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };
    Ok(merge(args, profile))
}

fn merge(args: &ConnectionArgs, profile: Profile) -> ClientConfig {
    ClientConfig {
        base_url: args
            .base_url
            .clone()
            .or(profile.base_url)
            .unwrap_or_default(),
        app_id: args.app_id.clone().or(profile.app_id).unwrap_or_default(),
        app_secret: args
            .app_secret
            .clone()
            .or(profile.app_secret)
            .unwrap_or_default(),
        timeout: Duration::from_secs(args.timeout_secs.or(profile.timeout_secs).unwrap_or(0)),
    }
}
