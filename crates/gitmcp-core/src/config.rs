use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::mode::Mode;
use crate::normalize::{UrlNormalizer, DEFAULT_MIRROR_HOST};

/// Input used by `gitmcp example` unless overridden.
pub const DEFAULT_EXAMPLE_URL: &str = "github.com/langchain-ai/langgraph";

/// Global configuration loaded from `~/.config/gitmcp/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitmcpConfig {
    /// Host that serves the converted repositories (no scheme, no path).
    pub mirror_host: String,
    /// Mode used when `--mode` is not given.
    #[serde(default)]
    pub default_mode: Mode,
    /// Open converted URLs in the default browser.
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,
    /// Input converted by `gitmcp example`.
    #[serde(default = "default_example_url")]
    pub example_url: String,
}

fn default_open_browser() -> bool {
    true
}

fn default_example_url() -> String {
    DEFAULT_EXAMPLE_URL.to_string()
}

impl Default for GitmcpConfig {
    fn default() -> Self {
        Self {
            mirror_host: DEFAULT_MIRROR_HOST.to_string(),
            default_mode: Mode::default(),
            open_browser: default_open_browser(),
            example_url: default_example_url(),
        }
    }
}

impl GitmcpConfig {
    /// Rejects mirror hosts that would not form `https://<host>/owner/repo`.
    pub fn validate(&self) -> Result<()> {
        let host = &self.mirror_host;
        if host.is_empty() {
            bail!("mirror_host must not be empty");
        }
        if host.contains("://") {
            bail!("mirror_host must not include a scheme: {host}");
        }
        let bad_char = |c: char| matches!(c, '/' | '?' | '#' | '@' | '\\') || c.is_whitespace();
        if host.contains(bad_char) {
            bail!("mirror_host must be a bare host name: {host}");
        }
        let name = host
            .rsplit_once(':')
            .filter(|(_, port)| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
            .map_or(host.as_str(), |(name, _)| name);
        if let Err(e) = url::Host::parse(name) {
            bail!("mirror_host is not a valid host ({e}): {host}");
        }
        Ok(())
    }

    pub fn normalizer(&self) -> UrlNormalizer {
        UrlNormalizer::new(self.mirror_host.clone())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitmcp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GitmcpConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GitmcpConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<GitmcpConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: GitmcpConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
