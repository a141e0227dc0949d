use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::sources::catalog;

/// Where the URLs come from: an explicit list followed by a template expanded once per name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// URLs fetched as-is, in order.
    #[serde(default)]
    pub explicit_urls: Vec<String>,
    /// URL pattern; every `{name}` is replaced by an entry of `names`.
    #[serde(default)]
    pub template: String,
    /// Names substituted into `template`, in order.
    #[serde(default)]
    pub names: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            explicit_urls: catalog::EXPLICIT_URLS.iter().map(|s| s.to_string()).collect(),
            template: catalog::KHRONOS_TEMPLATE.to_string(),
            names: catalog::KHRONOS_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Global configuration loaded from `~/.config/modelfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Directory the assets are saved into (relative paths resolve against the working dir).
    pub save_dir: PathBuf,
    /// Where the JSON manifest of available filenames is written.
    pub manifest_path: PathBuf,
    /// Connect / stall timeout per request, in seconds.
    pub timeout_secs: u64,
    /// Exit non-zero when any item fails to resolve.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("assets/models"),
            manifest_path: PathBuf::from("assets/manifest.json"),
            timeout_secs: 10,
            strict: false,
            sources: SourcesConfig::default(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values the fetcher cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1 (0 would leave requests unbounded)");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("modelfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file (no default is written).
pub fn load_from_path(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
