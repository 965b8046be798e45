//! Configuration file loading for sahayak.
//!
//! Discovers and loads `sahayak.toml` from the working root. Merges config
//! file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "sahayak.toml";

/// Top-level configuration from sahayak.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SahayakConfig {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

/// Catalog section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory of extra scheme JSON files, appended after the built-ins.
    pub schemes_dir: Option<Utf8PathBuf>,
}

/// Output section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for report artifacts.
    pub out_dir: Utf8PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: Utf8PathBuf::from("artifacts/sahayak"),
        }
    }
}

/// Discover the sahayak.toml config file in `root`. `None` when absent.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a sahayak.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<SahayakConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<SahayakConfig> {
    let config: SahayakConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `root`, or return defaults when no file exists.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<SahayakConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(SahayakConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
///
/// CLI arguments take precedence over config file settings.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub schemes_dir: Option<Utf8PathBuf>,
    pub out_dir: Utf8PathBuf,
}

/// Merge a loaded config with the CLI-level overrides.
pub fn merge(
    config: SahayakConfig,
    schemes_dir_arg: Option<Utf8PathBuf>,
    out_dir_arg: Option<Utf8PathBuf>,
) -> MergedConfig {
    MergedConfig {
        schemes_dir: schemes_dir_arg.or(config.catalog.schemes_dir),
        out_dir: out_dir_arg.unwrap_or(config.output.out_dir),
    }
}
