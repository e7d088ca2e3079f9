//! Configuration file loading for uifix.
//!
//! Discovers and loads `uifix.toml` from the repository root. CLI arguments
//! take precedence over config file settings, which take precedence over the
//! compiled-in defaults.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "uifix.toml";

/// Default file targeted by `fix-encoding`, relative to the repo root.
pub const DEFAULT_PAGE_FILE: &str = "app/page.tsx";

/// Default directory searched by `replace-logo`, relative to the repo root.
pub const DEFAULT_SEARCH_ROOT: &str = "app";

/// Top-level configuration from uifix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UifixConfig {
    /// Target path overrides.
    pub paths: PathsConfig,
}

/// Paths section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// File targeted by `fix-encoding`.
    pub page_file: Option<Utf8PathBuf>,

    /// Directory searched by `replace-logo`.
    pub search_root: Option<Utf8PathBuf>,
}

/// Discover the uifix.toml config file.
///
/// Returns `None` if no config file is found at the repository root.
pub fn discover_config(repo_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = repo_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a uifix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<UifixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<UifixConfig> {
    let config: UifixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from repo root, or return default if not found.
pub fn load_or_default(repo_root: &Utf8Path) -> anyhow::Result<UifixConfig> {
    match discover_config(repo_root) {
        Some(path) => load_config(&path),
        None => Ok(UifixConfig::default()),
    }
}

/// Target file for `fix-encoding`: flag > config file > default.
pub fn resolve_page_file(
    repo_root: &Utf8Path,
    cli: Option<Utf8PathBuf>,
    config: &UifixConfig,
) -> Utf8PathBuf {
    resolve(
        repo_root,
        cli.or_else(|| config.paths.page_file.clone()),
        DEFAULT_PAGE_FILE,
    )
}

/// Search root for `replace-logo`: flag > config file > default.
pub fn resolve_search_root(
    repo_root: &Utf8Path,
    cli: Option<Utf8PathBuf>,
    config: &UifixConfig,
) -> Utf8PathBuf {
    resolve(
        repo_root,
        cli.or_else(|| config.paths.search_root.clone()),
        DEFAULT_SEARCH_ROOT,
    )
}

fn resolve(repo_root: &Utf8Path, chosen: Option<Utf8PathBuf>, default: &str) -> Utf8PathBuf {
    let path = chosen.unwrap_or_else(|| Utf8PathBuf::from(default));
    if path.is_absolute() {
        path
    } else {
        repo_root.join(path)
    }
}
