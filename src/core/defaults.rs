use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::aliases::AliasEntry;
use crate::error::{Error, Result};
use crate::overrides::Override;
use crate::paths;
use crate::rules::SpecificAppRule;
use crate::utils::io;

/// Root configuration structure for dashicon.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashiconConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via dashicon.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_database_path")]
    pub database_path: String,

    #[serde(default = "default_icons_dir")]
    pub icons_dir: String,

    #[serde(default = "default_image_url_prefix")]
    pub image_url_prefix: String,

    /// Legacy `icon` codes cleared when an entry gets a matched `iconUrl`.
    #[serde(default = "default_generic_icon_codes")]
    pub generic_icon_codes: Vec<String>,

    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            icons_dir: default_icons_dir(),
            image_url_prefix: default_image_url_prefix(),
            generic_icon_codes: default_generic_icon_codes(),
            taxonomy: TaxonomyConfig::default(),
        }
    }
}

/// User rows layered onto the built-in tables.
///
/// Aliases and overrides are appended (overrides listed here win over the
/// built-ins); specific-app rules are placed ahead of the built-ins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaxonomyConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_aliases: Vec<AliasEntry>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_specific_apps: Vec<SpecificAppRule>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_overrides: Vec<Override>,
}

impl Defaults {
    pub fn database_path(&self) -> Result<PathBuf> {
        expand_path("database_path", &self.database_path)
    }

    pub fn icons_dir(&self) -> Result<PathBuf> {
        expand_path("icons_dir", &self.icons_dir)
    }
}

/// Expand `~` and `$VAR` in a configured or user-supplied path.
pub fn expand_path(key: &str, raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|e| {
        Error::config_invalid_value(key, Some(raw.to_string()), e.to_string())
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_database_path() -> String {
    "~/HOPS/data/hops.db".to_string()
}

fn default_icons_dir() -> String {
    "~/HOPS/data/icons/dashboard-icons".to_string()
}

fn default_image_url_prefix() -> String {
    "/api/icons/dashboard/".to_string()
}

fn default_generic_icon_codes() -> Vec<String> {
    vec![
        "mdi:application".to_string(),
        "mdi:router".to_string(),
        "mdi:shield-half-full".to_string(),
    ]
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If dashicon.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full dashicon.json config, falling back to defaults on any error.
pub fn load_config() -> DashiconConfig {
    load_config_from_file().unwrap_or_default()
}

fn load_config_from_file() -> Result<DashiconConfig> {
    let path = paths::dashicon_json()?;

    if !path.exists() {
        return Err(Error::other("dashicon.json not found"));
    }

    read_config(&path)
}

/// Parse a config file at an explicit path.
pub fn read_config(path: &Path) -> Result<DashiconConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Check if dashicon.json file exists
pub fn config_exists() -> bool {
    paths::dashicon_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete dashicon.json file (reset to defaults)
pub fn reset_config() -> Result<bool> {
    let path = paths::dashicon_json()?;

    if path.exists() {
        std::fs::remove_file(&path).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to dashicon.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::dashicon_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}
