use crate::error::{Result, VtesError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name searched for in the project root and the user config directory.
pub const SETTINGS_FILE_NAME: &str = "vtes.toml";

fn default_tool_dir() -> String {
    "perform-version-tests".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_template_index() -> String {
    "https://raw.githubusercontent.com/github/gitignore/master".to_string()
}

fn default_major_marker() -> String {
    "BREAKING CHANGE".to_string()
}

fn default_minor_marker() -> String {
    "feat:".to_string()
}

/// Tool settings for vtes.
///
/// Controls where state files live, how often watch mode polls, where
/// `.gitignore` templates come from, and which diff markers map to bumps.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Directory (relative to the project root) holding the tool state.
    #[serde(default = "default_tool_dir")]
    pub tool_dir: String,

    /// Base project metadata file (relative to the project root).
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Base URL of the raw `.gitignore` template index.
    #[serde(default = "default_template_index")]
    pub template_index: String,

    #[serde(default)]
    pub markers: MarkerConfig,
}

/// Literal markers searched for in diff lines.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MarkerConfig {
    #[serde(default = "default_major_marker")]
    pub major: String,

    #[serde(default = "default_minor_marker")]
    pub minor: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            major: default_major_marker(),
            minor: default_minor_marker(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tool_dir: default_tool_dir(),
            manifest: default_manifest(),
            poll_interval_ms: default_poll_interval_ms(),
            template_index: default_template_index(),
            markers: MarkerConfig::default(),
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `vtes.toml` in the project root
/// 3. `vtes.toml` in the user config directory
/// 4. Default settings if no file found
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_settings(custom_path: Option<&Path>, project_root: &Path) -> Result<Settings> {
    let path = match custom_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_settings_file(project_root),
    };

    let Some(path) = path else {
        return Ok(Settings::default());
    };

    let text = fs::read_to_string(&path)
        .map_err(|e| VtesError::settings(format!("{}: {}", path.display(), e)))?;
    let settings: Settings = toml::from_str(&text)
        .map_err(|e| VtesError::settings(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

fn find_settings_file(project_root: &Path) -> Option<PathBuf> {
    let local = project_root.join(SETTINGS_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(SETTINGS_FILE_NAME);
    user.exists().then_some(user)
}
