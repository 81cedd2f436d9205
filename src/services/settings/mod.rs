// Settings loading
// Reads host settings from a TOML file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::AppSettings;

pub const SETTINGS_ENV_VAR: &str = "DAILYGRAPHER_CONFIG";
const SETTINGS_FILE_NAME: &str = "dailygrapher.toml";

/// Settings file location: `$DAILYGRAPHER_CONFIG`, then the platform config
/// directory, then the working directory.
pub fn resolve_settings_path() -> PathBuf {
    if let Some(path) = env::var_os(SETTINGS_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(dirs) = ProjectDirs::from("com", "DailyGrapher", "DailyGrapher") {
        let candidate = dirs.config_dir().join(SETTINGS_FILE_NAME);
        if candidate.exists() {
            return candidate;
        }
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
    }

    PathBuf::from(SETTINGS_FILE_NAME)
}

pub fn load_settings(path: &Path) -> Result<AppSettings> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    parse_settings(&data)
        .with_context(|| format!("failed to parse settings from {}", path.display()))
}

pub fn parse_settings(data: &str) -> Result<AppSettings> {
    let settings: AppSettings = toml::from_str(data)?;
    settings.card.validate()?;
    Ok(settings)
}
