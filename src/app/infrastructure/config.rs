use std::env;
use std::path::PathBuf;

use crate::app::domain::Locale;
use crate::app::domain::settings::STORE_FILE_NAME;

/// Directory under the platform config dir holding the store.
pub const APP_DIR_NAME: &str = "nuvium";

/// Overrides the store location.
pub const SETTINGS_PATH_ENV: &str = "NUVIUM_SETTINGS_PATH";

/// Checked in order when picking the first-run locale.
pub const LOCALE_ENV_KEYS: &[&str] = &["NUVIUM_LOCALE", "LC_ALL", "LANG"];

/// Startup configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub store_path: PathBuf,
    pub default_locale: Locale,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve with an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            store_path: store_path_with(&lookup),
            default_locale: resolve_default_locale(&lookup),
        }
    }
}

fn store_path_with<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(SETTINGS_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    default_store_path()
}

/// Get store file path (cross-platform)
pub fn default_store_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR_NAME);
    path.push(STORE_FILE_NAME);
    path
}

fn resolve_default_locale<F>(lookup: &F) -> Locale
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_KEYS
        .iter()
        .filter_map(|key| lookup(key))
        .find_map(|value| Locale::normalize(&value))
        .unwrap_or_default()
}
