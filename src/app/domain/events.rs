use serde::{Deserialize, Serialize};

use super::settings::{Locale, PersistedSettings, ThemeMode};

/// Bus event carrying every settings change notification.
pub const APP_SETTINGS_CHANGED: &str = "app_settings_changed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Theme,
    Language,
}

/// Payload of [`APP_SETTINGS_CHANGED`]: `{ "type": "theme", "value": "dark" }`.
///
/// `value` stays a plain string on the wire; receivers validate it before
/// applying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsChangeEvent {
    #[serde(rename = "type")]
    pub kind: SettingKind,
    pub value: String,
}

impl SettingsChangeEvent {
    pub fn theme(theme: ThemeMode) -> Self {
        Self {
            kind: SettingKind::Theme,
            value: theme.as_str().to_string(),
        }
    }

    pub fn language(locale: Locale) -> Self {
        Self {
            kind: SettingKind::Language,
            value: locale.code().to_string(),
        }
    }

    /// One event per persisted field, theme first.
    pub fn for_settings(settings: &PersistedSettings) -> Vec<Self> {
        vec![Self::theme(settings.theme), Self::language(settings.language)]
    }
}
