//! Main-shell side of settings sync: listen for change notifications and
//! apply them to the shell's own theme and locale.

use std::sync::Arc;

use crate::app::domain::{
    APP_SETTINGS_CHANGED, Locale, PersistedSettings, SettingKind, SettingsChangeEvent, ThemeMode,
    WindowContext,
};
use crate::app::infrastructure::event_bus::{EventBus, Subscription};

/// The theme and locale a window is currently rendering with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSettings {
    pub theme: ThemeMode,
    pub language: Locale,
}

impl ShellSettings {
    /// Apply a change notification. Returns whether anything changed.
    /// Values that are not a supported theme or locale are ignored.
    pub fn apply(&mut self, event: &SettingsChangeEvent) -> bool {
        match event.kind {
            SettingKind::Theme => match ThemeMode::parse(&event.value) {
                Some(theme) => self.set_theme(theme),
                None => {
                    tracing::warn!(value = %event.value, "ignoring invalid theme change");
                    false
                }
            },
            SettingKind::Language => match Locale::from_code(&event.value) {
                Some(language) => self.set_language(language),
                None => {
                    tracing::warn!(value = %event.value, "ignoring unsupported language change");
                    false
                }
            },
        }
    }

    pub fn set_theme(&mut self, theme: ThemeMode) -> bool {
        let changed = self.theme != theme;
        self.theme = theme;
        changed
    }

    pub fn set_language(&mut self, language: Locale) -> bool {
        let changed = self.language != language;
        self.language = language;
        changed
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn cycle_language(&mut self) -> Locale {
        self.language = self.language.next();
        self.language
    }

    pub fn snapshot(&self) -> PersistedSettings {
        PersistedSettings::new(self.theme, self.language)
    }
}

impl From<PersistedSettings> for ShellSettings {
    fn from(settings: PersistedSettings) -> Self {
        Self {
            theme: settings.theme,
            language: settings.language,
        }
    }
}

/// Holds the primary window's listener for the lifetime of its mount.
#[derive(Default)]
pub struct SettingsSubscriber {
    subscription: Option<Subscription>,
}

impl SettingsSubscriber {
    /// Register the listener if `window` is the primary one. Every well-formed
    /// notification is handed to `forward`; malformed payloads are logged and
    /// dropped.
    pub fn mount<F>(window: &WindowContext, bus: Arc<dyn EventBus>, forward: F) -> Self
    where
        F: Fn(SettingsChangeEvent) + Send + Sync + 'static,
    {
        if !window.is_primary() {
            tracing::debug!(
                label = window.label(),
                "not the primary window; skipping settings listener"
            );
            return Self::default();
        }

        tracing::info!(label = window.label(), "listening for settings changes");
        let subscription = Subscription::listen(bus, APP_SETTINGS_CHANGED, move |event| {
            match event.parse_payload::<SettingsChangeEvent>() {
                Ok(change) => {
                    tracing::debug!(
                        kind = ?change.kind,
                        value = %change.value,
                        "received settings change"
                    );
                    forward(change);
                }
                Err(e) => tracing::warn!(
                    error = %e,
                    payload = %event.payload,
                    "malformed settings change"
                ),
            }
        });

        Self {
            subscription: Some(subscription),
        }
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::info!("removing settings listener");
            subscription.unsubscribe();
        }
    }
}
