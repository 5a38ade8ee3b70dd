//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Persisted settings (theme, locale)
//! - Settings change events
//! - Window identity and the navigation model
//! - Notifications and message types for the event system

pub mod events;
pub mod messages;
pub mod notification;
pub mod settings;
pub mod views;
pub mod window;

pub use events::{APP_SETTINGS_CHANGED, SettingKind, SettingsChangeEvent};
pub use messages::Message;
pub use notification::{Notification, Severity};
pub use settings::{Locale, PersistedSettings, ThemeMode};
pub use views::{NavLabels, ShellAction, ShellConfiguration, View};
pub use window::{WindowContext, WindowRole, WindowSpec};
