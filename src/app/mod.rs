//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (settings, change events, windows, views, messages)
//! - `controllers/` - Orchestration (settings editor, shell subscriber, settings window)
//! - `services/` - Business operations (i18n, file selection)
//! - `infrastructure/` - External integrations (store, event bus, window host,
//!   config, logging, error)
//! - `state.rs` - Main shell coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::settings_editor::SettingsEditor;
pub use controllers::shell_subscriber::{SettingsSubscriber, ShellSettings};
pub use domain::{Locale, Message, PersistedSettings, SettingsChangeEvent, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::event_bus::{EventBus, LocalEventBus};
pub use infrastructure::store::{FileStoreLoader, load_settings_or};
