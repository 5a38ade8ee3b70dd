//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, infrastructure, and the UI:
//! - Settings editor (stage, save, cancel)
//! - Main shell settings subscriber
//! - Single-instance settings window

pub mod settings_editor;
pub mod settings_window;
pub mod shell_subscriber;
