//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Localized UI texts
//! - File selection through a native chooser

pub mod file_selection;
pub mod i18n;
