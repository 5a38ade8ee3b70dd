//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Settings store on disk
//! - Cross-window event bus
//! - Window host abstraction
//! - Configuration, logging and error types

pub mod config;
pub mod error;
pub mod event_bus;
pub mod logging;
pub mod store;
pub mod windows;
