//! Settings editor controller.
//!
//! Runs inside the settings window. Mounting reads the store into staged
//! state; staging never touches the store or the bus; saving persists first
//! and only then announces every field on the bus, so listeners converge on
//! the store even when their local state drifted.

use std::rc::Rc;
use std::sync::Arc;

use crate::app::domain::{
    APP_SETTINGS_CHANGED, Locale, PersistedSettings, SettingsChangeEvent, ThemeMode, WindowContext,
};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::event_bus::{EventBus, emit_json};
use crate::app::infrastructure::store::{StoreLoader, read_settings, write_settings};
use crate::app::infrastructure::windows::WindowHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Loading,
    Ready,
}

/// What a successful save announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: PersistedSettings,
    pub emitted: Vec<SettingsChangeEvent>,
}

pub struct SettingsEditor<L: StoreLoader> {
    loader: L,
    bus: Arc<dyn EventBus>,
    host: Rc<dyn WindowHost>,
    window: WindowContext,
    defaults: PersistedSettings,
    /// Last values known to be on disk; `None` when the store could not be read.
    baseline: Option<PersistedSettings>,
    staged: PersistedSettings,
    state: EditorState,
}

impl<L: StoreLoader> SettingsEditor<L> {
    /// `current` is what the opening window shows right now and is kept if
    /// the store cannot be read; `defaults` fill keys the store lacks.
    pub fn new(
        loader: L,
        bus: Arc<dyn EventBus>,
        host: Rc<dyn WindowHost>,
        window: WindowContext,
        current: PersistedSettings,
        defaults: PersistedSettings,
    ) -> Self {
        Self {
            loader,
            bus,
            host,
            window,
            defaults,
            baseline: None,
            staged: current,
            state: EditorState::Loading,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn staged(&self) -> &PersistedSettings {
        &self.staged
    }

    /// Read the store into staged state. A read failure is logged and the
    /// editor becomes usable with the values it was opened with.
    pub fn mount(&mut self) -> &PersistedSettings {
        match self
            .loader
            .load()
            .and_then(|store| read_settings(&store, &self.defaults))
        {
            Ok(loaded) => {
                tracing::debug!(
                    theme = loaded.theme.as_str(),
                    language = loaded.language.code(),
                    "settings loaded"
                );
                self.baseline = Some(loaded);
                self.staged = loaded;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings; keeping in-memory values");
                self.baseline = None;
            }
        }
        self.state = EditorState::Ready;
        &self.staged
    }

    pub fn stage_theme(&mut self, theme: ThemeMode) {
        self.staged.theme = theme;
    }

    pub fn stage_language(&mut self, language: Locale) {
        self.staged.language = language;
    }

    /// Persist the staged values, announce both of them, close the window.
    ///
    /// On a persistence failure nothing is emitted and the window stays open.
    pub fn save(&mut self) -> Result<SaveReport> {
        if self.state == EditorState::Loading {
            return Err(AppError::Editor("settings are still loading".into()));
        }

        let saved = self.staged;
        let mut store = self.loader.load().map_err(AppError::into_write_failure)?;
        write_settings(&mut store, &saved).map_err(|e| {
            let e = e.into_write_failure();
            tracing::error!(error = %e, "failed to save settings");
            e
        })?;
        tracing::info!(
            theme = saved.theme.as_str(),
            language = saved.language.code(),
            "settings saved"
        );

        let emitted = SettingsChangeEvent::for_settings(&saved);
        for event in &emitted {
            if let Err(e) = emit_json(self.bus.as_ref(), APP_SETTINGS_CHANGED, event) {
                tracing::warn!(error = %e, kind = ?event.kind, "failed to emit settings change");
            }
        }
        self.baseline = Some(saved);

        self.close_window();
        Ok(SaveReport { saved, emitted })
    }

    /// Drop staged changes and close the window without touching the store or bus.
    pub fn cancel(&mut self) {
        if let Some(baseline) = self.baseline {
            self.staged = baseline;
        }
        self.close_window();
    }

    fn close_window(&self) {
        if let Err(e) = self.host.close(self.window.label()) {
            tracing::warn!(error = %e, label = self.window.label(), "failed to close window");
        }
    }
}
