use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use fltk::{app::Sender, prelude::*};

use super::controllers::settings_window::open_or_focus;
use super::controllers::shell_subscriber::{SettingsSubscriber, ShellSettings};
use super::domain::window::SETTINGS_ROUTE;
use super::domain::{
    Message, Notification, SettingKind, SettingsChangeEvent, ShellAction, ShellConfiguration,
    WindowContext, WindowSpec,
};
use super::domain::views::shell_views;
use super::infrastructure::event_bus::EventBus;
use super::infrastructure::windows::WindowHost;
use super::services::file_selection::{FilePicker, select_files};
use super::services::i18n::{ShellTexts, texts_for_locale};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
use crate::ui::window_host::FltkWindowHost;

/// The main shell: its widgets, the theme and locale it renders with, and the
/// listener that keeps those in sync with the settings window.
pub struct AppState {
    pub window: WindowContext,
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<ShellSettings>>,
    pub host: FltkWindowHost,
    pub bus: Arc<dyn EventBus>,
    picker: Box<dyn FilePicker>,
    subscriber: SettingsSubscriber,
}

impl AppState {
    pub fn new(
        window: WindowContext,
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<ShellSettings>>,
        host: FltkWindowHost,
        bus: Arc<dyn EventBus>,
        picker: Box<dyn FilePicker>,
    ) -> Self {
        Self {
            window,
            widgets,
            sender,
            settings,
            host,
            bus,
            picker,
            subscriber: SettingsSubscriber::default(),
        }
    }

    pub fn texts(&self) -> ShellTexts {
        texts_for_locale(self.settings.borrow().language)
    }

    /// Show the window, register it with the host and start listening for
    /// settings changes. Bus notifications are queued onto the FLTK channel
    /// and applied from the dispatch loop.
    pub fn mount(&mut self) {
        self.host.adopt(self.window.label(), self.widgets.wind.clone());

        let sender = self.sender.clone();
        self.subscriber = SettingsSubscriber::mount(&self.window, self.bus.clone(), move |change| {
            sender.send(Message::SettingsChanged(change));
        });

        self.refresh_language();
        self.refresh_theme();
        self.widgets.wind.show();
    }

    pub fn unmount(&mut self) {
        self.subscriber.unmount();
    }

    /// Returns false once the application should stop.
    pub fn handle_message(&mut self, msg: Message) -> bool {
        match msg {
            Message::RunAction(action) => self.run_action(action),
            Message::Navigate(path) => self.navigate(path),
            Message::SettingsChanged(change) => self.apply_settings_change(&change),
            Message::ToggleTheme => {
                let theme = self.settings.borrow_mut().toggle_theme();
                tracing::debug!(theme = theme.as_str(), "theme toggled");
                self.refresh_theme();
            }
            Message::CycleLanguage => {
                let language = self.settings.borrow_mut().cycle_language();
                tracing::debug!(language = language.code(), "language cycled");
                self.refresh_language();
            }
            Message::SetLanguage(language) => {
                let changed = self.settings.borrow_mut().set_language(language);
                if changed {
                    self.refresh_language();
                }
            }
            Message::DismissNotification(id) => {
                self.widgets.banner.dismiss(id, &mut self.widgets.flex);
            }
            Message::WindowClose => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    fn run_action(&mut self, action: ShellAction) {
        match action {
            ShellAction::OpenSettings => self.open_settings(),
            ShellAction::OpenFileSearcher => {
                let texts = self.texts();
                let outcome = select_files(self.picker.as_ref(), &texts);
                self.notify(&outcome.notification(&texts));
            }
        }
    }

    fn open_settings(&mut self) {
        let texts = self.texts();
        let spec = WindowSpec::settings(texts.settings);
        match open_or_focus(&self.host, &spec) {
            Ok(outcome) => tracing::debug!(?outcome, "settings window ready"),
            Err(e) => {
                tracing::error!(error = %e, "failed to open settings window");
                self.notify(&Notification::error(texts.error, texts.open_settings_failed));
            }
        }
    }

    fn navigate(&mut self, path: &str) {
        // The settings route lives in its own window.
        if path == SETTINGS_ROUTE {
            self.open_settings();
            return;
        }

        let texts = self.texts();
        let config = ShellConfiguration::for_window(&self.window, &texts.nav_labels());
        match config.routes().find(|link| link.path == path) {
            Some(link) => {
                self.widgets.content.set_label(&link.name);
                self.widgets.content.redraw();
            }
            None => tracing::warn!(path = %path, "no view for route"),
        }
    }

    fn apply_settings_change(&mut self, change: &SettingsChangeEvent) {
        let changed = self.settings.borrow_mut().apply(change);
        if !changed {
            return;
        }
        tracing::info!(kind = ?change.kind, value = %change.value, "applied settings change");
        match change.kind {
            SettingKind::Theme => self.refresh_theme(),
            SettingKind::Language => self.refresh_language(),
        }
    }

    fn refresh_theme(&mut self) {
        let settings = *self.settings.borrow();
        apply_theme(&mut self.widgets.wind, settings.theme);
        self.widgets.banner.restyle();
        self.widgets.nav.mark_locale(settings.language, settings.theme);
    }

    fn refresh_language(&mut self) {
        let settings = *self.settings.borrow();
        let texts = texts_for_locale(settings.language);
        self.widgets.wind.set_label(texts.app_title);
        self.widgets.nav.relabel(&shell_views(&texts.nav_labels()));
        self.widgets.nav.mark_locale(settings.language, settings.theme);
        self.widgets.wind.redraw();
    }

    fn notify(&mut self, note: &Notification) {
        self.widgets.banner.show(note, &mut self.widgets.flex);
    }

    /// Close every secondary window, stop listening and hide the shell.
    fn shutdown(&mut self) {
        self.unmount();
        for label in self.host.labels() {
            if label == self.window.label() {
                continue;
            }
            if let Err(e) = self.host.close(&label) {
                tracing::warn!(error = %e, label = %label, "failed to close window");
            }
        }
        self.widgets.wind.hide();
        tracing::info!("main window closed");
    }
}
