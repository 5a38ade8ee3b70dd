pub mod file_dialogs;
pub mod main_window;
pub mod navigation;
pub mod notifications;
pub mod settings_window;
pub mod theme;
pub mod window_host;
