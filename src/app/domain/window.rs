/// Label of the primary window, the only one that renders navigation chrome
/// and listens for settings changes.
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Reserved label of the settings editor window.
pub const SETTINGS_WINDOW_LABEL: &str = "settings-window";

/// Route served by the settings editor window.
pub const SETTINGS_ROUTE: &str = "/settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRole {
    Primary,
    Secondary,
}

/// Identity of one window, fixed when the window is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowContext {
    label: String,
}

impl WindowContext {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn main() -> Self {
        Self::new(MAIN_WINDOW_LABEL)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn role(&self) -> WindowRole {
        if self.label == MAIN_WINDOW_LABEL {
            WindowRole::Primary
        } else {
            WindowRole::Secondary
        }
    }

    pub fn is_primary(&self) -> bool {
        self.role() == WindowRole::Primary
    }
}

/// Everything the host needs to create a secondary window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub label: String,
    pub route: String,
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub center: bool,
    pub resizable: bool,
    pub decorations: bool,
}

impl WindowSpec {
    pub fn settings(title: &str) -> Self {
        Self {
            label: SETTINGS_WINDOW_LABEL.to_string(),
            route: SETTINGS_ROUTE.to_string(),
            title: title.to_string(),
            width: 700,
            height: 600,
            min_width: 600,
            min_height: 500,
            center: true,
            resizable: true,
            decorations: true,
        }
    }
}
