use super::events::SettingsChangeEvent;
use super::settings::Locale;
use super::views::ShellAction;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and bus listeners send one of these; the dispatch loop in
/// main hands them to `AppState::handle_message`.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    RunAction(ShellAction),
    Navigate(&'static str),

    // Settings sync
    SettingsChanged(SettingsChangeEvent),

    // Local view state
    ToggleTheme,
    CycleLanguage,
    SetLanguage(Locale),

    // Notifications
    DismissNotification(u64),

    WindowClose,
}

impl Message {
    /// Keyboard shortcuts of the main shell: Ctrl+J toggles the theme,
    /// Ctrl+Shift+L cycles the language.
    pub fn for_hotkey(key: char, ctrl: bool, shift: bool) -> Option<Self> {
        if !ctrl {
            return None;
        }
        match (key.to_ascii_lowercase(), shift) {
            ('j', false) => Some(Message::ToggleTheme),
            ('l', true) => Some(Message::CycleLanguage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkeys() {
        assert!(matches!(Message::for_hotkey('j', true, false), Some(Message::ToggleTheme)));
        assert!(matches!(Message::for_hotkey('L', true, true), Some(Message::CycleLanguage)));
        assert!(Message::for_hotkey('j', false, false).is_none());
        assert!(Message::for_hotkey('l', true, false).is_none());
        assert!(Message::for_hotkey('j', true, true).is_none());
    }
}
