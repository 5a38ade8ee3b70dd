//! Navigation model shared by the navbar and the aside.
//!
//! Both panels are driven by one list of [`View`]s and rendered at a single
//! site in `ui::navigation`, so adding a variant forces every consumer to
//! handle it.

use super::window::{SETTINGS_ROUTE, WindowContext};

/// Actions a navbar button can trigger in the main shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    OpenSettings,
    OpenFileSearcher,
}

/// Self-rendering components that are neither links nor single buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomComponent {
    /// One button per supported locale, active one highlighted.
    LanguageHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub path: &'static str,
    pub name: String,
    pub id: &'static str,
    /// Routes reachable only through their own window stay out of the navbar.
    pub in_navbar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub action: ShellAction,
    pub name: String,
    pub id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomView {
    pub component: CustomComponent,
    pub id: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Link(LinkView),
    Action(ActionView),
    Custom(CustomView),
}

impl View {
    pub fn id(&self) -> &'static str {
        match self {
            View::Link(link) => link.id,
            View::Action(action) => action.id,
            View::Custom(custom) => custom.id,
        }
    }

    /// Whether the navbar should draw this view.
    pub fn visible_in_navbar(&self) -> bool {
        match self {
            View::Link(link) => link.in_navbar,
            View::Action(_) => true,
            View::Custom(_) => false,
        }
    }
}

/// Localized captions for the navbar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLabels {
    pub settings: &'static str,
    pub open_file_searcher: &'static str,
}

/// All navbar views of the main shell, localized.
pub fn shell_views(labels: &NavLabels) -> Vec<View> {
    vec![
        View::Action(ActionView {
            action: ShellAction::OpenSettings,
            name: labels.settings.to_string(),
            id: "open-settings-btn",
        }),
        View::Action(ActionView {
            action: ShellAction::OpenFileSearcher,
            name: labels.open_file_searcher.to_string(),
            id: "file-search-btn",
        }),
        View::Link(LinkView {
            path: SETTINGS_ROUTE,
            name: labels.settings.to_string(),
            id: "settings-view-internal-route",
            in_navbar: false,
        }),
    ]
}

/// Which chrome a window renders, chosen once from its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfiguration {
    pub show_navbar: bool,
    pub show_aside: bool,
    pub nav_items: Vec<View>,
    pub aside_items: Vec<View>,
}

impl ShellConfiguration {
    pub fn for_window(window: &WindowContext, labels: &NavLabels) -> Self {
        if !window.is_primary() {
            return Self {
                show_navbar: false,
                show_aside: false,
                nav_items: Vec::new(),
                aside_items: Vec::new(),
            };
        }

        Self {
            show_navbar: true,
            show_aside: true,
            nav_items: shell_views(labels),
            aside_items: vec![View::Custom(CustomView {
                component: CustomComponent::LanguageHeaders,
                id: "language-headers",
            })],
        }
    }

    /// Link views that the content area can route to.
    pub fn routes(&self) -> impl Iterator<Item = &LinkView> {
        self.nav_items.iter().filter_map(|view| match view {
            View::Link(link) => Some(link),
            View::Action(_) | View::Custom(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::window::SETTINGS_WINDOW_LABEL;

    const ENGLISH: NavLabels = NavLabels {
        settings: "Settings",
        open_file_searcher: "Open File Searcher",
    };

    #[test]
    fn test_main_window_shows_chrome() {
        let config = ShellConfiguration::for_window(&WindowContext::main(), &ENGLISH);
        assert!(config.show_navbar);
        assert!(config.show_aside);
        assert_eq!(config.nav_items.len(), 3);
        assert_eq!(config.aside_items[0].id(), "language-headers");
    }

    #[test]
    fn test_secondary_window_has_no_chrome() {
        let window = WindowContext::new(SETTINGS_WINDOW_LABEL);
        let config = ShellConfiguration::for_window(&window, &ENGLISH);
        assert!(!config.show_navbar);
        assert!(!config.show_aside);
        assert!(config.nav_items.is_empty());
    }

    #[test]
    fn test_settings_route_hidden_from_navbar() {
        let config = ShellConfiguration::for_window(&WindowContext::main(), &ENGLISH);
        let visible: Vec<_> = config
            .nav_items
            .iter()
            .filter(|v| v.visible_in_navbar())
            .map(|v| v.id())
            .collect();
        assert_eq!(visible, vec!["open-settings-btn", "file-search-btn"]);

        let routes: Vec<_> = config.routes().map(|l| l.path).collect();
        assert_eq!(routes, vec!["/settings"]);
    }

    #[test]
    fn test_views_are_localized() {
        let labels = NavLabels {
            settings: "Configurações",
            open_file_searcher: "Abrir buscador de arquivos",
        };
        let views = shell_views(&labels);
        match &views[0] {
            View::Action(action) => assert_eq!(action.name, "Configurações"),
            other => panic!("unexpected first view: {other:?}"),
        }
    }
}
