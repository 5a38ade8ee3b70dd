//! The one place [`View`]s become widgets.
//!
//! Navbar and aside both render through [`render_view`]; the match on the view
//! kind is exhaustive so a new variant will not compile until it is drawn here.

use fltk::{
    app::Sender,
    button::Button,
    enums::FrameType,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::views::CustomComponent;
use crate::app::domain::{Locale, Message, ThemeMode, View};
use super::theme::style_toggle;

const NAV_BUTTON_HEIGHT: i32 = 30;

/// Widgets created for the views, kept so they can be relabeled and restyled.
#[derive(Default)]
pub struct NavigationWidgets {
    buttons: Vec<(&'static str, Button)>,
    locale_buttons: Vec<(Locale, Button)>,
}

impl NavigationWidgets {
    /// Update button labels from freshly localized views, matched by id.
    pub fn relabel(&mut self, views: &[View]) {
        for (id, button) in &mut self.buttons {
            let name = views.iter().find(|v| v.id() == *id).and_then(|view| match view {
                View::Link(link) => Some(link.name.as_str()),
                View::Action(action) => Some(action.name.as_str()),
                View::Custom(_) => None,
            });
            if let Some(name) = name {
                button.set_label(name);
            }
        }
    }

    /// Highlight the active locale in the language headers.
    pub fn mark_locale(&mut self, active: Locale, theme: ThemeMode) {
        for (locale, button) in &mut self.locale_buttons {
            style_toggle(button, *locale == active, theme);
        }
    }
}

fn nav_button(label: &str) -> Button {
    let mut button = Button::default().with_label(label);
    button.set_frame(FrameType::FlatBox);
    button.clear_visible_focus();
    button
}

/// Draw one view into `parent`, which must be the current group.
pub fn render_view(
    view: &View,
    parent: &mut Flex,
    sender: &Sender<Message>,
    widgets: &mut NavigationWidgets,
) {
    match view {
        View::Link(link) => {
            if !link.in_navbar {
                return;
            }
            let mut button = nav_button(&link.name);
            button.emit(sender.clone(), Message::Navigate(link.path));
            parent.fixed(&button, NAV_BUTTON_HEIGHT);
            widgets.buttons.push((link.id, button));
        }
        View::Action(action) => {
            let mut button = nav_button(&action.name);
            button.emit(sender.clone(), Message::RunAction(action.action));
            parent.fixed(&button, NAV_BUTTON_HEIGHT);
            widgets.buttons.push((action.id, button));
        }
        View::Custom(custom) => match custom.component {
            CustomComponent::LanguageHeaders => render_language_headers(parent, sender, widgets),
        },
    }
}

fn render_language_headers(
    parent: &mut Flex,
    sender: &Sender<Message>,
    widgets: &mut NavigationWidgets,
) {
    let locales = Locale::all();
    // A single locale leaves nothing to switch between.
    if locales.len() <= 1 {
        return;
    }

    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    row.set_pad(4);
    for locale in locales {
        let mut button = nav_button(&locale.label());
        button.emit(sender.clone(), Message::SetLanguage(*locale));
        widgets.locale_buttons.push((*locale, button));
    }
    row.end();
    parent.fixed(&row, NAV_BUTTON_HEIGHT);
}
