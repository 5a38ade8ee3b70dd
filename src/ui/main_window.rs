use fltk::{
    app::{self, Sender},
    enums::{Align, Event, EventState, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use crate::app::domain::{Message, ShellConfiguration};
use crate::app::services::i18n::ShellTexts;
use super::navigation::{NavigationWidgets, render_view};
use super::notifications::NotificationBanner;

const NAVBAR_WIDTH: i32 = 200;
const ASIDE_WIDTH: i32 = 300;

pub struct MainWidgets {
    pub wind: Window,
    /// Column holding the banner above the body row.
    pub flex: Flex,
    pub content: Frame,
    pub banner: NotificationBanner,
    pub nav: NavigationWidgets,
}

pub fn build_main_window(
    config: &ShellConfiguration,
    texts: &ShellTexts,
    sender: &Sender<Message>,
) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1000, 700, None);
    wind.set_label(texts.app_title);
    wind.set_xclass("Nuvium");

    let mut flex = Flex::new(0, 0, 1000, 700, None);
    flex.set_type(FlexType::Column);

    let banner = NotificationBanner::new(&mut flex, sender.clone());

    let mut body = Flex::default();
    body.set_type(FlexType::Row);

    let mut nav = NavigationWidgets::default();

    if config.show_navbar {
        let mut column = Flex::default();
        column.set_type(FlexType::Column);
        column.set_margin(8);
        column.set_pad(6);
        for view in config.nav_items.iter().filter(|v| v.visible_in_navbar()) {
            render_view(view, &mut column, sender, &mut nav);
        }
        column.end();
        body.fixed(&column, NAVBAR_WIDTH);
    }

    let mut content = Frame::default().with_label(texts.app_title);
    content.set_frame(FrameType::FlatBox);
    content.set_label_size(20);
    content.set_align(Align::Center | Align::Inside);

    if config.show_aside {
        let mut column = Flex::default();
        column.set_type(FlexType::Column);
        column.set_margin(8);
        for view in &config.aside_items {
            render_view(view, &mut column, sender, &mut nav);
        }
        column.end();
        body.fixed(&column, ASIDE_WIDTH);
    }

    body.end();
    flex.end();
    wind.end();
    wind.resizable(&flex);

    // Keyboard shortcuts
    let key_sender = sender.clone();
    wind.handle(move |_, ev| match ev {
        Event::KeyDown | Event::Shortcut => {
            let state = app::event_state();
            let message = app::event_key().to_char().and_then(|key| {
                Message::for_hotkey(
                    key,
                    state.contains(EventState::Ctrl),
                    state.contains(EventState::Shift),
                )
            });
            match message {
                Some(message) => {
                    key_sender.send(message);
                    true
                }
                None => false,
            }
        }
        _ => false,
    });

    // Escape also fires the window callback; only a real close quits.
    let close_sender = sender.clone();
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            close_sender.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        flex,
        content,
        banner,
        nav,
    }
}
