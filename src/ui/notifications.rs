use fltk::{
    app::{self, Sender},
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
};
use std::cell::Cell;
use std::rc::Rc;

use crate::app::domain::{Message, Notification, Severity};
use super::theme::severity_colors;

pub const BANNER_HEIGHT: i32 = 30;

/// One-line banner at the top of the main window. Clicking it dismisses it;
/// otherwise it closes itself after the notification's auto-close delay.
pub struct NotificationBanner {
    frame: Frame,
    current: Rc<Cell<Option<u64>>>,
    severity: Severity,
    next_id: u64,
    sender: Sender<Message>,
}

impl NotificationBanner {
    /// Create the (hidden) banner inside `parent`, which must be the current group.
    pub fn new(parent: &mut Flex, sender: Sender<Message>) -> Self {
        let mut frame = Frame::default();
        frame.set_frame(FrameType::FlatBox);
        frame.set_label_size(13);
        frame.set_align(Align::Inside | Align::Left);
        frame.hide();
        parent.fixed(&frame, 0);

        let current: Rc<Cell<Option<u64>>> = Rc::new(Cell::new(None));
        let shown = current.clone();
        let click_sender = sender.clone();
        frame.handle(move |_, ev| match ev {
            Event::Push => {
                if let Some(id) = shown.get() {
                    click_sender.send(Message::DismissNotification(id));
                }
                true
            }
            _ => false,
        });

        Self {
            frame,
            current,
            severity: Severity::Info,
            next_id: 0,
            sender,
        }
    }

    /// Replace whatever is showing and schedule the automatic dismissal.
    pub fn show(&mut self, note: &Notification, parent: &mut Flex) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.severity = note.severity;
        self.restyle();
        self.frame.set_label(&format!("  {}  \u{2715}", note.banner_text()));
        self.frame.show();
        parent.fixed(&self.frame, BANNER_HEIGHT);
        parent.layout();
        parent.redraw();
        self.current.set(Some(id));

        let sender = self.sender.clone();
        app::add_timeout3(note.auto_close.as_secs_f64(), move |_| {
            sender.send(Message::DismissNotification(id));
        });
        id
    }

    /// Hide the banner if `id` is still the one showing. Stale timeouts from
    /// replaced notifications are ignored.
    pub fn dismiss(&mut self, id: u64, parent: &mut Flex) -> bool {
        if self.current.get() != Some(id) {
            return false;
        }
        self.current.set(None);
        self.frame.hide();
        parent.fixed(&self.frame, 0);
        parent.layout();
        parent.redraw();
        true
    }

    /// Reapply the severity colors after a window-wide theme change.
    pub fn restyle(&mut self) {
        let (background, text) = severity_colors(self.severity);
        self.frame.set_color(background);
        self.frame.set_label_color(text);
        self.frame.redraw();
    }
}
