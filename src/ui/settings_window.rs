use fltk::{
    button::{Button, RadioRoundButton},
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::{Group, Tabs},
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::app::controllers::settings_editor::SettingsEditor;
use crate::app::controllers::shell_subscriber::ShellSettings;
use crate::app::domain::{
    Locale, PersistedSettings, Severity, ThemeMode, WindowContext, WindowSpec,
};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::event_bus::EventBus;
use crate::app::infrastructure::store::FileStoreLoader;
use crate::app::infrastructure::windows::WindowHost;
use crate::app::services::i18n::texts_for_locale;
use super::theme::{apply_theme, severity_colors, style_caption};
use super::window_host::FltkWindowHost;

type Editor = Rc<RefCell<SettingsEditor<FileStoreLoader>>>;

/// What the settings route needs from the rest of the application.
#[derive(Clone)]
pub struct SettingsWindowDeps {
    pub loader: FileStoreLoader,
    pub bus: Arc<dyn EventBus>,
    /// The main shell's live values, used when the store cannot be read.
    pub shell: Rc<RefCell<ShellSettings>>,
    pub defaults: PersistedSettings,
}

fn section_label(x: i32, y: i32, w: i32, text: &str) -> Frame {
    let mut frame = Frame::default()
        .with_pos(x, y)
        .with_size(w, 25)
        .with_label(text)
        .with_align(Align::Left | Align::Inside);
    frame.set_label_size(16);
    frame
}

/// Build the settings editor window for `spec`. The editor is mounted before
/// any control is drawn, so the radios start from what the store holds.
pub fn build_settings_window(
    spec: &WindowSpec,
    host: &FltkWindowHost,
    deps: &SettingsWindowDeps,
) -> Result<Window> {
    let current = deps
        .shell
        .try_borrow()
        .map_err(|e| AppError::Window(e.to_string()))?
        .snapshot();
    let texts = texts_for_locale(current.language);

    let window_host: Rc<dyn WindowHost> = Rc::new(host.clone());
    let editor: Editor = Rc::new(RefCell::new(SettingsEditor::new(
        deps.loader.clone(),
        deps.bus.clone(),
        window_host,
        WindowContext::new(spec.label.clone()),
        current,
        deps.defaults,
    )));
    let staged = *editor.borrow_mut().mount();

    let (w, h) = (spec.width, spec.height);
    let mut window = Window::default().with_size(w, h).with_label(&spec.title);

    let tabs = Tabs::new(10, 10, w - 20, h - 80, None);
    let (tx, ty, tw) = (20, 45, w - 40);

    // Theme tab
    let theme_tab = Group::new(10, 35, w - 20, h - 105, None).with_label(texts.theme);
    section_label(tx, ty, tw, texts.appearance);
    let mut captions = Vec::new();
    let mut choose = section_label(tx, ty + 30, tw, texts.choose_theme);
    choose.set_label_size(13);
    captions.push(choose);
    let theme_group = Group::default()
        .with_pos(tx + 15, ty + 60)
        .with_size(tw - 15, 50);
    let mut light = RadioRoundButton::default()
        .with_pos(tx + 15, ty + 60)
        .with_size(tw - 15, 25)
        .with_label(texts.white_theme);
    let mut dark = RadioRoundButton::default()
        .with_pos(tx + 15, ty + 85)
        .with_size(tw - 15, 25)
        .with_label(texts.black_theme);
    theme_group.end();
    match staged.theme {
        ThemeMode::Light => light.set_value(true),
        ThemeMode::Dark => dark.set_value(true),
    }
    theme_tab.end();

    // Languages tab
    let language_tab = Group::new(10, 35, w - 20, h - 105, None).with_label(texts.languages);
    section_label(tx, ty, tw, texts.select_language);
    let language_group = Group::default()
        .with_pos(tx + 15, ty + 30)
        .with_size(tw - 15, 25 * Locale::all().len() as i32);
    let mut language_radios = Vec::new();
    for (i, locale) in Locale::all().iter().enumerate() {
        let mut radio = RadioRoundButton::default()
            .with_pos(tx + 15, ty + 30 + 25 * i as i32)
            .with_size(tw - 15, 25)
            .with_label(&locale.label());
        radio.set_value(*locale == staged.language);
        language_radios.push((*locale, radio));
    }
    language_group.end();
    language_tab.end();

    // About tab
    let about_tab = Group::new(10, 35, w - 20, h - 105, None).with_label(texts.about);
    section_label(tx, ty, tw, texts.about_title);
    let mut description = section_label(tx, ty + 35, tw, texts.app_description);
    description.set_label_size(13);
    let version_text = format!("{} {}", texts.version, env!("CARGO_PKG_VERSION"));
    let mut version = section_label(tx, ty + 60, tw, &version_text);
    version.set_label_size(13);
    captions.push(version);
    let authors_text = format!("{} {}", texts.developed_by, env!("CARGO_PKG_AUTHORS"));
    let mut authors = section_label(tx, ty + 85, tw, &authors_text);
    authors.set_label_size(13);
    captions.push(authors);
    about_tab.end();

    tabs.end();

    // Save failures show here; clicking hides it.
    let mut error_frame = Frame::default()
        .with_pos(10, h - 60)
        .with_size(w - 220, 40)
        .with_align(Align::Left | Align::Inside | Align::Wrap);
    error_frame.set_frame(FrameType::FlatBox);
    error_frame.set_label_size(12);
    error_frame.hide();
    error_frame.handle(|f, ev| match ev {
        Event::Push => {
            f.hide();
            true
        }
        _ => false,
    });

    let mut cancel_btn = Button::default()
        .with_pos(w - 200, h - 55)
        .with_size(90, 30)
        .with_label(texts.cancel);
    let mut save_btn = Button::default()
        .with_pos(w - 100, h - 55)
        .with_size(90, 30)
        .with_label(texts.save);

    window.end();
    window.resizable(&tabs);
    repaint(&mut window, &mut error_frame, &mut captions, staged.theme);

    // Staging the theme also previews it on this window.
    for (button, theme) in [(&mut light, ThemeMode::Light), (&mut dark, ThemeMode::Dark)] {
        let editor = editor.clone();
        let mut window = window.clone();
        let mut error_frame = error_frame.clone();
        let mut captions = captions.clone();
        button.set_callback(move |_| {
            editor.borrow_mut().stage_theme(theme);
            repaint(&mut window, &mut error_frame, &mut captions, theme);
        });
    }

    for (locale, radio) in &mut language_radios {
        let editor = editor.clone();
        let locale = *locale;
        radio.set_callback(move |_| editor.borrow_mut().stage_language(locale));
    }

    save_btn.set_callback({
        let editor = editor.clone();
        let mut error_frame = error_frame.clone();
        move |_| {
            let result = editor.borrow_mut().save();
            match result {
                Ok(report) => {
                    tracing::debug!(changes = report.emitted.len(), "settings window saved");
                }
                Err(e) => {
                    error_frame.set_label(&format!("{}: {}", texts.save_failed, e));
                    error_frame.show();
                    error_frame.redraw();
                }
            }
        }
    });

    cancel_btn.set_callback({
        let editor = editor.clone();
        move |_| editor.borrow_mut().cancel()
    });

    // Close button and Escape discard staged changes too.
    window.set_callback(move |_| editor.borrow_mut().cancel());

    Ok(window)
}

fn repaint(
    window: &mut Window,
    error_frame: &mut Frame,
    captions: &mut [Frame],
    theme: ThemeMode,
) {
    apply_theme(window, theme);
    for caption in captions.iter_mut() {
        style_caption(caption, theme);
    }
    let (background, text) = severity_colors(Severity::Error);
    error_frame.set_color(background);
    error_frame.set_label_color(text);
}
