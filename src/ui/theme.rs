use fltk::{enums::Color, prelude::*};

use crate::app::domain::{Severity, ThemeMode};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub hover: Color,
}

pub fn palette(theme: ThemeMode) -> Palette {
    match theme {
        ThemeMode::Dark => Palette {
            background: Color::from_rgb(25, 25, 25),
            surface: Color::from_rgb(35, 35, 35),
            text: Color::from_rgb(220, 220, 220),
            muted_text: Color::from_rgb(150, 150, 150),
            accent: Color::from_rgb(34, 139, 230),
            accent_text: Color::White,
            hover: Color::from_rgb(60, 60, 60),
        },
        ThemeMode::Light => Palette {
            background: Color::from_rgb(240, 240, 240),
            surface: Color::White,
            text: Color::Black,
            muted_text: Color::from_rgb(100, 100, 100),
            accent: Color::from_rgb(34, 139, 230),
            accent_text: Color::White,
            hover: Color::from_rgb(200, 200, 200),
        },
    }
}

/// Banner background and label colors for a notification.
pub fn severity_colors(severity: Severity) -> (Color, Color) {
    match severity {
        Severity::Info => (Color::from_rgb(34, 139, 230), Color::White),
        Severity::Success => (Color::from_rgb(64, 192, 87), Color::White),
        Severity::Error => (Color::from_rgb(250, 82, 82), Color::White),
    }
}

/// Recolor a window and everything inside it.
pub fn apply_theme<W: GroupExt + WidgetExt>(window: &mut W, theme: ThemeMode) {
    let p = palette(theme);
    window.set_color(p.background);
    window.set_label_color(p.text);
    paint_children(&*window, &p);
    window.redraw();
}

fn paint_children<G: GroupExt>(group: &G, p: &Palette) {
    for i in 0..group.children() {
        let Some(mut child) = group.child(i) else {
            continue;
        };
        child.set_color(p.surface);
        child.set_label_color(p.text);
        child.set_selection_color(p.hover);
        if let Some(inner) = child.as_group() {
            paint_children(&inner, p);
        }
    }
}

/// Highlight the active entry of a button row, like a filled vs. outline button.
pub fn style_toggle<W: WidgetExt>(widget: &mut W, active: bool, theme: ThemeMode) {
    let p = palette(theme);
    if active {
        widget.set_color(p.accent);
        widget.set_label_color(p.accent_text);
    } else {
        widget.set_color(p.surface);
        widget.set_label_color(p.text);
    }
    widget.redraw();
}

/// Secondary text such as descriptions and captions.
pub fn style_caption<W: WidgetExt>(widget: &mut W, theme: ThemeMode) {
    widget.set_label_color(palette(theme).muted_text);
    widget.redraw();
}
