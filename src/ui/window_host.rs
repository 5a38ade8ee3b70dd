use fltk::{app, prelude::*, window::Window};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::app::domain::WindowSpec;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::windows::WindowHost;

/// Builds the contents of a window for one route. Must call `end()` on the
/// window before returning it.
type RouteBuilder = Rc<dyn Fn(&WindowSpec, &FltkWindowHost) -> Result<Window>>;

#[derive(Default)]
struct HostInner {
    windows: RefCell<HashMap<String, Window>>,
    routes: RefCell<HashMap<String, RouteBuilder>>,
}

/// FLTK windows addressed by label.
#[derive(Clone, Default)]
pub struct FltkWindowHost {
    inner: Rc<HostInner>,
}

impl FltkWindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_route<F>(&self, route: &str, builder: F)
    where
        F: Fn(&WindowSpec, &FltkWindowHost) -> Result<Window> + 'static,
    {
        self.inner
            .routes
            .borrow_mut()
            .insert(route.to_string(), Rc::new(builder));
    }

    /// Track a window built outside the host, such as the main window.
    pub fn adopt(&self, label: &str, window: Window) {
        self.inner
            .windows
            .borrow_mut()
            .insert(label.to_string(), window);
    }

    pub fn labels(&self) -> Vec<String> {
        self.inner.windows.borrow().keys().cloned().collect()
    }
}

impl WindowHost for FltkWindowHost {
    fn contains(&self, label: &str) -> Result<bool> {
        let mut windows = self
            .inner
            .windows
            .try_borrow_mut()
            .map_err(|e| AppError::WindowLookup(e.to_string()))?;

        match windows.get(label) {
            Some(window) if window.shown() => Ok(true),
            Some(_) => {
                // Hidden by the toolkit without going through `close`.
                windows.remove(label);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn focus(&self, label: &str) -> Result<()> {
        let window = self.inner.windows.borrow().get(label).cloned();
        match window {
            Some(mut window) => {
                // show() on a mapped window raises it
                window.show();
                Ok(())
            }
            None => Err(AppError::Window(format!("no window labelled '{label}'"))),
        }
    }

    fn create(&self, spec: &WindowSpec) -> Result<()> {
        let builder = self
            .inner
            .routes
            .borrow()
            .get(&spec.route)
            .cloned()
            .ok_or_else(|| {
                AppError::Window(format!("no view registered for route '{}'", spec.route))
            })?;

        let window = builder(spec, self)?;
        let mut window = if spec.center {
            window.center_screen()
        } else {
            window
        };
        window.size_range(spec.min_width, spec.min_height, 0, 0);
        window.make_resizable(spec.resizable);
        window.set_border(spec.decorations);
        window.show();

        self.inner
            .windows
            .borrow_mut()
            .insert(spec.label.clone(), window);
        Ok(())
    }

    fn close(&self, label: &str) -> Result<()> {
        let window = self.inner.windows.borrow_mut().remove(label);
        if let Some(mut window) = window {
            window.hide();
            // Deferred, so a window may close itself from its own callback.
            app::delete_widget(window);
        }
        Ok(())
    }
}
