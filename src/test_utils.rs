//! Shared test doubles used across multiple test modules.
//!
//! The in-memory store, window host and file picker stand in for the disk,
//! FLTK and the native chooser so controllers can be driven headless.

use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::app::domain::{APP_SETTINGS_CHANGED, SettingsChangeEvent, WindowSpec};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::event_bus::{EventBus, Subscription};
use crate::app::infrastructure::store::{KeyValueStore, StoreLoader};
use crate::app::infrastructure::windows::WindowHost;
use crate::app::services::file_selection::{FileDialogRequest, FilePicker};

#[derive(Default)]
struct MemoryState {
    committed: Map<String, Value>,
    fail_reads: bool,
    fail_writes: bool,
    fail_commit: bool,
    commits: usize,
}

/// Committed contents shared by every handle, plus failure switches.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: Value) {
        self.state.borrow_mut().committed.insert(key.to_string(), value);
    }

    pub fn committed(&self, key: &str) -> Option<Value> {
        self.state.borrow().committed.get(key).cloned()
    }

    pub fn commits(&self) -> usize {
        self.state.borrow().commits
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    /// Make `set` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    /// Make `save` fail after `set` succeeded.
    pub fn fail_commit(&self, fail: bool) {
        self.state.borrow_mut().fail_commit = fail;
    }

    pub fn store(&self) -> MemoryStore {
        MemoryStore {
            backend: self.clone(),
            pending: Map::new(),
        }
    }

    pub fn loader(&self) -> MemoryStoreLoader {
        MemoryStoreLoader {
            backend: self.clone(),
        }
    }
}

pub struct MemoryStore {
    backend: MemoryBackend,
    pending: Map<String, Value>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let state = self.backend.state.borrow();
        if state.fail_reads {
            return Err(AppError::StoreRead("injected read failure".into()));
        }
        Ok(self
            .pending
            .get(key)
            .or_else(|| state.committed.get(key))
            .cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        if self.backend.state.borrow().fail_writes {
            return Err(AppError::StoreWrite("injected write failure".into()));
        }
        self.pending.insert(key.to_string(), value);
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let mut state = self.backend.state.borrow_mut();
        if state.fail_commit {
            return Err(AppError::StoreWrite("injected commit failure".into()));
        }
        for (key, value) in std::mem::take(&mut self.pending) {
            state.committed.insert(key, value);
        }
        state.commits += 1;
        Ok(())
    }
}

#[derive(Clone)]
pub struct MemoryStoreLoader {
    backend: MemoryBackend,
}

impl StoreLoader for MemoryStoreLoader {
    type Store = MemoryStore;

    fn load(&self) -> Result<MemoryStore> {
        if self.backend.state.borrow().fail_reads {
            return Err(AppError::StoreRead("injected open failure".into()));
        }
        Ok(self.backend.store())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Lookup(String),
    Focus(String),
    Create(String),
    Close(String),
}

/// Window host that records calls and keeps a set of open labels.
#[derive(Default)]
pub struct RecordingWindowHost {
    open: RefCell<Vec<String>>,
    calls: RefCell<Vec<HostCall>>,
    created: RefCell<Vec<WindowSpec>>,
    fail_lookup: Cell<bool>,
    fail_create: Cell<bool>,
}

impl RecordingWindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open(label: &str) -> Self {
        let host = Self::default();
        host.open.borrow_mut().push(label.to_string());
        host
    }

    pub fn fail_lookup(&self, fail: bool) {
        self.fail_lookup.set(fail);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.set(fail);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn created(&self) -> Vec<WindowSpec> {
        self.created.borrow().clone()
    }

    pub fn open_count(&self, label: &str) -> usize {
        self.open.borrow().iter().filter(|l| *l == label).count()
    }

    pub fn is_open(&self, label: &str) -> bool {
        self.open_count(label) > 0
    }
}

impl WindowHost for RecordingWindowHost {
    fn contains(&self, label: &str) -> Result<bool> {
        self.calls.borrow_mut().push(HostCall::Lookup(label.to_string()));
        if self.fail_lookup.get() {
            return Err(AppError::WindowLookup("injected lookup failure".into()));
        }
        Ok(self.is_open(label))
    }

    fn focus(&self, label: &str) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Focus(label.to_string()));
        Ok(())
    }

    fn create(&self, spec: &WindowSpec) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Create(spec.label.clone()));
        if self.fail_create.get() {
            return Err(AppError::Window("injected create failure".into()));
        }
        self.open.borrow_mut().push(spec.label.clone());
        self.created.borrow_mut().push(spec.clone());
        Ok(())
    }

    fn close(&self, label: &str) -> Result<()> {
        self.calls.borrow_mut().push(HostCall::Close(label.to_string()));
        self.open.borrow_mut().retain(|l| l != label);
        Ok(())
    }
}

/// File picker that returns a canned result and remembers the request.
pub struct ScriptedFilePicker {
    result: RefCell<Option<Result<Vec<PathBuf>>>>,
    last_request: RefCell<Option<FileDialogRequest>>,
}

impl ScriptedFilePicker {
    pub fn returning(result: Result<Vec<PathBuf>>) -> Self {
        Self {
            result: RefCell::new(Some(result)),
            last_request: RefCell::new(None),
        }
    }

    pub fn last_request(&self) -> Option<FileDialogRequest> {
        self.last_request.borrow().clone()
    }
}

impl FilePicker for ScriptedFilePicker {
    fn pick_files(&self, request: &FileDialogRequest) -> Result<Vec<PathBuf>> {
        *self.last_request.borrow_mut() = Some(request.clone());
        self.result.borrow_mut().take().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Collect every settings change event emitted on `bus`.
pub fn record_settings_events(
    bus: &Arc<dyn EventBus>,
) -> (Subscription, Arc<Mutex<Vec<SettingsChangeEvent>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = Subscription::listen(Arc::clone(bus), APP_SETTINGS_CHANGED, move |event| {
        let parsed = event
            .parse_payload::<SettingsChangeEvent>()
            .expect("settings event payload");
        sink.lock().unwrap().push(parsed);
    });
    (subscription, seen)
}
