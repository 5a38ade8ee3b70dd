//! Persistent key-value store backing the settings.
//!
//! `set` only stages a value; nothing reaches disk until `save`. The file is a
//! flat JSON object, so unknown keys written by other versions survive a
//! load/save cycle.

use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::{AppError, Result};
use crate::app::domain::settings::{LANGUAGE_KEY, THEME_KEY};
use crate::app::domain::{Locale, PersistedSettings, ThemeMode};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
    /// Commit staged writes.
    fn save(&mut self) -> Result<()>;
}

/// Opens a fresh handle on the store each time the settings are read or written.
pub trait StoreLoader {
    type Store: KeyValueStore;

    fn load(&self) -> Result<Self::Store>;
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Map<String, Value>,
    dirty: bool,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => Map::new(),
            Ok(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    return Err(AppError::StoreRead(format!(
                        "{} does not hold a JSON object",
                        path.display()
                    )));
                }
                Err(e) => {
                    return Err(AppError::StoreRead(format!("{}: {}", path.display(), e)));
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Map::new(),
            Err(e) => {
                return Err(AppError::StoreRead(format!("{}: {}", path.display(), e)));
            }
        };

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    pub fn has_pending_writes(&self) -> bool {
        self.dirty
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.dirty = true;
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let write_err =
            |e: std::io::Error| AppError::StoreWrite(format!("{}: {}", self.path.display(), e));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| AppError::StoreWrite(e.to_string()))?;

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp_path = self.path.with_extension("dat.tmp");
        fs::write(&tmp_path, json).map_err(write_err)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                tracing::warn!(
                    error = %cleanup,
                    path = %tmp_path.display(),
                    "failed to remove temp file"
                );
            }
            return Err(write_err(e));
        }

        self.dirty = false;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FileStoreLoader {
    path: PathBuf,
}

impl FileStoreLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StoreLoader for FileStoreLoader {
    type Store = FileStore;

    fn load(&self) -> Result<FileStore> {
        FileStore::open(&self.path)
    }
}

/// Read theme and language, keeping `fallback` for absent keys and for
/// values that are not a supported theme or locale.
pub fn read_settings<S: KeyValueStore>(
    store: &S,
    fallback: &PersistedSettings,
) -> Result<PersistedSettings> {
    let theme = match store.get(THEME_KEY)? {
        Some(Value::String(raw)) => ThemeMode::parse(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "ignoring unsupported stored theme");
            fallback.theme
        }),
        Some(other) => {
            tracing::warn!(value = %other, "ignoring non-string stored theme");
            fallback.theme
        }
        None => fallback.theme,
    };

    let language = match store.get(LANGUAGE_KEY)? {
        Some(Value::String(raw)) => Locale::from_code(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "ignoring unsupported stored language");
            fallback.language
        }),
        Some(other) => {
            tracing::warn!(value = %other, "ignoring non-string stored language");
            fallback.language
        }
        None => fallback.language,
    };

    Ok(PersistedSettings { theme, language })
}

/// Stage both settings and commit them.
pub fn write_settings<S: KeyValueStore>(store: &mut S, settings: &PersistedSettings) -> Result<()> {
    store.set(THEME_KEY, Value::String(settings.theme.as_str().to_string()))?;
    store.set(LANGUAGE_KEY, Value::String(settings.language.code().to_string()))?;
    store.save()
}

/// Load the settings once, falling back to `defaults` when the store cannot
/// be read.
pub fn load_settings_or<L: StoreLoader>(
    loader: &L,
    defaults: &PersistedSettings,
) -> PersistedSettings {
    match loader.load().and_then(|store| read_settings(&store, defaults)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read settings store; using defaults");
            *defaults
        }
    }
}
