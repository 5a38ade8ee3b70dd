use std::path::PathBuf;

use crate::app::domain::Notification;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::i18n::ShellTexts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filters offered by the file searcher, most specific first.
pub const FILE_SEARCH_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Text Files",
        extensions: &["txt", "md"],
    },
    FileFilter {
        name: "Image Files",
        extensions: &["png", "jpeg", "jpg", "gif"],
    },
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDialogRequest {
    pub title: String,
    pub multiple: bool,
    pub directory: bool,
    pub filters: &'static [FileFilter],
}

impl FileDialogRequest {
    pub fn file_search(texts: &ShellTexts) -> Self {
        Self {
            title: texts.select_files.to_string(),
            multiple: true,
            directory: false,
            filters: FILE_SEARCH_FILTERS,
        }
    }
}

/// A native chooser. An empty result means the user dismissed it.
pub trait FilePicker {
    fn pick_files(&self, request: &FileDialogRequest) -> Result<Vec<PathBuf>>;
}

#[derive(Debug)]
pub enum SelectionOutcome {
    Selected(Vec<PathBuf>),
    Canceled,
    Failed(AppError),
}

impl SelectionOutcome {
    pub fn notification(&self, texts: &ShellTexts) -> Notification {
        match self {
            SelectionOutcome::Selected(_) => {
                Notification::success(texts.success, texts.file_selected)
            }
            SelectionOutcome::Canceled => {
                Notification::info(texts.canceled, texts.operation_canceled)
            }
            SelectionOutcome::Failed(_) => Notification::error(texts.error, texts.error_selecting),
        }
    }
}

/// Run the file searcher and classify the result.
pub fn select_files(picker: &dyn FilePicker, texts: &ShellTexts) -> SelectionOutcome {
    let request = FileDialogRequest::file_search(texts);
    match picker.pick_files(&request) {
        Ok(paths) if paths.is_empty() => {
            tracing::info!("file selection canceled");
            SelectionOutcome::Canceled
        }
        Ok(paths) => {
            tracing::info!(count = paths.len(), first = %paths[0].display(), "files selected");
            SelectionOutcome::Selected(paths)
        }
        Err(e) => {
            tracing::error!(error = %e, "file selection failed");
            SelectionOutcome::Failed(e)
        }
    }
}

/// FLTK filter string: "Description\tPattern" lines.
/// A single extension is written bare, several as a brace group.
pub fn fltk_filter(filters: &[FileFilter]) -> String {
    filters
        .iter()
        .map(|filter| {
            let pattern = match filter.extensions {
                ["*"] => "*".to_string(),
                [single] => format!("*.{}", single),
                many => format!("*.{{{}}}", many.join(",")),
            };
            format!("{}\t{}", filter.name, pattern)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
