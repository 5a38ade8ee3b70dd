use fltk::dialog::{FileDialogType, NativeFileChooser};
use std::path::PathBuf;

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::file_selection::{FileDialogRequest, FilePicker, fltk_filter};

/// The platform's native open dialog.
pub struct NativeFilePicker;

impl FilePicker for NativeFilePicker {
    fn pick_files(&self, request: &FileDialogRequest) -> Result<Vec<PathBuf>> {
        let kind = match (request.directory, request.multiple) {
            (true, true) => FileDialogType::BrowseMultiDir,
            (true, false) => FileDialogType::BrowseDir,
            (false, true) => FileDialogType::BrowseMultiFile,
            (false, false) => FileDialogType::BrowseFile,
        };

        let mut nfc = NativeFileChooser::new(kind);
        nfc.set_title(&request.title);
        nfc.set_filter(&fltk_filter(request.filters));
        nfc.show(); // blocks until close

        // FLTK reports "No error" when nothing went wrong
        if let Some(message) = nfc.error_message() {
            if !message.is_empty() && message != "No error" {
                return Err(AppError::FileSelection(message));
            }
        }

        Ok(nfc
            .filenames()
            .into_iter()
            .filter(|path| !path.as_os_str().is_empty())
            .collect())
    }
}
