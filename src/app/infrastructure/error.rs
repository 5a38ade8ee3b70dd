use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings store read failed: {0}")]
    StoreRead(String),

    #[error("Settings store write failed: {0}")]
    StoreWrite(String),

    #[error("Window lookup failed: {0}")]
    WindowLookup(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("File selection failed: {0}")]
    FileSelection(String),

    #[error("Settings editor error: {0}")]
    Editor(String),
}

impl AppError {
    /// Recast any failure on the save path as a write failure, keeping the
    /// original message.
    pub fn into_write_failure(self) -> Self {
        match self {
            AppError::StoreWrite(_) => self,
            other => AppError::StoreWrite(other.to_string()),
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
        assert!(app_err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::StoreRead("corrupt file".to_string());
        assert_eq!(err.to_string(), "Settings store read failed: corrupt file");

        let err = AppError::WindowLookup("registry busy".to_string());
        assert_eq!(err.to_string(), "Window lookup failed: registry busy");

        let err = AppError::FileSelection("portal unavailable".to_string());
        assert_eq!(err.to_string(), "File selection failed: portal unavailable");
    }

    #[test]
    fn test_into_write_failure() {
        let err = AppError::StoreRead("locked".to_string()).into_write_failure();
        assert!(matches!(err, AppError::StoreWrite(_)));
        assert!(err.to_string().contains("locked"));

        let err = AppError::StoreWrite("disk full".to_string()).into_write_failure();
        assert_eq!(err.to_string(), "Settings store write failed: disk full");
    }
}
