use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A transient, dismissible message shown in the main window banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub auto_close: Duration,
}

impl Notification {
    pub fn info(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Info, Duration::from_millis(2000))
    }

    pub fn success(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Success, Duration::from_millis(3000))
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self::new(title, message, Severity::Error, Duration::from_millis(5000))
    }

    fn new(title: &str, message: &str, severity: Severity, auto_close: Duration) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            severity,
            auto_close,
        }
    }

    /// Single-line text for the banner
    pub fn banner_text(&self) -> String {
        if self.message.is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_by_severity() {
        assert_eq!(Notification::info("a", "b").auto_close, Duration::from_secs(2));
        assert_eq!(Notification::success("a", "b").auto_close, Duration::from_secs(3));
        assert_eq!(Notification::error("a", "b").auto_close, Duration::from_secs(5));
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(Notification::error("Error", "disk full").banner_text(), "Error: disk full");
        assert_eq!(Notification::info("Canceled", "").banner_text(), "Canceled");
    }
}
