use crate::app::domain::WindowSpec;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::windows::WindowHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Focused,
    Created,
}

/// Focus the window described by `spec` if it is already open, otherwise
/// create it. A failed lookup is logged and creation is attempted anyway.
pub fn open_or_focus(host: &dyn WindowHost, spec: &WindowSpec) -> Result<OpenOutcome> {
    match host.contains(&spec.label) {
        Ok(true) => {
            tracing::debug!(label = %spec.label, "window already open; focusing");
            host.focus(&spec.label)?;
            return Ok(OpenOutcome::Focused);
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(
                error = %e,
                label = %spec.label,
                "window lookup failed; creating anyway"
            );
        }
    }

    tracing::info!(label = %spec.label, route = %spec.route, "creating window");
    host.create(spec)?;
    Ok(OpenOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::window::SETTINGS_WINDOW_LABEL;
    use crate::app::infrastructure::error::AppError;
    use crate::test_utils::{HostCall, RecordingWindowHost};

    fn label() -> String {
        SETTINGS_WINDOW_LABEL.to_string()
    }

    #[test]
    fn test_creates_when_absent() {
        let host = RecordingWindowHost::new();
        let spec = WindowSpec::settings("Settings");
        assert_eq!(open_or_focus(&host, &spec).unwrap(), OpenOutcome::Created);
        assert_eq!(host.created(), vec![spec]);
    }

    #[test]
    fn test_second_open_focuses_single_window() {
        let host = RecordingWindowHost::new();
        let spec = WindowSpec::settings("Settings");

        assert_eq!(open_or_focus(&host, &spec).unwrap(), OpenOutcome::Created);
        assert_eq!(open_or_focus(&host, &spec).unwrap(), OpenOutcome::Focused);

        assert_eq!(host.open_count(SETTINGS_WINDOW_LABEL), 1);
        assert_eq!(
            host.calls(),
            vec![
                HostCall::Lookup(label()),
                HostCall::Create(label()),
                HostCall::Lookup(label()),
                HostCall::Focus(label()),
            ]
        );
    }

    #[test]
    fn test_lookup_failure_still_creates() {
        let host = RecordingWindowHost::new();
        host.fail_lookup(true);
        let spec = WindowSpec::settings("Settings");
        assert_eq!(open_or_focus(&host, &spec).unwrap(), OpenOutcome::Created);
        assert_eq!(host.open_count(SETTINGS_WINDOW_LABEL), 1);
    }

    #[test]
    fn test_create_failure_is_reported() {
        let host = RecordingWindowHost::new();
        host.fail_create(true);
        let spec = WindowSpec::settings("Settings");
        assert!(matches!(open_or_focus(&host, &spec), Err(AppError::Window(_))));
        assert_eq!(host.open_count(SETTINGS_WINDOW_LABEL), 0);
    }
}
