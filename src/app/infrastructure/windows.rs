use super::error::Result;
use crate::app::domain::WindowSpec;

/// Window management provided by the toolkit, addressed by label.
pub trait WindowHost {
    /// Whether a live window with `label` exists.
    fn contains(&self, label: &str) -> Result<bool>;
    /// Bring an existing window to the front.
    fn focus(&self, label: &str) -> Result<()>;
    fn create(&self, spec: &WindowSpec) -> Result<()>;
    fn close(&self, label: &str) -> Result<()>;
}
