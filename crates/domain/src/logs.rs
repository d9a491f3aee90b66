//! Captured output of an app's last run.

use serde::{Deserialize, Serialize};

use crate::html;

/// Standard output and standard error of an app, as returned by `getLogs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLogs {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
}

impl AppLogs {
    /// Both streams converted from escaped HTML to displayable text.
    #[must_use]
    pub fn to_text(&self) -> Self {
        Self {
            stdout: html::to_text(&self.stdout),
            stderr: html::to_text(&self.stderr),
        }
    }
}
