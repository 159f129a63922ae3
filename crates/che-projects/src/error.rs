//! Error types for che-projects

use thiserror::Error;

/// Result type alias using che-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
///
/// Every variant is fatal for the current invocation. The display strings are
/// the lines shown to the user.
#[derive(Error, Debug)]
pub enum Error {
    /// A required executable is not on PATH
    #[error("Sorry, this script requires {tool}")]
    ToolNotFound { tool: String },

    /// The user declined the final confirmation
    #[error("Canceled.")]
    Cancelled,

    /// git exited with a non-zero status or was killed by a signal
    #[error("Error: fetch project files from git failed.")]
    CloneFailed { code: Option<i32> },

    /// Interactive prompt failed (no terminal, closed stdin)
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a tool not found error
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(code: Option<i32>) -> Self {
        Self::CloneFailed { code }
    }

    /// Whether the user chose to stop rather than something going wrong
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
