//! Environment checks run before any command is accepted

use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Resolves executables on the system path
pub trait ToolLocator {
    /// Full path of `tool`, or `None` if it cannot be found
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

/// Looks tools up on `PATH` with the `which` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocator;

impl ToolLocator for SystemLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }
}

/// Fail with [`Error::ToolNotFound`] unless `tool` is resolvable
pub fn ensure_tool(locator: &dyn ToolLocator, tool: &str) -> Result<PathBuf> {
    match locator.locate(tool) {
        Some(path) => {
            debug!("Found {} at {}", tool, path.display());
            Ok(path)
        }
        None => Err(Error::tool_not_found(tool)),
    }
}
