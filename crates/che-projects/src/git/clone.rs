//! Repository cloning

use std::fmt;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

use super::GIT;
use crate::error::Result;
use crate::types::TemplateSource;

/// A fully resolved `git clone` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneCommand {
    /// Program to run
    pub program: String,
    /// Repository URL to clone
    pub url: String,
    /// Destination directory, relative to `working_dir`
    pub destination: String,
    /// Directory the command runs in
    pub working_dir: Utf8PathBuf,
}

impl CloneCommand {
    /// Clone `source` into `working_dir/name`
    pub fn new(source: &TemplateSource, name: &str, working_dir: &Utf8Path) -> Self {
        Self {
            program: GIT.to_string(),
            url: source.url.clone(),
            destination: name.to_string(),
            working_dir: working_dir.to_path_buf(),
        }
    }

    /// Arguments passed to `program`
    ///
    /// `--` ends git's option parsing, so a name like `--bare` is a directory.
    pub fn args(&self) -> [&str; 4] {
        ["clone", "--", &self.url, &self.destination]
    }
}

impl fmt::Display for CloneCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args().join(" "))
    }
}

/// Exit status of a finished clone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl CloneStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Only an exit code of exactly zero counts as success
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CloneStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs a clone to completion
#[async_trait]
pub trait CloneRunner: Send + Sync {
    /// Run `command` and wait for it to exit
    async fn run(&self, command: &CloneCommand) -> Result<CloneStatus>;
}

/// Runs the clone with the system git, inheriting the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCloneRunner;

#[async_trait]
impl CloneRunner for GitCloneRunner {
    async fn run(&self, command: &CloneCommand) -> Result<CloneStatus> {
        info!("Cloning repository: {} -> {}", command.url, command.destination);
        debug!("Running: {} (in {})", command, command.working_dir);

        let status = Command::new(&command.program)
            .args(command.args())
            .current_dir(&command.working_dir)
            .status()
            .await?;

        let status = CloneStatus::from(status);
        debug!("git clone exited with {:?}", status.code);
        Ok(status)
    }
}
