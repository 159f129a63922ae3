//! Git operations module
//!
//! The only git operation the scaffolder needs is cloning the template
//! repository into a new directory.
//!
//! # Examples
//!
//! ```no_run
//! use che_projects::git::{CloneCommand, CloneRunner, GitCloneRunner};
//! use che_projects::TemplateSource;
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let command = CloneCommand::new(&TemplateSource::default(), "demo", Utf8Path::new("/tmp"));
//! let status = GitCloneRunner.run(&command).await?;
//! assert!(status.success());
//! # Ok(())
//! # }
//! ```

mod clone;

/// Executable the scaffolder depends on
pub const GIT: &str = "git";

pub use clone::{CloneCommand, CloneRunner, CloneStatus, GitCloneRunner};
