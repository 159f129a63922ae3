//! # che-projects
//!
//! Project scaffolding library for the che-cli binary providing:
//! - Environment checks for required executables
//! - The interactive creation questions
//! - Cloning the project template with git
//!
//! # Examples
//!
//! ## Create a project from the template repository
//!
//! ```no_run
//! use che_projects::git::GitCloneRunner;
//! use che_projects::prompt::DialoguerPrompter;
//! use che_projects::scaffold::ProjectCreator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut prompter = DialoguerPrompter;
//! let runner = GitCloneRunner;
//! let mut creator = ProjectCreator::new(&mut prompter, &runner, "/tmp", "0.1.0");
//!
//! let mut stdout = std::io::stdout();
//! creator.create(Some("demo"), &mut stdout).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod git;
pub mod guard;
pub mod prompt;
pub mod scaffold;
pub mod types;

pub use error::{Error, Result};
pub use types::{Answers, Preset, TemplateSource, UiLib};
