//! Project creation flow
//!
//! Announce the destination, ask the creation questions, then clone the
//! template repository. Each step only runs if the previous one succeeded,
//! and nothing touches the filesystem unless the user confirmed.

use std::io::Write;

use camino::Utf8PathBuf;
use console::style;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::git::{CloneCommand, CloneRunner};
use crate::prompt::{self, Prompter};
use crate::types::{CreatedProject, TemplateSource, DEFAULT_PROJECT_NAME};

/// Creates projects by cloning a template repository
pub struct ProjectCreator<'a> {
    prompter: &'a mut dyn Prompter,
    runner: &'a dyn CloneRunner,
    source: TemplateSource,
    working_dir: Utf8PathBuf,
    version: String,
}

impl<'a> ProjectCreator<'a> {
    /// Create projects under `working_dir` from the default template
    pub fn new(
        prompter: &'a mut dyn Prompter,
        runner: &'a dyn CloneRunner,
        working_dir: impl Into<Utf8PathBuf>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            prompter,
            runner,
            source: TemplateSource::default(),
            working_dir: working_dir.into(),
            version: version.into(),
        }
    }

    /// Clone from `source` instead of the default template
    pub fn with_source(mut self, source: TemplateSource) -> Self {
        self.source = source;
        self
    }

    /// Run the creation flow for `name`, writing progress to `out`
    ///
    /// # Errors
    /// - [`Error::Cancelled`] if the user declines; no clone is attempted
    /// - [`Error::CloneFailed`] if git exits with anything but zero
    /// - [`Error::Prompt`] if the questions cannot be asked
    ///
    /// A partially cloned directory is left in place on failure.
    pub async fn create(
        &mut self,
        name: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<CreatedProject> {
        let name = name.unwrap_or(DEFAULT_PROJECT_NAME);
        let path = self.working_dir.join(name);

        writeln!(out, "{}", style(format!("Che CLI v{}\n", self.version)).blue())?;
        writeln!(out, "✨ Creating project in {}.", style(&path).yellow())?;

        let answers = prompt::ask(&mut *self.prompter)?;
        if !answers.confirm {
            info!("Creation of {} cancelled", name);
            return Err(Error::Cancelled);
        }
        info!(
            "Preset '{}' and ui lib '{}' do not change the template",
            answers.preset, answers.ui_lib
        );

        let command = CloneCommand::new(&self.source, name, &self.working_dir);
        writeln!(
            out,
            "{}",
            style(format!("Cloning files from {}...", self.source.url)).blue()
        )?;
        out.flush()?;

        let status = self.runner.run(&command).await?;
        if !status.success() {
            warn!("'{}' exited with {:?}", command, status.code);
            return Err(Error::clone_failed(status.code));
        }

        writeln!(
            out,
            "🎉  Successfully created project {}.",
            style(name).yellow()
        )?;
        writeln!(out, "👉  Get started with the following commands:")?;
        writeln!(out)?;
        writeln!(out, "{}{}", style(" $ ").dim(), style(format!("cd {}", name)).cyan())?;
        writeln!(
            out,
            "{}{}",
            style(" $ ").dim(),
            style(&self.source.start_command).cyan()
        )?;
        writeln!(out)?;

        Ok(CreatedProject {
            name: name.to_string(),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::CloneStatus;
    use async_trait::async_trait;

    struct AlwaysYes;

    impl Prompter for AlwaysYes {
        fn select(&mut self, _prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
            Ok(default)
        }

        fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool> {
            Ok(true)
        }
    }

    struct Succeeds;

    #[async_trait]
    impl CloneRunner for Succeeds {
        async fn run(&self, _command: &CloneCommand) -> Result<CloneStatus> {
            Ok(CloneStatus::from_code(0))
        }
    }

    #[tokio::test]
    async fn test_name_defaults_to_placeholder() {
        console::set_colors_enabled(false);
        let mut prompter = AlwaysYes;
        let mut out: Vec<u8> = Vec::new();

        let created = ProjectCreator::new(&mut prompter, &Succeeds, "/work", "1.2.3")
            .create(None, &mut out)
            .await
            .unwrap();

        assert_eq!(created.name, DEFAULT_PROJECT_NAME);
        assert_eq!(created.path, Utf8PathBuf::from("/work/my-project"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Che CLI v1.2.3"));
        assert!(text.contains("Creating project in /work/my-project."));
    }
}
