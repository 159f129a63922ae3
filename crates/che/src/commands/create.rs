//! `che-cli create` command handler

use che_projects::git::CloneRunner;
use che_projects::prompt::Prompter;
use che_projects::scaffold::ProjectCreator;
use che_projects::Result;
use tracing::info;

use crate::invocation::Invocation;
use crate::output::Console;

/// Create a new project named `name` in the invocation's working directory
pub async fn run(
    invocation: &Invocation,
    name: &str,
    prompter: &mut dyn Prompter,
    runner: &dyn CloneRunner,
    console: &mut Console<'_>,
) -> Result<()> {
    let mut creator = ProjectCreator::new(
        prompter,
        runner,
        invocation.working_dir.clone(),
        invocation.version.version.clone(),
    );

    let created = creator.create(Some(name), console.out()).await?;
    info!("Project {} created at {}", created.name, created.path);
    Ok(())
}
