//! che-cli - create a new project from the che template
//!
//! This is the main entry point for the che-cli command-line interface.

mod app;
mod cli;
mod commands;
mod invocation;
mod output;
mod router;
mod version;

use std::process::ExitCode;

use anyhow::Result;
use che_projects::git::GitCloneRunner;
use che_projects::guard::SystemLocator;
use che_projects::prompt::DialoguerPrompter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::Services;
use cli::Verbosity;
use invocation::Invocation;
use output::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let invocation = Invocation::from_env()?;

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let mut console = Console::new(&mut stdout, &mut stderr);

    let mut prompter = DialoguerPrompter;
    let services = Services {
        locator: &SystemLocator,
        prompter: &mut prompter,
        runner: &GitCloneRunner,
        init_logging: init_tracing,
    };

    let code = app::run(&invocation, services, &mut console).await;
    Ok(ExitCode::from(code))
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbosity: Verbosity) {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::new(verbosity.filter()))
        .init();
}
