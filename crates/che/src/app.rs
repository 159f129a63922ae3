//! Top-level control flow: environment guard, routing, dispatch

use che_projects::git::{CloneRunner, GIT};
use che_projects::guard::{self, ToolLocator};
use che_projects::prompt::Prompter;
use che_projects::Error;

use crate::cli::Verbosity;
use crate::commands;
use crate::invocation::Invocation;
use crate::output::Console;
use crate::router::{self, Dispatch};

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// External collaborators of a run
pub struct Services<'a> {
    pub locator: &'a dyn ToolLocator,
    pub prompter: &'a mut dyn Prompter,
    pub runner: &'a dyn CloneRunner,
    /// Called once a command that logs has been selected
    pub init_logging: fn(Verbosity),
}

/// Run one invocation to completion and return the process exit code
pub async fn run(
    invocation: &Invocation,
    services: Services<'_>,
    console: &mut Console<'_>,
) -> u8 {
    if let Err(e) = guard::ensure_tool(services.locator, GIT) {
        console.error(&e.to_string());
        return FAILURE;
    }

    match router::route(invocation) {
        Dispatch::Create { name, verbosity } => {
            (services.init_logging)(verbosity);
            let result = commands::create::run(
                invocation,
                &name,
                services.prompter,
                services.runner,
                console,
            )
            .await;
            match result {
                Ok(()) => SUCCESS,
                Err(e) => {
                    report(console, &e);
                    FAILURE
                }
            }
        }
        Dispatch::Help(text) | Dispatch::Version(text) => {
            console.print(&text);
            SUCCESS
        }
        Dispatch::Unknown { help, input } => {
            console.print(&help);
            console.unknown_command(&input);
            SUCCESS
        }
        Dispatch::Usage(err) => {
            console.eprint(&err.render().to_string());
            FAILURE
        }
    }
}

fn report(console: &mut Console<'_>, err: &Error) {
    if err.is_cancelled() {
        console.notice(&err.to_string());
    } else {
        console.error(&err.to_string());
    }
}
