//! Command routing
//!
//! The command table is the `Cli` definition. It is built in full before any
//! argument is looked at, then each invocation resolves to exactly one
//! [`Dispatch`].

use clap::error::ErrorKind;
use clap::{Command, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::cli::{Cli, Commands, Verbosity};
use crate::invocation::Invocation;

/// The single action an invocation resolves to
#[derive(Debug)]
pub enum Dispatch {
    /// `create <name>`
    Create { name: String, verbosity: Verbosity },
    /// General or per-command help text
    Help(String),
    /// Version text
    Version(String),
    /// Unregistered command: general help plus the offending input
    Unknown { help: String, input: String },
    /// A registered command used incorrectly
    Usage(clap::Error),
}

/// Build the sealed command table for this invocation
pub fn command_table(invocation: &Invocation) -> Command {
    Cli::command()
        .version(invocation.version.version.clone())
        .long_version(invocation.version.to_string())
}

/// Resolve `invocation` to the action it asks for
pub fn route(invocation: &Invocation) -> Dispatch {
    let mut table = command_table(invocation);

    let matches = match table.clone().try_get_matches_from(invocation.argv()) {
        Ok(matches) => matches,
        Err(err) => return route_error(&mut table, invocation, err),
    };

    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => return Dispatch::Usage(err),
    };

    let verbosity = Verbosity::from(&cli);
    match cli.command {
        Some(Commands::Create(args)) => {
            debug!("Dispatching create {}", args.name);
            Dispatch::Create {
                name: args.name,
                verbosity,
            }
        }
        None => Dispatch::Help(table.render_help().to_string()),
    }
}

fn route_error(table: &mut Command, invocation: &Invocation, err: clap::Error) -> Dispatch {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Dispatch::Help(err.render().to_string())
        }
        ErrorKind::DisplayVersion => Dispatch::Version(err.render().to_string()),
        ErrorKind::InvalidSubcommand => unknown(table, invocation),
        ErrorKind::UnknownArgument if !names_registered_command(table, invocation) => {
            unknown(table, invocation)
        }
        _ => Dispatch::Usage(err),
    }
}

fn unknown(table: &mut Command, invocation: &Invocation) -> Dispatch {
    Dispatch::Unknown {
        help: table.render_help().to_string(),
        input: invocation.args.join(" "),
    }
}

/// Whether the first non-flag argument is a registered subcommand
fn names_registered_command(table: &Command, invocation: &Invocation) -> bool {
    let Some(first) = invocation.args.iter().find(|arg| !arg.starts_with('-')) else {
        // Only flags: an unknown flag on a known command line
        return true;
    };
    first == "help" || table.find_subcommand(first).is_some()
}
