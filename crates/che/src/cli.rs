//! CLI argument parsing with clap

use clap::{Args, Parser, Subcommand};

/// Printed after the general help text
pub const HELP_FOOTER: &str = "Run che-cli <command> --help for detailed usage of given command.";

/// che-cli - create a new project from the che template
#[derive(Parser, Debug)]
#[command(name = "che-cli")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = HELP_FOOTER)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// create a new project
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the project directory to create
    pub name: String,
}

/// Logging level requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbosity {
    pub verbose: u8,
    pub quiet: bool,
}

impl Verbosity {
    /// `EnvFilter` directive for this verbosity
    pub fn filter(self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            // Prompts and git progress go to the terminal; keep logs out of the way
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<&Cli> for Verbosity {
    fn from(cli: &Cli) -> Self {
        Self {
            verbose: cli.verbose,
            quiet: cli.quiet,
        }
    }
}
