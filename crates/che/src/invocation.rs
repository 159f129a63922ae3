//! Process-wide inputs gathered once at startup

use std::ffi::OsString;

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;

use crate::version::VersionInfo;

/// Everything the CLI reads from the process environment
///
/// Built once in `main` and passed down explicitly, so the rest of the
/// program never touches `std::env`.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Program name (`argv[0]`)
    pub program: String,
    /// Arguments after the program name
    pub args: Vec<String>,
    /// Version of this build
    pub version: VersionInfo,
    /// Directory projects are created in
    pub working_dir: Utf8PathBuf,
}

impl Invocation {
    /// Capture the current process arguments and working directory
    pub fn from_env() -> Result<Self> {
        let mut argv = std::env::args_os();
        let program = argv
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| "che-cli".to_string());
        let args = decode_args(argv)?;

        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let working_dir =
            Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

        Ok(Self {
            program,
            args,
            version: VersionInfo::current(),
            working_dir,
        })
    }

    /// Invocation with explicit arguments
    #[cfg(test)]
    pub fn new<I, S>(args: I, working_dir: impl Into<Utf8PathBuf>, version: VersionInfo) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: "che-cli".to_string(),
            args: args.into_iter().map(Into::into).collect(),
            version,
            working_dir: working_dir.into(),
        }
    }

    /// Full argument vector including the program name
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }
}

/// Decode arguments, refusing any that are not valid UTF-8
///
/// A lossy conversion would clone into a directory with a different name.
fn decode_args<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow!("Argument is not valid UTF-8: {:?}", arg))
        })
        .collect()
}
