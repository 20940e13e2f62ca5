//! External process invocation.
//! Version control initialisation and dependency installation are opaque
//! commands; only whether they succeeded matters.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs external commands on behalf of pipeline steps.
pub trait CommandRunner {
    /// Runs `program` with `args` inside `cwd`.
    ///
    /// # Arguments
    /// * `action` - Human readable name of what the command does, used in errors
    /// * `program` - Executable to run
    /// * `args` - Arguments passed to the executable
    /// * `cwd` - Working directory of the child process
    ///
    /// # Errors
    /// * `Error::CommandSpawnError` if the process could not be started
    /// * `Error::CommandFailedError` if it exited unsuccessfully
    fn run(&self, action: &str, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Runs commands as child processes, inheriting stdout and stderr.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, action: &str, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        debug!("Running '{} {}' in {}", program, args.join(" "), cwd.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::CommandSpawnError { program: program.to_string(), source })?;

        if !status.success() {
            return Err(Error::CommandFailedError {
                action: action.to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
