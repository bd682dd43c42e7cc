use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::process::{Command as StdCommand, ExitStatus, Stdio};

/// A child process that shares the launcher's standard streams.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        let mut inner = StdCommand::new(&program);
        inner
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        Self { inner, program }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    /// Spawn the child and block until it exits.
    pub fn status(&mut self) -> Result<ExitStatus> {
        tracing::debug!(program = %self.program, args = ?self.inner.get_args().collect::<Vec<_>>(), "spawning");
        self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }

    /// Spawn the child, wait for it and return its exit code.
    pub fn run(&mut self) -> Result<i32> {
        let status = self.status()?;
        exit_code(&self.program, status)
    }
}

/// The exit code of `status`, or [`Error::Terminated`] if the child was
/// killed by a signal.
pub fn exit_code(cmd: &str, status: ExitStatus) -> Result<i32> {
    match status.code() {
        Some(code) => Ok(code),
        None => Err(Error::Terminated {
            cmd: cmd.to_string(),
            signal: signal_of(status),
        }),
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}
