use std::ffi::OsStr;

use gola_platform::command::Command;

use crate::error::{Error, Result};

/// Run `argv` followed by `args` with inherited stdio and return the child's
/// exit code.
///
/// A non-zero exit is a normal result; only a failed spawn or a child killed
/// without an exit code is an error.
pub fn dispatch<S: AsRef<OsStr>>(argv: &[String], args: &[S]) -> Result<i32> {
    let (program, rest) = argv.split_first().ok_or(Error::EmptyCommand)?;
    let code = Command::new(program.as_str()).args(rest).args(args).run()?;
    tracing::debug!(program = %program, code, "child exited");
    Ok(code)
}
