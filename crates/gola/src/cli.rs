use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Launch a script with the interpreter named by its shebang line.
#[derive(Clone, Debug, Parser)]
#[command(name = "gola", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Script, zip archive or bundle directory, followed by the arguments
    /// handed to it unchanged.
    #[arg(value_name = "SCRIPT", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<OsString>,
}

impl App {
    pub fn script(&self) -> Option<PathBuf> {
        self.command.first().map(PathBuf::from)
    }

    /// Arguments for the interpreter: the script as given, then the rest.
    pub fn forwarded(&self) -> &[OsString] {
        &self.command
    }
}
