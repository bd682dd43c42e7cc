use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use gola_platform::HostPlatform;
use gola_shim::Gola;

use crate::cli::App;

mod cli;
mod logging;

fn main() {
    logging::init();
    let app = App::parse();

    let code = match run(&app) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "launch failed");
            eprintln!("gola: {err}");
            1
        }
    };
    process::exit(code);
}

fn run(app: &App) -> Result<i32> {
    let Some(script) = app.script() else {
        App::command().print_help()?;
        return Ok(0);
    };

    let argv0 = env::args_os()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_PKG_NAME")));

    let gola = Gola::new(&argv0, script, &HostPlatform)?;
    let code = gola.exec(app.forwarded())?;
    Ok(code)
}
