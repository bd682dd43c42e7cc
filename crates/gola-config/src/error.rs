use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not resolve launcher path '{argv0}': {source}")]
    Unresolvable {
        argv0: PathBuf,
        #[source]
        source: gola_platform::Error,
    },

    #[error("could not get current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("could not read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("could not unmarshal '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
