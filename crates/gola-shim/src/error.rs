//! Error types for launching a script.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' is not a file")]
    NotAFile(PathBuf),

    #[error(transparent)]
    Config(#[from] gola_config::Error),

    #[error("could not open '{path}': {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("could not read {expected} bytes from '{path}'")]
    Signature { path: PathBuf, expected: usize },

    #[error("could not read from '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("could not open zip file '{path}': {source}")]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("could not open '{member}' in '{path}': {source}")]
    Member {
        path: PathBuf,
        member: String,
        source: zip::result::ZipError,
    },

    #[error("could not find interpreter[{keyword}] for '{script}'")]
    NoInterpreter { keyword: String, script: PathBuf },

    #[error("empty command line")]
    EmptyCommand,

    #[error(transparent)]
    Platform(#[from] gola_platform::Error),
}

/// Failure category, in the order a launch can hit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TargetNotFound,
    Configuration,
    Format,
    Resolution,
    Launch,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotAFile(_) => ErrorKind::TargetNotFound,
            Error::Config(_) => ErrorKind::Configuration,
            Error::Open { .. }
            | Error::Signature { .. }
            | Error::Read { .. }
            | Error::Archive { .. }
            | Error::Member { .. } => ErrorKind::Format,
            Error::NoInterpreter { .. } | Error::EmptyCommand => ErrorKind::Resolution,
            Error::Platform(_) => ErrorKind::Launch,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
