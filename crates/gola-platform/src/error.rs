use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not find '{name}' in $PATH: {source}")]
    NotOnPath {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("could not start '{cmd}': {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("'{cmd}' terminated abnormally without an exit code")]
    Terminated { cmd: String, signal: Option<i32> },
}
