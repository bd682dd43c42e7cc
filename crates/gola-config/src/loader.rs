//! Configuration file discovery.
//!
//! The file next to the launcher (`gola.json` beside `gola` or `gola.exe`)
//! wins over the per-user `<config-dir>/gola/settings.json`. A missing file
//! is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use gola_platform::dir::{APP_DIR, SETTINGS_FILE};
use gola_platform::{Platform, is_file};

use crate::config::Config;
use crate::error::{Error, Result};

/// Load the configuration for a launcher invoked as `argv0`.
pub fn load(argv0: &Path, platform: &impl Platform) -> Result<Config> {
    match locate(argv0, platform)? {
        Some(path) => load_file(&path),
        None => {
            tracing::debug!("no configuration file found");
            Ok(Config::default())
        }
    }
}

/// Read and parse a configuration file.
pub fn load_file(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "loading configuration");
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_slice(&bytes, path)
}

/// Find the configuration file that applies to `argv0`, if any.
pub fn locate(argv0: &Path, platform: &impl Platform) -> Result<Option<PathBuf>> {
    let launcher = resolve_launcher(argv0, platform)?;
    let sibling = launcher.with_extension("json");
    if is_file(&sibling) {
        return Ok(Some(sibling));
    }
    tracing::trace!(path = %sibling.display(), "no sibling configuration");

    Ok(platform
        .user_config_dir()
        .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
        .filter(|path| is_file(path)))
}

/// Absolute path of the launcher: used as is, made absolute when it names a
/// file relative to the current directory, or searched on `PATH`.
fn resolve_launcher(argv0: &Path, platform: &impl Platform) -> Result<PathBuf> {
    if argv0.is_absolute() {
        return Ok(argv0.to_path_buf());
    }
    if platform.is_executable_candidate(argv0) {
        return std::path::absolute(argv0).map_err(Error::CurrentDir);
    }
    platform
        .find_on_path(argv0)
        .map_err(|source| Error::Unresolvable {
            argv0: argv0.to_path_buf(),
            source,
        })
}
