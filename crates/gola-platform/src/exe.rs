//! Platform capability interface.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dir;
use crate::error::{Error, Result};

/// Operating-system dependent lookups used while locating configuration.
pub trait Platform {
    /// Whether `path` names an existing executable, as the launcher would
    /// have been started from it.
    fn is_executable_candidate(&self, path: &Path) -> bool;

    /// The per-user configuration directory, without the `gola` suffix.
    fn user_config_dir(&self) -> Option<PathBuf>;

    /// Search `PATH` for `name`.
    fn find_on_path(&self, name: &Path) -> Result<PathBuf> {
        which::which(name).map_err(|source| Error::NotOnPath {
            name: name.display().to_string(),
            source,
        })
    }
}

/// The platform this binary was built for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    #[cfg(target_os = "windows")]
    fn is_executable_candidate(&self, path: &Path) -> bool {
        if is_file(path) {
            return true;
        }
        let mut exe = path.as_os_str().to_owned();
        exe.push(".exe");
        is_file(Path::new(&exe))
    }

    #[cfg(not(target_os = "windows"))]
    fn is_executable_candidate(&self, path: &Path) -> bool {
        is_file(path)
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        dir::user_config()
    }
}

impl<P: Platform + ?Sized> Platform for &P {
    fn is_executable_candidate(&self, path: &Path) -> bool {
        (**self).is_executable_candidate(path)
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        (**self).user_config_dir()
    }

    fn find_on_path(&self, name: &Path) -> Result<PathBuf> {
        (**self).find_on_path(name)
    }
}

/// Whether `path` exists and is a regular file, following symlinks.
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
