//! Per-user directory lookup.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the directory gola owns below the user configuration directory.
pub const APP_DIR: &str = "gola";

/// File name of the per-user settings file inside [`APP_DIR`].
pub const SETTINGS_FILE: &str = "settings.json";

/// User's home directory.
pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// User's configuration directory.
///
/// - Windows: `APPDATA`
/// - elsewhere: `$XDG_CONFIG_HOME` or `~/.config`
pub fn user_config() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        non_empty(env::var_os("APPDATA")).map(PathBuf::from)
    }
    #[cfg(not(target_os = "windows"))]
    {
        non_empty(env::var_os("XDG_CONFIG_HOME"))
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".config")))
    }
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}
