//! Platform capabilities used by the gola launcher.
//!
//! Everything that differs between operating systems lives behind the
//! [`Platform`] trait: where the per-user configuration directory is, and
//! what counts as an executable candidate when locating the launcher itself.
//! [`HostPlatform`] selects the implementation for the build target.

pub use error::{Error, Result};
pub use exe::{HostPlatform, Platform, is_file};

pub mod command;
pub mod dir;
mod error;
mod exe;
