//! Interpreter resolution for script launching.
//!
//! # Architecture
//!
//! A launch goes through four stages, each usable on its own:
//!
//! - [`LaunchTarget`] - locates the script, redirecting bundle directories
//!   to a configured member file
//! - [`read_shebang`] - first line of a plain script or of a zip member
//! - [`tokenize`] - shebang line to argument vector
//! - [`resolve`] - keyword lookup in an [`InterpreterTable`]
//!
//! [`dispatch`] runs the result, and [`Gola`] ties the stages together.
//!
//! # Example
//!
//! ```
//! use gola_config::InterpreterMap;
//! use gola_shim::{resolve, tokenize};
//!
//! let mut map = InterpreterMap::new();
//! map.entry("python3".to_string())
//!     .or_default()
//!     .insert(".py".to_string(), "/usr/bin/python3".to_string());
//!
//! let resolution = resolve(tokenize("#!/usr/bin/env python3.12\n"), &map, ".py");
//! assert_eq!(resolution.keyword, "python3");
//! assert_eq!(resolution.argv, ["/usr/bin/python3"]);
//! ```

pub use dispatch::dispatch;
pub use error::{Error, ErrorKind, Result};
pub use launcher::Gola;
pub use reader::read_shebang;
pub use resolver::{InterpreterTable, Resolution, resolve};
pub use shebang::tokenize;
pub use target::LaunchTarget;

mod dispatch;
mod error;
mod launcher;
mod path;
mod reader;
mod resolver;
mod shebang;
mod target;
