//! Configuration store and loader for the gola launcher.
//!
//! A configuration names the archive members to probe for a shebang
//! (`dir`) and maps interpreter keywords to executables per script
//! extension (`map`):
//!
//! ```json
//! {
//!   "dir": ["__main__.py"],
//!   "map": {
//!     "python3": { ".py": "python.exe", ".pyw": "pythonw.exe", "": "py.exe" }
//!   }
//! }
//! ```
//!
//! The value is loaded once by [`load`] and never mutated afterwards.

pub use config::{Config, InterpreterMap};
pub use error::{Error, Result};
pub use loader::{load, load_file, locate};

mod config;
mod error;
mod loader;
