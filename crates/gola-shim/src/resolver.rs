//! Interpreter resolution.
//!
//! This module defines the [`InterpreterTable`] trait, the only contract
//! between resolution and where the keyword mapping comes from, and
//! [`resolve`], which turns a tokenized shebang into the command to run.

use gola_config::{Config, InterpreterMap};

use crate::path::{base_name, extension};

pub trait InterpreterTable {
    fn contains(&self, keyword: &str) -> bool;

    /// Interpreter for `keyword` when launching a script with extension
    /// `ext`, or the keyword's default (`""`) entry.
    fn interpreter(&self, keyword: &str, ext: &str) -> Option<&str>;
}

impl InterpreterTable for InterpreterMap {
    fn contains(&self, keyword: &str) -> bool {
        self.contains_key(keyword)
    }

    fn interpreter(&self, keyword: &str, ext: &str) -> Option<&str> {
        let variants = self.get(keyword)?;
        variants
            .get(ext)
            .or_else(|| variants.get(""))
            .map(String::as_str)
    }
}

impl InterpreterTable for Config {
    fn contains(&self, keyword: &str) -> bool {
        self.map.contains(keyword)
    }

    fn interpreter(&self, keyword: &str, ext: &str) -> Option<&str> {
        self.map.interpreter(keyword, ext)
    }
}

/// Outcome of [`resolve`].
///
/// `argv` is empty when no interpreter could be chosen; `keyword` still
/// names what was looked up so the failure can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub keyword: String,
    pub argv: Vec<String>,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        !self.argv.is_empty()
    }

    fn unresolved(keyword: String) -> Self {
        Self {
            keyword,
            argv: Vec::new(),
        }
    }
}

/// Map a tokenized shebang to the command line that runs the script.
///
/// `env` indirection is followed past its flags (`-u` takes a value) and
/// `NAME=VALUE` assignments. The keyword is the interpreter's base name with
/// extensions stripped one at a time until `table` knows it, so `python3.9`
/// finds a `python3` entry. The interpreter token is replaced by the
/// table's entry for `ext`, and everything before it is dropped.
pub fn resolve(mut argv: Vec<String>, table: &impl InterpreterTable, ext: &str) -> Resolution {
    if argv.is_empty() {
        return Resolution::default();
    }

    let mut i = 0;
    let mut keyword = base_name(&argv[i]);
    if keyword == "env" || keyword == "env.exe" {
        i = skip_env_prefix(&argv, i + 1);
        keyword = argv.get(i).map_or("", |token| base_name(token));
    }
    let keyword = normalize(keyword, table).to_string();

    if i >= argv.len() {
        return Resolution::unresolved(keyword);
    }
    let Some(interpreter) = table.interpreter(&keyword, ext) else {
        tracing::debug!(%keyword, ext, "no interpreter mapped");
        return Resolution::unresolved(keyword);
    };

    argv[i] = interpreter.to_string();
    argv.drain(..i);
    tracing::debug!(%keyword, ?argv, "resolved interpreter");
    Resolution { keyword, argv }
}

/// Index of the first token after `env`'s options and assignments.
fn skip_env_prefix(argv: &[String], mut i: usize) -> usize {
    while let Some(token) = argv.get(i) {
        if !token.starts_with('-') {
            break;
        }
        i += if token == "-u" { 2 } else { 1 };
    }
    while argv.get(i).is_some_and(|token| token.contains('=')) {
        i += 1;
    }
    i.min(argv.len())
}

fn normalize<'a>(mut keyword: &'a str, table: &impl InterpreterTable) -> &'a str {
    while !table.contains(keyword) {
        let ext = extension(keyword);
        if ext.is_empty() {
            break;
        }
        keyword = &keyword[..keyword.len() - ext.len()];
        tracing::trace!(keyword, "stripped keyword extension");
    }
    keyword
}
