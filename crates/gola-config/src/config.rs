use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Keyword -> extension key -> interpreter command.
///
/// The empty extension key holds the default interpreter for a keyword.
pub type InterpreterMap = HashMap<String, HashMap<String, String>>;

/// Launcher configuration. Missing fields are empty, which makes every
/// keyword lookup fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Archive (or bundle directory) members to probe, first match wins.
    #[serde(default)]
    pub dir: Vec<String>,

    #[serde(default)]
    pub map: InterpreterMap,
}

impl Config {
    pub fn new(dir: Vec<String>, map: InterpreterMap) -> Self {
        Self { dir, map }
    }

    /// Parse a JSON document; `path` is only used for error reporting.
    pub fn from_slice(bytes: &[u8], path: &Path) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn container_members(&self) -> &[String] {
        &self.dir
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.map.contains_key(keyword)
    }

    /// Interpreter for `keyword` and the script extension `ext`, falling back
    /// to the keyword's default entry.
    pub fn interpreter(&self, keyword: &str, ext: &str) -> Option<&str> {
        let variants = self.map.get(keyword)?;
        variants
            .get(ext)
            .or_else(|| variants.get(""))
            .map(String::as_str)
    }
}
