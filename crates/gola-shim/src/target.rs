use std::path::{Path, PathBuf};

use gola_platform::is_file;

use crate::error::{Error, Result};
use crate::path::extension;

/// The script to launch.
///
/// `name` is what the user typed; `path` is the regular file the shebang is
/// read from. They differ when `name` is a bundle directory and one of the
/// configured members inside it was picked instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTarget {
    name: PathBuf,
    path: PathBuf,
    ext: String,
}

impl LaunchTarget {
    pub fn new(name: impl Into<PathBuf>, members: &[String]) -> Result<Self> {
        let name = name.into();
        let ext = name
            .file_name()
            .map(|n| extension(&n.to_string_lossy()).to_string())
            .unwrap_or_default();

        let path = if is_file(&name) {
            name.clone()
        } else {
            redirect(&name, members).ok_or_else(|| Error::NotAFile(name.clone()))?
        };

        Ok(Self { name, path, ext })
    }

    pub fn name(&self) -> &Path {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extension of `name`, dot included, compared verbatim.
    pub fn ext(&self) -> &str {
        &self.ext
    }
}

fn redirect(name: &Path, members: &[String]) -> Option<PathBuf> {
    let found = members
        .iter()
        .map(|member| name.join(member))
        .find(|candidate| is_file(candidate));
    if let Some(path) = &found {
        tracing::debug!(from = %name.display(), to = %path.display(), "redirected target");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_plain_file() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("a.py");
        fs::write(&script, "#!/usr/bin/env python\n").unwrap();

        let target = LaunchTarget::new(&script, &[]).unwrap();
        assert_eq!(target.path(), script);
        assert_eq!(target.name(), script);
        assert_eq!(target.ext(), ".py");
    }

    #[test]
    fn test_directory_without_members() {
        let dir = tempdir().unwrap();
        let err = LaunchTarget::new(dir.path(), &[]).unwrap_err();
        assert!(matches!(err, Error::NotAFile(ref p) if p == dir.path()));
    }

    #[test]
    fn test_redirect_first_existing_member() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("app.pyz");
        fs::create_dir(&bundle).unwrap();
        fs::write(bundle.join("__main__.py"), "#!/usr/bin/env python\n").unwrap();
        fs::write(bundle.join("main.rb"), "#!/usr/bin/env ruby\n").unwrap();

        let members = ["missing".to_string(), "main.rb".to_string(), "__main__.py".to_string()];
        let target = LaunchTarget::new(&bundle, &members).unwrap();
        assert_eq!(target.path(), bundle.join("main.rb"));
        assert_eq!(target.name(), bundle);
        assert_eq!(target.ext(), ".pyz");
    }

    #[test]
    fn test_missing_target() {
        let dir = tempdir().unwrap();
        let members = ["__main__.py".to_string()];
        let err = LaunchTarget::new(dir.path().join("nope.py"), &members).unwrap_err();
        assert!(matches!(err, Error::NotAFile(_)));
    }

    #[test]
    fn test_extension_preserves_case() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("Build.PY");
        fs::write(&script, "").unwrap();

        assert_eq!(LaunchTarget::new(&script, &[]).unwrap().ext(), ".PY");
    }

    #[test]
    fn test_no_extension() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("tool");
        fs::write(&script, "").unwrap();

        assert_eq!(LaunchTarget::new(&script, &[]).unwrap().ext(), "");
    }
}
