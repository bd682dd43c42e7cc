use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use gola_config::Config;
use gola_platform::Platform;

use crate::dispatch::dispatch;
use crate::error::{Error, Result};
use crate::reader::read_shebang;
use crate::resolver::{Resolution, resolve};
use crate::shebang::tokenize;
use crate::target::LaunchTarget;

/// A script launch: the loaded configuration and the target it applies to.
#[derive(Debug, Clone)]
pub struct Gola {
    config: Config,
    target: LaunchTarget,
}

impl Gola {
    /// Load the configuration that belongs to the launcher at `argv0` and
    /// locate the script `name`.
    pub fn new(argv0: &Path, name: impl Into<PathBuf>, platform: &impl Platform) -> Result<Self> {
        let config = gola_config::load(argv0, platform)?;
        Self::with_config(config, name)
    }

    pub fn with_config(config: Config, name: impl Into<PathBuf>) -> Result<Self> {
        let target = LaunchTarget::new(name, config.container_members())?;
        Ok(Self { config, target })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn target(&self) -> &LaunchTarget {
        &self.target
    }

    pub fn read_shebang(&self) -> Result<String> {
        read_shebang(self.target.path(), self.config.container_members())
    }

    pub fn parse_shebang(&self) -> Result<Vec<String>> {
        Ok(tokenize(&self.read_shebang()?))
    }

    /// Resolve the script's interpreter. An unresolved result is not an
    /// error here; see [`Gola::command`].
    pub fn load_script(&self) -> Result<Resolution> {
        let argv = self.parse_shebang()?;
        Ok(resolve(argv, &self.config, self.target.ext()))
    }

    /// The command line that runs the script, before pass-through arguments.
    pub fn command(&self) -> Result<Vec<String>> {
        let resolution = self.load_script()?;
        if !resolution.is_resolved() {
            return Err(Error::NoInterpreter {
                keyword: resolution.keyword,
                script: self.target.name().to_path_buf(),
            });
        }
        Ok(resolution.argv)
    }

    /// Run the script's interpreter with `args` appended and return its exit
    /// code.
    pub fn exec<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<i32> {
        let argv = self.command()?;
        dispatch(&argv, args)
    }
}
