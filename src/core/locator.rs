use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::debug;

use super::errors::ConfigError;
use super::fs::{FileSystem, OsFileSystem};
use super::profile::Profile;

/// Accepted file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["redisw_config.yml", "redisw_config.yaml"];

/// Used when no home directory is available or the config dir cannot be created.
pub const FALLBACK_CONFIG_PATH: &str = "./redisw_config.yml";

/// Finds (and on first run bootstraps) the profile file.
///
/// Lookup order:
/// 1. `~/redisw_config.yml`, `~/redisw_config.yaml`
/// 2. `~/.config/redisw/redisw_config.yml`, `~/.config/redisw/redisw_config.yaml`
/// 3. a file of either name in the working directory, copied to
///    `~/.config/redisw/redisw_config.yml`
/// 4. a freshly written `~/.config/redisw/redisw_config.yml` holding a single
///    `localhost` profile
#[derive(Debug)]
pub struct ConfigLocator<F: FileSystem> {
    fs: F,
    home: Option<PathBuf>,
    cwd: PathBuf,
}

impl ConfigLocator<OsFileSystem> {
    /// Locator over the real filesystem, the current user's home and `.`.
    pub fn from_env() -> Self {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        ConfigLocator::new(OsFileSystem, home, PathBuf::from("."))
    }
}

impl<F: FileSystem> ConfigLocator<F> {
    pub fn new(fs: F, home: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self { fs, home, cwd }
    }

    /// `~/.config/redisw`, if the home directory is known.
    pub fn config_dir(&self) -> Option<PathBuf> {
        self.home
            .as_ref()
            .map(|home| home.join(".config").join("redisw"))
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn into_fs(self) -> F {
        self.fs
    }

    /// Best-effort resolution; never fails.
    ///
    /// Falls back to [`FALLBACK_CONFIG_PATH`] when the home directory is
    /// unknown or `~/.config/redisw` cannot be created.
    pub fn resolve(&mut self) -> PathBuf {
        match self.try_resolve() {
            Ok(path) => path,
            Err(e) => {
                println!("Warning: using {FALLBACK_CONFIG_PATH}: {e}");
                PathBuf::from(FALLBACK_CONFIG_PATH)
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but reports why the fallback would be needed.
    ///
    /// Failing to copy or write the file itself is only a warning: the
    /// target path is still returned and the loader reports what it finds there.
    pub fn try_resolve(&mut self) -> Result<PathBuf, ConfigError> {
        let home = self.home.clone().ok_or(ConfigError::NoHomeDir)?;

        if let Some(path) = self.first_existing(&home) {
            debug!("Using config from home directory: {:?}", path);
            return Ok(path);
        }

        let config_dir = self.config_dir().ok_or(ConfigError::NoHomeDir)?;
        if let Some(path) = self.first_existing(&config_dir) {
            debug!("Using config from config directory: {:?}", path);
            return Ok(path);
        }

        let target = config_dir.join(CONFIG_FILE_NAMES[0]);
        let legacy = self.first_existing(&self.cwd);

        self.fs.create_dir_all(&config_dir)?;

        match legacy {
            Some(legacy) => {
                debug!("Migrating {:?} to {:?}", legacy, target);
                if let Err(e) = self.copy(&legacy, &target) {
                    println!(
                        "Warning: could not copy {} to {}: {e}",
                        legacy.display(),
                        target.display()
                    );
                }
            }
            None => {
                debug!("Writing default config to {:?}", target);
                if let Err(e) = self.write_default(&target) {
                    println!(
                        "Warning: could not write default config {}: {e}",
                        target.display()
                    );
                }
            }
        }
        Ok(target)
    }

    fn first_existing(&self, dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| self.fs.exists(path))
    }

    fn copy(&mut self, from: &Path, to: &Path) -> Result<(), ConfigError> {
        let bytes = self.fs.read(from)?;
        self.fs.write(to, &bytes)?;
        Ok(())
    }

    fn write_default(&mut self, path: &Path) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(&vec![Profile::localhost()])?;
        self.fs.write(path, yaml.as_bytes())?;
        Ok(())
    }
}
