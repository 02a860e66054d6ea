use std::path::PathBuf;

use super::fs::FileSystem;
use super::locator::ConfigLocator;

/// Client binary launched for every session.
pub const DEFAULT_CLIENT_BINARY: &str = "redis-cli";

/// Everything the main loop needs, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Profile file to load.
    pub config_path: PathBuf,
    /// Program started for each selected profile.
    pub client_binary: String,
}

impl Settings {
    /// Uses `explicit` verbatim when given, otherwise asks the locator
    /// (which may bootstrap a config file).
    pub fn resolve<F: FileSystem>(
        explicit: Option<PathBuf>,
        locator: &mut ConfigLocator<F>,
    ) -> Self {
        let config_path = match explicit {
            Some(path) => path,
            None => locator.resolve(),
        };
        Self {
            config_path,
            client_binary: DEFAULT_CLIENT_BINARY.to_string(),
        }
    }
}
