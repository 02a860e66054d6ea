use std::fmt::{self, Display};
use std::io;
use std::process::ExitStatus;

/// Errors raised while resolving, reading or writing the profile file.
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Yaml(serde_yaml::Error),
    NoHomeDir,
}

/// Convert from std::io::Error.
impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

/// Convert from serde_yaml::Error.
/// Without this, `?` won't work on the YAML (de)serializer calls.
impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Yaml(e) => write!(f, "{}", e),
            ConfigError::NoHomeDir => write!(f, "unable to determine the home directory"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Yaml(e) => Some(e),
            ConfigError::NoHomeDir => None,
        }
    }
}

/// Errors raised while running the external client.
#[derive(Debug)]
pub enum LaunchError {
    /// The process could not be started at all (binary missing, not executable, ...).
    Spawn { binary: String, source: io::Error },
    /// The process ran but did not exit successfully.
    Exited { binary: String, status: ExitStatus },
    /// Waiting on a running child failed.
    Wait(io::Error),
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Spawn { binary, source } => write!(f, "{}: {}", binary, source),
            LaunchError::Exited { binary, status } => write!(f, "{}: {}", binary, status),
            LaunchError::Wait(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Spawn { source, .. } => Some(source),
            LaunchError::Wait(e) => Some(e),
            LaunchError::Exited { .. } => None,
        }
    }
}

/// Terminal failures inside the interactive selector.
#[derive(Debug)]
pub enum SelectError {
    Io(io::Error),
    /// Raised when the user interrupts the prompt (Ctrl+C, Ctrl+D, Esc).
    Interrupted,
}

impl From<io::Error> for SelectError {
    fn from(err: io::Error) -> SelectError {
        SelectError::Io(err)
    }
}

impl Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::Io(e) => write!(f, "{}", e),
            SelectError::Interrupted => write!(f, "^C"),
        }
    }
}

impl std::error::Error for SelectError {}
