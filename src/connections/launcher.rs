use std::process::{Command, Stdio};

use log::info;

use crate::core::errors::LaunchError;
use crate::core::profile::Profile;
use crate::core::settings::{Settings, DEFAULT_CLIENT_BINARY};

/// Something that can run an interactive session against a profile.
///
/// `launch` blocks until the session is over.
pub trait Launcher {
    fn launch(&mut self, profile: &Profile) -> Result<(), LaunchError>;
}

/// Arguments passed to the client: `-h <host> -p <port> -c [-a <password>]`.
pub fn client_args(profile: &Profile) -> Vec<String> {
    let mut args = vec![
        "-h".to_string(),
        profile.host.clone(),
        "-p".to_string(),
        profile.port.to_string(),
        "-c".to_string(),
    ];
    if profile.requires_auth() {
        args.push("-a".to_string());
        args.push(profile.password.clone());
    }
    args
}

/// Runs `redis-cli` (or a compatible binary) attached to our terminal.
#[derive(Debug, Clone)]
pub struct RedisCli {
    binary: String,
}

impl RedisCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        RedisCli::new(settings.client_binary.clone())
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// The full command for `profile`, with stdin/stdout/stderr inherited.
    pub fn command(&self, profile: &Profile) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(client_args(profile))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Default for RedisCli {
    fn default() -> Self {
        RedisCli::new(DEFAULT_CLIENT_BINARY)
    }
}

impl Launcher for RedisCli {
    fn launch(&mut self, profile: &Profile) -> Result<(), LaunchError> {
        info!(
            "Starting {} for {} ({}:{})",
            self.binary, profile.name, profile.host, profile.port
        );
        let mut child = self
            .command(profile)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let status = child.wait().map_err(LaunchError::Wait)?;
        info!("{} exited with {}", self.binary, status);
        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::Exited {
                binary: self.binary.clone(),
                status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_auth_flag_without_password() {
        let profile = Profile::new("local", "127.0.0.1", 6379);
        assert_eq!(client_args(&profile), ["-h", "127.0.0.1", "-p", "6379", "-c"]);
    }

    #[test]
    fn password_appends_exactly_two_args() {
        let plain = Profile::new("remote", "example.com", 6380);
        let authed = plain.clone().with_password("testpass");

        let plain_args = client_args(&plain);
        let authed_args = client_args(&authed);

        assert_eq!(authed_args.len(), plain_args.len() + 2);
        assert_eq!(&authed_args[..plain_args.len()], &plain_args[..]);
        assert_eq!(&authed_args[plain_args.len()..], ["-a", "testpass"]);
    }

    #[test]
    fn password_is_passed_literally() {
        let profile = Profile::new("odd", "h", 1).with_password("-a spaced $pw");
        let args = client_args(&profile);
        assert_eq!(args.last().map(String::as_str), Some("-a spaced $pw"));
    }

    #[test]
    fn command_uses_configured_binary() {
        let cli = RedisCli::new("my-redis-cli");
        let cmd = cli.command(&Profile::localhost());
        assert_eq!(cmd.get_program(), "my-redis-cli");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["-h", "127.0.0.1", "-p", "6379", "-c"]);
    }
}
