use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "redisw",
    version,
    about = "Pick a Redis server from your profile list and open redis-cli on it"
)]
pub struct Args {
    /// Path to the config file (default: ~/redisw_config.yml, then ~/.config/redisw/)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses `std::env::args_os`, accepting the single-dash `-config` form too.
    pub fn parse_normalized() -> Self {
        Args::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrites `-config` / `-config=...` into the `--config` spelling clap expects.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-config") => OsString::from("--config"),
            Some(s) if s.starts_with("-config=") => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}
