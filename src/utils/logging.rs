use log::LevelFilter;

/// Initialize logging using env_logger.
/// Only warnings are shown by default so the selection menu stays clean;
/// the RUST_LOG environment variable overrides that,
/// e.g., `RUST_LOG=redisw=debug redisw -config ./servers.yml`
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}
