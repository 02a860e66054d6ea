use serde::{Deserialize, Serialize};

/// A user-named Redis server preset.
///
/// One entry of the YAML list in `redisw_config.yml`:
/// ```yaml
/// - name: "local"
///   host: "127.0.0.1"
///   port: 6379
///   password: ""
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub host: String,
    pub port: u16,
    /// Empty means "no authentication".
    #[serde(default)]
    pub password: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            password: String::new(),
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// The profile written on first run when no config file exists anywhere.
    pub fn localhost() -> Self {
        Profile::new("localhost", "127.0.0.1", 6379)
    }

    pub fn requires_auth(&self) -> bool {
        !self.password.is_empty()
    }
}

/// Display names in list order, as shown by the selector.
pub fn profile_names(profiles: &[Profile]) -> Vec<&str> {
    profiles.iter().map(|p| p.name.as_str()).collect()
}
