use std::fs::File;
use std::path::Path;

use log::debug;

use super::errors::ConfigError;
use super::profile::Profile;

/// Reads the profile list at `path`.
///
/// Any problem is printed and an empty list returned, so a broken config
/// shows an empty menu instead of stopping the program.
pub fn load_profiles(path: &Path) -> Vec<Profile> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            println!("Error opening config file: {e}");
            return Vec::new();
        }
    };
    match serde_yaml::from_reader::<_, Vec<Profile>>(file) {
        Ok(profiles) => {
            debug!("Loaded {} profile(s) from {:?}", profiles.len(), path);
            profiles
        }
        Err(e) => {
            println!("Error decoding config file: {e}");
            Vec::new()
        }
    }
}

/// Strict variant of [`load_profiles`] for callers that want the error.
pub fn try_load_profiles(path: &Path) -> Result<Vec<Profile>, ConfigError> {
    let file = File::open(path)?;
    Ok(serde_yaml::from_reader(file)?)
}
