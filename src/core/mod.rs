pub mod errors;
pub mod fs;
pub mod loader;
pub mod locator;
pub mod profile;
pub mod settings;

// Re-export the modules here for easy import elsewhere.
pub use errors::*;
pub use profile::*;
