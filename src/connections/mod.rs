pub mod launcher;

// Re-export the modules here for easy import elsewhere.
pub use launcher::*;
