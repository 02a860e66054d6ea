pub mod connections;
pub mod core;
pub mod ui;
pub mod utils;

// re‑export ergonomic entry points
pub use crate::connections::launcher::{Launcher, RedisCli};
pub use crate::core::profile::Profile;
pub use crate::core::settings::Settings;
pub use crate::ui::cli::selector::{Selection, Selector};
