use log::{debug, info};

use crate::connections::launcher::{Launcher, RedisCli};
use crate::core::errors::LaunchError;
use crate::core::loader::load_profiles;
use crate::core::locator::ConfigLocator;
use crate::core::profile::Profile;
use crate::core::settings::Settings;
use crate::ui::cli::args::Args;
use crate::ui::cli::selector::{Selection, Selector, TerminalSelector};

/// Resolves settings, loads the profiles once and runs the menu until the
/// user cancels it.
pub fn run(args: Args) {
    let mut locator = ConfigLocator::from_env();
    let settings = Settings::resolve(args.config, &mut locator);
    info!("Using config file {:?}", settings.config_path);

    let profiles = load_profiles(&settings.config_path);
    let mut selector = TerminalSelector::default();
    let mut launcher = RedisCli::from_settings(&settings);

    let sessions = run_loop(&profiles, &mut selector, &mut launcher);
    debug!("{sessions} session(s) run");
}

/// Alternates between the menu and a client session.
///
/// Every selection starts one session; when it ends, for whatever reason,
/// the menu is shown again. Cancelling the menu is the only way out.
/// Returns how many sessions were started.
pub fn run_loop<S, L>(profiles: &[Profile], selector: &mut S, launcher: &mut L) -> usize
where
    S: Selector + ?Sized,
    L: Launcher + ?Sized,
{
    let mut sessions = 0;
    loop {
        let profile = match selector.select(profiles) {
            Selection::Selected(profile) => profile,
            Selection::Cancelled => return sessions,
        };
        sessions += 1;
        if let Err(e) = launcher.launch(profile) {
            report_launch_error(&e);
        }
        info!("Session with {} ended", profile.name);
    }
}

fn report_launch_error(err: &LaunchError) {
    match err {
        LaunchError::Spawn { binary, source } => {
            println!("Failed to start {binary}: {source}");
        }
        LaunchError::Exited { binary, status } => {
            println!("Failed to connect to Redis using {binary}: {status}");
        }
        LaunchError::Wait(e) => {
            println!("Failed to wait for the client: {e}");
        }
    }
}
