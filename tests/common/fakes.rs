//! Scripted stand‑ins for the interactive pieces of the main loop.

use std::collections::VecDeque;

use redisw::core::errors::LaunchError;
use redisw::{Launcher, Profile, Selection, Selector};

/// One scripted answer from the fake selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Index(usize),
    Cancel,
}

/// Replays a fixed list of picks; cancels once the script runs out.
pub struct ScriptedSelector {
    script: VecDeque<Pick>,
    /// The names offered on each prompt, for assertions.
    pub prompts: Vec<Vec<String>>,
}

impl ScriptedSelector {
    pub fn new(script: impl IntoIterator<Item = Pick>) -> Self {
        Self {
            script: script.into_iter().collect(),
            prompts: Vec::new(),
        }
    }
}

impl Selector for ScriptedSelector {
    fn select<'a>(&mut self, profiles: &'a [Profile]) -> Selection<'a> {
        self.prompts
            .push(profiles.iter().map(|p| p.name.clone()).collect());
        match self.script.pop_front() {
            Some(Pick::Index(index)) => Selection::Selected(&profiles[index]),
            Some(Pick::Cancel) | None => Selection::Cancelled,
        }
    }
}

/// Records every launch; optionally fails each one.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Vec<Profile>,
    pub fail_with_spawn_error: bool,
}

impl Launcher for RecordingLauncher {
    fn launch(&mut self, profile: &Profile) -> Result<(), LaunchError> {
        self.launched.push(profile.clone());
        if self.fail_with_spawn_error {
            return Err(LaunchError::Spawn {
                binary: "redis-cli".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
            });
        }
        Ok(())
    }
}
