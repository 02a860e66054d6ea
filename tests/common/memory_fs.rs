//! An in‑memory stand‑in for `redisw::core::fs::FileSystem`.
//!
//! Files and directories live in plain collections so a test can seed a
//! layout, run the locator, and then inspect every write it made.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use redisw::core::fs::FileSystem;

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    pub files: BTreeMap<PathBuf, Vec<u8>>,
    pub dirs: BTreeSet<PathBuf>,
    /// Every path passed to `write`, in call order.
    pub writes: Vec<PathBuf>,
    /// When set, `create_dir_all` fails with `PermissionDenied`.
    pub deny_create_dir: bool,
    /// When set, `write` fails with `PermissionDenied`.
    pub deny_write: bool,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.dirs.insert(parent.to_path_buf());
        }
        self.files.insert(path, contents.as_bytes().to_vec());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

fn denied() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "denied by test")
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if self.deny_write {
            return Err(denied());
        }
        self.writes.push(path.to_path_buf());
        self.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        if self.deny_create_dir {
            return Err(denied());
        }
        for ancestor in path.ancestors() {
            self.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}
