//! The narrow filesystem surface used by the config locator.
//!
//! Everything the locator touches goes through [`FileSystem`], so tests can
//! swap in an in-memory implementation and inspect what would have been
//! written.

use std::fs;
use std::io;
use std::path::Path;

pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    /// Create or truncate `path` and write `contents` to it.
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()>;
    /// Create `path` and any missing parents; succeeds if it already exists.
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder.create(path)
    }
}
