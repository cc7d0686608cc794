//! TreeWalker - depth-first listing of one or more roots

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::entry::DirEntry;

/// Root used when no roots are given.
pub const DEFAULT_ROOT: &str = ".";

/// Callback for streaming output - receives each entry as it is discovered.
pub trait TreeOutput {
    fn output_entry(&mut self, entry: &DirEntry, indent: usize) -> io::Result<()>;
}

/// Walks directory trees pre-order, streaming entries to a `TreeOutput`.
///
/// Roots themselves are never emitted, only their descendants starting at
/// indent 0. Children come in the order the filesystem lists them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk every root in order, defaulting to the current directory.
    ///
    /// The first fatal error stops the whole run; lines already written
    /// stay written.
    pub fn run<O: TreeOutput>(&self, roots: &[PathBuf], out: &mut O) -> Result<()> {
        if roots.is_empty() {
            return self.walk(Path::new(DEFAULT_ROOT), 0, out);
        }
        for root in roots {
            self.walk(root, 0, out)?;
        }
        Ok(())
    }

    /// Emit the children of `path` at `indent`, descending into directories.
    pub fn walk<O: TreeOutput>(&self, path: &Path, indent: usize, out: &mut O) -> Result<()> {
        for entry in self.list_children(path)? {
            out.output_entry(&entry, indent)?;
            if entry.is_dir {
                self.walk(entry.path(), indent + 1, out)?;
            }
        }
        Ok(())
    }

    /// List the immediate children of `path`.
    ///
    /// A missing path or a plain file has no children. Other listing
    /// failures are fatal.
    pub fn list_children(&self, path: &Path) -> Result<Vec<DirEntry>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }

        let entries = match std::fs::read_dir(path) {
            Ok(e) => e,
            // Removed between the check and the listing
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(Error::ReadDir {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        entries
            .map(|entry| -> Result<DirEntry> {
                let entry = entry.map_err(|source| Error::ReadDir {
                    path: path.to_path_buf(),
                    source,
                })?;
                let child = entry.path();
                let is_dir = child.is_dir();
                Ok(DirEntry::new(child, is_dir))
            })
            .collect()
    }
}
