//! Directory tree walking logic
//!
//! `TreeWalker` lists one directory level at a time and streams each entry
//! to a `TreeOutput` before descending, so memory stays O(depth).

mod entry;
mod walker;

pub use entry::{DirEntry, munge};
pub use walker::{DEFAULT_ROOT, TreeOutput, TreeWalker};
