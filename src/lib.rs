//! lstree - `ls` as a tree: directories bracketed, files plain

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::PlainFormatter;
pub use tree::{DirEntry, TreeOutput, TreeWalker, munge};
