//! Directory entries and their display names

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Leading run of dots followed by a separator, e.g. `./` or `../`.
static LEADING_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\.+/").expect("LEADING_DOTS regex is invalid"));

/// Strip a leading relative prefix from a path string.
///
/// Only a single match anchored at the start is removed, so `./a` becomes
/// `a` and `../a` also becomes `a`, while `./../a` keeps `../a`.
pub fn munge(s: &str) -> Cow<'_, str> {
    LEADING_DOTS.replace(s, "")
}

/// One child produced by listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Parent path joined with the entry's base name.
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        Self { path, is_dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The text printed for this entry.
    ///
    /// Directories show their munged relative path in brackets, files show
    /// only their base name.
    pub fn display_name(&self) -> String {
        if self.is_dir {
            let full = self.path.to_string_lossy();
            format!("[{}]", munge(&full))
        } else {
            self.path
                .file_name()
                .unwrap_or(self.path.as_os_str())
                .to_string_lossy()
                .into_owned()
        }
    }
}
