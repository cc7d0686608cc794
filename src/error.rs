//! Error type for tree walking

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a run.
///
/// Missing paths and plain files are not errors: they simply have no
/// children. Everything here stops the walk at the point it happened.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing a directory (or iterating its entries) failed.
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a tree line to the output failed.
    #[error("error writing output: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dir_message_names_path() {
        let err = Error::ReadDir {
            path: PathBuf::from("locked/dir"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot read directory 'locked/dir': "), "{}", msg);
    }

    #[test]
    fn test_io_error_converts_to_write() {
        let err: Error = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, Error::Write(_)));
        assert!(err.to_string().starts_with("error writing output"));
    }
}
