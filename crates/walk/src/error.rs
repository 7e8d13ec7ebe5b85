use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned when opening or advancing a traversal fails.
///
/// Every variant except [`WalkErrorKind::InvalidState`] carries the path that
/// was being opened or read, so callers can forward it into diagnostics
/// without matching on the kind.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct WalkError {
    #[from]
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    /// Classifies a failure to open a directory handle.
    pub(crate) fn open(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::new(WalkErrorKind::NotFound { path, source }),
            io::ErrorKind::PermissionDenied => Self::new(WalkErrorKind::Access { path, source }),
            io::ErrorKind::NotADirectory => Self::new(WalkErrorKind::NotADirectory { path }),
            _ => Self::new(WalkErrorKind::ReadDir { path, source }),
        }
    }

    /// Classifies a failure while reading entries from an open handle.
    pub(crate) fn read(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::new(WalkErrorKind::NotFound { path, source }),
            io::ErrorKind::PermissionDenied => Self::new(WalkErrorKind::Access { path, source }),
            _ => Self::new(WalkErrorKind::ReadDir { path, source }),
        }
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata { path, source })
    }

    pub(crate) fn canonicalize(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Canonicalize { path, source })
    }

    pub(crate) fn invalid_state() -> Self {
        Self::new(WalkErrorKind::InvalidState)
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error, if any.
    ///
    /// ```
    /// use walk::FlatIterator;
    ///
    /// let error = FlatIterator::new("./definitely_missing_root").unwrap_err();
    /// assert!(error.path().unwrap().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.kind.path()
    }

    /// Reports whether the error is a missing path.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, WalkErrorKind::NotFound { .. })
    }

    /// Reports whether the error is a permission failure.
    #[must_use]
    pub fn is_access(&self) -> bool {
        matches!(self.kind, WalkErrorKind::Access { .. })
    }
}

/// Classification of traversal failures.
#[derive(Debug, Error)]
pub enum WalkErrorKind {
    /// The root or a discovered directory does not exist.
    #[error("directory '{}' does not exist: {source}", path.display())]
    NotFound {
        /// Path that could not be found.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Permission was denied while opening or reading a directory.
    #[error("access denied to directory '{}': {source}", path.display())]
    Access {
        /// Directory that could not be accessed.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// The traversal root exists but is not a directory.
    #[error("'{}' is not a directory", path.display())]
    NotADirectory {
        /// Offending path.
        path: PathBuf,
    },
    /// Any other failure opening or reading a directory.
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Failed to resolve the target of a symbolic link.
    #[error("failed to inspect metadata for '{}': {source}", path.display())]
    Metadata {
        /// Path whose metadata could not be retrieved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// Failed to canonicalize a directory while tracking visited paths.
    #[error("failed to canonicalize '{}': {source}", path.display())]
    Canonicalize {
        /// Directory path that failed to canonicalize.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// The current entry was requested from an iterator positioned at the end.
    #[error("iterator is positioned past the end")]
    InvalidState,
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path, .. }
            | Self::Access { path, .. }
            | Self::NotADirectory { path }
            | Self::ReadDir { path, .. }
            | Self::Metadata { path, .. }
            | Self::Canonicalize { path, .. } => Some(path),
            Self::InvalidState => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn io_error(kind: io::ErrorKind, message: &'static str) -> io::Error {
        io::Error::new(kind, message)
    }

    #[test]
    fn open_classifies_by_io_error_kind() {
        let missing = WalkError::open(
            PathBuf::from("gone"),
            io_error(io::ErrorKind::NotFound, "gone"),
        );
        assert!(missing.is_not_found());

        let denied = WalkError::open(
            PathBuf::from("locked"),
            io_error(io::ErrorKind::PermissionDenied, "locked"),
        );
        assert!(denied.is_access());

        let other = WalkError::open(
            PathBuf::from("dir"),
            io_error(io::ErrorKind::Other, "boom"),
        );
        assert!(matches!(other.kind(), WalkErrorKind::ReadDir { .. }));
    }

    #[test]
    fn path_matches_variant_path() {
        let read = WalkError::read(PathBuf::from("dir"), io_error(io::ErrorKind::Other, "x"));
        assert_eq!(read.path(), Some(Path::new("dir")));

        let metadata = WalkError::metadata(PathBuf::from("meta"), io_error(io::ErrorKind::Other, "x"));
        assert_eq!(metadata.path(), Some(Path::new("meta")));

        let canonicalize =
            WalkError::canonicalize(PathBuf::from("canon"), io_error(io::ErrorKind::Other, "x"));
        assert_eq!(canonicalize.path(), Some(Path::new("canon")));

        assert_eq!(WalkError::invalid_state().path(), None);
    }

    #[test]
    fn display_is_specific_per_variant() {
        let read = WalkError::read(PathBuf::from("dir"), io_error(io::ErrorKind::Other, "boom"));
        assert_eq!(read.to_string(), "failed to read directory 'dir': boom");

        let denied = WalkError::open(
            PathBuf::from("dir"),
            io_error(io::ErrorKind::PermissionDenied, "boom"),
        );
        assert_eq!(denied.to_string(), "access denied to directory 'dir': boom");

        let not_dir = WalkError::new(WalkErrorKind::NotADirectory {
            path: PathBuf::from("file.txt"),
        });
        assert_eq!(not_dir.to_string(), "'file.txt' is not a directory");

        assert_eq!(
            WalkError::invalid_state().to_string(),
            "iterator is positioned past the end"
        );
    }

    #[test]
    fn source_refers_to_underlying_io_error() {
        let error = WalkError::read(
            PathBuf::from("dir"),
            io_error(io::ErrorKind::Other, "source"),
        );
        let source = error
            .source()
            .and_then(|err| err.downcast_ref::<io::Error>())
            .expect("walk error should expose the underlying io::Error");
        assert_eq!(source.to_string(), "source");
    }
}
