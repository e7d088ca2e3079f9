//! Error types for uifix-core.
//!
//! I/O failures keep the message `fs-err` produces (operation + path);
//! decode and traversal failures carry the offending path themselves.

use camino::Utf8PathBuf;
use thiserror::Error;

/// The top-level error type for uifix operations.
#[derive(Debug, Error)]
pub enum FixError {
    /// A file read or write failed. fs-err already names the operation and
    /// the path in the message.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file's bytes are not valid UTF-8.
    #[error("{path} is not valid UTF-8")]
    Decode {
        /// The file whose contents failed to decode.
        path: Utf8PathBuf,
    },

    /// Directory traversal failed (unreadable directory, broken entry).
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// The traversal produced a path that is not valid UTF-8.
    #[error("non-UTF-8 path: {}", .path.display())]
    NonUtf8Path {
        /// The raw path as the operating system reported it.
        path: std::path::PathBuf,
    },
}

/// Result type alias using FixError.
pub type FixResult<T> = Result<T, FixError>;

#[cfg(test)]
mod tests {
    use super::FixError;
    use camino::Utf8PathBuf;

    #[test]
    fn decode_display_names_the_path() {
        let err = FixError::Decode {
            path: Utf8PathBuf::from("app/page.tsx"),
        };
        assert_eq!(err.to_string(), "app/page.tsx is not valid UTF-8");
    }

    #[test]
    fn io_display_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = FixError::from(io);
        assert_eq!(err.to_string(), "no such file");
    }

    #[test]
    fn non_utf8_path_display_is_lossy() {
        let err = FixError::NonUtf8Path {
            path: std::path::PathBuf::from("app/page.tsx"),
        };
        assert!(err.to_string().contains("non-UTF-8 path"));
        assert!(err.to_string().contains("app/page.tsx"));
    }
}
