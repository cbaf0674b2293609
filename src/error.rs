//! Error types for mdreport library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during report conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// The Markdown input file does not exist.
    #[error("{} not found", .0.display())]
    InputNotFound(PathBuf),

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error while assembling the DOCX package.
    #[error("DOCX packaging error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error during rendering (DOCX, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Check if this is the missing-input condition.
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Error::InputNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InputNotFound(PathBuf::from("report/report.md"));
        assert_eq!(err.to_string(), "report/report.md not found");
        assert!(err.is_input_not_found());

        let err = Error::Render("bad table".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad table");
        assert!(!err.is_input_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
