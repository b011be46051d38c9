//! Error types for loading, shape mapping, and writing

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a whole conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Reading the input or writing an output file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON or lacks the top-level `canvas` array
    #[error("malformed project document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Create an I/O error tagged with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors confined to a single display; the display is skipped and the
/// rest of the canvas still renders
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The display record does not match the expected schema
    #[error("malformed display record: {0}")]
    Decode(#[from] serde_json::Error),

    /// The bitmap payload is not valid base64
    #[error("invalid bitmap payload: {0}")]
    InvalidBitmap(#[from] base64::DecodeError),
}

/// A display that was skipped, with the reason
#[derive(Debug)]
pub struct Diagnostic {
    /// Position of the display in its canvas's `displays` array
    pub display: usize,
    /// The declared `type`, if one could be read
    pub kind: Option<String>,
    pub error: ShapeError,
}

impl Diagnostic {
    pub fn new(display: usize, kind: Option<String>, error: ShapeError) -> Self {
        Self {
            display,
            kind,
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "display #{} ({}) skipped: {}",
            self.display,
            self.kind.as_deref().unwrap_or("unknown type"),
            self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = ConvertError::io(
            "missing.xcs",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.xcs"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_diagnostic_display() {
        let decode = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let diag = Diagnostic::new(3, Some("RECT".to_string()), ShapeError::from(decode));
        let msg = diag.to_string();
        assert!(msg.starts_with("display #3 (RECT) skipped"));
        assert!(msg.contains("malformed display record"));
    }

    #[test]
    fn test_diagnostic_without_kind() {
        let decode = serde_json::from_str::<u32>("null").unwrap_err();
        let diag = Diagnostic::new(0, None, ShapeError::from(decode));
        assert!(diag.to_string().contains("(unknown type)"));
    }
}
