//! Error types for tracestat.

use thiserror::Error;

use crate::roots::RootFindingError;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the smoothing and bootstrap operations.
///
/// Either a complete result is returned or one of these; no operation
/// hands back partially filled output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter or input shape is outside the supported range.
    ///
    /// Raised before any computation starts.
    #[error("invalid argument '{parameter}': {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// Solving for the geometric bin base failed.
    ///
    /// Valid `(N, n)` pairs always bracket a root, so with default
    /// [`RootOptions`](crate::roots::RootOptions) this only happens when a
    /// caller-supplied iteration budget or tolerance cannot be met.
    #[error("root finding failed: {0}")]
    RootFinding(#[from] RootFindingError),
}

impl Error {
    pub(crate) fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid("bins", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "invalid argument 'bins': must be at least 1, got 0"
        );
    }

    #[test]
    fn test_root_finding_converts() {
        let err: Error = RootFindingError::SameSign {
            fa: 1.0,
            fb: 2.0,
        }
        .into();
        assert!(matches!(err, Error::RootFinding(_)));
        assert!(err.to_string().starts_with("root finding failed"));
    }
}
