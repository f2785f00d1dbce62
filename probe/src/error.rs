//! Typed probe-trace errors.
//!
//! `ProbeError` means a trace could not be read or written at all. A trace
//! that parses but disagrees with a re-run is not an error; it is reported as
//! [`crate::replay::ReplayVerdict::Divergence`].

use bisect_kernel::proof::canon::CanonError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The bytes are not JSON, or a required field is missing or mistyped.
    MalformedTrace { detail: String },
    /// `schema_version` is not one this crate reads.
    UnsupportedSchema { found: String },
    /// The trace parsed but violates the halving rules (range, midpoint,
    /// step continuity, or outcome consistency).
    InvalidTrace { step: Option<usize>, detail: String },
    /// Canonical JSON serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTrace { detail } => write!(f, "malformed probe trace: {detail}"),
            Self::UnsupportedSchema { found } => {
                write!(f, "unsupported probe trace schema: {found}")
            }
            Self::InvalidTrace {
                step: Some(step),
                detail,
            } => write!(f, "invalid probe trace at step {step}: {detail}"),
            Self::InvalidTrace { step: None, detail } => {
                write!(f, "invalid probe trace: {detail}")
            }
            Self::Canon(e) => write!(f, "canonical JSON failed: {e}"),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canon(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CanonError> for ProbeError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}
