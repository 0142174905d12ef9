//! Shared types used across the hashimoto library.

use core::fmt;
use std::error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Setup failure. Once `Evaluator::new` succeeds, evaluation itself is total:
/// `hash` cannot fail for any `(header, nonce)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashimotoError {
    /// The seed byte length cannot be packed into 32-bit words.
    InvalidSeed {
        /// Offending length in bytes.
        len: usize,
    },
    /// A configuration field violates the geometry constraints.
    InvalidParams {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

impl fmt::Display for HashimotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed { len } => {
                write!(f, "seed length {len} is not a multiple of 4 bytes")
            }
            Self::InvalidParams { reason } => write!(f, "invalid params: {reason}"),
        }
    }
}

impl error::Error for HashimotoError {}
