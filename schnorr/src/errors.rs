//! Error types for the Schnorr signature scheme.

use thiserror::Error;

/// Bad key material.
///
/// Verification never produces this; a signature that does not check out is
/// reported as `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The key is zero, out of range, the point at infinity or not on the
    /// curve. The payload says which.
    #[error("invalid key: {0}")]
    Invalid(&'static str),
}
