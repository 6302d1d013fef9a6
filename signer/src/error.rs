//! Error types surfaced by the transaction signer.

use schnorr::KeyError;
use thiserror::Error;

use crate::currency::Amount;

/// The transaction content cannot be turned into field elements.
///
/// Every variant names the offending field so the caller can fix the input
/// and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// A label outside the closed set of an enumerated field.
    #[error("unknown variant {label:?} for {field}")]
    UnknownVariant { field: &'static str, label: String },

    /// A string longer than the protocol width of its field.
    #[error("{field} is {actual} bytes long, the maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// A field that has no encoding when absent.
    #[error("missing required field {field}")]
    MissingRequiredField { field: &'static str },

    /// A numeric string that is not a valid value for its field.
    #[error("invalid number {value:?} for {field}")]
    InvalidNumber { field: &'static str, value: String },

    /// A base58check string with a bad checksum, version byte, length or
    /// payload.
    #[error("invalid base58 {kind}: {reason}")]
    InvalidBase58 { kind: &'static str, reason: String },

    /// A party nested more than one level below its predecessor, or a first
    /// party that is not at depth zero.
    #[error("party {index} has call depth {depth}, at most {max} is allowed here")]
    InvalidCallDepth { index: usize, depth: u32, max: u32 },
}

/// The fee does not cover the policy minimum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// A missing fee is reported as zero.
    #[error("fee {fee} is below the minimum {minimum}")]
    TooLow { fee: Amount, minimum: Amount },
}

/// A configuration value read from the environment could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}")]
    InvalidVar { var: &'static str, value: String },
}

/// Any failure of [`crate::Signer::sign_transaction`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Fee(#[from] FeeError),

    #[error(transparent)]
    Key(#[from] KeyError),
}
