//! Error types for field and point arithmetic.

use thiserror::Error;

/// Failures of total-looking arithmetic.
///
/// Surfacing one of these from a signing path means an invariant was broken
/// upstream, e.g. a zero denominator that the caller claimed was excluded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Zero has no multiplicative inverse.
    #[error("zero is not invertible")]
    NotInvertible,
}

/// Failures while turning external bytes, integers or strings into field
/// elements or curve points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The integer is not below the field modulus.
    #[error("value is not a canonical field element")]
    NonCanonical,

    /// The string is not a base-10 integer.
    #[error("invalid decimal field element: {0:?}")]
    InvalidDecimal(String),

    /// The coordinates do not satisfy the curve equation, or no point exists
    /// with the given x-coordinate.
    #[error("point is not on the curve")]
    NotOnCurve,
}
