//! Constants used in the Schnorr signature scheme implementation.

/// Size of a serialized verifying key in bytes.
///
/// A verifying key is stored compressed: the 32-byte little-endian
/// x-coordinate followed by one byte holding the parity of y.
pub const PK_SIZE: usize = 33;

/// Size of a serialized signing key in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a serialized signature in bytes.
///
/// `r` (a base field element) then `s` (a scalar), both 32 bytes
/// little-endian.
pub const SIG_SIZE: usize = 64;

