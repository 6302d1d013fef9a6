//! Schnorr signatures over the Pallas curve.
//!
//! This library implements a Schnorr signature scheme using:
//! - The Pallas curve (`y^2 = x^3 + 5`, prime order)
//! - Prefixed Poseidon hashing for the challenge and the nonce
//! - Pallas base field elements for message encoding
//!
//! Nonces are derived from the key, the message and the network, so signing
//! needs no randomness and the same input always gives the same signature.
//! The sign of the nonce is chosen so the nonce point has an even
//! y-coordinate; a signature therefore only carries `R.x`.
//!
//! # Example
//!
//! ```
//! use pallas::BaseField;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use schnorr::{NetworkId, generate_keypair};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let (signing_key, verifying_key) = generate_keypair(&mut rng);
//!
//! let message = [
//!     BaseField::from_canonical_u64(1),
//!     BaseField::from_canonical_u64(2),
//!     BaseField::from_canonical_u64(3),
//! ];
//!
//! let signature = signing_key.sign(&message, NetworkId::Testnet).expect("signing failed");
//! assert!(verifying_key.verify(&message, &signature, NetworkId::Testnet));
//! assert!(!verifying_key.verify(&message, &signature, NetworkId::Mainnet));
//! ```

mod constants;
mod errors;
mod keys;
mod network;
mod signatures;

#[cfg(test)]
mod tests;

pub use constants::{PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::KeyError;
pub use keys::{SigningKey, VerifyingKey, generate_keypair};
pub use network::{NetworkId, UnknownNetwork};
pub use signatures::Signature;
