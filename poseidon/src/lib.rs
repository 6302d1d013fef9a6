//! Poseidon hashing over the Pallas base field.
//!
//! The permutation has width 3 and rate 2, uses the `x^7` S-box and runs 55
//! full rounds. Round constants come from the Grain LFSR and the linear layer
//! is a Cauchy MDS matrix; both are derived once per process.
//!
//! Hashing is always domain separated: [`hash_with_prefix`] starts from a
//! state keyed by an ASCII prefix and absorbs the input length before the
//! input itself.
//!
//! ```
//! use pallas::BaseField;
//! use poseidon::{hash_with_prefix, prefixes};
//!
//! let msg = [BaseField::from_canonical_u64(1), BaseField::from_canonical_u64(2)];
//! let digest = hash_with_prefix(prefixes::PARTY_BODY, &msg);
//! assert_eq!(digest, hash_with_prefix(prefixes::PARTY_BODY, &msg));
//! ```

mod constants;
mod grain;
mod params;
mod permutation;
mod sponge;

pub use constants::{prefixes, ALPHA, FULL_ROUNDS, PREFIX_LEN, RATE, WIDTH};
pub use params::{params, PoseidonParams};
pub use permutation::PoseidonPermutation;
pub use sponge::{hash_with_prefix, prefix_to_field, PoseidonHasher, Sponge};
