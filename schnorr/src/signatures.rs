//! Signature type, challenge hashing and nonce derivation.

use p3_symmetric::CryptographicHasher;
use pallas::{Affine, BaseField, DecodeError, ScalarField};
use poseidon::{PoseidonHasher, prefixes};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::SIG_SIZE;
use crate::network::NetworkId;

/// A Schnorr signature `(r, s)`.
///
/// `r` is the x-coordinate of the nonce point `R = k * G`; the signer picks
/// the sign of `k` so that `R.y` is even, which makes `r` alone enough to
/// recover `R`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub r: BaseField,
    pub s: ScalarField,
}

impl Signature {
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[..32].copy_from_slice(&self.r.to_bytes_le());
        out[32..].copy_from_slice(&self.s.to_bytes_le());
        out
    }

    pub fn from_bytes(bytes: &[u8; SIG_SIZE]) -> Result<Self, DecodeError> {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Ok(Self {
            r: BaseField::from_bytes_le(&r)?,
            s: ScalarField::from_bytes_le(&s)?,
        })
    }
}

/// `e = H(network prefix, msg || pk.x || pk.y || r)`, read as a scalar.
pub(crate) fn hash_challenge(
    msg: &[BaseField],
    pk: &Affine,
    r: &BaseField,
    network: NetworkId,
) -> ScalarField {
    let hasher = PoseidonHasher::new(network.challenge_prefix());
    let input = msg.iter().copied().chain([pk.x, pk.y, *r]);
    ScalarField::from_base(&hasher.hash_iter(input))
}

/// Deterministic nonce `k = H(NONCE, msg || pk.x || pk.y || d_lo || d_hi || network || counter)`.
///
/// The counter starts at zero and is bumped only while the digest is zero,
/// so the returned scalar is never zero.
pub(crate) fn derive_nonce(
    msg: &[BaseField],
    pk: &Affine,
    secret: &ScalarField,
    network: NetworkId,
) -> ScalarField {
    let hasher = PoseidonHasher::new(prefixes::SIGNATURE_NONCE);
    let (lo, hi) = secret.to_u128_halves();
    let prefix: Vec<BaseField> = msg
        .iter()
        .copied()
        .chain([
            pk.x,
            pk.y,
            BaseField::from_u128(lo),
            BaseField::from_u128(hi),
            network.to_field(),
        ])
        .collect();

    let mut counter = 0u64;
    loop {
        let input = prefix
            .iter()
            .copied()
            .chain(core::iter::once(BaseField::from_canonical_u64(counter)));
        let nonce = ScalarField::from_base(&hasher.hash_iter(input));
        if !nonce.is_zero() {
            return nonce;
        }
        counter += 1;
        trace!(counter, "nonce digest was zero, re-deriving");
    }
}
