//! Signing and verifying keys for the Schnorr signature scheme.

use pallas::{Affine, BaseField, CompressedPoint, RandomField, ScalarField};
use rand::CryptoRng;
use serde::{Deserialize, Serialize};

use crate::constants::{PK_SIZE, SK_SIZE};
use crate::errors::KeyError;
use crate::network::NetworkId;
use crate::signatures::{Signature, derive_nonce, hash_challenge};

/// A secret signing key: a non-zero scalar.
///
/// The zero scalar cannot be constructed, not even through deserialization.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScalarField", into = "ScalarField")]
pub struct SigningKey {
    scalar: ScalarField,
}

/// A public verifying key: the finite curve point `d * G`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CompressedPoint", into = "CompressedPoint")]
pub struct VerifyingKey {
    point: Affine,
}

/// Draws a fresh key pair from a cryptographically secure source.
pub fn generate_keypair<R: CryptoRng + ?Sized>(rng: &mut R) -> (SigningKey, VerifyingKey) {
    let sk = SigningKey::random(rng);
    let vk = sk.verifying_key();
    (sk, vk)
}

impl SigningKey {
    /// Uniform in `[1, q - 1]`; a zero draw is resampled.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random_nonzero(rng),
        }
    }

    pub fn from_scalar(scalar: ScalarField) -> Result<Self, KeyError> {
        if scalar.is_zero() {
            return Err(KeyError::Invalid("private key is zero"));
        }
        Ok(Self { scalar })
    }

    /// Reads a little-endian scalar, rejecting zero and values `>= q`.
    pub fn from_bytes(bytes: &[u8; SK_SIZE]) -> Result<Self, KeyError> {
        let scalar = ScalarField::from_bytes_le(bytes)
            .map_err(|_| KeyError::Invalid("private key is not below the group order"))?;
        Self::from_scalar(scalar)
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_bytes_le()
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: Affine::mul_generator(&self.scalar),
        }
    }

    /// Signs `msg` for `network`.
    ///
    /// 1. `k = derive_nonce(msg, pk, d, network)`
    /// 2. `R = k * G`, negating `k` when `R.y` is odd
    /// 3. `e = H(msg || pk || R.x)`
    /// 4. `s = k + e * d`
    ///
    /// The same key, message and network always give the same signature.
    pub fn sign(&self, msg: &[BaseField], network: NetworkId) -> Result<Signature, KeyError> {
        if self.scalar.is_zero() {
            return Err(KeyError::Invalid("private key is zero"));
        }

        let pk = self.verifying_key();
        let mut nonce = derive_nonce(msg, &pk.point, &self.scalar, network);
        let r = Affine::mul_generator(&nonce);
        if r.y.is_odd() {
            nonce = -nonce;
        }

        let e = hash_challenge(msg, &pk.point, &r.x, network);
        let s = nonce + e * self.scalar;

        Ok(Signature { r: r.x, s })
    }
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

impl TryFrom<ScalarField> for SigningKey {
    type Error = KeyError;

    fn try_from(scalar: ScalarField) -> Result<Self, Self::Error> {
        Self::from_scalar(scalar)
    }
}

impl From<SigningKey> for ScalarField {
    fn from(sk: SigningKey) -> Self {
        sk.scalar
    }
}

impl VerifyingKey {
    /// Accepts only finite, on-curve points.
    pub fn from_affine(point: Affine) -> Result<Self, KeyError> {
        if point.is_infinity() {
            return Err(KeyError::Invalid("public key is the point at infinity"));
        }
        if !point.is_on_curve() {
            return Err(KeyError::Invalid("public key is not on the curve"));
        }
        Ok(Self { point })
    }

    pub fn from_compressed(compressed: &CompressedPoint) -> Result<Self, KeyError> {
        let point = Affine::decompress(compressed)
            .map_err(|_| KeyError::Invalid("no curve point has this x-coordinate"))?;
        Self::from_affine(point)
    }

    pub fn compress(&self) -> CompressedPoint {
        CompressedPoint {
            x: self.point.x,
            is_odd: self.point.y.is_odd(),
        }
    }

    pub fn point(&self) -> &Affine {
        &self.point
    }

    pub fn to_bytes(&self) -> [u8; PK_SIZE] {
        let mut out = [0u8; PK_SIZE];
        out[..32].copy_from_slice(&self.point.x.to_bytes_le());
        out[32] = self.point.y.is_odd() as u8;
        out
    }

    pub fn from_bytes(bytes: &[u8; PK_SIZE]) -> Result<Self, KeyError> {
        let mut x = [0u8; 32];
        x.copy_from_slice(&bytes[..32]);
        let x = BaseField::from_bytes_le(&x)
            .map_err(|_| KeyError::Invalid("public key x-coordinate is not canonical"))?;
        let is_odd = match bytes[32] {
            0 => false,
            1 => true,
            _ => return Err(KeyError::Invalid("public key parity byte is not 0 or 1")),
        };
        Self::from_compressed(&CompressedPoint { x, is_odd })
    }

    /// Checks `signature` on `msg` for `network`.
    ///
    /// Recomputes `R' = s * G - e * pk` and accepts when `R'` is finite, has
    /// x-coordinate `r` and an even y-coordinate. Any mismatch is `false`.
    pub fn verify(&self, msg: &[BaseField], signature: &Signature, network: NetworkId) -> bool {
        if self.point.is_infinity() {
            return false;
        }

        let e = hash_challenge(msg, &self.point, &signature.r, network);
        let r = Affine::double_scalar_mul_basepoint(&signature.s, &-e, &self.point);

        !r.is_infinity() && r.x == signature.r && !r.y.is_odd()
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

impl TryFrom<CompressedPoint> for VerifyingKey {
    type Error = KeyError;

    fn try_from(compressed: CompressedPoint) -> Result<Self, Self::Error> {
        Self::from_compressed(&compressed)
    }
}

impl From<VerifyingKey> for CompressedPoint {
    fn from(vk: VerifyingKey) -> Self {
        vk.compress()
    }
}
