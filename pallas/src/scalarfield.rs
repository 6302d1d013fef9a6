//! Scalar field of the Pallas curve. q = 0x40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001
//!
//! This implementation uses Montgomery form for efficient modular arithmetic.
//! The field element is represented as [u64; 4] in little-endian order.

use crate::field::prime_field;
use crate::group::ScalarBits;
use crate::BaseField;

prime_field! {
    /// Scalar field element for the curve.
    /// Private keys, nonces and signature responses live here.
    ScalarField,
    modulus: [
        0x8c46eb2100000001,
        0x224698fc0994a8dd,
        0x0000000000000000,
        0x4000000000000000,
    ],
    r: [
        0x5b2b3e9cfffffffd,
        0x992c350be3420567,
        0xffffffffffffffff,
        0x3fffffffffffffff,
    ],
    r2: [
        0xfc9678ff0000000f,
        0x67bb433d891a16e3,
        0x7fae231004ccf590,
        0x096d41af7ccfdaa9,
    ],
    mu: 0x8c46eb20ffffffff,
    generator: 5,
}

impl ScalarField {
    /// Embeds a base field element. Always succeeds because p < q.
    pub fn from_base(value: &BaseField) -> Self {
        Self::from_reduced_limbs(value.to_canonical_limbs())
    }

    /// Splits the canonical value into its low and high 128-bit halves.
    pub fn to_u128_halves(&self) -> (u128, u128) {
        let limbs = self.to_canonical_limbs();
        let lo = (limbs[0] as u128) | ((limbs[1] as u128) << 64);
        let hi = (limbs[2] as u128) | ((limbs[3] as u128) << 64);
        (lo, hi)
    }
}

impl ScalarBits for ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_limbs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(ScalarField::ZERO + ScalarField::ZERO, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE * ScalarField::ONE, ScalarField::ONE);
        assert_eq!(ScalarField::ZERO * ScalarField::ONE, ScalarField::ZERO);
        assert_eq!(ScalarField::ONE + ScalarField::ZERO, ScalarField::ONE);
    }

    #[test]
    fn test_addition() {
        let a = ScalarField::from_canonical_u64(5);
        let b = ScalarField::from_canonical_u64(7);
        let c = a + b;
        assert_eq!(c, ScalarField::from_canonical_u64(12));
    }

    #[test]
    fn test_subtraction() {
        let a = ScalarField::from_canonical_u64(10);
        let b = ScalarField::from_canonical_u64(3);
        let c = a - b;
        assert_eq!(c, ScalarField::from_canonical_u64(7));
    }

    #[test]
    fn test_multiplication() {
        let a = ScalarField::from_canonical_u64(6);
        let b = ScalarField::from_canonical_u64(7);
        let c = a * b;
        assert_eq!(c, ScalarField::from_canonical_u64(42));
    }

    #[test]
    fn test_negation() {
        let a = ScalarField::from_canonical_u64(5);
        let b = -a;
        assert_eq!(a + b, ScalarField::ZERO);
    }

    #[test]
    fn test_inverse() {
        let a = ScalarField::from_canonical_u64(5);
        let a_inv = a.invert().expect("non-zero");
        assert_eq!(a * a_inv, ScalarField::ONE);
    }

    #[test]
    fn test_from_base_preserves_value() {
        let minus_one = -BaseField::ONE;
        let embedded = ScalarField::from_base(&minus_one);
        assert_eq!(embedded.to_canonical_limbs(), minus_one.to_canonical_limbs());
    }

    #[test]
    fn test_u128_halves() {
        let value = ScalarField::from_u128(u128::MAX) * ScalarField::from_canonical_u64(4);
        let (lo, hi) = value.to_u128_halves();
        assert_eq!(lo, u128::MAX - 3);
        assert_eq!(hi, 3);
    }
}
