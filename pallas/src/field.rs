//! Shared 4x64-bit Montgomery arithmetic for the two Pasta prime fields.
//!
//! Both moduli are 255-bit primes, so a sum of two reduced values and the
//! intermediate result of a Montgomery product always fit in 256 bits and a
//! single conditional subtraction restores the canonical range.

/// Helper: carrying addition
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: borrowing subtraction
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Returns true when `limbs < modulus`.
#[inline]
pub(crate) const fn is_canonical(limbs: [u64; 4], modulus: [u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(modulus[0]);
    let (_, borrow) = borrowing_sub(limbs[1], modulus[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], modulus[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], modulus[3], borrow);
    borrow
}

/// `(a + b) mod m` for reduced inputs.
#[inline]
pub(crate) const fn add_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let (s0, borrow) = r0.overflowing_sub(modulus[0]);
    let (s1, borrow) = borrowing_sub(r1, modulus[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, modulus[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, modulus[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// `(a - b) mod m` for reduced inputs.
#[inline]
pub(crate) const fn sub_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let (r0, carry) = r0.overflowing_add(modulus[0]);
        let (r1, carry) = carrying_add(r1, modulus[1], carry);
        let (r2, carry) = carrying_add(r2, modulus[2], carry);
        let (r3, _) = carrying_add(r3, modulus[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// `-a mod m`
#[inline]
pub(crate) const fn neg_mod(a: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(modulus, a, modulus)
}

/// Montgomery multiplication: `(a * b * R^{-1}) mod m` with `R = 2^256`.
///
/// `mu` is `-m^{-1} mod 2^64`.
#[inline]
pub(crate) fn montgomery_mul(a: [u64; 4], b: [u64; 4], modulus: [u64; 4], mu: u64) -> [u64; 4] {
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    for i in 0..4 {
        let k = t[i].wrapping_mul(mu);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (modulus[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    let result = [t[4], t[5], t[6], t[7]];
    if is_canonical(result, modulus) {
        result
    } else {
        sub_mod(result, modulus, modulus)
    }
}

/// `n * a mod m` by repeated addition, usable in constants.
pub(crate) const fn small_multiple(a: [u64; 4], n: u64, modulus: [u64; 4]) -> [u64; 4] {
    let mut acc = [0u64; 4];
    let mut i = 0;
    while i < n {
        acc = add_mod(acc, a, modulus);
        i += 1;
    }
    acc
}

/// `a / 2 mod m`: shift an even value, or shift `a + m` for an odd one.
/// `a + m < 2^256` because both are below `2^255`.
#[inline]
pub(crate) const fn halve_mod(a: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let v = if a[0] & 1 == 1 {
        let (r0, carry) = a[0].overflowing_add(modulus[0]);
        let (r1, carry) = carrying_add(a[1], modulus[1], carry);
        let (r2, carry) = carrying_add(a[2], modulus[2], carry);
        let (r3, _) = carrying_add(a[3], modulus[3], carry);
        [r0, r1, r2, r3]
    } else {
        a
    };
    [
        (v[0] >> 1) | (v[1] << 63),
        (v[1] >> 1) | (v[2] << 63),
        (v[2] >> 1) | (v[3] << 63),
        v[3] >> 1,
    ]
}

/// `QuotientMap` for the primitive integers. Every primitive fits below the
/// modulus, so all of them are canonical.
macro_rules! quotient_maps {
    ($name:ident; $($uint:ty),*; $($int:ty),*) => {
        $(
            impl p3_field::integers::QuotientMap<$uint> for $name {
                #[inline]
                fn from_int(int: $uint) -> Self {
                    Self::from_u128(int as u128)
                }

                #[inline]
                fn from_canonical_checked(int: $uint) -> Option<Self> {
                    Some(Self::from_u128(int as u128))
                }

                #[inline]
                unsafe fn from_canonical_unchecked(int: $uint) -> Self {
                    Self::from_u128(int as u128)
                }
            }
        )*
        $(
            impl p3_field::integers::QuotientMap<$int> for $name {
                #[inline]
                fn from_int(int: $int) -> Self {
                    let magnitude = Self::from_u128(int.unsigned_abs() as u128);
                    if int < 0 {
                        -magnitude
                    } else {
                        magnitude
                    }
                }

                #[inline]
                fn from_canonical_checked(int: $int) -> Option<Self> {
                    Some(<Self as p3_field::integers::QuotientMap<$int>>::from_int(int))
                }

                #[inline]
                unsafe fn from_canonical_unchecked(int: $int) -> Self {
                    <Self as p3_field::integers::QuotientMap<$int>>::from_int(int)
                }
            }
        )*
    };
}

pub(crate) use quotient_maps;

/// Defines a prime field element type in Montgomery form.
///
/// The generated type stores `value * R mod m` and exposes canonical
/// conversions, checked inversion, serde as canonical little-endian bytes,
/// decimal parsing, the usual operator traits and the `p3_field` ring and
/// field traits. Two invocations produce two unrelated types, so base and
/// scalar elements never mix implicitly.
macro_rules! prime_field {
    (
        $(#[$meta:meta])*
        $name:ident,
        modulus: $modulus:expr,
        r: $r:expr,
        r2: $r2:expr,
        mu: $mu:expr,
        generator: $generator:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(into = "[u8; 32]", try_from = "[u8; 32]")]
        pub struct $name {
            limbs: [u64; 4],
        }

        impl $name {
            /// Field modulus in little-endian limbs.
            pub const MODULUS: [u64; 4] = $modulus;

            const R: [u64; 4] = $r;
            const R2: [u64; 4] = $r2;
            const MU: u64 = $mu;

            /// Bit length of the modulus.
            pub const NUM_BITS: u32 = 255;

            /// Width of the canonical byte encoding.
            pub const NUM_BYTES: usize = 32;

            /// Zero element (in Montgomery form)
            pub const ZERO: Self = Self { limbs: [0, 0, 0, 0] };

            /// One element (in Montgomery form: R mod p)
            pub const ONE: Self = Self { limbs: Self::R };

            /// Create a field element from a u64 value.
            #[inline]
            pub fn from_canonical_u64(val: u64) -> Self {
                Self::from_reduced_limbs([val, 0, 0, 0])
            }

            /// Create a field element from a u128 value.
            #[inline]
            pub fn from_u128(val: u128) -> Self {
                Self::from_reduced_limbs([val as u64, (val >> 64) as u64, 0, 0])
            }

            /// Converts canonical limbs, rejecting values `>= MODULUS`.
            pub fn from_canonical_limbs(limbs: [u64; 4]) -> Result<Self, $crate::DecodeError> {
                if $crate::field::is_canonical(limbs, Self::MODULUS) {
                    Ok(Self::from_reduced_limbs(limbs))
                } else {
                    Err($crate::DecodeError::NonCanonical)
                }
            }

            #[inline]
            pub(crate) fn from_reduced_limbs(limbs: [u64; 4]) -> Self {
                Self {
                    limbs: $crate::field::montgomery_mul(limbs, Self::R2, Self::MODULUS, Self::MU),
                }
            }

            /// Convert from Montgomery form to canonical little-endian limbs.
            #[inline]
            pub fn to_canonical_limbs(&self) -> [u64; 4] {
                $crate::field::montgomery_mul(self.limbs, [1, 0, 0, 0], Self::MODULUS, Self::MU)
            }

            /// Canonical value as 32 little-endian bytes.
            pub fn to_bytes_le(&self) -> [u8; 32] {
                let mut out = [0u8; 32];
                for (chunk, limb) in out.chunks_exact_mut(8).zip(self.to_canonical_limbs()) {
                    chunk.copy_from_slice(&limb.to_le_bytes());
                }
                out
            }

            /// Canonical value as 32 big-endian bytes.
            pub fn to_bytes_be(&self) -> [u8; 32] {
                let mut out = self.to_bytes_le();
                out.reverse();
                out
            }

            /// Parses 32 little-endian bytes, rejecting non-canonical values.
            pub fn from_bytes_le(bytes: &[u8; 32]) -> Result<Self, $crate::DecodeError> {
                let mut limbs = [0u64; 4];
                for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
                    let mut word = [0u8; 8];
                    word.copy_from_slice(chunk);
                    *limb = u64::from_le_bytes(word);
                }
                Self::from_canonical_limbs(limbs)
            }

            /// Parses 32 big-endian bytes, rejecting non-canonical values.
            pub fn from_bytes_be(bytes: &[u8; 32]) -> Result<Self, $crate::DecodeError> {
                let mut le = *bytes;
                le.reverse();
                Self::from_bytes_le(&le)
            }

            /// Canonical value as `NUM_BITS` little-endian bits.
            pub fn to_bits_le(&self) -> Vec<bool> {
                let limbs = self.to_canonical_limbs();
                (0..Self::NUM_BITS as usize)
                    .map(|i| (limbs[i / 64] >> (i % 64)) & 1 == 1)
                    .collect()
            }

            /// Canonical value as an arbitrary-precision integer.
            pub fn to_biguint(&self) -> num_bigint::BigUint {
                num_bigint::BigUint::from_bytes_le(&self.to_bytes_le())
            }

            /// Parses a reduced integer, rejecting values `>= MODULUS`.
            pub fn from_biguint(value: &num_bigint::BigUint) -> Result<Self, $crate::DecodeError> {
                let digits = value.to_u64_digits();
                if digits.len() > 4 {
                    return Err($crate::DecodeError::NonCanonical);
                }
                let mut limbs = [0u64; 4];
                limbs[..digits.len()].copy_from_slice(&digits);
                Self::from_canonical_limbs(limbs)
            }

            /// Parses a base-10 string such as `"15836741414052211301983886193856353162526040956490609761139212467629447291325"`.
            pub fn from_decimal_str(s: &str) -> Result<Self, $crate::DecodeError> {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return Err($crate::DecodeError::InvalidDecimal(s.to_string()));
                }
                let value = num_bigint::BigUint::parse_bytes(s.as_bytes(), 10)
                    .ok_or_else(|| $crate::DecodeError::InvalidDecimal(s.to_string()))?;
                Self::from_biguint(&value)
            }

            /// Check if this field element is zero
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.limbs == [0, 0, 0, 0]
            }

            /// Whether the canonical integer value is odd.
            #[inline]
            pub fn is_odd(&self) -> bool {
                self.to_canonical_limbs()[0] & 1 == 1
            }

            #[inline]
            pub fn square(&self) -> Self {
                *self * *self
            }

            #[inline]
            pub fn double(&self) -> Self {
                *self + *self
            }

            /// Variable-time exponentiation by a little-endian limb exponent.
            pub fn pow_vartime(&self, exp: [u64; 4]) -> Self {
                let mut result = Self::ONE;
                for &limb in exp.iter().rev() {
                    for bit in (0..64).rev() {
                        result = result.square();
                        if (limb >> bit) & 1 == 1 {
                            result *= *self;
                        }
                    }
                }
                result
            }

            /// Multiplicative inverse via Fermat's little theorem, `a^{p-2}`.
            pub fn invert(&self) -> Result<Self, $crate::ArithmeticError> {
                if self.is_zero() {
                    return Err($crate::ArithmeticError::NotInvertible);
                }
                let exp = $crate::field::sub_mod(Self::MODULUS, [2, 0, 0, 0], Self::MODULUS);
                Ok(self.pow_vartime(exp))
            }

            /// Inverse for callers that have already excluded zero; zero maps to zero.
            #[inline]
            pub(crate) fn inverse_or_zero(&self) -> Self {
                self.invert().unwrap_or(Self::ZERO)
            }
        }

        impl rand::distr::Distribution<$name> for rand::distr::StandardUniform {
            fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> $name {
                loop {
                    let mut limbs: [u64; 4] = rng.random();
                    limbs[3] &= 0x7fff_ffff_ffff_ffff;
                    if let Ok(value) = $name::from_canonical_limbs(limbs) {
                        return value;
                    }
                }
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self::from_canonical_u64(value)
            }
        }

        impl From<bool> for $name {
            fn from(value: bool) -> Self {
                if value {
                    Self::ONE
                } else {
                    Self::ZERO
                }
            }
        }

        impl From<$name> for [u8; 32] {
            fn from(value: $name) -> Self {
                value.to_bytes_le()
            }
        }

        impl TryFrom<[u8; 32]> for $name {
            type Error = $crate::DecodeError;

            fn try_from(bytes: [u8; 32]) -> Result<Self, Self::Error> {
                Self::from_bytes_le(&bytes)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_decimal_str(s)
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self {
                    limbs: $crate::field::add_mod(self.limbs, rhs.limbs, Self::MODULUS),
                }
            }
        }

        impl core::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    limbs: $crate::field::sub_mod(self.limbs, rhs.limbs, Self::MODULUS),
                }
            }
        }

        impl core::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self {
                    limbs: $crate::field::neg_mod(self.limbs, Self::MODULUS),
                }
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    limbs: $crate::field::montgomery_mul(
                        self.limbs,
                        rhs.limbs,
                        Self::MODULUS,
                        Self::MU,
                    ),
                }
            }
        }

        impl core::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl core::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl core::iter::Product for $name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |acc, x| acc * x)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.to_biguint())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let canonical = self.to_canonical_limbs();
                write!(
                    f,
                    "{}(0x{:016x}{:016x}{:016x}{:016x})",
                    stringify!($name),
                    canonical[3],
                    canonical[2],
                    canonical[1],
                    canonical[0]
                )
            }
        }

        /// Orders by canonical value.
        impl Ord for $name {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                let a = self.to_canonical_limbs();
                let b = other.to_canonical_limbs();
                a.iter().rev().cmp(b.iter().rev())
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        /// Division by zero yields zero, like [`Self::inverse_or_zero`].
        impl core::ops::Div for $name {
            type Output = Self;

            #[allow(clippy::suspicious_arithmetic_impl)]
            #[inline]
            fn div(self, rhs: Self) -> Self {
                self * rhs.inverse_or_zero()
            }
        }

        impl core::ops::DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl p3_field::PrimeCharacteristicRing for $name {
            type PrimeSubfield = Self;

            const ZERO: Self = Self::ZERO;
            const ONE: Self = Self::ONE;
            const TWO: Self = Self {
                limbs: $crate::field::add_mod($r, $r, $modulus),
            };
            const NEG_ONE: Self = Self {
                limbs: $crate::field::sub_mod($modulus, $r, $modulus),
            };

            #[inline]
            fn from_prime_subfield(elem: Self::PrimeSubfield) -> Self {
                elem
            }

            #[inline]
            fn halve(&self) -> Self {
                Self {
                    limbs: $crate::field::halve_mod(self.limbs, Self::MODULUS),
                }
            }
        }

        impl p3_field::Packable for $name {}

        impl p3_field::RawDataSerializable for $name {
            const NUM_BYTES: usize = 32;

            fn into_bytes(self) -> impl IntoIterator<Item = u8> {
                self.to_bytes_le()
            }
        }

        impl p3_field::Field for $name {
            type Packing = Self;

            const GENERATOR: Self = Self {
                limbs: $crate::field::small_multiple($r, $generator, $modulus),
            };

            #[inline]
            fn try_inverse(&self) -> Option<Self> {
                self.invert().ok()
            }

            fn order() -> num_bigint::BigUint {
                let mut bytes = [0u8; 32];
                for (chunk, limb) in bytes.chunks_exact_mut(8).zip(Self::MODULUS) {
                    chunk.copy_from_slice(&limb.to_le_bytes());
                }
                num_bigint::BigUint::from_bytes_le(&bytes)
            }
        }

        impl p3_field::PrimeField for $name {
            #[inline]
            fn as_canonical_biguint(&self) -> num_bigint::BigUint {
                self.to_biguint()
            }
        }

        $crate::field::quotient_maps!($name; u8, u16, u32, u64, u128; i8, i16, i32, i64, i128);
    };
}

pub(crate) use prime_field;

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use p3_field::integers::QuotientMap;
    use p3_field::{Field, PrimeCharacteristicRing, PrimeField};

    use crate::{BaseField, ScalarField};

    fn check_field<F>()
    where
        F: PrimeField + QuotientMap<i64> + QuotientMap<u128>,
    {
        assert_eq!(F::TWO, F::ONE + F::ONE);
        assert_eq!(F::NEG_ONE + F::ONE, F::ZERO);
        assert_eq!(F::TWO.halve(), F::ONE);
        assert_eq!(F::ONE.halve().double(), F::ONE);

        let seven = <F as QuotientMap<u128>>::from_int(7);
        let minus_three = <F as QuotientMap<i64>>::from_int(-3);
        assert_eq!(seven + minus_three, <F as QuotientMap<u128>>::from_int(4));
        assert_eq!(seven * seven.try_inverse().unwrap(), F::ONE);
        assert_eq!(seven / seven, F::ONE);
        assert_eq!(F::ZERO.try_inverse(), None);

        assert_eq!(seven.as_canonical_biguint(), BigUint::from(7u32));
        assert_eq!(minus_three.as_canonical_biguint(), F::order() - 3u32);
        assert!(minus_three > seven);

        // The generator has full order, so it is a non-residue:
        // g^((order - 1) / 2) == -1.
        let half_order: BigUint = (F::order() - 1u32) >> 1;
        let legendre = half_order
            .to_u64_digits()
            .iter()
            .rev()
            .fold(F::ONE, |acc, &digit| acc.exp_power_of_2(64) * F::GENERATOR.exp_u64(digit));
        assert_eq!(legendre, F::NEG_ONE);
    }

    #[test]
    fn test_base_field_traits() {
        check_field::<BaseField>();
        assert_eq!(
            BaseField::order(),
            BigUint::parse_bytes(
                b"40000000000000000000000000000000224698fc094cf91b992d30ed00000001",
                16
            )
            .unwrap()
        );
    }

    #[test]
    fn test_scalar_field_traits() {
        check_field::<ScalarField>();
        assert_eq!(
            ScalarField::order(),
            BigUint::parse_bytes(
                b"40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001",
                16
            )
            .unwrap()
        );
    }

    #[test]
    fn test_ordering_is_numeric() {
        let small = BaseField::from_canonical_u64(1 << 40);
        let large = BaseField::from_u128(1 << 100);
        assert!(small < large);
        assert!(-BaseField::ONE > large);
        assert_eq!(small.cmp(&small), core::cmp::Ordering::Equal);
    }
}
