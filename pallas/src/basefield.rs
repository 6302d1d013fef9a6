//! Base field of the Pallas curve.
//! p = 0x40000000000000000000000000000000224698fc094cf91b992d30ed00000001
//!
//! Curve coordinates, hash inputs and hash outputs live here.

use crate::field::prime_field;

prime_field! {
    /// Base field element, stored in Montgomery form with [u64; 4].
    BaseField,
    modulus: [
        0x992d30ed00000001,
        0x224698fc094cf91b,
        0x0000000000000000,
        0x4000000000000000,
    ],
    r: [
        0x34786d38fffffffd,
        0x992c350be41914ad,
        0xffffffffffffffff,
        0x3fffffffffffffff,
    ],
    r2: [
        0x8c78ecb30000000f,
        0xd7d30dbd8b0de0e7,
        0x7797a99bc3c95d18,
        0x096d41af7b9cb714,
    ],
    mu: 0x992d30ecffffffff,
    generator: 5,
}

// p - 1 = 2^S * T with T odd
const TWO_ADICITY: u32 = 32;
const T: [u64; 4] = [
    0x094cf91b992d30ed,
    0x00000000224698fc,
    0x0000000000000000,
    0x0000000040000000,
];
// (T + 1) / 2
const T_PLUS_ONE_DIV_TWO: [u64; 4] = [
    0x04a67c8dcc969877,
    0x0000000011234c7e,
    0x0000000000000000,
    0x0000000020000000,
];
// 5 generates the multiplicative group, so it is a quadratic non-residue.
const NON_RESIDUE: u64 = 5;

impl BaseField {
    /// Square root by Tonelli-Shanks. Returns `None` for non-residues.
    ///
    /// Either root may be returned; callers that care about the sign pick
    /// between `r` and `-r` with [`BaseField::is_odd`].
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }

        let mut m = TWO_ADICITY;
        let mut c = Self::from_canonical_u64(NON_RESIDUE).pow_vartime(T);
        let mut t = self.pow_vartime(T);
        let mut r = self.pow_vartime(T_PLUS_ONE_DIV_TWO);

        loop {
            if t == Self::ONE {
                return Some(r);
            }

            // least i with t^(2^i) == 1
            let mut i = 0;
            let mut t2i = t;
            while t2i != Self::ONE {
                t2i = t2i.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }
            m = i;
            c = b.square();
            t *= c;
            r *= b;
        }
    }
}
