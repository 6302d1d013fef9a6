//! Fixed-base multiplication for the generator.
//!
//! The table holds `j * G` for `j in 0..256` in affine form. It is built once,
//! on first use, and shared read-only by every thread afterwards.

use std::sync::OnceLock;

use crate::group::ScalarBits;
use crate::{Affine, Projective, ScalarField};

static GENERATOR_TABLE: OnceLock<Vec<Affine>> = OnceLock::new();

/// `[0*G, 1*G, ..., 255*G]`
pub(crate) fn affine_table() -> &'static [Affine] {
    GENERATOR_TABLE.get_or_init(|| {
        let g = Projective::generator();
        let mut multiples = Vec::with_capacity(256);
        let mut acc = Projective::INFINITY;
        for _ in 0..256 {
            multiples.push(acc);
            acc += g;
        }
        Projective::batch_normalize(&multiples)
    })
}

/// Compute `scalar * G` with 8-bit windows over the precomputed table.
pub fn mul_generator_affine(scalar: &ScalarField) -> Affine {
    mul_generator_projective(scalar).to_affine()
}

pub(crate) fn mul_generator_projective(scalar: &ScalarField) -> Projective {
    let table = affine_table();
    let limbs = scalar.to_u64_limbs();
    let mut result = Projective::INFINITY;

    for &limb in limbs.iter().rev() {
        for shift in (0..64).step_by(8).rev() {
            for _ in 0..8 {
                result = result.double();
            }

            let window = ((limb >> shift) & 0xFF) as usize;
            if window != 0 {
                result = result.add_affine(&table[window]);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    #[test]
    fn test_table_entries() {
        let table = affine_table();
        assert_eq!(table.len(), 256);
        assert!(table[0].is_infinity());
        assert_eq!(table[1], Affine::generator());
        assert_eq!(table[2], Affine::generator().double());
        assert!(table.iter().all(|p| p.is_on_curve()));
    }

    #[test]
    fn test_matches_ladder() {
        let scalar = -ScalarField::from_canonical_u64(0xdead_beef);
        let expected = Projective::generator().scalar_mul(&scalar);
        assert_eq!(mul_generator_projective(&scalar), expected);
    }
}
