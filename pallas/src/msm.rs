use crate::generator_table::affine_table;
use crate::group::ScalarBits;
use crate::{Affine, Projective, ScalarField};

/// Compute a * G + b * P with a shared doubling chain.
///
/// Both scalars are consumed in 4-bit windows; G's multiples come from the
/// precomputed generator table and P's from a 16-entry table built per call.
pub fn double_scalar_mul_basepoint_affine(
    a: &ScalarField,
    b: &ScalarField,
    point: &Affine,
) -> Affine {
    let base_table = affine_table();

    let p = Projective::from_affine(point);
    let mut multiples = [Projective::INFINITY; 16];
    for i in 1..16 {
        multiples[i] = multiples[i - 1] + p;
    }
    let point_table = Projective::batch_normalize(&multiples);

    let a_limbs = a.to_u64_limbs();
    let b_limbs = b.to_u64_limbs();
    let mut result = Projective::INFINITY;

    for limb_idx in (0..4).rev() {
        let a_limb = a_limbs[limb_idx];
        let b_limb = b_limbs[limb_idx];
        for shift in (0..64).step_by(4).rev() {
            for _ in 0..4 {
                result = result.double();
            }

            let a_window = ((a_limb >> shift) & 0xF) as usize;
            if a_window != 0 {
                result = result.add_affine(&base_table[a_window]);
            }

            let b_window = ((b_limb >> shift) & 0xF) as usize;
            if b_window != 0 {
                result = result.add_affine(&point_table[b_window]);
            }
        }
    }

    result.to_affine()
}
