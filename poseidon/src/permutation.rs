use p3_symmetric::{CryptographicPermutation, Permutation};
use pallas::BaseField;

use crate::constants::{ALPHA, WIDTH};
use crate::params::params;

/// The width-3 Poseidon permutation over the Pallas base field.
///
/// Each of the 55 rounds raises every cell to the seventh power, multiplies
/// the state by the MDS matrix and then adds that round's constants.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PoseidonPermutation;

impl PoseidonPermutation {
    pub const WIDTH: usize = WIDTH;

    /// Applies the permutation in place.
    pub fn apply_permutation(state: &mut [BaseField; WIDTH]) {
        let params = params();
        for round_constants in &params.round_constants {
            for cell in state.iter_mut() {
                *cell = sbox(*cell);
            }
            let mixed: [BaseField; WIDTH] = core::array::from_fn(|i| {
                params.mds[i]
                    .iter()
                    .zip(state.iter())
                    .map(|(m, s)| *m * *s)
                    .sum()
            });
            for ((cell, value), rc) in state.iter_mut().zip(mixed).zip(round_constants) {
                *cell = value + *rc;
            }
        }
    }
}

#[inline(always)]
fn sbox(x: BaseField) -> BaseField {
    debug_assert_eq!(ALPHA, 7);
    let x2 = x.square();
    let x4 = x2.square();
    x4 * x2 * x
}

impl Permutation<[BaseField; WIDTH]> for PoseidonPermutation {
    fn permute_mut(&self, state: &mut [BaseField; WIDTH]) {
        Self::apply_permutation(state);
    }
}

impl CryptographicPermutation<[BaseField; WIDTH]> for PoseidonPermutation {}
