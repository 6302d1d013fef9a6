//! Round constants and MDS matrix, derived once per process.

use std::sync::OnceLock;

use pallas::BaseField;

use crate::constants::{FULL_ROUNDS, WIDTH};
use crate::grain::GrainLfsr;

/// Fixed parameters of the permutation.
#[derive(Debug)]
pub struct PoseidonParams {
    /// One row per round, added after the linear layer.
    pub round_constants: Vec<[BaseField; WIDTH]>,
    /// Cauchy matrix `M[i][j] = 1 / (i + j + WIDTH)`.
    pub mds: [[BaseField; WIDTH]; WIDTH],
}

static PARAMS: OnceLock<PoseidonParams> = OnceLock::new();

/// The shared parameter set, built on first use.
pub fn params() -> &'static PoseidonParams {
    PARAMS.get_or_init(PoseidonParams::generate)
}

impl PoseidonParams {
    fn generate() -> Self {
        let mut grain = GrainLfsr::new(
            BaseField::NUM_BITS as u16,
            WIDTH as u16,
            FULL_ROUNDS as u16,
            0,
        );
        let round_constants = (0..FULL_ROUNDS)
            .map(|_| core::array::from_fn(|_| grain.next_field_element()))
            .collect();

        let mds = core::array::from_fn(|i| {
            core::array::from_fn(|j| {
                BaseField::from_canonical_u64((i + j + WIDTH) as u64)
                    .invert()
                    .expect("small non-zero integers are invertible")
            })
        });

        Self {
            round_constants,
            mds,
        }
    }
}
