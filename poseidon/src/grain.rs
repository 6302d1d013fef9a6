//! The Grain LFSR used by the Poseidon reference to derive round constants.

use pallas::BaseField;

const STATE_BITS: usize = 80;
const WARMUP_ROUNDS: usize = 160;

/// Self-shrinking 80-bit Grain LFSR.
pub(crate) struct GrainLfsr {
    state: [bool; STATE_BITS],
    field_bits: usize,
}

impl GrainLfsr {
    /// Seed the register with the instance description and clock away the
    /// first 160 bits.
    pub(crate) fn new(field_bits: u16, width: u16, full_rounds: u16, partial_rounds: u16) -> Self {
        let mut state = [true; STATE_BITS];
        let mut cursor = 0;
        // field = prime (1, two bits), sbox = x^alpha (0, four bits)
        for (value, bits) in [
            (1u16, 2),
            (0, 4),
            (field_bits, 12),
            (width, 12),
            (full_rounds, 10),
            (partial_rounds, 10),
        ] {
            for bit in (0..bits).rev() {
                state[cursor] = (value >> bit) & 1 == 1;
                cursor += 1;
            }
        }
        // remaining 30 bits stay set

        let mut lfsr = Self {
            state,
            field_bits: field_bits as usize,
        };
        for _ in 0..WARMUP_ROUNDS {
            lfsr.clock();
        }
        lfsr
    }

    fn clock(&mut self) -> bool {
        let s = &self.state;
        let bit = s[62] ^ s[51] ^ s[38] ^ s[23] ^ s[13] ^ s[0];
        self.state.copy_within(1.., 0);
        self.state[STATE_BITS - 1] = bit;
        bit
    }

    /// Bits are drawn in pairs; the second is emitted only when the first is set.
    fn next_bit(&mut self) -> bool {
        loop {
            let keep = self.clock();
            let bit = self.clock();
            if keep {
                return bit;
            }
        }
    }

    /// Next field element, sampled MSB-first with rejection of values at or
    /// above the modulus.
    pub(crate) fn next_field_element(&mut self) -> BaseField {
        loop {
            let mut limbs = [0u64; 4];
            for _ in 0..self.field_bits {
                let bit = self.next_bit() as u64;
                limbs[3] = (limbs[3] << 1) | (limbs[2] >> 63);
                limbs[2] = (limbs[2] << 1) | (limbs[1] >> 63);
                limbs[1] = (limbs[1] << 1) | (limbs[0] >> 63);
                limbs[0] = (limbs[0] << 1) | bit;
            }
            if let Ok(value) = BaseField::from_canonical_limbs(limbs) {
                return value;
            }
        }
    }
}
