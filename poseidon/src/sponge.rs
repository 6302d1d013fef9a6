//! Additive sponge over [`PoseidonPermutation`] with prefix and length
//! domain separation.

use p3_symmetric::CryptographicHasher;
use pallas::BaseField;

use crate::constants::{PREFIX_LEN, PREFIX_PAD, RATE, WIDTH};
use crate::permutation::PoseidonPermutation;

/// Packs an ASCII prefix into one field element.
///
/// The prefix is padded with `*` to 20 bytes and read little-endian. Longer
/// prefixes are cut at 20 bytes, which the fixed prefix table never needs.
pub fn prefix_to_field(prefix: &str) -> BaseField {
    debug_assert!(prefix.len() <= PREFIX_LEN, "prefix {prefix:?} too long");
    let mut bytes = [0u8; 32];
    bytes[..PREFIX_LEN].fill(PREFIX_PAD);
    for (slot, byte) in bytes.iter_mut().zip(prefix.bytes().take(PREFIX_LEN)) {
        *slot = byte;
    }
    // 160 bits is always below the modulus
    BaseField::from_bytes_le(&bytes).unwrap_or(BaseField::ZERO)
}

/// Sponge state: three cells, of which the first two take input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sponge {
    state: [BaseField; WIDTH],
    offset: usize,
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}

impl Sponge {
    pub fn new() -> Self {
        Self {
            state: [BaseField::ZERO; WIDTH],
            offset: 0,
        }
    }

    /// Starting state for a domain: the prefix absorbed and permuted.
    pub fn with_prefix(prefix: &str) -> Self {
        let mut sponge = Self::new();
        sponge.absorb(prefix_to_field(prefix));
        PoseidonPermutation::apply_permutation(&mut sponge.state);
        sponge.offset = 0;
        sponge
    }

    pub fn absorb(&mut self, element: BaseField) {
        if self.offset == RATE {
            PoseidonPermutation::apply_permutation(&mut self.state);
            self.offset = 0;
        }
        self.state[self.offset] += element;
        self.offset += 1;
    }

    pub fn absorb_slice(&mut self, elements: &[BaseField]) {
        for element in elements {
            self.absorb(*element);
        }
    }

    /// Permutes and reads the first cell. Further absorption starts a fresh
    /// rate block.
    pub fn squeeze(&mut self) -> BaseField {
        PoseidonPermutation::apply_permutation(&mut self.state);
        self.offset = 0;
        self.state[0]
    }
}

/// `H(prefix, input)`: prefix state, then `len(input)`, then the input.
pub fn hash_with_prefix(prefix: &str, input: &[BaseField]) -> BaseField {
    let mut sponge = Sponge::with_prefix(prefix);
    sponge.absorb(BaseField::from_canonical_u64(input.len() as u64));
    sponge.absorb_slice(input);
    sponge.squeeze()
}

/// Prefixed hash as a Plonky3 [`CryptographicHasher`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PoseidonHasher {
    prefix: &'static str,
}

impl PoseidonHasher {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

impl CryptographicHasher<BaseField, BaseField> for PoseidonHasher {
    fn hash_iter<I>(&self, input: I) -> BaseField
    where
        I: IntoIterator<Item = BaseField>,
    {
        let input: Vec<BaseField> = input.into_iter().collect();
        hash_with_prefix(self.prefix, &input)
    }
}
