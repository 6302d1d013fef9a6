//! Canonical encoding of transaction data into base field elements.
//!
//! Every encodable type has a fixed [`ToFields::WIDTH`]. Optional values are
//! written as a presence flag followed by `WIDTH` value slots, zero-filled
//! when absent, so the layout of a record never depends on which of its
//! members are set.

use pallas::BaseField;
use poseidon::hash_with_prefix;

use crate::error::EncodingError;

/// Bytes per field element when packing byte strings. 31 bytes always fit
/// below the 255-bit modulus.
pub const BYTES_PER_ELEMENT: usize = 31;

/// A value with a fixed-width field-element encoding.
pub trait ToFields {
    /// Number of elements [`ToFields::to_fields`] appends, whatever the value.
    const WIDTH: usize;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError>;
}

/// Append-only sink for encoded elements.
#[derive(Debug, Default, Clone)]
pub struct FieldEncoder {
    elements: Vec<BaseField>,
}

impl FieldEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, element: BaseField) {
        self.elements.push(element);
    }

    pub fn push_u64(&mut self, value: u64) {
        self.push(BaseField::from_canonical_u64(value));
    }

    pub fn push_bool(&mut self, value: bool) {
        self.push(BaseField::from(value));
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = BaseField>) {
        self.elements.extend(elements);
    }

    pub fn zeros(&mut self, count: usize) {
        self.elements
            .extend(core::iter::repeat(BaseField::ZERO).take(count));
    }

    pub fn encode<T: ToFields + ?Sized>(&mut self, value: &T) -> Result<(), EncodingError> {
        let start = self.elements.len();
        value.to_fields(self)?;
        debug_assert_eq!(self.elements.len() - start, T::WIDTH);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn finish(self) -> Vec<BaseField> {
        self.elements
    }
}

/// Encodes a single value into a fresh vector.
pub fn encode<T: ToFields + ?Sized>(value: &T) -> Result<Vec<BaseField>, EncodingError> {
    let mut out = FieldEncoder::with_capacity(T::WIDTH);
    out.encode(value)?;
    Ok(out.finish())
}

/// Packs bytes little-endian, 31 per element; the last chunk is zero-padded.
pub fn pack_bytes(bytes: &[u8]) -> Vec<BaseField> {
    bytes
        .chunks(BYTES_PER_ELEMENT)
        .map(|chunk| {
            let mut buf = [0u8; 32];
            buf[..chunk.len()].copy_from_slice(chunk);
            // top byte is zero, so the value is below the modulus
            BaseField::from_bytes_le(&buf).unwrap_or(BaseField::ZERO)
        })
        .collect()
}

/// Number of elements [`pack_string`] produces for a field of `max` bytes.
pub const fn packed_width(max: usize) -> usize {
    (max + 1).div_ceil(BYTES_PER_ELEMENT)
}

/// Length byte, then the string bytes zero-padded to `max`, packed.
pub fn pack_string(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<Vec<BaseField>, EncodingError> {
    let bytes = value.as_bytes();
    if bytes.len() > max {
        return Err(EncodingError::FieldTooLong {
            field,
            max,
            actual: bytes.len(),
        });
    }
    let mut padded = vec![0u8; max + 1];
    padded[0] = bytes.len() as u8;
    padded[1..=bytes.len()].copy_from_slice(bytes);
    Ok(pack_bytes(&padded))
}

/// Packs a string and hashes it to one element under `prefix`.
pub fn hash_string(
    prefix: &str,
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<BaseField, EncodingError> {
    Ok(hash_with_prefix(prefix, &pack_string(field, value, max)?))
}

impl ToFields for BaseField {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push(*self);
        Ok(())
    }
}

impl ToFields for bool {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push_bool(*self);
        Ok(())
    }
}

impl<T: ToFields> ToFields for Option<T> {
    const WIDTH: usize = 1 + T::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        match self {
            Some(value) => {
                out.push_bool(true);
                out.encode(value)
            }
            None => {
                out.push_bool(false);
                out.zeros(T::WIDTH);
                Ok(())
            }
        }
    }
}

impl<T: ToFields, const N: usize> ToFields for [T; N] {
    const WIDTH: usize = N * T::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        for item in self {
            out.encode(item)?;
        }
        Ok(())
    }
}
