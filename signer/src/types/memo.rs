use core::fmt;

use pallas::BaseField;
use poseidon::{hash_with_prefix, prefixes};
use serde::{Deserialize, Serialize};

use crate::base58::{self, version};
use crate::encoding::pack_bytes;
use crate::error::EncodingError;

const MAX_LEN: usize = 32;
const WIRE_LEN: usize = MAX_LEN + 2;

/// A transaction memo in its 34-byte wire form `[0x01, len, text, zeros]`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Memo {
    bytes: [u8; WIRE_LEN],
}

impl Memo {
    /// Longest memo text in bytes.
    pub const MAX_LEN: usize = MAX_LEN;

    pub const WIRE_LEN: usize = WIRE_LEN;

    const TAG: u8 = 0x01;

    pub fn new(text: &str) -> Result<Self, EncodingError> {
        let data = text.as_bytes();
        if data.len() > Self::MAX_LEN {
            return Err(EncodingError::FieldTooLong {
                field: "memo",
                max: Self::MAX_LEN,
                actual: data.len(),
            });
        }
        let mut bytes = [0u8; Self::WIRE_LEN];
        bytes[0] = Self::TAG;
        bytes[1] = data.len() as u8;
        bytes[2..2 + data.len()].copy_from_slice(data);
        Ok(Self { bytes })
    }

    pub fn empty() -> Self {
        let mut bytes = [0u8; Self::WIRE_LEN];
        bytes[0] = Self::TAG;
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; WIRE_LEN] {
        &self.bytes
    }

    /// The memo text; lossy for non-UTF-8 payloads decoded from base58.
    pub fn text(&self) -> String {
        let len = usize::from(self.bytes[1]).min(Self::MAX_LEN);
        String::from_utf8_lossy(&self.bytes[2..2 + len]).into_owned()
    }

    pub fn hash(&self) -> BaseField {
        hash_with_prefix(prefixes::ZKAPP_MEMO, &pack_bytes(&self.bytes))
    }

    pub fn to_base58(&self) -> String {
        base58::encode(version::MEMO, &self.bytes)
    }

    pub fn from_base58(text: &str) -> Result<Self, EncodingError> {
        const KIND: &str = "memo";
        let payload = base58::decode(KIND, version::MEMO, text)?;
        let invalid = |reason: &str| EncodingError::InvalidBase58 {
            kind: KIND,
            reason: reason.to_string(),
        };
        let bytes: [u8; Self::WIRE_LEN] = payload
            .as_slice()
            .try_into()
            .map_err(|_| invalid("memo payload must be 34 bytes"))?;
        if bytes[0] != Self::TAG {
            return Err(invalid("unknown memo tag"));
        }
        if usize::from(bytes[1]) > Self::MAX_LEN {
            return Err(invalid("memo length byte exceeds 32"));
        }
        Ok(Self { bytes })
    }
}

impl Default for Memo {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Memo").field(&self.text()).finish()
    }
}

impl TryFrom<String> for Memo {
    type Error = EncodingError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(&text)
    }
}

impl From<Memo> for String {
    fn from(memo: Memo) -> Self {
        memo.text()
    }
}
