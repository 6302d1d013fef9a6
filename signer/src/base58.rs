//! Base58Check interchange formats for keys, signatures and field values.
//!
//! Every string is `base58check(version || payload)` over the Bitcoin
//! alphabet with a four-byte double-SHA-256 checksum.

use pallas::BaseField;
use schnorr::{KeyError, Signature, SigningKey, VerifyingKey, PK_SIZE, SIG_SIZE, SK_SIZE};

use crate::error::EncodingError;

pub mod version {
    pub const PUBLIC_KEY: u8 = 0xcb;
    pub const PRIVATE_KEY: u8 = 0x5a;
    pub const SIGNATURE: u8 = 0x9a;
    pub const TOKEN_ID: u8 = 0x1c;
    pub const MEMO: u8 = 0x14;
    pub const LEDGER_HASH: u8 = 0x05;
    pub const RECEIPT_CHAIN_HASH: u8 = 0x0c;
    pub const EPOCH_SEED: u8 = 0x0d;
    pub const STATE_HASH: u8 = 0x10;
}

/// Payload format version carried after most version bytes.
const FORMAT_VERSION: u8 = 0x01;

/// Compressed public key tag, between the format byte and the x-coordinate.
const COMPRESSED_TAG: u8 = 0x01;

pub(crate) fn encode(version: u8, payload: &[u8]) -> String {
    bs58::encode(payload).with_check_version(version).into_string()
}

/// Checks the checksum and version byte and returns the payload after it.
pub(crate) fn decode(
    kind: &'static str,
    version: u8,
    text: &str,
) -> Result<Vec<u8>, EncodingError> {
    let mut bytes = bs58::decode(text)
        .with_check(Some(version))
        .into_vec()
        .map_err(|err| EncodingError::InvalidBase58 {
            kind,
            reason: err.to_string(),
        })?;
    bytes.remove(0);
    Ok(bytes)
}

fn expect_len(kind: &'static str, bytes: &[u8], len: usize) -> Result<(), EncodingError> {
    if bytes.len() != len {
        return Err(EncodingError::InvalidBase58 {
            kind,
            reason: format!("expected {len} payload bytes, found {}", bytes.len()),
        });
    }
    Ok(())
}

pub fn public_key_to_base58(key: &VerifyingKey) -> String {
    let mut payload = Vec::with_capacity(2 + PK_SIZE);
    payload.extend_from_slice(&[FORMAT_VERSION, COMPRESSED_TAG]);
    payload.extend_from_slice(&key.to_bytes());
    encode(version::PUBLIC_KEY, &payload)
}

pub fn public_key_from_base58(text: &str) -> Result<VerifyingKey, KeyError> {
    let payload = decode("public key", version::PUBLIC_KEY, text)
        .map_err(|_| KeyError::Invalid("public key is not valid base58check"))?;
    if payload.len() != 2 + PK_SIZE
        || payload[0] != FORMAT_VERSION
        || payload[1] != COMPRESSED_TAG
    {
        return Err(KeyError::Invalid("public key payload is malformed"));
    }
    let mut bytes = [0u8; PK_SIZE];
    bytes.copy_from_slice(&payload[2..]);
    VerifyingKey::from_bytes(&bytes)
}

pub fn private_key_to_base58(key: &SigningKey) -> String {
    let mut payload = Vec::with_capacity(1 + SK_SIZE);
    payload.push(FORMAT_VERSION);
    payload.extend_from_slice(&key.to_bytes());
    encode(version::PRIVATE_KEY, &payload)
}

pub fn private_key_from_base58(text: &str) -> Result<SigningKey, KeyError> {
    let payload = decode("private key", version::PRIVATE_KEY, text)
        .map_err(|_| KeyError::Invalid("private key is not valid base58check"))?;
    if payload.len() != 1 + SK_SIZE || payload[0] != FORMAT_VERSION {
        return Err(KeyError::Invalid("private key payload is malformed"));
    }
    let mut bytes = [0u8; SK_SIZE];
    bytes.copy_from_slice(&payload[1..]);
    SigningKey::from_bytes(&bytes)
}

pub fn signature_to_base58(signature: &Signature) -> String {
    let mut payload = Vec::with_capacity(1 + SIG_SIZE);
    payload.push(FORMAT_VERSION);
    payload.extend_from_slice(&signature.to_bytes());
    encode(version::SIGNATURE, &payload)
}

pub fn signature_from_base58(text: &str) -> Result<Signature, EncodingError> {
    const KIND: &str = "signature";
    let payload = decode(KIND, version::SIGNATURE, text)?;
    expect_len(KIND, &payload, 1 + SIG_SIZE)?;
    let mut bytes = [0u8; SIG_SIZE];
    bytes.copy_from_slice(&payload[1..]);
    Signature::from_bytes(&bytes).map_err(|err| EncodingError::InvalidBase58 {
        kind: KIND,
        reason: err.to_string(),
    })
}

/// Field values with a base58 form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    TokenId,
    LedgerHash,
    ReceiptChainHash,
    EpochSeed,
    StateHash,
}

impl FieldKind {
    fn version(self) -> u8 {
        match self {
            FieldKind::TokenId => version::TOKEN_ID,
            FieldKind::LedgerHash => version::LEDGER_HASH,
            FieldKind::ReceiptChainHash => version::RECEIPT_CHAIN_HASH,
            FieldKind::EpochSeed => version::EPOCH_SEED,
            FieldKind::StateHash => version::STATE_HASH,
        }
    }

    fn name(self) -> &'static str {
        match self {
            FieldKind::TokenId => "token id",
            FieldKind::LedgerHash => "ledger hash",
            FieldKind::ReceiptChainHash => "receipt chain hash",
            FieldKind::EpochSeed => "epoch seed",
            FieldKind::StateHash => "state hash",
        }
    }

    // token ids carry no format byte
    fn has_format_byte(self) -> bool {
        !matches!(self, FieldKind::TokenId)
    }
}

pub fn field_to_base58(kind: FieldKind, value: &BaseField) -> String {
    let mut payload = Vec::with_capacity(33);
    if kind.has_format_byte() {
        payload.push(FORMAT_VERSION);
    }
    payload.extend_from_slice(&value.to_bytes_le());
    encode(kind.version(), &payload)
}

pub fn field_from_base58(kind: FieldKind, text: &str) -> Result<BaseField, EncodingError> {
    let payload = decode(kind.name(), kind.version(), text)?;
    let offset = kind.has_format_byte() as usize;
    expect_len(kind.name(), &payload, offset + 32)?;
    if offset == 1 && payload[0] != FORMAT_VERSION {
        return Err(EncodingError::InvalidBase58 {
            kind: kind.name(),
            reason: format!("unsupported format version {}", payload[0]),
        });
    }
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&payload[offset..]);
    BaseField::from_bytes_le(&bytes).map_err(|err| EncodingError::InvalidBase58 {
        kind: kind.name(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use schnorr::{generate_keypair, NetworkId};

    const FIXTURE_PUBLIC_KEY: &str = "B62qieh9a3U8Z4s8c3DHhCyDECqyZLyRtGA5GBDMqqi6Lf1gaHX4hLt";
    const DEFAULT_TOKEN_ID: &str = "wSHV2S4qX9jFsLjQo8r1BsMLH2ZRKsZx6EJd1sbozGPieEC4Jf";

    #[test]
    fn test_fixture_public_key() {
        let key = public_key_from_base58(FIXTURE_PUBLIC_KEY).unwrap();
        assert_eq!(
            key.compress().x.to_string(),
            "10120305674372117414538403474130163097607646049449749473332300968563060562181"
        );
        assert!(!key.compress().is_odd);
        assert_eq!(public_key_to_base58(&key), FIXTURE_PUBLIC_KEY);
        assert!(public_key_to_base58(&key).starts_with("B62"));
    }

    #[test]
    fn test_default_token_id() {
        assert_eq!(field_to_base58(FieldKind::TokenId, &BaseField::ONE), DEFAULT_TOKEN_ID);
        assert_eq!(
            field_from_base58(FieldKind::TokenId, DEFAULT_TOKEN_ID).unwrap(),
            BaseField::ONE
        );
    }

    #[test]
    fn test_key_round_trips() {
        let mut rng = StdRng::seed_from_u64(11);
        let (sk, pk) = generate_keypair(&mut rng);

        let sk_text = private_key_to_base58(&sk);
        assert_eq!(private_key_from_base58(&sk_text).unwrap(), sk);

        let pk_text = public_key_to_base58(&pk);
        assert_eq!(public_key_from_base58(&pk_text).unwrap(), pk);

        let sig = sk.sign(&[BaseField::ONE], NetworkId::Mainnet).unwrap();
        let sig_text = signature_to_base58(&sig);
        assert_eq!(signature_from_base58(&sig_text).unwrap(), sig);
    }

    #[test]
    fn test_rejects_wrong_version() {
        // a token id is valid base58check but not a public key
        assert!(public_key_from_base58(DEFAULT_TOKEN_ID).is_err());
        assert!(matches!(
            field_from_base58(FieldKind::LedgerHash, DEFAULT_TOKEN_ID),
            Err(EncodingError::InvalidBase58 { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        let mut corrupted = FIXTURE_PUBLIC_KEY.to_string();
        corrupted.pop();
        corrupted.push('u');
        assert!(public_key_from_base58(&corrupted).is_err());
        assert!(public_key_from_base58("not base58 0OIl").is_err());
    }

    #[test]
    fn test_rejects_zero_private_key() {
        let mut payload = vec![FORMAT_VERSION];
        payload.extend_from_slice(&[0u8; 32]);
        let text = encode(version::PRIVATE_KEY, &payload);
        assert_eq!(
            private_key_from_base58(&text),
            Err(KeyError::Invalid("private key is zero"))
        );
    }

    #[test]
    fn test_field_kinds_round_trip() {
        let value = BaseField::from_canonical_u64(0xfeed);
        for kind in [
            FieldKind::LedgerHash,
            FieldKind::ReceiptChainHash,
            FieldKind::EpochSeed,
            FieldKind::StateHash,
        ] {
            let text = field_to_base58(kind, &value);
            assert_eq!(field_from_base58(kind, &text).unwrap(), value);
        }
    }

    #[test]
    fn test_rejects_non_canonical_field() {
        let text = encode(version::TOKEN_ID, &[0xff; 32]);
        assert!(field_from_base58(FieldKind::TokenId, &text).is_err());
    }
}
