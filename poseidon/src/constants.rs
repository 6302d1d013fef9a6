//! Permutation dimensions and the hashing domain prefixes.

/// Total state size of the permutation.
pub const WIDTH: usize = 3;

/// Number of state elements that absorb input.
pub const RATE: usize = 2;

/// Every round applies the S-box to the whole state.
pub const FULL_ROUNDS: usize = 55;

/// S-box exponent. `gcd(7, p - 1) = 1`, so `x^7` is a bijection.
pub const ALPHA: u64 = 7;

/// Prefixes are packed into a single field element, one byte each.
pub const PREFIX_LEN: usize = 20;

/// Padding byte for prefixes shorter than [`PREFIX_LEN`].
pub const PREFIX_PAD: u8 = b'*';

pub mod prefixes {
    pub const SIGNATURE_MAINNET: &str = "MinaSignatureMainnet";
    pub const SIGNATURE_TESTNET: &str = "CodaSignature";
    pub const SIGNATURE_NONCE: &str = "MinaSignatureNonce";
    pub const PARTY_BODY: &str = "MinaPartyBody";
    pub const PARTY_NODE: &str = "MinaPartyNode";
    pub const PARTY_CONS: &str = "MinaPartyCons";
    pub const FEE_PAYER_BODY: &str = "MinaFeePayerBody";
    pub const ZKAPP_MEMO: &str = "MinaZkappMemo";
    pub const ZKAPP_FULL_COMMITMENT: &str = "MinaZkappFullComm";
    pub const ZKAPP_EVENT: &str = "MinaZkappEvent";
    pub const ZKAPP_EVENTS: &str = "MinaZkappEvents";
    pub const ZKAPP_EVENTS_EMPTY: &str = "MinaZkappEventsEmpty";
    pub const ZKAPP_SEQUENCE_EVENTS: &str = "MinaZkappSeqEvents";
    pub const ZKAPP_URI: &str = "MinaZkappUri";
}
