use pallas::BaseField;
use poseidon::{hash_with_prefix, prefixes};
use schnorr::{Signature, VerifyingKey};
use serde::{Deserialize, Serialize};

use super::{BalanceChange, Permissions, Preconditions, TokenId};
use crate::currency::{Amount, UInt32};
use crate::encoding::{hash_string, packed_width, pack_string, FieldEncoder, ToFields};
use crate::error::EncodingError;

/// A token ticker of at most six bytes, packed into one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSymbol(pub String);

impl TokenSymbol {
    pub const MAX_LEN: usize = 6;
}

impl ToFields for TokenSymbol {
    const WIDTH: usize = packed_width(TokenSymbol::MAX_LEN);

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.extend(pack_string("update.tokenSymbol", &self.0, Self::MAX_LEN)?);
        Ok(())
    }
}

/// A zkApp URI of at most 255 bytes, hashed to one element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZkappUri(pub String);

impl ZkappUri {
    pub const MAX_LEN: usize = 255;
}

impl ToFields for ZkappUri {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push(hash_string(
            prefixes::ZKAPP_URI,
            "update.zkappUri",
            &self.0,
            Self::MAX_LEN,
        )?);
        Ok(())
    }
}

/// A verification key; only its hash takes part in the encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKey {
    pub data: String,
    pub hash: BaseField,
}

impl ToFields for VerificationKey {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push(self.hash);
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub initial_minimum_balance: Amount,
    pub cliff_time: UInt32,
    pub cliff_amount: Amount,
    pub vesting_period: UInt32,
    pub vesting_increment: Amount,
}

impl ToFields for Timing {
    const WIDTH: usize = 5;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.initial_minimum_balance)?;
        out.encode(&self.cliff_time)?;
        out.encode(&self.cliff_amount)?;
        out.encode(&self.vesting_period)?;
        out.encode(&self.vesting_increment)
    }
}

/// Account fields to overwrite; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub app_state: [Option<BaseField>; 8],
    pub delegate: Option<VerifyingKey>,
    pub verification_key: Option<VerificationKey>,
    pub permissions: Option<Permissions>,
    pub zkapp_uri: Option<ZkappUri>,
    pub token_symbol: Option<TokenSymbol>,
    pub timing: Option<Timing>,
    pub voting_for: Option<BaseField>,
}

impl ToFields for Update {
    const WIDTH: usize = <[Option<BaseField>; 8]>::WIDTH
        + <Option<VerifyingKey>>::WIDTH
        + <Option<VerificationKey>>::WIDTH
        + <Option<Permissions>>::WIDTH
        + <Option<ZkappUri>>::WIDTH
        + <Option<TokenSymbol>>::WIDTH
        + <Option<Timing>>::WIDTH
        + <Option<BaseField>>::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.app_state)?;
        out.encode(&self.delegate)?;
        out.encode(&self.verification_key)?;
        out.encode(&self.permissions)?;
        out.encode(&self.zkapp_uri)?;
        out.encode(&self.token_symbol)?;
        out.encode(&self.timing)?;
        out.encode(&self.voting_for)
    }
}

/// A list of events, each a list of field elements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Events(pub Vec<Vec<BaseField>>);

impl Events {
    pub fn empty_hash() -> BaseField {
        hash_with_prefix(prefixes::ZKAPP_EVENTS_EMPTY, &[])
    }

    /// Folds the event hashes right to left under `list_prefix`, starting
    /// from the empty-list hash.
    pub fn hash(&self, list_prefix: &str) -> BaseField {
        self.0.iter().rev().fold(Self::empty_hash(), |acc, event| {
            let event_hash = hash_with_prefix(prefixes::ZKAPP_EVENT, event);
            hash_with_prefix(list_prefix, &[acc, event_hash])
        })
    }
}

/// The hashed part of a party.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyBody {
    pub public_key: VerifyingKey,
    pub token_id: TokenId,
    pub update: Update,
    pub balance_change: BalanceChange,
    pub increment_nonce: bool,
    pub events: Events,
    pub sequence_events: Events,
    pub call_data: BaseField,
    /// Position in the call forest; not part of the encoding.
    pub call_depth: u32,
    pub preconditions: Preconditions,
    pub use_full_commitment: bool,
    pub caller: TokenId,
}

impl PartyBody {
    /// A body for `public_key` that changes nothing and requires nothing.
    pub fn new(public_key: VerifyingKey) -> Self {
        Self {
            public_key,
            token_id: TokenId::DEFAULT,
            update: Update::default(),
            balance_change: BalanceChange::default(),
            increment_nonce: false,
            events: Events::default(),
            sequence_events: Events::default(),
            call_data: BaseField::ZERO,
            call_depth: 0,
            preconditions: Preconditions::default(),
            use_full_commitment: false,
            caller: TokenId::DEFAULT,
        }
    }
}

impl ToFields for PartyBody {
    const WIDTH: usize = <VerifyingKey>::WIDTH
        + TokenId::WIDTH
        + Update::WIDTH
        + BalanceChange::WIDTH
        + <bool>::WIDTH
        + 2
        + BaseField::WIDTH
        + Preconditions::WIDTH
        + <bool>::WIDTH
        + TokenId::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.public_key)?;
        out.encode(&self.token_id)?;
        out.encode(&self.update)?;
        out.encode(&self.balance_change)?;
        out.encode(&self.increment_nonce)?;
        out.push(self.events.hash(prefixes::ZKAPP_EVENTS));
        out.push(self.sequence_events.hash(prefixes::ZKAPP_SEQUENCE_EVENTS));
        out.encode(&self.call_data)?;
        out.encode(&self.preconditions)?;
        out.encode(&self.use_full_commitment)?;
        out.encode(&self.caller)
    }
}

/// Either a proof or a signature authorizes a party; a party may also carry
/// neither until it is signed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    pub proof: Option<String>,
    pub signature: Option<Signature>,
}

impl Authorization {
    pub fn is_empty(&self) -> bool {
        self.proof.is_none() && self.signature.is_none()
    }
}

/// One account update of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub body: PartyBody,
    pub authorization: Authorization,
}

impl Party {
    pub fn new(body: PartyBody) -> Self {
        Self {
            body,
            authorization: Authorization::default(),
        }
    }
}
