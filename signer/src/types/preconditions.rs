use pallas::BaseField;
use schnorr::VerifyingKey;
use serde::{Deserialize, Serialize};

use crate::currency::{Amount, UInt32, UInt64};
use crate::encoding::{FieldEncoder, ToFields};
use crate::error::EncodingError;

type Range<T> = Option<super::ClosedInterval<T>>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochLedger {
    pub hash: Option<BaseField>,
    pub total_currency: Range<Amount>,
}

impl ToFields for EpochLedger {
    const WIDTH: usize = <Option<BaseField>>::WIDTH + <Range<Amount>>::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.hash)?;
        out.encode(&self.total_currency)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochData {
    pub ledger: EpochLedger,
    pub seed: Option<BaseField>,
    pub start_checkpoint: Option<BaseField>,
    pub lock_checkpoint: Option<BaseField>,
    pub epoch_length: Range<UInt32>,
}

impl ToFields for EpochData {
    const WIDTH: usize =
        EpochLedger::WIDTH + 3 * <Option<BaseField>>::WIDTH + <Range<UInt32>>::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.ledger)?;
        out.encode(&self.seed)?;
        out.encode(&self.start_checkpoint)?;
        out.encode(&self.lock_checkpoint)?;
        out.encode(&self.epoch_length)
    }
}

/// Conditions on the chain state; `None` leaves a member unconstrained.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkPrecondition {
    pub snarked_ledger_hash: Option<BaseField>,
    pub timestamp: Range<UInt64>,
    pub blockchain_length: Range<UInt32>,
    pub min_window_density: Range<UInt32>,
    pub total_currency: Range<Amount>,
    pub global_slot_since_hard_fork: Range<UInt32>,
    pub global_slot_since_genesis: Range<UInt32>,
    pub staking_epoch_data: EpochData,
    pub next_epoch_data: EpochData,
}

impl ToFields for NetworkPrecondition {
    const WIDTH: usize = <Option<BaseField>>::WIDTH
        + <Range<UInt64>>::WIDTH
        + 4 * <Range<UInt32>>::WIDTH
        + <Range<Amount>>::WIDTH
        + 2 * EpochData::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.snarked_ledger_hash)?;
        out.encode(&self.timestamp)?;
        out.encode(&self.blockchain_length)?;
        out.encode(&self.min_window_density)?;
        out.encode(&self.total_currency)?;
        out.encode(&self.global_slot_since_hard_fork)?;
        out.encode(&self.global_slot_since_genesis)?;
        out.encode(&self.staking_epoch_data)?;
        out.encode(&self.next_epoch_data)
    }
}

/// Conditions on the account being updated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPrecondition {
    pub balance: Range<Amount>,
    pub nonce: Range<UInt32>,
    pub receipt_chain_hash: Option<BaseField>,
    pub public_key: Option<VerifyingKey>,
    pub delegate: Option<VerifyingKey>,
    pub state: [Option<BaseField>; 8],
    pub sequence_state: Option<BaseField>,
    pub proved_state: Option<bool>,
    pub is_new: Option<bool>,
}

impl AccountPrecondition {
    /// Only the nonce is constrained, to exactly `nonce`.
    pub fn nonce(nonce: UInt32) -> Self {
        Self {
            nonce: Some(super::ClosedInterval::exact(nonce)),
            ..Self::default()
        }
    }
}

impl ToFields for AccountPrecondition {
    const WIDTH: usize = <Range<Amount>>::WIDTH
        + <Range<UInt32>>::WIDTH
        + <Option<BaseField>>::WIDTH
        + 2 * <Option<VerifyingKey>>::WIDTH
        + <[Option<BaseField>; 8]>::WIDTH
        + <Option<BaseField>>::WIDTH
        + 2 * <Option<bool>>::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.balance)?;
        out.encode(&self.nonce)?;
        out.encode(&self.receipt_chain_hash)?;
        out.encode(&self.public_key)?;
        out.encode(&self.delegate)?;
        out.encode(&self.state)?;
        out.encode(&self.sequence_state)?;
        out.encode(&self.proved_state)?;
        out.encode(&self.is_new)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preconditions {
    pub network: NetworkPrecondition,
    pub account: AccountPrecondition,
}

impl ToFields for Preconditions {
    const WIDTH: usize = NetworkPrecondition::WIDTH + AccountPrecondition::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.network)?;
        out.encode(&self.account)
    }
}
