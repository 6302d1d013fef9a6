use schnorr::{Signature, VerifyingKey};
use serde::{Deserialize, Serialize};

use super::{
    AccountPrecondition, BalanceChange, ClosedInterval, Memo, Party, PartyBody, Preconditions,
};
use crate::currency::{Amount, UInt32};
use crate::error::EncodingError;

/// The account paying the network fee.
///
/// `fee` and `nonce` are optional so incomplete input can be represented
/// and rejected with a precise error instead of a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeePayer {
    pub public_key: VerifyingKey,
    pub fee: Option<Amount>,
    pub nonce: Option<UInt32>,
    pub valid_until: Option<UInt32>,
    pub memo: Option<String>,
}

impl FeePayer {
    pub fn new(public_key: VerifyingKey, fee: Amount, nonce: UInt32) -> Self {
        Self {
            public_key,
            fee: Some(fee),
            nonce: Some(nonce),
            valid_until: None,
            memo: None,
        }
    }

    /// The fee payer viewed as a party body: pays `fee` out of the default
    /// token, bumps its nonce, pins the current nonce and bounds the global
    /// slot by `valid_until`.
    pub fn to_body(&self) -> Result<PartyBody, EncodingError> {
        let fee = self
            .fee
            .ok_or(EncodingError::MissingRequiredField { field: "feePayer.fee" })?;
        let nonce = self
            .nonce
            .ok_or(EncodingError::MissingRequiredField { field: "feePayer.nonce" })?;

        let mut preconditions = Preconditions {
            account: AccountPrecondition::nonce(nonce),
            ..Preconditions::default()
        };
        preconditions.network.global_slot_since_genesis = self
            .valid_until
            .map(|slot| ClosedInterval::new(UInt32(0), slot));

        Ok(PartyBody {
            balance_change: BalanceChange::negative(fee),
            increment_nonce: true,
            use_full_commitment: true,
            preconditions,
            ..PartyBody::new(self.public_key)
        })
    }
}

/// A fee payer plus an ordered list of parties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub fee_payer: FeePayer,
    pub parties: Vec<Party>,
    pub memo: String,
}

impl Transaction {
    /// The fee payer's memo wins over the transaction memo.
    pub fn memo(&self) -> Result<Memo, EncodingError> {
        Memo::new(self.fee_payer.memo.as_deref().unwrap_or(&self.memo))
    }
}

/// Signed data together with the fee payer's signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signed<T> {
    pub data: T,
    pub signature: Signature,
}
