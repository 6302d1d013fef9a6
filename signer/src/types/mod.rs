//! The transaction data model.
//!
//! Loosely typed wire values are parsed into closed enums and `Option`s up
//! front; nothing here is a free-form string that the encoder has to guess
//! about, apart from the bounded-length text fields.

mod common;
mod memo;
mod party;
mod permissions;
mod preconditions;
mod transaction;

pub use common::{BalanceChange, ClosedInterval, Sign, TokenId};
pub use memo::Memo;
pub use party::{
    Authorization, Events, Party, PartyBody, Timing, TokenSymbol, Update, VerificationKey,
    ZkappUri,
};
pub use permissions::{AuthRequired, Permissions};
pub use preconditions::{
    AccountPrecondition, EpochData, EpochLedger, NetworkPrecondition, Preconditions,
};
pub use transaction::{FeePayer, Signed, Transaction};
