//! Transaction signing for party-based transactions.
//!
//! A [`Transaction`] is a fee payer plus an ordered list of [`Party`]
//! updates. Signing turns it into field elements, hashes the parties into a
//! call forest commitment, binds that to the memo and fee payer in a full
//! commitment, and signs the result with a Schnorr signature over Pallas.
//!
//! The fee is checked against a [`FeePolicy`] before any of that work is
//! done.
//!
//! # Example
//!
//! ```
//! use party_signer::{Amount, FeePayer, Signer, SignerConfig, Transaction, UInt32};
//! use party_signer::NetworkId;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let signer = Signer::new(SignerConfig::new(NetworkId::Testnet));
//! let (key, public_key) = signer.generate_key_pair_with(&mut StdRng::seed_from_u64(7));
//!
//! let fee = Amount::parse("fee", "1").unwrap();
//! let tx = Transaction {
//!     fee_payer: FeePayer::new(public_key, fee, UInt32(0)),
//!     parties: Vec::new(),
//!     memo: "hello".into(),
//! };
//!
//! let signed = signer.sign_transaction(tx, &key).unwrap();
//! assert!(signer.verify_signature(&public_key, &signed.data, &signed.signature));
//! ```

pub mod base58;
pub mod commitment;
pub mod config;
pub mod currency;
pub mod encoding;
mod error;
pub mod fee;
mod signer;
pub mod types;


pub use commitment::{transaction_commitments, TransactionCommitments};
pub use config::SignerConfig;
pub use currency::{Amount, UInt32, UInt64};
pub use encoding::{encode, FieldEncoder, ToFields};
pub use error::{ConfigError, EncodingError, FeeError, SignerError};
pub use fee::FeePolicy;
pub use signer::Signer;
pub use types::*;

pub use pallas::BaseField;
pub use schnorr::{KeyError, NetworkId, Signature, SigningKey, VerifyingKey};
