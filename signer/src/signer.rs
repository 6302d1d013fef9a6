//! The signing entry point.

use pallas::BaseField;
use rand::CryptoRng;
use schnorr::{generate_keypair, KeyError, NetworkId, Signature, SigningKey, VerifyingKey};
use tracing::{debug, trace};

use crate::commitment::transaction_commitments;
use crate::config::SignerConfig;
use crate::currency::Amount;
use crate::error::SignerError;
use crate::fee::FeePolicy;
use crate::types::{Party, Signed, Transaction};

/// Signs and verifies transactions for one network under one fee policy.
///
/// Holds no key material and no mutable state; one instance can be shared
/// across threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Signer {
    config: SignerConfig,
}

impl Signer {
    pub fn new(config: SignerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignerConfig {
        &self.config
    }

    pub fn network(&self) -> NetworkId {
        self.config.network
    }

    pub fn fee_policy(&self) -> &FeePolicy {
        &self.config.fee_policy
    }

    /// Fresh key pair from the thread-local CSPRNG.
    pub fn generate_key_pair(&self) -> (SigningKey, VerifyingKey) {
        generate_keypair(&mut rand::rng())
    }

    pub fn generate_key_pair_with<R: CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (SigningKey, VerifyingKey) {
        generate_keypair(rng)
    }

    pub fn minimum_fee(&self, parties: usize) -> Amount {
        self.config.fee_policy.minimum_fee(parties)
    }

    /// Signs `tx` as its fee payer.
    ///
    /// The fee is checked before anything is encoded. `key` must belong to
    /// the fee payer. The fee payer signs the full commitment; every party
    /// owned by `key` that has neither a proof nor a signature yet is signed
    /// too, over the full or the plain commitment as its body asks.
    pub fn sign_transaction(
        &self,
        mut tx: Transaction,
        key: &SigningKey,
    ) -> Result<Signed<Transaction>, SignerError> {
        let parties = tx.parties.len();
        debug!(
            parties,
            minimum_fee = %self.minimum_fee(parties),
            network = %self.config.network,
            "signing transaction"
        );
        self.config.fee_policy.validate(tx.fee_payer.fee, parties)?;

        let verifying_key = key.verifying_key();
        if verifying_key != tx.fee_payer.public_key {
            return Err(KeyError::Invalid("signing key does not belong to the fee payer").into());
        }

        let commitments = transaction_commitments(&tx)?;
        trace!(
            commitment = %commitments.commitment,
            full_commitment = %commitments.full_commitment,
            "commitments computed"
        );

        let signature = self.sign_field(key, commitments.full_commitment)?;

        let mut signed_parties = 0usize;
        for party in tx
            .parties
            .iter_mut()
            .filter(|p| owned_and_unsigned(p, &verifying_key))
        {
            let message = if party.body.use_full_commitment {
                commitments.full_commitment
            } else {
                commitments.commitment
            };
            party.authorization.signature = Some(self.sign_field(key, message)?);
            signed_parties += 1;
        }
        debug!(signed_parties, "transaction signed");

        Ok(Signed { data: tx, signature })
    }

    /// Whether `signature` is `public_key`'s signature over the full
    /// commitment of `tx`. Content that cannot be encoded never verifies.
    pub fn verify_signature(
        &self,
        public_key: &VerifyingKey,
        tx: &Transaction,
        signature: &Signature,
    ) -> bool {
        match transaction_commitments(tx) {
            Ok(commitments) => {
                public_key.verify(&[commitments.full_commitment], signature, self.config.network)
            }
            Err(err) => {
                debug!(%err, "transaction does not encode, signature rejected");
                false
            }
        }
    }

    /// Checks the fee payer signature and every party signature that is
    /// present in a signed transaction.
    pub fn verify_signed(&self, signed: &Signed<Transaction>) -> bool {
        let tx = &signed.data;
        let Ok(commitments) = transaction_commitments(tx) else {
            return false;
        };
        let network = self.config.network;
        if !tx
            .fee_payer
            .public_key
            .verify(&[commitments.full_commitment], &signed.signature, network)
        {
            return false;
        }
        tx.parties.iter().all(|party| match &party.authorization.signature {
            None => true,
            Some(signature) => {
                let message = if party.body.use_full_commitment {
                    commitments.full_commitment
                } else {
                    commitments.commitment
                };
                party.body.public_key.verify(&[message], signature, network)
            }
        })
    }

    fn sign_field(&self, key: &SigningKey, message: BaseField) -> Result<Signature, KeyError> {
        key.sign(&[message], self.config.network)
    }
}

fn owned_and_unsigned(party: &Party, key: &VerifyingKey) -> bool {
    party.body.public_key == *key && party.authorization.is_empty()
}
