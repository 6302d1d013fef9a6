//! Signer configuration.

use std::env;

use schnorr::NetworkId;
use serde::{Deserialize, Serialize};

use crate::currency::Amount;
use crate::error::ConfigError;
use crate::fee::FeePolicy;

pub const ENV_NETWORK: &str = "SIGNER_NETWORK";
pub const ENV_BASE_FEE: &str = "SIGNER_BASE_FEE";
pub const ENV_PER_PARTY_FEE: &str = "SIGNER_PER_PARTY_FEE";

/// Everything a [`crate::Signer`] needs besides keys and transactions.
///
/// Missing fields deserialize to mainnet and the default fee policy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    pub network: NetworkId,
    pub fee_policy: FeePolicy,
}

impl SignerConfig {
    pub fn new(network: NetworkId) -> Self {
        Self {
            network,
            fee_policy: FeePolicy::default(),
        }
    }

    /// Reads [`ENV_NETWORK`], [`ENV_BASE_FEE`] and [`ENV_PER_PARTY_FEE`];
    /// unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_NETWORK) {
            config.network = value
                .parse()
                .map_err(|_| ConfigError::InvalidVar { var: ENV_NETWORK, value })?;
        }
        if let Some(value) = lookup(ENV_BASE_FEE) {
            config.fee_policy.base = parse_amount(ENV_BASE_FEE, value)?;
        }
        if let Some(value) = lookup(ENV_PER_PARTY_FEE) {
            config.fee_policy.per_party = parse_amount(ENV_PER_PARTY_FEE, value)?;
        }
        Ok(config)
    }
}

fn parse_amount(var: &'static str, value: String) -> Result<Amount, ConfigError> {
    Amount::parse(var, value.trim()).map_err(|_| ConfigError::InvalidVar { var, value })
}
