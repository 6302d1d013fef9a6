use core::fmt;
use core::str::FromStr;

use pallas::BaseField;
use poseidon::prefixes;
use serde::{Deserialize, Serialize};

/// The chain a signature is meant for.
///
/// The network picks the challenge prefix and is absorbed into nonce
/// derivation, so a signature made for one network never verifies on the
/// other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    #[default]
    Mainnet,
    Testnet,
}

impl NetworkId {
    pub fn challenge_prefix(self) -> &'static str {
        match self {
            NetworkId::Mainnet => prefixes::SIGNATURE_MAINNET,
            NetworkId::Testnet => prefixes::SIGNATURE_TESTNET,
        }
    }

    pub fn to_field(self) -> BaseField {
        match self {
            NetworkId::Mainnet => BaseField::ONE,
            NetworkId::Testnet => BaseField::ZERO,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Mainnet => f.write_str("mainnet"),
            NetworkId::Testnet => f.write_str("testnet"),
        }
    }
}

/// Label that does not name a known network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network {0:?}")]
pub struct UnknownNetwork(pub String);

impl FromStr for NetworkId {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(NetworkId::Mainnet),
            "testnet" => Ok(NetworkId::Testnet),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

