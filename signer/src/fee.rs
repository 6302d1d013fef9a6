//! Minimum fee policy.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::currency::Amount;
use crate::error::FeeError;

/// `minimum = base + parties · per_party`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeePolicy {
    pub base: Amount,
    pub per_party: Amount,
}

impl FeePolicy {
    pub const DEFAULT_BASE: Amount = Amount::ZERO;
    pub const DEFAULT_PER_PARTY: Amount = Amount::from_nanomina(1_000_000);

    pub const fn new(base: Amount, per_party: Amount) -> Self {
        Self { base, per_party }
    }

    /// Saturates at [`Amount::MAX`] instead of wrapping.
    pub fn minimum_fee(&self, parties: usize) -> Amount {
        let parties = u64::try_from(parties).unwrap_or(u64::MAX);
        self.base.saturating_add(self.per_party.saturating_mul(parties))
    }

    /// Rejects a missing fee or one below [`Self::minimum_fee`]. A missing
    /// fee is reported as zero.
    pub fn validate(&self, fee: Option<Amount>, parties: usize) -> Result<(), FeeError> {
        let minimum = self.minimum_fee(parties);
        let fee_value = fee.unwrap_or(Amount::ZERO);
        if fee.is_none() || fee_value < minimum {
            warn!(fee = %fee_value, %minimum, parties, "fee rejected");
            return Err(FeeError::TooLow {
                fee: fee_value,
                minimum,
            });
        }
        Ok(())
    }
}

impl Default for FeePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE, Self::DEFAULT_PER_PARTY)
    }
}
