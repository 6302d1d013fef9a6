use core::fmt;
use core::str::FromStr;

use pallas::BaseField;
use schnorr::VerifyingKey;
use serde::{Deserialize, Serialize};

use crate::base58::{field_from_base58, field_to_base58, FieldKind};
use crate::currency::Amount;
use crate::encoding::{FieldEncoder, ToFields};
use crate::error::EncodingError;

/// Identifies the token an account holds. The native token is `1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub BaseField);

impl TokenId {
    pub const DEFAULT: Self = Self(BaseField::ONE);

    pub fn to_base58(&self) -> String {
        field_to_base58(FieldKind::TokenId, &self.0)
    }

    pub fn from_base58(text: &str) -> Result<Self, EncodingError> {
        field_from_base58(FieldKind::TokenId, text).map(Self)
    }
}

impl Default for TokenId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for TokenId {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl ToFields for TokenId {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push(self.0);
        Ok(())
    }
}

/// Direction of a balance change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    pub fn parse(field: &'static str, label: &str) -> Result<Self, EncodingError> {
        match label {
            "Positive" => Ok(Sign::Positive),
            "Negative" => Ok(Sign::Negative),
            _ => Err(EncodingError::UnknownVariant {
                field,
                label: label.to_string(),
            }),
        }
    }
}

impl FromStr for Sign {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("sgn", s)
    }
}

impl ToFields for Sign {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push(match self {
            Sign::Positive => BaseField::ONE,
            Sign::Negative => -BaseField::ONE,
        });
        Ok(())
    }
}

/// A signed amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BalanceChange {
    pub magnitude: Amount,
    pub sgn: Sign,
}

impl BalanceChange {
    pub fn positive(magnitude: Amount) -> Self {
        Self {
            magnitude,
            sgn: Sign::Positive,
        }
    }

    pub fn negative(magnitude: Amount) -> Self {
        Self {
            magnitude,
            sgn: Sign::Negative,
        }
    }
}

impl ToFields for BalanceChange {
    const WIDTH: usize = 2;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.magnitude)?;
        out.encode(&self.sgn)
    }
}

/// Inclusive range `[lower, upper]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClosedInterval<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: Copy> ClosedInterval<T> {
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    pub fn exact(value: T) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }
}

impl<T: ToFields> ToFields for ClosedInterval<T> {
    const WIDTH: usize = 2 * T::WIDTH;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.lower)?;
        out.encode(&self.upper)
    }
}

/// Public keys encode as their compressed form `(x, is_odd)`.
impl ToFields for VerifyingKey {
    const WIDTH: usize = 2;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        let compressed = self.compress();
        out.push(compressed.x);
        out.push_bool(compressed.is_odd);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode;

    #[test]
    fn test_sign_labels() {
        assert_eq!(Sign::parse("sgn", "Positive").unwrap(), Sign::Positive);
        assert_eq!("Negative".parse::<Sign>().unwrap(), Sign::Negative);
        assert_eq!(
            Sign::parse("balanceChange.sgn", "positive"),
            Err(EncodingError::UnknownVariant {
                field: "balanceChange.sgn",
                label: "positive".to_string()
            })
        );
    }

    #[test]
    fn test_balance_change_encoding() {
        let up = encode(&BalanceChange::positive(Amount::from_nanomina(5))).unwrap();
        let down = encode(&BalanceChange::negative(Amount::from_nanomina(5))).unwrap();
        assert_eq!(up[0], BaseField::from_canonical_u64(5));
        assert_eq!(up[1], BaseField::ONE);
        assert_eq!(down[1] + BaseField::ONE, BaseField::ZERO);
    }

    #[test]
    fn test_interval_order() {
        let interval = ClosedInterval::new(Amount::from_nanomina(1), Amount::from_nanomina(2));
        let range = encode(&interval).unwrap();
        assert_eq!(range, vec![BaseField::ONE, BaseField::from_canonical_u64(2)]);
    }

    #[test]
    fn test_default_token_id() {
        assert_eq!(TokenId::default().0, BaseField::ONE);
        let text = TokenId::default().to_string();
        assert_eq!(text.parse::<TokenId>().unwrap(), TokenId::DEFAULT);
    }
}
