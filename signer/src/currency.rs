//! Integer quantities: currency amounts, nonces, slots and timestamps.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encoding::{FieldEncoder, ToFields};
use crate::error::EncodingError;

/// A currency amount in nanomina, the smallest unit.
///
/// Text in and out is in whole MINA with up to nine fractional digits, so
/// `"1"` is `1_000_000_000` and `"0.001"` is `1_000_000`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const DECIMALS: usize = 9;
    pub const NANOMINA_PER_MINA: u64 = 1_000_000_000;

    pub const fn from_nanomina(nanomina: u64) -> Self {
        Self(nanomina)
    }

    pub const fn nanomina(self) -> u64 {
        self.0
    }

    /// Parses a whole-unit decimal string; errors name `field`.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, EncodingError> {
        let invalid = || EncodingError::InvalidNumber {
            field,
            value: value.to_string(),
        };

        let (whole, frac) = match value.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (value, ""),
        };
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty()
            || !is_digits(whole)
            || !is_digits(frac)
            || frac.len() > Self::DECIMALS
            || (value.contains('.') && frac.is_empty())
        {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let mut frac_value = 0u64;
        for digit in frac.bytes().chain(core::iter::repeat(b'0')).take(Self::DECIMALS) {
            frac_value = frac_value * 10 + u64::from(digit - b'0');
        }

        whole
            .checked_mul(Self::NANOMINA_PER_MINA)
            .and_then(|n| n.checked_add(frac_value))
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Parses a raw nanomina integer string.
    pub fn parse_nanomina(field: &'static str, value: &str) -> Result<Self, EncodingError> {
        value
            .parse::<u64>()
            .map(Self)
            .map_err(|_| EncodingError::InvalidNumber {
                field,
                value: value.to_string(),
            })
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_mul(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::NANOMINA_PER_MINA;
        let frac = self.0 % Self::NANOMINA_PER_MINA;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{frac:09}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("amount", s)
    }
}

impl ToFields for Amount {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push_u64(self.0);
        Ok(())
    }
}

macro_rules! uint_newtype {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            pub const MAX: Self = Self(<$inner>::MAX);

            pub fn parse(field: &'static str, value: &str) -> Result<Self, EncodingError> {
                value
                    .parse::<$inner>()
                    .map(Self)
                    .map_err(|_| EncodingError::InvalidNumber {
                        field,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl ToFields for $name {
            const WIDTH: usize = 1;

            fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
                out.push_u64(u64::from(self.0));
                Ok(())
            }
        }
    };
}

uint_newtype!(
    /// Nonces, slots, lengths and call depths.
    UInt32,
    u32
);

uint_newtype!(
    /// Millisecond timestamps.
    UInt64,
    u64
);
