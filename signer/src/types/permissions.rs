use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::encoding::{FieldEncoder, ToFields};
use crate::error::EncodingError;

/// Authorization an account demands before a kind of change is allowed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthRequired {
    None,
    Either,
    Proof,
    Signature,
    Impossible,
}

impl AuthRequired {
    pub const ALL: [AuthRequired; 5] = [
        AuthRequired::None,
        AuthRequired::Either,
        AuthRequired::Proof,
        AuthRequired::Signature,
        AuthRequired::Impossible,
    ];

    pub fn code(self) -> u64 {
        match self {
            AuthRequired::None => 0,
            AuthRequired::Either => 1,
            AuthRequired::Proof => 2,
            AuthRequired::Signature => 3,
            AuthRequired::Impossible => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuthRequired::None => "None",
            AuthRequired::Either => "Either",
            AuthRequired::Proof => "Proof",
            AuthRequired::Signature => "Signature",
            AuthRequired::Impossible => "Impossible",
        }
    }

    /// Labels are matched exactly; anything else names `field` in the error.
    pub fn parse(field: &'static str, label: &str) -> Result<Self, EncodingError> {
        Self::ALL
            .into_iter()
            .find(|auth| auth.label() == label)
            .ok_or_else(|| EncodingError::UnknownVariant {
                field,
                label: label.to_string(),
            })
    }
}

impl fmt::Display for AuthRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AuthRequired {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("authRequired", s)
    }
}

impl ToFields for AuthRequired {
    const WIDTH: usize = 1;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.push_u64(self.code());
        Ok(())
    }
}

/// Per-operation authorization requirements of an account.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permissions {
    pub edit_state: AuthRequired,
    pub send: AuthRequired,
    pub receive: AuthRequired,
    pub set_delegate: AuthRequired,
    pub set_permissions: AuthRequired,
    pub set_verification_key: AuthRequired,
    pub set_zkapp_uri: AuthRequired,
    pub edit_sequence_state: AuthRequired,
    pub set_token_symbol: AuthRequired,
    pub increment_nonce: AuthRequired,
    pub set_voting_for: AuthRequired,
}

impl Permissions {
    /// Field names in encoding order, as they appear in the wire format.
    pub const FIELDS: [&'static str; 11] = [
        "editState",
        "send",
        "receive",
        "setDelegate",
        "setPermissions",
        "setVerificationKey",
        "setZkappUri",
        "editSequenceState",
        "setTokenSymbol",
        "incrementNonce",
        "setVotingFor",
    ];

    /// Builds permissions from eleven labels given in [`Permissions::FIELDS`]
    /// order.
    pub fn from_labels(labels: [&str; 11]) -> Result<Self, EncodingError> {
        let mut parsed = [AuthRequired::None; 11];
        for ((slot, label), field) in parsed.iter_mut().zip(labels).zip(Self::FIELDS) {
            *slot = AuthRequired::parse(field, label)?;
        }
        Ok(Self::from_array(parsed))
    }

    fn from_array(values: [AuthRequired; 11]) -> Self {
        let [
            edit_state,
            send,
            receive,
            set_delegate,
            set_permissions,
            set_verification_key,
            set_zkapp_uri,
            edit_sequence_state,
            set_token_symbol,
            increment_nonce,
            set_voting_for,
        ] = values;
        Self {
            edit_state,
            send,
            receive,
            set_delegate,
            set_permissions,
            set_verification_key,
            set_zkapp_uri,
            edit_sequence_state,
            set_token_symbol,
            increment_nonce,
            set_voting_for,
        }
    }

    pub fn to_array(&self) -> [AuthRequired; 11] {
        [
            self.edit_state,
            self.send,
            self.receive,
            self.set_delegate,
            self.set_permissions,
            self.set_verification_key,
            self.set_zkapp_uri,
            self.edit_sequence_state,
            self.set_token_symbol,
            self.increment_nonce,
            self.set_voting_for,
        ]
    }
}

impl ToFields for Permissions {
    const WIDTH: usize = 11;

    fn to_fields(&self, out: &mut FieldEncoder) -> Result<(), EncodingError> {
        out.encode(&self.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode;
    use pallas::BaseField;

    #[test]
    fn test_codes_are_distinct() {
        let codes: Vec<u64> = AuthRequired::ALL.iter().map(|a| a.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_labels() {
        for auth in AuthRequired::ALL {
            assert_eq!(auth.label().parse::<AuthRequired>().unwrap(), auth);
        }
        assert_eq!(
            "Sig".parse::<AuthRequired>(),
            Err(EncodingError::UnknownVariant {
                field: "authRequired",
                label: "Sig".to_string()
            })
        );
        assert!("proof".parse::<AuthRequired>().is_err());
    }

    #[test]
    fn test_from_labels_names_field() {
        let mut labels = ["Signature"; 11];
        labels[3] = "Sometimes";
        assert_eq!(
            Permissions::from_labels(labels),
            Err(EncodingError::UnknownVariant {
                field: "setDelegate",
                label: "Sometimes".to_string()
            })
        );
    }

    #[test]
    fn test_encoding_order() {
        let mut labels = ["None"; 11];
        labels[0] = "Proof";
        labels[10] = "Impossible";
        let permissions = Permissions::from_labels(labels).unwrap();
        let encoded = encode(&permissions).unwrap();
        assert_eq!(encoded.len(), 11);
        assert_eq!(encoded[0], BaseField::from_canonical_u64(2));
        assert_eq!(encoded[1], BaseField::ZERO);
        assert_eq!(encoded[10], BaseField::from_canonical_u64(4));
        assert_eq!(permissions.to_array()[0], AuthRequired::Proof);
    }
}
