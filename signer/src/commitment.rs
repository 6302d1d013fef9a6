//! Transaction commitments: party hashes, the call forest and the full
//! commitment the fee payer signs.

use pallas::BaseField;
use poseidon::{hash_with_prefix, prefixes};
use serde::{Deserialize, Serialize};

use crate::encoding::encode;
use crate::error::EncodingError;
use crate::types::{FeePayer, Memo, Party, PartyBody, Transaction};

/// The two digests a transaction is signed over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCommitments {
    /// Hash of the call forest of the parties alone.
    pub commitment: BaseField,
    /// Binds the commitment to the memo and the fee payer.
    pub full_commitment: BaseField,
}

pub fn party_body_hash(body: &PartyBody) -> Result<BaseField, EncodingError> {
    Ok(hash_with_prefix(prefixes::PARTY_BODY, &encode(body)?))
}

pub fn fee_payer_hash(fee_payer: &FeePayer) -> Result<BaseField, EncodingError> {
    let body = fee_payer.to_body()?;
    Ok(hash_with_prefix(prefixes::FEE_PAYER_BODY, &encode(&body)?))
}

struct CallTree {
    party_hash: BaseField,
    calls: Vec<CallTree>,
}

/// Groups parties into trees: each party owns the run of following parties
/// that sit one level deeper.
fn build_forest(nodes: &[(BaseField, u32)], pos: &mut usize, depth: u32) -> Vec<CallTree> {
    let mut trees = Vec::new();
    while let Some(&(party_hash, node_depth)) = nodes.get(*pos) {
        if node_depth != depth {
            break;
        }
        *pos += 1;
        let calls = build_forest(nodes, pos, depth + 1);
        trees.push(CallTree { party_hash, calls });
    }
    trees
}

fn forest_hash(trees: &[CallTree]) -> BaseField {
    trees.iter().rev().fold(BaseField::ZERO, |rest, tree| {
        let node = hash_with_prefix(
            prefixes::PARTY_NODE,
            &[tree.party_hash, forest_hash(&tree.calls)],
        );
        hash_with_prefix(prefixes::PARTY_CONS, &[node, rest])
    })
}

/// Hash of the call forest described by the parties' call depths.
///
/// The first party must sit at depth zero and no party may be more than one
/// level below its predecessor. An empty list hashes to zero.
pub fn call_forest_hash(parties: &[Party]) -> Result<BaseField, EncodingError> {
    let mut nodes = Vec::with_capacity(parties.len());
    let mut previous: Option<u32> = None;
    for (index, party) in parties.iter().enumerate() {
        let depth = party.body.call_depth;
        let max = previous.map_or(0, |d| d + 1);
        if depth > max {
            return Err(EncodingError::InvalidCallDepth { index, depth, max });
        }
        nodes.push((party_body_hash(&party.body)?, depth));
        previous = Some(depth);
    }

    let mut pos = 0;
    let forest = build_forest(&nodes, &mut pos, 0);
    debug_assert_eq!(pos, nodes.len());
    Ok(forest_hash(&forest))
}

/// `H(FULL, [memo, fee payer, commitment])`
pub fn full_commitment(
    memo: &Memo,
    fee_payer: &FeePayer,
    commitment: BaseField,
) -> Result<BaseField, EncodingError> {
    let inputs = [memo.hash(), fee_payer_hash(fee_payer)?, commitment];
    Ok(hash_with_prefix(prefixes::ZKAPP_FULL_COMMITMENT, &inputs))
}

pub fn transaction_commitments(tx: &Transaction) -> Result<TransactionCommitments, EncodingError> {
    let commitment = call_forest_hash(&tx.parties)?;
    let full_commitment = full_commitment(&tx.memo()?, &tx.fee_payer, commitment)?;
    Ok(TransactionCommitments {
        commitment,
        full_commitment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::{Amount, UInt32};
    use crate::types::BalanceChange;
    use pallas::Affine;
    use schnorr::VerifyingKey;

    fn party(magnitude: u64, depth: u32) -> Party {
        let key = VerifyingKey::from_affine(Affine::generator()).unwrap();
        let mut body = PartyBody::new(key);
        body.balance_change = BalanceChange::positive(Amount::from_nanomina(magnitude));
        body.call_depth = depth;
        Party::new(body)
    }

    fn node(party: &Party, calls: BaseField) -> BaseField {
        let hash = party_body_hash(&party.body).unwrap();
        hash_with_prefix(prefixes::PARTY_NODE, &[hash, calls])
    }

    fn cons(node: BaseField, rest: BaseField) -> BaseField {
        hash_with_prefix(prefixes::PARTY_CONS, &[node, rest])
    }

    #[test]
    fn test_empty_forest() {
        assert_eq!(call_forest_hash(&[]).unwrap(), BaseField::ZERO);
    }

    #[test]
    fn test_flat_forest() {
        let parties = [party(1, 0), party(2, 0)];
        let expected = cons(
            node(&parties[0], BaseField::ZERO),
            cons(node(&parties[1], BaseField::ZERO), BaseField::ZERO),
        );
        assert_eq!(call_forest_hash(&parties).unwrap(), expected);
    }

    #[test]
    fn test_nested_forest() {
        // 0 ── 1 ── 2
        //  └── 3
        // 4
        let parties = [party(0, 0), party(1, 1), party(2, 2), party(3, 1), party(4, 0)];
        let leaf2 = cons(node(&parties[2], BaseField::ZERO), BaseField::ZERO);
        let calls0 = cons(
            node(&parties[1], leaf2),
            cons(node(&parties[3], BaseField::ZERO), BaseField::ZERO),
        );
        let expected = cons(
            node(&parties[0], calls0),
            cons(node(&parties[4], BaseField::ZERO), BaseField::ZERO),
        );
        assert_eq!(call_forest_hash(&parties).unwrap(), expected);

        let flat: Vec<Party> = (0..5).map(|i| party(i, 0)).collect();
        assert_ne!(call_forest_hash(&flat).unwrap(), expected);
    }

    #[test]
    fn test_invalid_depths() {
        assert_eq!(
            call_forest_hash(&[party(0, 1)]),
            Err(EncodingError::InvalidCallDepth {
                index: 0,
                depth: 1,
                max: 0
            })
        );
        assert_eq!(
            call_forest_hash(&[party(0, 0), party(1, 2)]),
            Err(EncodingError::InvalidCallDepth {
                index: 1,
                depth: 2,
                max: 1
            })
        );
    }

    #[test]
    fn test_order_matters() {
        let a = [party(1, 0), party(2, 0)];
        let b = [party(2, 0), party(1, 0)];
        assert_ne!(call_forest_hash(&a).unwrap(), call_forest_hash(&b).unwrap());
    }

    #[test]
    fn test_full_commitment_binds_memo_and_fee_payer() {
        let key = VerifyingKey::from_affine(Affine::generator()).unwrap();
        let payer = FeePayer::new(key, Amount::from_nanomina(10), UInt32(0));
        let commitment = BaseField::from_canonical_u64(77);
        let base = full_commitment(&Memo::empty(), &payer, commitment).unwrap();

        let memo = Memo::new("x").unwrap();
        assert_ne!(full_commitment(&memo, &payer, commitment).unwrap(), base);

        let mut other = payer.clone();
        other.nonce = Some(UInt32(1));
        assert_ne!(full_commitment(&Memo::empty(), &other, commitment).unwrap(), base);

        assert_ne!(
            full_commitment(&Memo::empty(), &payer, BaseField::ONE).unwrap(),
            base
        );
    }
}
