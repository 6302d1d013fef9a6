//! Builds a one-party payment, signs it and checks the signature.
//!
//! `RUST_LOG=party_signer=trace cargo run --example sign_party` shows the
//! signing steps. Network and fee policy come from `SIGNER_*` variables.

use party_signer::base58::{public_key_to_base58, signature_to_base58};
use party_signer::{
    Amount, BalanceChange, FeePayer, Party, PartyBody, Signer, SignerConfig, Transaction, UInt32,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let signer = Signer::new(SignerConfig::from_env()?);
    let mut rng = StdRng::seed_from_u64(2022);
    let (key, sender) = signer.generate_key_pair_with(&mut rng);
    let (_, receiver) = signer.generate_key_pair_with(&mut rng);

    let mut body = PartyBody::new(receiver);
    body.balance_change = BalanceChange::positive(Amount::parse("amount", "0.5")?);

    let tx = Transaction {
        fee_payer: FeePayer::new(sender, Amount::parse("fee", "1")?, UInt32(0)),
        parties: vec![Party::new(body)],
        memo: "sign_party".into(),
    };

    println!("network     : {}", signer.network());
    println!("minimum fee : {}", signer.minimum_fee(tx.parties.len()));
    println!("fee payer   : {}", public_key_to_base58(&sender));

    let signed = signer.sign_transaction(tx, &key)?;
    println!("signature   : {}", signature_to_base58(&signed.signature));

    let ok = signer.verify_signature(&sender, &signed.data, &signed.signature);
    println!("verified    : {ok}");

    let bytes = bincode::serialize(&signed)?;
    println!("bincode     : {} bytes", bytes.len());
    Ok(())
}
