use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use party_signer::{
    encode, transaction_commitments, Amount, BalanceChange, FeePayer, Party, PartyBody, Signer,
    SignerConfig, Transaction, UInt32, NetworkId,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn transaction(signer: &Signer, parties: usize) -> (party_signer::SigningKey, Transaction) {
    let mut rng = StdRng::seed_from_u64(42);
    let (key, public_key) = signer.generate_key_pair_with(&mut rng);
    let (_, receiver) = signer.generate_key_pair_with(&mut rng);
    let parties = (0..parties)
        .map(|i| {
            let mut body = PartyBody::new(receiver);
            body.balance_change = BalanceChange::positive(Amount::from_nanomina(i as u64 + 1));
            Party::new(body)
        })
        .collect();
    let tx = Transaction {
        fee_payer: FeePayer::new(public_key, Amount::from_nanomina(1_000_000_000), UInt32(0)),
        parties,
        memo: "bench".into(),
    };
    (key, tx)
}

fn bench_encode(c: &mut Criterion) {
    let signer = Signer::default();
    let (_, tx) = transaction(&signer, 1);
    let body = &tx.parties[0].body;
    c.bench_function("encode_party_body", |b| b.iter(|| encode(black_box(body))));
}

fn bench_commitments(c: &mut Criterion) {
    let signer = Signer::default();
    let mut group = c.benchmark_group("transaction_commitments");
    for parties in [1usize, 4, 16] {
        let (_, tx) = transaction(&signer, parties);
        group.bench_with_input(BenchmarkId::from_parameter(parties), &tx, |b, tx| {
            b.iter(|| transaction_commitments(black_box(tx)))
        });
    }
    group.finish();
}

fn bench_sign_verify(c: &mut Criterion) {
    let signer = Signer::new(SignerConfig::new(NetworkId::Testnet));
    let (key, tx) = transaction(&signer, 2);
    let public_key = key.verifying_key();

    c.bench_function("sign_transaction", |b| {
        b.iter(|| signer.sign_transaction(black_box(tx.clone()), &key))
    });

    let signed = signer.sign_transaction(tx, &key).expect("sign");
    c.bench_function("verify_signature", |b| {
        b.iter(|| signer.verify_signature(&public_key, black_box(&signed.data), &signed.signature))
    });
}

criterion_group!(benches, bench_encode, bench_commitments, bench_sign_verify);
criterion_main!(benches);
