use pallas::BaseField;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schnorr::{NetworkId, Signature, SigningKey, VerifyingKey};

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    let msg_bytes = b"hello schnorr";
    let msg_field: Vec<BaseField> = msg_bytes
        .iter()
        .map(|&b| BaseField::from_canonical_u64(b as u64))
        .collect();

    let sig = sk.sign(&msg_field, NetworkId::Testnet).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(vk2.verify(&msg_field, &sig2, NetworkId::Testnet));
    assert_eq!(sk2.sign(&msg_field, NetworkId::Testnet).expect("sign"), sig);

    println!("r = {}", sig.r);
    println!("s = {}", sig.s);
}
