use super::*;
use pallas::{Affine, BaseField, CompressedPoint, ScalarField};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn message(values: &[u64]) -> Vec<BaseField> {
    values.iter().map(|&v| BaseField::from_canonical_u64(v)).collect()
}

fn fixed_key() -> SigningKey {
    let scalar = ScalarField::from_decimal_str("123456789123456789123456789123456789").unwrap();
    SigningKey::from_scalar(scalar).unwrap()
}

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    let (sk, pk) = generate_keypair(&mut rng);
    let msg = message(&[1, 2, 3]);

    let sig = sk.sign(&msg, NetworkId::Mainnet).expect("sign");
    assert!(pk.verify(&msg, &sig, NetworkId::Mainnet));
}

#[test]
fn test_known_answer() {
    let sk = fixed_key();
    let pk = sk.verifying_key();
    let msg = message(&[1, 2, 3]);

    assert_eq!(
        pk.compress().x.to_string(),
        "22716986304912766635423202513893431388839372600202779976695413779766151688929"
    );
    assert!(pk.compress().is_odd);

    let mainnet = sk.sign(&msg, NetworkId::Mainnet).expect("sign");
    assert_eq!(
        mainnet.r.to_string(),
        "10282945324689870767387792278349542480116439382311287682749187176067211472761"
    );
    assert_eq!(
        mainnet.s.to_string(),
        "27243648277706881036663759761228184057190301958532410321236192325698667884224"
    );

    let testnet = sk.sign(&msg, NetworkId::Testnet).expect("sign");
    assert_eq!(
        testnet.r.to_string(),
        "9376178605864933902567916843332345842815044384324005377304105265636123315738"
    );
    assert_eq!(
        testnet.s.to_string(),
        "13534620375059805499831153040812340742926885868747486996941336566296919888050"
    );
}

#[test]
fn test_signing_is_deterministic() {
    let sk = fixed_key();
    let msg = message(&[9, 9, 9]);
    assert_eq!(
        sk.sign(&msg, NetworkId::Mainnet).unwrap(),
        sk.sign(&msg, NetworkId::Mainnet).unwrap()
    );
}

#[test]
fn test_verify_rejects_wrong_message() {
    let mut rng = StdRng::seed_from_u64(42);
    let (sk, pk) = generate_keypair(&mut rng);
    let sig = sk.sign(&message(&[10, 11, 12]), NetworkId::Mainnet).expect("sign");

    assert!(!pk.verify(&message(&[10, 11, 13]), &sig, NetworkId::Mainnet));
    assert!(!pk.verify(&message(&[10, 11]), &sig, NetworkId::Mainnet));
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let (sk, _pk) = generate_keypair(&mut rng);
    let msg = message(&[21, 22, 23]);
    let sig = sk.sign(&msg, NetworkId::Mainnet).expect("sign");

    let (_, wrong_pk) = generate_keypair(&mut rng);
    assert!(!wrong_pk.verify(&msg, &sig, NetworkId::Mainnet));
}

#[test]
fn test_verify_rejects_other_network() {
    let sk = fixed_key();
    let msg = message(&[5]);
    let sig = sk.sign(&msg, NetworkId::Testnet).unwrap();
    assert!(sk.verifying_key().verify(&msg, &sig, NetworkId::Testnet));
    assert!(!sk.verifying_key().verify(&msg, &sig, NetworkId::Mainnet));
}

#[test]
fn test_verify_rejects_tampered_signature() {
    let sk = fixed_key();
    let pk = sk.verifying_key();
    let msg = message(&[1]);
    let sig = sk.sign(&msg, NetworkId::Mainnet).unwrap();

    let bumped_s = Signature {
        r: sig.r,
        s: sig.s + ScalarField::ONE,
    };
    assert!(!pk.verify(&msg, &bumped_s, NetworkId::Mainnet));

    let bumped_r = Signature {
        r: sig.r + BaseField::ONE,
        s: sig.s,
    };
    assert!(!pk.verify(&msg, &bumped_r, NetworkId::Mainnet));
}

#[test]
fn test_zero_key_rejected() {
    assert_eq!(
        SigningKey::from_scalar(ScalarField::ZERO),
        Err(KeyError::Invalid("private key is zero"))
    );
    assert!(SigningKey::from_bytes(&[0u8; SK_SIZE]).is_err());
    assert!(SigningKey::from_bytes(&[0xff; SK_SIZE]).is_err());
}

#[test]
fn test_key_derivation_is_stable() {
    let mut rng = StdRng::seed_from_u64(3);
    let (sk, pk) = generate_keypair(&mut rng);
    assert_eq!(sk.verifying_key(), pk);
    assert_eq!(sk.verifying_key(), VerifyingKey::from(&sk));

    let restored = SigningKey::from_bytes(&sk.to_bytes()).unwrap();
    assert_eq!(restored, sk);
    assert_eq!(restored.verifying_key().to_bytes(), pk.to_bytes());
}

#[test]
fn test_verifying_key_bytes() {
    let pk = fixed_key().verifying_key();
    let bytes = pk.to_bytes();
    assert_eq!(bytes[32], 1);
    assert_eq!(VerifyingKey::from_bytes(&bytes).unwrap(), pk);

    let mut bad_parity = bytes;
    bad_parity[32] = 2;
    assert!(VerifyingKey::from_bytes(&bad_parity).is_err());
}

#[test]
fn test_verifying_key_rejects_invalid_points() {
    assert!(VerifyingKey::from_affine(Affine::INFINITY).is_err());
    let off_curve = Affine::new(BaseField::ONE, BaseField::ONE);
    assert!(VerifyingKey::from_affine(off_curve).is_err());
    let no_point = CompressedPoint {
        x: BaseField::ZERO,
        is_odd: false,
    };
    assert!(VerifyingKey::from_compressed(&no_point).is_err());
}

#[test]
fn test_serde_round_trip() {
    let sk = fixed_key();
    let pk = sk.verifying_key();
    let sig = sk.sign(&message(&[4, 2]), NetworkId::Mainnet).unwrap();

    let sk2: SigningKey = bincode::deserialize(&bincode::serialize(&sk).unwrap()).unwrap();
    let pk2: VerifyingKey = bincode::deserialize(&bincode::serialize(&pk).unwrap()).unwrap();
    let sig2: Signature = bincode::deserialize(&bincode::serialize(&sig).unwrap()).unwrap();
    assert_eq!(sk2, sk);
    assert_eq!(pk2, pk);
    assert_eq!(sig2, sig);
    assert_eq!(Signature::from_bytes(&sig.to_bytes()).unwrap(), sig);

    let zero = bincode::serialize(&ScalarField::ZERO).unwrap();
    assert!(bincode::deserialize::<SigningKey>(&zero).is_err());
}

#[test]
fn test_network_labels() {
    assert_eq!("mainnet".parse::<NetworkId>().unwrap(), NetworkId::Mainnet);
    assert_eq!("Testnet".parse::<NetworkId>().unwrap(), NetworkId::Testnet);
    assert!("devnet".parse::<NetworkId>().is_err());
    assert_eq!(NetworkId::Testnet.to_string(), "testnet");
    assert_eq!(NetworkId::default(), NetworkId::Mainnet);
}

#[test]
fn test_debug_hides_secret() {
    assert_eq!(format!("{:?}", fixed_key()), "SigningKey(..)");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_sign_then_verify(
        seed in any::<u64>(),
        values in prop::collection::vec(any::<u64>(), 0..6),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (sk, pk) = generate_keypair(&mut rng);
        let msg = message(&values);
        let sig = sk.sign(&msg, NetworkId::Mainnet).unwrap();
        prop_assert!(pk.verify(&msg, &sig, NetworkId::Mainnet));
    }
}
