use curval::keys::secp256k1::params::{CurveParams, SECP256K1};
use curval::keys::secp256k1::{exchange, generate_keypair, PrivateKey, PublicKey};
use curval::primitives::U256;

/// y² = x³ + 2x + 2 over F₁₇, generated by (5, 1) of order 19.
fn tiny_curve() -> CurveParams {
    CurveParams {
        p: U256::from(17u8),
        a: U256::from(2u8),
        b: U256::from(2u8),
        gx: U256::from(5u8),
        gy: U256::from(1u8),
        n: U256::from(19u8),
    }
}

#[test]
fn test_secp256k1_key_exchange() {
    let (alice_public, alice_private) = generate_keypair().unwrap();
    let (bob_public, bob_private) = generate_keypair().unwrap();

    // independent draws, distinct keys
    assert_ne!(alice_private.to_bytes(), bob_private.to_bytes());

    let alice_shared = exchange(&alice_private, &bob_public, &SECP256K1).unwrap();
    let bob_shared = exchange(&bob_private, &alice_public, &SECP256K1).unwrap();

    assert_eq!(alice_shared, bob_shared);

    // a third party derives something else
    let (_, carol_private) = generate_keypair().unwrap();
    let carol_shared = exchange(&carol_private, &bob_public, &SECP256K1).unwrap();

    assert_ne!(carol_shared, alice_shared);
}

#[test]
fn test_generated_keys_land_on_curve() {
    let (public, private) = generate_keypair().unwrap();

    assert!(public.point().is_on_curve(&SECP256K1));

    let scalar = private.scalar();
    assert!(scalar != U256::ZERO);
    assert!(scalar < SECP256K1.n);

    let compressed = public.to_compressed_bytes();
    let expected_prefix = if public.y().is_even() { 0x02 } else { 0x03 };
    assert_eq!(compressed[0], expected_prefix);

    let x: [u8; 32] = public.x().into();
    assert_eq!(&compressed[1..], &x);

    assert_eq!(public.to_hex().len(), 66);
    assert_eq!(private.to_hex().len(), 64);
}

#[test]
fn test_private_key_scalar_range() {
    assert!(PrivateKey::from_scalar(U256::ZERO, &SECP256K1).is_err());
    assert!(PrivateKey::from_scalar(SECP256K1.n, &SECP256K1).is_err());
    assert!(PrivateKey::from_scalar(SECP256K1.n + U256::from(5u8), &SECP256K1).is_err());

    assert!(PrivateKey::from_scalar(U256::ONE, &SECP256K1).is_ok());
    assert!(PrivateKey::from_scalar(SECP256K1.n - U256::ONE, &SECP256K1).is_ok());
}

#[test]
fn test_known_scalars_compress_to_published_keys() {
    let one = PrivateKey::from_scalar(U256::ONE, &SECP256K1).unwrap();
    let public = one.public_key(&SECP256K1).unwrap();

    assert_eq!(
        public.to_hex(),
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );

    let two = PrivateKey::from_scalar(U256::from(2u8), &SECP256K1).unwrap();
    let public = two.public_key(&SECP256K1).unwrap();

    assert_eq!(
        public.to_hex(),
        "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
    );
}

#[test]
fn test_public_key_validates_coordinates() {
    assert!(PublicKey::from_affine(SECP256K1.gx, SECP256K1.gy, &SECP256K1).is_ok());
    assert!(PublicKey::from_affine(SECP256K1.gx, SECP256K1.gy + U256::ONE, &SECP256K1).is_err());

    // coordinates at or above the field prime are not canonical
    assert!(PublicKey::from_affine(SECP256K1.p, SECP256K1.gy, &SECP256K1).is_err());
}

#[test]
fn test_public_key_rejects_unreduced_coordinates() {
    let params = tiny_curve();

    // (5, 18) denotes the generator (5, 1) with y lifted by p. The curve
    // equation holds after reduction, but the stored y would encode with
    // an even-parity prefix while the canonical point encodes odd.
    let lifted_y = U256::from(18u8);
    assert!(PublicKey::from_affine(params.gx, lifted_y, &params).is_err());

    let lifted_x = U256::from(22u8);
    assert!(PublicKey::from_affine(lifted_x, params.gy, &params).is_err());

    let canonical = PublicKey::from_affine(params.gx, params.gy, &params).unwrap();
    assert_eq!(canonical.to_compressed_bytes()[0], 0x03);
}

#[test]
fn test_exchange_on_a_small_curve() {
    let params = tiny_curve();

    let alice_private = PrivateKey::from_scalar(U256::from(3u8), &params).unwrap();
    let bob_private = PrivateKey::from_scalar(U256::from(5u8), &params).unwrap();

    let alice_public = alice_private.public_key(&params).unwrap();
    let bob_public = bob_private.public_key(&params).unwrap();

    let alice_shared = exchange(&alice_private, &bob_public, &params).unwrap();
    let bob_shared = exchange(&bob_private, &alice_public, &params).unwrap();

    // 3 · 5 · G = 15G = (3, 16), so both sides see x = 3
    let expected: [u8; 32] = U256::from(3u8).into();
    assert_eq!(alice_shared, expected);
    assert_eq!(bob_shared, expected);
}
