use curval::rng::random_bytes;

#[test]
fn test_random_bytes_not_all_zero() {
    let mut out = [0u8; 64];
    random_bytes(&mut out).unwrap();

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_random_bytes_successive_draws_differ() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    random_bytes(&mut a).unwrap();
    random_bytes(&mut b).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_random_bytes_accepts_an_empty_buffer() {
    let mut empty = [0u8; 0];

    assert!(random_bytes(&mut empty).is_ok());
}
