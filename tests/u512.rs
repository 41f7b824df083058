use curval::primitives::{U256, U512};

use core::convert::TryFrom;

#[test]
fn u512_max_const() {
    assert_eq!(U512::MAX, U512::from([255u8; 64]));
}

#[test]
fn u512_try_from_small_ints_and_back() {
    let a = U512::from(0x12u8);
    assert_eq!(u64::try_from(a).unwrap(), 0x12u64);

    let a = U512::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);

    let mut bad = [0u8; 64];
    bad[0] = 1;
    assert!(u64::try_from(U512::from(bad)).is_err());
}

#[test]
fn u512_from_u256_zero_extends() {
    let narrow = U256::from(0xDEAD_BEEFu64);
    let widened = U512::from(narrow);

    let bytes: [u8; 64] = widened.into();
    assert!(bytes[..32].iter().all(|&b| b == 0));

    // value preserved in lower 256 bits
    let back = U256::try_from(widened).unwrap();
    assert_eq!(back, narrow);

    // upper 256 bits non-zero → error
    let mut bad = [0u8; 64];
    bad[0] = 1;
    let bad_u512 = U512::from(bad);
    assert!(U256::try_from(bad_u512).is_err());
}

#[test]
fn u512_leading_zeros() {
    let zero = U512::ZERO;
    assert_eq!(zero.leading_zeros(), 512);

    let one = U512::from(1u8);
    assert_eq!(one.leading_zeros(), 511);

    let mut high = [0u8; 64];
    high[0] = 0x10;
    let h = U512::from(high);
    assert_eq!(h.leading_zeros(), 3);

    let mut mid = [0u8; 64];
    mid[10] = 0x01;
    let m = U512::from(mid);
    assert_eq!(m.leading_zeros(), 87u32);
}

#[test]
fn u512_add_carry_propagates() {
    let a = U512::from(255u8);
    let b = U512::from(1u8);
    let sum = a + b;

    let mut expected = [0u8; 64];
    expected[62] = 1u8;
    expected[63] = 0u8;

    assert_eq!(sum, U512::from(expected));
}

#[test]
fn u512_add_wraps_at_full_width() {
    assert_eq!(U512::MAX + U512::ONE, U512::ZERO);
}

#[test]
fn u512_rem_basic_cases() {
    let ten = U512::from(10u8);
    let three = U512::from(3u8);

    assert_eq!(ten % three, U512::from(1u8));

    let nine = U512::from(9u8);
    assert_eq!(nine % three, U512::ZERO);

    let small = U512::from(5u8);
    let bigger = U512::from(10u8);

    assert_eq!(small % bigger, small);
}

#[test]
fn u512_rem_full_width() {
    let m = U256::MAX;
    let square = m.widening_mul(m);

    // m² is a multiple of m
    assert_eq!(square % U512::from(m), U512::ZERO);

    // m ≡ 1 (mod m − 1), so m² leaves remainder 1
    let below = m - U256::ONE;
    assert_eq!(square % U512::from(below), U512::ONE);
}

#[test]
#[should_panic(expected = "division by zero")]
fn u512_rem_by_zero_panics() {
    let _ = U512::from(1u8) % U512::ZERO;
}

#[test]
fn u512_display_and_asref() {
    let v = U512::from(1u8);
    let s: &[u8] = v.as_ref();

    assert_eq!(s.len(), 64);
    assert_eq!(s[63], 1u8);

    let formatted = format!("{}", v);
    assert!(formatted.ends_with(":01"));
}
