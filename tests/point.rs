use curval::keys::secp256k1::params::{CurveParams, SECP256K1};
use curval::keys::secp256k1::point::Point;
use curval::primitives::U256;

/// y² = x³ + 2x + 2 over F₁₇, generated by (5, 1) of order 19.
///
/// Small enough to check every multiple by hand.
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

fn affine(x: u8, y: u8) -> Point {
    Point::Affine {
        x: U256::from(x),
        y: U256::from(y),
    }
}

#[test]
fn identity_is_the_neutral_element() {
    let params = tiny_curve();
    let g = params.generator();

    assert_eq!(Point::Identity.add(g, &params), g);
    assert_eq!(g.add(Point::Identity, &params), g);
    assert_eq!(Point::Identity.double(&params), Point::Identity);
}

#[test]
fn doubling_walks_the_small_curve() {
    let params = tiny_curve();
    let g = params.generator();

    let two_g = g.double(&params);
    assert_eq!(two_g, affine(6, 3));

    let four_g = two_g.double(&params);
    assert_eq!(four_g, affine(3, 1));
}

#[test]
fn addition_walks_the_small_curve() {
    let params = tiny_curve();
    let g = params.generator();
    let two_g = g.double(&params);

    assert_eq!(two_g.add(g, &params), affine(10, 6));

    // chord through two points sharing a y coordinate
    let four_g = two_g.double(&params);
    assert_eq!(four_g.add(g, &params), affine(9, 16));
}

#[test]
fn adding_a_point_to_its_negation_gives_identity() {
    let params = tiny_curve();

    let p = affine(5, 1);
    let minus_p = affine(5, 16);

    assert_eq!(p.add(minus_p, &params), Point::Identity);
}

#[test]
fn adding_a_point_to_itself_falls_back_to_doubling() {
    let params = tiny_curve();
    let g = params.generator();

    assert_eq!(g.add(g, &params), g.double(&params));
}

#[test]
fn doubling_a_two_torsion_point_gives_identity() {
    // y² = x³ + x over F₂₃ has (0, 0) as a point with y = 0.
    let params = CurveParams {
        p: U256::from(23u8),
        a: U256::ONE,
        b: U256::ZERO,
        gx: U256::ZERO,
        gy: U256::ZERO,
        n: U256::from(24u8),
    };

    let two_torsion = affine(0, 0);
    assert!(two_torsion.is_on_curve(&params));
    assert_eq!(two_torsion.double(&params), Point::Identity);
}

#[test]
fn scalar_multiples_match_the_hand_computed_table() {
    let params = tiny_curve();
    let g = params.generator();

    let expected = [
        (1u8, affine(5, 1)),
        (2, affine(6, 3)),
        (3, affine(10, 6)),
        (4, affine(3, 1)),
        (5, affine(9, 16)),
        (6, affine(16, 13)),
        (7, affine(0, 6)),
        (10, affine(7, 11)),
        (11, affine(13, 10)),
        (15, affine(3, 16)),
        (18, affine(5, 16)),
    ];

    for (k, point) in expected {
        assert_eq!(g.mul(U256::from(k), &params), point);
        assert!(point.is_on_curve(&params));
    }
}

#[test]
fn scalar_multiplication_respects_the_group_order() {
    let params = tiny_curve();
    let g = params.generator();

    assert_eq!(g.mul(U256::ZERO, &params), Point::Identity);
    assert_eq!(g.mul(U256::from(19u8), &params), Point::Identity);
    assert_eq!(g.mul(U256::from(20u8), &params), g);

    // n − 2: 17G = −2G, and adding 2G back closes the cycle
    let two_g = g.double(&params);
    let seventeen_g = g.mul(U256::from(17u8), &params);

    assert_eq!(seventeen_g, affine(6, 14));
    assert_eq!(seventeen_g.add(two_g, &params), Point::Identity);
}

#[test]
fn scalar_multiplication_distributes_over_addition() {
    let params = tiny_curve();
    let g = params.generator();

    let seven_g = g.mul(U256::from(7u8), &params);
    let eleven_g = g.mul(U256::from(11u8), &params);

    assert_eq!(seven_g.add(eleven_g, &params), g.mul(U256::from(18u8), &params));
}

#[test]
fn secp256k1_generator_is_on_the_curve() {
    let g = SECP256K1.generator();

    assert!(g.is_on_curve(&SECP256K1));

    let off = Point::Affine {
        x: SECP256K1.gx,
        y: SECP256K1.gy + U256::ONE,
    };
    assert!(!off.is_on_curve(&SECP256K1));
}

#[test]
fn secp256k1_doubling_matches_the_published_point() {
    let expected = Point::Affine {
        x: U256::from_be_words([
            0xC604_7F94_41ED_7D6D,
            0x3045_406E_95C0_7CD8,
            0x5C77_8E4B_8CEF_3CA7,
            0xABAC_09B9_5C70_9EE5,
        ]),
        y: U256::from_be_words([
            0x1AE1_68FE_A63D_C339,
            0xA3C5_8419_466C_EEEF,
            0x7F63_2653_266D_0E12,
            0x3643_1A95_0CFE_52A4,
        ]),
    };

    let g = SECP256K1.generator();
    assert_eq!(g.double(&SECP256K1), expected);
    assert_eq!(g.mul(U256::from(2u8), &SECP256K1), expected);
}

#[test]
fn secp256k1_scalar_one_returns_the_generator() {
    let g = SECP256K1.generator();

    assert_eq!(g.mul(U256::ONE, &SECP256K1), g);
}

#[test]
fn secp256k1_order_times_generator_is_identity() {
    let g = SECP256K1.generator();

    assert_eq!(g.mul(SECP256K1.n, &SECP256K1), Point::Identity);
}

#[test]
fn secp256k1_order_minus_one_negates_the_generator() {
    let g = SECP256K1.generator();
    let k = SECP256K1.n - U256::ONE;

    let minus_g = Point::Affine {
        x: SECP256K1.gx,
        y: SECP256K1.p - SECP256K1.gy,
    };

    let computed = g.mul(k, &SECP256K1);
    assert_eq!(computed, minus_g);

    // (n − 1)·G + G = n·G = identity
    assert_eq!(computed.add(g, &SECP256K1), Point::Identity);

    // (n − 1)·G + 2G = (n + 1)·G = G
    let two_g = g.double(&SECP256K1);
    assert_eq!(computed.add(two_g, &SECP256K1), g);
}
