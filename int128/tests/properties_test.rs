//! Algebraic properties of the wrapping operators, checked against native
//! `u128` / `i128` and, for the limb layer, against the portable fallbacks.
//! Number-theoretic identities are checked with `BigInt`.

use int128::limb;
use int128::{I128, U128};
use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;

fn u(v: u128) -> U128 {
    U128::from(v)
}

fn i(v: i128) -> I128 {
    I128::from(v)
}

// ============================================================================
// Limb primitives
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_limb_add_sub_agree(a in any::<u64>(), b in any::<u64>(), c in 0u64..=1) {
        let expected = a as u128 + b as u128 + c as u128;
        prop_assert_eq!(limb::add_with_carry(a, b, c), (expected as u64, (expected >> 64) as u64));
        prop_assert_eq!(limb::add_with_carry(a, b, c), limb::add_with_carry_portable(a, b, c));

        let (diff, borrow) = limb::sub_with_borrow(a, b, c);
        prop_assert_eq!(diff, a.wrapping_sub(b).wrapping_sub(c));
        prop_assert_eq!(borrow, u64::from((a as u128) < b as u128 + c as u128));
        prop_assert_eq!((diff, borrow), limb::sub_with_borrow_portable(a, b, c));
    }

    #[test]
    fn prop_limb_widening_mul_agrees(a in any::<u64>(), b in any::<u64>()) {
        let p = a as u128 * b as u128;
        prop_assert_eq!(limb::widening_mul(a, b), (p as u64, (p >> 64) as u64));
        prop_assert_eq!(limb::widening_mul_portable(a, b), (p as u64, (p >> 64) as u64));
    }

    #[test]
    fn prop_limb_bit_counts_agree(w in prop_oneof![any::<u64>(), (0u32..64).prop_map(|k| 1u64 << k), Just(0u64)]) {
        prop_assert_eq!(limb::leading_zero_count(w), w.leading_zeros());
        prop_assert_eq!(limb::leading_zero_count_portable(w), w.leading_zeros());
        prop_assert_eq!(limb::trailing_zero_count(w), w.trailing_zeros());
        prop_assert_eq!(limb::trailing_zero_count_portable(w), w.trailing_zeros());
        prop_assert_eq!(limb::population_count(w), w.count_ones());
        prop_assert_eq!(limb::population_count_portable(w), w.count_ones());
    }
}

// ============================================================================
// Unsigned
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_add_commutative_associative(a in any::<u128>(), b in any::<u128>(), c in any::<u128>()) {
        prop_assert_eq!(u(a) + u(b), u(b) + u(a));
        prop_assert_eq!((u(a) + u(b)) + u(c), u(a) + (u(b) + u(c)));
        prop_assert_eq!(u(a) + U128::ZERO, u(a));
    }

    #[test]
    fn prop_mul_commutative_associative(a in any::<u128>(), b in any::<u128>(), c in any::<u128>()) {
        prop_assert_eq!(u(a) * u(b), u(b) * u(a));
        prop_assert_eq!((u(a) * u(b)) * u(c), u(a) * (u(b) * u(c)));
        prop_assert_eq!(u(a) * U128::ONE, u(a));
    }

    #[test]
    fn prop_matches_native_u128(a in any::<u128>(), b in any::<u128>(), k in 0u32..128) {
        prop_assert_eq!(u128::from(u(a) + u(b)), a.wrapping_add(b));
        prop_assert_eq!(u128::from(u(a) - u(b)), a.wrapping_sub(b));
        prop_assert_eq!(u128::from(u(a) * u(b)), a.wrapping_mul(b));
        prop_assert_eq!(u128::from(u(a).wrapping_neg()), a.wrapping_neg());
        prop_assert_eq!(u128::from(u(a) & u(b)), a & b);
        prop_assert_eq!(u128::from(u(a) | u(b)), a | b);
        prop_assert_eq!(u128::from(u(a) ^ u(b)), a ^ b);
        prop_assert_eq!(u128::from(!u(a)), !a);
        prop_assert_eq!(u128::from(u(a) << k), a << k);
        prop_assert_eq!(u128::from(u(a) >> k), a >> k);
        prop_assert_eq!(u(a).cmp(&u(b)), a.cmp(&b));
        prop_assert_eq!(u(a).leading_zeros(), a.leading_zeros());
        prop_assert_eq!(u(a).trailing_zeros(), a.trailing_zeros());
        prop_assert_eq!(u(a).count_ones(), a.count_ones());
    }

    #[test]
    fn prop_shift_round_trip(v in any::<u128>(), k in 0u32..128) {
        prop_assert_eq!((u(v) << k) >> k, u(v) & (U128::MAX >> k));
    }

    #[test]
    fn prop_widening_mul_is_exact(a in any::<u128>(), b in any::<u128>()) {
        let (lo, hi) = u(a).widening_mul(u(b));
        let product = (BigUint::from(u128::from(hi)) << 128u32) + BigUint::from(u128::from(lo));
        prop_assert_eq!(product, BigUint::from(a) * BigUint::from(b));
        prop_assert_eq!(lo, u(a) * u(b));
    }
}

#[test]
fn test_carry_and_multiply_scenarios() {
    assert_eq!(u(u64::MAX as u128) + U128::ONE, U128::from_parts(1, 0));
    assert_eq!(U128::from_parts(1, 0) - U128::ONE, u(u64::MAX as u128));
    assert_eq!(u(u64::MAX as u128) * u(2), u((1 << 65) - 2));
    assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
    assert_eq!(U128::ZERO - U128::ONE, U128::MAX);
}

#[test]
fn test_zero_bit_counts() {
    assert_eq!(U128::ZERO.leading_zeros(), 128);
    assert_eq!(U128::ONE.leading_zeros(), 127);
    assert_eq!(U128::ZERO.trailing_zeros(), 128);
}

// ============================================================================
// Signed
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_additive_inverse(a in any::<i128>()) {
        prop_assert_eq!(i(a) + (-i(a)), I128::ZERO);
        prop_assert_eq!(i(a) - i(a), I128::ZERO);
    }

    #[test]
    fn prop_matches_native_i128(a in any::<i128>(), b in any::<i128>(), k in 0u32..128) {
        prop_assert_eq!(i128::from(i(a) + i(b)), a.wrapping_add(b));
        prop_assert_eq!(i128::from(i(a) - i(b)), a.wrapping_sub(b));
        prop_assert_eq!(i128::from(i(a) * i(b)), a.wrapping_mul(b));
        prop_assert_eq!(i128::from(-i(a)), a.wrapping_neg());
        prop_assert_eq!(i128::from(i(a) << k), a << k);
        prop_assert_eq!(i128::from(i(a) >> k), a >> k);
        prop_assert_eq!(i(a).cmp(&i(b)), a.cmp(&b));
        prop_assert_eq!(i(a).unsigned_abs(), u(a.unsigned_abs()));
    }

    #[test]
    fn prop_signed_bits_equal_unsigned_bits(a in any::<i128>(), b in any::<i128>()) {
        let (sa, sb) = (i(a), i(b));
        let (ua, ub) = (sa.as_unsigned(), sb.as_unsigned());
        prop_assert_eq!((sa + sb).as_unsigned(), ua + ub);
        prop_assert_eq!((sa - sb).as_unsigned(), ua - ub);
        prop_assert_eq!((sa * sb).as_unsigned(), ua * ub);
        prop_assert_eq!((sa ^ sb).as_unsigned(), ua ^ ub);
    }
}

#[test]
fn test_signed_extremes() {
    assert!(I128::MIN < I128::MAX);
    assert!(i(-1) < I128::ZERO);
    assert_eq!(I128::MAX + I128::ONE, I128::MIN);
    assert_eq!(-I128::MIN, I128::MIN);
    assert_eq!(I128::MIN >> 127u32, I128::NEG_ONE);
    assert_eq!(I128::MIN >> 128u32, I128::NEG_ONE);
    assert_eq!(I128::MAX >> 200u32, I128::ZERO);
}

// ============================================================================
// Number theory
// ============================================================================

fn operand() -> impl Strategy<Value = u128> {
    prop_oneof![
        any::<u128>(),
        any::<u64>().prop_map(u128::from),
        (0u32..128, any::<u128>()).prop_map(|(k, v)| v >> k),
        (any::<u64>(), 1u128..1000).prop_map(|(g, k)| u128::from(g).wrapping_mul(k)),
        Just(0u128),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_bezout_identity(a in operand(), b in operand()) {
        let (x, y) = u(a).bezout(u(b));
        let g = u(a).gcd(u(b));
        let lhs = BigInt::from(a) * BigInt::from(i128::from(x)) + BigInt::from(b) * BigInt::from(i128::from(y));
        prop_assert_eq!(lhs, BigInt::from(u128::from(g)));
    }

    #[test]
    fn prop_is_multiple_of_matches_native(a in operand(), b in operand()) {
        let expected = if b == 0 { a == 0 } else { a % b == 0 };
        prop_assert_eq!(u(a).is_multiple_of(u(b)), expected);
        prop_assert_eq!(u(a).is_even(), a % 2 == 0);
    }

    #[test]
    fn prop_signed_isqrt_brackets_root(v in 0i128..=i128::MAX) {
        let r = u128::from(i(v).isqrt().unwrap().as_unsigned());
        let v = BigUint::from(v as u128);
        prop_assert!(BigUint::from(r) * BigUint::from(r) <= v);
        prop_assert!(BigUint::from(r + 1) * BigUint::from(r + 1) > v);
    }
}
