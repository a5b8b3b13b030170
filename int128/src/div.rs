//! Unsigned 128-bit division.
//!
//! No instruction divides a 128-bit value, so [`div_rem`] classifies the
//! operands and takes the cheapest exact route. The tiers are ordered checks
//! on a small classification; each one must agree bit-for-bit with
//! [`long_division`], the shift-and-subtract algorithm every other tier is
//! measured against.

use crate::error::{ArithError, SafeResult};
use crate::uint::U128;

/// Route [`div_rem`] takes for a pair of operands, in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivStrategy {
    /// Divisor is zero: no result.
    ByZero,
    /// Divisor is one: quotient is the dividend.
    ByOne,
    /// Dividend below divisor: quotient zero, remainder the dividend.
    DividendSmaller,
    /// Operands equal: quotient one, remainder zero.
    Equal,
    /// Divisor has a single set bit: shift and mask.
    PowerOfTwo,
    /// Both operands fit in one word: native `u64` division.
    SingleWord,
    /// Divisor fits in one word, dividend does not: two-step schoolbook.
    WideBySingleWord,
    /// Everything else: binary long division.
    LongDivision,
}

/// Pick the division tier for `dividend / divisor`.
///
/// ```
/// use int128::U128;
/// use int128::div::{classify, DivStrategy};
///
/// let big = U128::from_parts(7, 0);
/// assert_eq!(classify(big, U128::from_u64(16)), DivStrategy::PowerOfTwo);
/// assert_eq!(classify(big, U128::from_u64(10)), DivStrategy::WideBySingleWord);
/// assert_eq!(classify(big, U128::from_parts(3, 1)), DivStrategy::LongDivision);
/// ```
pub const fn classify(dividend: U128, divisor: U128) -> DivStrategy {
    if divisor.is_zero() {
        return DivStrategy::ByZero;
    }
    if divisor.high() == 0 && divisor.low() == 1 {
        return DivStrategy::ByOne;
    }
    match dividend.const_cmp(divisor) {
        std::cmp::Ordering::Less => return DivStrategy::DividendSmaller,
        std::cmp::Ordering::Equal => return DivStrategy::Equal,
        std::cmp::Ordering::Greater => {}
    }
    if divisor.is_power_of_two() {
        return DivStrategy::PowerOfTwo;
    }
    if divisor.fits_u64() {
        if dividend.fits_u64() {
            return DivStrategy::SingleWord;
        }
        return DivStrategy::WideBySingleWord;
    }
    DivStrategy::LongDivision
}

/// `(quotient, remainder)` of `dividend / divisor`, or
/// [`ArithError::DivisionByZero`].
///
/// ```
/// use int128::U128;
/// use int128::div::div_rem;
///
/// let (q, r) = div_rem(U128::from_u64(100), U128::from_u64(7)).unwrap();
/// assert_eq!((q, r), (U128::from_u64(14), U128::from_u64(2)));
/// assert!(div_rem(U128::from_u64(100), U128::ZERO).is_err());
/// ```
pub const fn div_rem(dividend: U128, divisor: U128) -> SafeResult<(U128, U128)> {
    if divisor.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    Ok(wrapping_div_rem(dividend, divisor))
}

/// Tier dispatch behind [`div_rem`]. A zero divisor yields `(0, 0)`, which is
/// what the plain `/` and `%` operators return.
pub const fn wrapping_div_rem(dividend: U128, divisor: U128) -> (U128, U128) {
    match classify(dividend, divisor) {
        DivStrategy::ByZero => (U128::ZERO, U128::ZERO),
        DivStrategy::ByOne => (dividend, U128::ZERO),
        DivStrategy::DividendSmaller => (U128::ZERO, dividend),
        DivStrategy::Equal => (U128::ONE, U128::ZERO),
        DivStrategy::PowerOfTwo => {
            let k = divisor.trailing_zeros();
            (
                dividend.shift_right(k),
                dividend.bit_and(U128::low_mask(k)),
            )
        }
        DivStrategy::SingleWord => {
            let (n, d) = (dividend.low(), divisor.low());
            (U128::from_u64(n / d), U128::from_u64(n % d))
        }
        DivStrategy::WideBySingleWord => wide_by_single_word(dividend, divisor.low()),
        DivStrategy::LongDivision => long_division(dividend, divisor),
    }
}

/// Two-step schoolbook division of a two-word dividend by a one-word divisor.
///
/// The high word is divided natively; the intermediate remainder is then
/// prefixed to the low word. That second dividend can still exceed one word,
/// so it goes through [`long_division`], which yields a quotient below 2^64
/// because the intermediate remainder is below `divisor`.
const fn wide_by_single_word(dividend: U128, divisor: u64) -> (U128, U128) {
    let q_high = dividend.high() / divisor;
    let r_high = dividend.high() % divisor;
    let (q_low, rem) = long_division(
        U128::from_parts(r_high, dividend.low()),
        U128::from_u64(divisor),
    );
    (U128::from_parts(q_high, q_low.low()), rem)
}

/// Binary long division by repeated shift-and-subtract.
///
/// The divisor is first normalized: shifted left so its top bit lines up with
/// the dividend's. Then one quotient bit is produced per step, at most 128
/// steps. A zero divisor yields `(0, 0)`.
///
/// ```
/// use int128::U128;
/// use int128::div::long_division;
///
/// let (q, r) = long_division(U128::MAX, U128::from_parts(1, 0));
/// assert_eq!((q, r), (U128::from_u64(u64::MAX), U128::from_u64(u64::MAX)));
/// ```
pub const fn long_division(dividend: U128, divisor: U128) -> (U128, U128) {
    if divisor.is_zero() {
        return (U128::ZERO, U128::ZERO);
    }
    if !dividend.gte(divisor) {
        return (U128::ZERO, dividend);
    }

    let shift = dividend.effective_bits() - divisor.effective_bits();
    let mut step = divisor.shift_left(shift);
    let mut quotient = U128::ZERO;
    let mut remainder = dividend;

    let mut i = 0;
    while i <= shift {
        quotient = quotient.shift_left(1);
        if remainder.gte(step) {
            remainder = remainder.wrapping_sub(step);
            quotient = quotient.bit_or(U128::ONE);
        }
        step = step.shift_right(1);
        i += 1;
    }
    (quotient, remainder)
}

impl U128 {
    /// See [`div_rem`].
    #[inline]
    pub const fn div_rem(self, divisor: Self) -> SafeResult<(Self, Self)> {
        div_rem(self, divisor)
    }

    /// Quotient of the plain `/` operator: never fails, a zero divisor
    /// yields zero.
    #[inline]
    pub const fn wrapping_div(self, divisor: Self) -> Self {
        wrapping_div_rem(self, divisor).0
    }

    /// Remainder of the plain `%` operator: never fails, a zero divisor
    /// yields zero.
    #[inline]
    pub const fn wrapping_rem(self, divisor: Self) -> Self {
        wrapping_div_rem(self, divisor).1
    }

    /// Same as `/` for unsigned values.
    #[inline]
    pub const fn div_euclid(self, divisor: Self) -> Self {
        self.wrapping_div(divisor)
    }

    /// Same as `%` for unsigned values.
    #[inline]
    pub const fn rem_euclid(self, divisor: Self) -> Self {
        self.wrapping_rem(divisor)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u128) -> U128 {
        U128::from_parts((v >> 64) as u64, v as u64)
    }

    fn check(n: u128, d: u128) {
        let (q, r) = div_rem(u(n), u(d)).unwrap();
        assert_eq!((q, r), (u(n / d), u(n % d)), "{n:#x} / {d:#x}");
        assert_eq!(long_division(u(n), u(d)), (q, r), "tier vs long: {n:#x} / {d:#x}");
    }

    // --- Classification ---

    #[test]
    fn test_classify_order() {
        let big = u(1 << 100);
        assert_eq!(classify(big, U128::ZERO), DivStrategy::ByZero);
        assert_eq!(classify(big, U128::ONE), DivStrategy::ByOne);
        // ByOne wins over DividendSmaller and Equal.
        assert_eq!(classify(U128::ZERO, U128::ONE), DivStrategy::ByOne);
        assert_eq!(classify(U128::ONE, U128::ONE), DivStrategy::ByOne);
        assert_eq!(classify(u(3), big), DivStrategy::DividendSmaller);
        assert_eq!(classify(big, big), DivStrategy::Equal);
        assert_eq!(classify(big, u(1 << 70)), DivStrategy::PowerOfTwo);
        assert_eq!(classify(u(100), u(7)), DivStrategy::SingleWord);
        assert_eq!(classify(big, u(7)), DivStrategy::WideBySingleWord);
        assert_eq!(classify(big, u((1 << 70) + 1)), DivStrategy::LongDivision);
    }

    // --- Every tier against native ---

    #[test]
    fn test_each_tier() {
        check(100, 1);
        check(5, 1 << 90);
        check(u128::MAX, u128::MAX);
        check(u128::MAX, 1 << 64);
        check(0xdead_beef, 16);
        check(100, 7);
        check(u128::MAX, 10);
        check(u128::MAX, u64::MAX as u128);
        check(u128::MAX, (u64::MAX as u128) + 2);
        check(u128::MAX - 12345, 0x1_0000_0000_0000_0003);
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(div_rem(u(100), u(7)), Ok((u(14), u(2))));
        assert_eq!(
            div_rem(U128::MAX, u(2)),
            Ok((U128::MAX >> 1u32, U128::ONE))
        );
    }

    #[test]
    fn test_by_zero() {
        assert_eq!(div_rem(u(100), U128::ZERO), Err(ArithError::DivisionByZero));
        assert_eq!(div_rem(U128::ZERO, U128::ZERO), Err(ArithError::DivisionByZero));
        assert_eq!(u(100) / U128::ZERO, U128::ZERO);
        assert_eq!(u(100) % U128::ZERO, U128::ZERO);
        assert_eq!(long_division(u(100), U128::ZERO), (U128::ZERO, U128::ZERO));
    }

    #[test]
    fn test_const_evaluation() {
        const Q: (U128, U128) = wrapping_div_rem(U128::MAX, U128::from_u64(10));
        const Z: (U128, U128) = wrapping_div_rem(U128::MAX, U128::ZERO);
        const CHECKED: SafeResult<(U128, U128)> = div_rem(U128::ONE, U128::ZERO);
        assert_eq!(Q, (u(u128::MAX / 10), u(5)));
        assert_eq!(Z, (U128::ZERO, U128::ZERO));
        assert_eq!(CHECKED, Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_power_of_two_matches_long_division() {
        let x = u(0x0123_4567_89ab_cdef_fedc_ba98_7654_3210);
        for k in 0..128 {
            let d = U128::ONE << k as u32;
            assert_eq!(div_rem(x, d).unwrap(), long_division(x, d), "2^{k}");
        }
    }

    #[test]
    fn test_wide_by_single_word_intermediate_exceeds_word() {
        // High word remainder is nonzero, so the second step divides a
        // two-word value.
        let n = (7u128 << 64) | 5;
        check(n, 3);
        check(n, u64::MAX as u128 - 1);
        check((u64::MAX as u128 - 1) << 64 | u64::MAX as u128, u64::MAX as u128);
    }

    #[test]
    fn test_operators() {
        let mut a = u(1_000_000_007);
        assert_eq!(a / u(1000), u(1_000_000));
        assert_eq!(a % u(1000), u(7));
        a /= u(7);
        assert_eq!(a, u(142_857_143));
        a %= u(100);
        assert_eq!(a, u(43));
        assert_eq!(u(17).div_euclid(u(5)), u(3));
        assert_eq!(u(17).rem_euclid(u(5)), u(2));
    }
}
