//! Overflow-checked arithmetic.
//!
//! Every plain operator has a `safe_*` counterpart returning
//! [`SafeResult`]; the plain operators stay on the wrapping fast path and the
//! caller opts in to detection. The `overflowing_*` methods expose the raw
//! `(value, overflowed)` pair and the `saturating_*` ones clamp instead of
//! failing.

use crate::error::{ArithError, SafeResult};
use crate::int::I128;
use crate::uint::U128;

#[inline]
fn reject<T>(op: &'static str, err: ArithError) -> SafeResult<T> {
    log::trace!("{op} rejected: {err}");
    Err(err)
}

// ============================================================================
// Unsigned
// ============================================================================

impl U128 {
    /// Sum, or [`ArithError::Overflow`] if a carry escapes the high word.
    ///
    /// ```
    /// use int128::{ArithError, U128};
    ///
    /// assert_eq!(U128::MAX.safe_add(U128::ONE), Err(ArithError::Overflow));
    /// assert_eq!(U128::ONE.safe_add(U128::ONE), Ok(U128::from_u64(2)));
    /// ```
    pub fn safe_add(self, rhs: Self) -> SafeResult<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => reject("safe_add", ArithError::Overflow),
        }
    }

    /// Difference, or [`ArithError::Underflow`] when `rhs > self`.
    pub fn safe_sub(self, rhs: Self) -> SafeResult<Self> {
        if self < rhs {
            return reject("safe_sub", ArithError::Underflow);
        }
        Ok(self.wrapping_sub(rhs))
    }

    /// Product, or [`ArithError::Overflow`].
    ///
    /// The wrapped product is divided back by one operand; it reproduces the
    /// other exactly iff nothing was lost above bit 127.
    pub fn safe_mul(self, rhs: Self) -> SafeResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }
        // Both operands at least 2^64: the product is at least 2^128.
        if self.high() != 0 && rhs.high() != 0 {
            return reject("safe_mul", ArithError::Overflow);
        }
        let product = self.wrapping_mul(rhs);
        match product.div_rem(self) {
            Ok((q, _)) if q == rhs => Ok(product),
            _ => reject("safe_mul", ArithError::Overflow),
        }
    }

    /// Product and whether it was truncated.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        (self.wrapping_mul(rhs), self.safe_mul(rhs).is_err())
    }

    /// Quotient, or [`ArithError::DivisionByZero`].
    pub fn safe_div(self, rhs: Self) -> SafeResult<Self> {
        match self.div_rem(rhs) {
            Ok((q, _)) => Ok(q),
            Err(err) => reject("safe_div", err),
        }
    }

    /// Remainder, or [`ArithError::DivisionByZero`].
    pub fn safe_mod(self, rhs: Self) -> SafeResult<Self> {
        match self.div_rem(rhs) {
            Ok((_, r)) => Ok(r),
            Err(err) => reject("safe_mod", err),
        }
    }

    /// Negation is only representable for zero.
    pub fn safe_neg(self) -> SafeResult<Self> {
        if self.is_zero() {
            Ok(self)
        } else {
            reject("safe_neg", ArithError::NegationOverflow)
        }
    }

    /// Left shift that fails if any set bit would be shifted out.
    pub fn safe_shl(self, n: u32) -> SafeResult<Self> {
        if n >= Self::BITS {
            return reject("safe_shl", ArithError::ShiftOutOfRange(n));
        }
        let shifted = self.shift_left(n);
        if shifted.shift_right(n) != self {
            return reject("safe_shl", ArithError::Overflow);
        }
        Ok(shifted)
    }

    /// Right shift that rejects amounts of 128 or more.
    pub fn safe_shr(self, n: u32) -> SafeResult<Self> {
        if n >= Self::BITS {
            return reject("safe_shr", ArithError::ShiftOutOfRange(n));
        }
        Ok(self.shift_right(n))
    }

    /// `self^exp` by squaring, failing on the first multiplication that
    /// overflows.
    pub fn safe_pow(self, exp: u32) -> SafeResult<Self> {
        let mut result = Self::ONE;
        let mut base = self;
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.safe_mul(base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.safe_mul(base)?;
            }
        }
        Ok(result)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        self.safe_add(rhs).unwrap_or(Self::MAX)
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        self.safe_sub(rhs).unwrap_or(Self::ZERO)
    }

    pub fn saturating_mul(self, rhs: Self) -> Self {
        self.safe_mul(rhs).unwrap_or(Self::MAX)
    }

    /// `lo <= self <= hi`
    #[inline]
    pub fn in_range(self, lo: Self, hi: Self) -> bool {
        lo <= self && self <= hi
    }
}

// ============================================================================
// Signed
// ============================================================================

impl I128 {
    /// Overflow iff both operands share a sign and the sum's sign differs.
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let sum = self.wrapping_add(rhs);
        let overflow =
            self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative();
        (sum, overflow)
    }

    /// Overflow iff the operands differ in sign and the difference's sign
    /// differs from the minuend's.
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let diff = self.wrapping_sub(rhs);
        let overflow =
            self.is_negative() != rhs.is_negative() && diff.is_negative() != self.is_negative();
        (diff, overflow)
    }

    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        (self.wrapping_mul(rhs), self.safe_mul(rhs).is_err())
    }

    /// Only `MIN` overflows on negation.
    pub const fn overflowing_neg(self) -> (Self, bool) {
        (self.wrapping_neg(), self.const_cmp(Self::MIN).is_eq())
    }

    /// Sum, or [`ArithError::Overflow`] / [`ArithError::Underflow`] by the
    /// direction the true result left the range.
    ///
    /// ```
    /// use int128::{ArithError, I128};
    ///
    /// assert_eq!(I128::MAX.safe_add(I128::ONE), Err(ArithError::Overflow));
    /// assert_eq!(I128::MIN.safe_add(I128::NEG_ONE), Err(ArithError::Underflow));
    /// ```
    pub fn safe_add(self, rhs: Self) -> SafeResult<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => reject("safe_add", Self::direction(!self.is_negative())),
        }
    }

    pub fn safe_sub(self, rhs: Self) -> SafeResult<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Ok(diff),
            (_, true) => reject("safe_sub", Self::direction(!self.is_negative())),
        }
    }

    /// Product, checked by dividing back. The division itself is checked, so
    /// `MIN * -1` (whose wrapped product divided by `-1` would wrap back to
    /// `MIN`) is caught as well.
    pub fn safe_mul(self, rhs: Self) -> SafeResult<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::ZERO);
        }
        let product = self.wrapping_mul(rhs);
        match product.safe_div(self) {
            Ok(q) if q == rhs => Ok(product),
            _ => reject(
                "safe_mul",
                Self::direction(self.is_negative() == rhs.is_negative()),
            ),
        }
    }

    /// Quotient; fails on a zero divisor and on `MIN / -1`.
    ///
    /// ```
    /// use int128::{ArithError, I128};
    ///
    /// assert_eq!(I128::MIN.safe_div(I128::NEG_ONE), Err(ArithError::Overflow));
    /// assert_eq!(I128::MIN.safe_mod(I128::NEG_ONE), Ok(I128::ZERO));
    /// ```
    pub fn safe_div(self, rhs: Self) -> SafeResult<Self> {
        if self == Self::MIN && rhs == Self::NEG_ONE {
            return reject("safe_div", ArithError::Overflow);
        }
        match self.div_rem(rhs) {
            Ok((q, _)) => Ok(q),
            Err(err) => reject("safe_div", err),
        }
    }

    /// Remainder; fails only on a zero divisor (`MIN % -1` is 0).
    pub fn safe_mod(self, rhs: Self) -> SafeResult<Self> {
        match self.div_rem(rhs) {
            Ok((_, r)) => Ok(r),
            Err(err) => reject("safe_mod", err),
        }
    }

    /// `|self|`, or [`ArithError::NegationOverflow`] for `MIN`.
    pub fn safe_abs(self) -> SafeResult<Self> {
        if self == Self::MIN {
            return reject("safe_abs", ArithError::NegationOverflow);
        }
        Ok(self.wrapping_abs())
    }

    /// `-self`, or [`ArithError::NegationOverflow`] for `MIN`.
    pub fn safe_neg(self) -> SafeResult<Self> {
        match self.overflowing_neg() {
            (neg, false) => Ok(neg),
            (_, true) => reject("safe_neg", ArithError::NegationOverflow),
        }
    }

    /// Left shift that fails if the arithmetic shift back does not restore
    /// the value (bits or the sign were lost).
    pub fn safe_shl(self, n: u32) -> SafeResult<Self> {
        if n >= Self::BITS {
            return reject("safe_shl", ArithError::ShiftOutOfRange(n));
        }
        let shifted = self.shift_left(n);
        if shifted.shift_right(n) != self {
            return reject("safe_shl", Self::direction(!self.is_negative()));
        }
        Ok(shifted)
    }

    /// Arithmetic right shift that rejects amounts of 128 or more.
    pub fn safe_shr(self, n: u32) -> SafeResult<Self> {
        if n >= Self::BITS {
            return reject("safe_shr", ArithError::ShiftOutOfRange(n));
        }
        Ok(self.shift_right(n))
    }

    /// `self^exp` by squaring. On failure the error follows the sign of the
    /// true result: negative only for a negative base and odd exponent.
    pub fn safe_pow(self, exp: u32) -> SafeResult<Self> {
        let negative = self.is_negative() && exp & 1 == 1;
        let mut result = Self::ONE;
        let mut base = self;
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result
                    .safe_mul(base)
                    .map_err(|_| Self::direction(!negative))?;
            }
            e >>= 1;
            if e > 0 {
                base = base.safe_mul(base).map_err(|_| Self::direction(!negative))?;
            }
        }
        Ok(result)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::saturate(self.safe_add(rhs))
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::saturate(self.safe_sub(rhs))
    }

    pub fn saturating_mul(self, rhs: Self) -> Self {
        Self::saturate(self.safe_mul(rhs))
    }

    /// `|self|`, with `|MIN|` clamped to `MAX`.
    pub fn saturating_abs(self) -> Self {
        self.safe_abs().unwrap_or(Self::MAX)
    }

    /// `lo <= self <= hi`
    #[inline]
    pub fn in_range(self, lo: Self, hi: Self) -> bool {
        lo <= self && self <= hi
    }

    #[inline]
    fn direction(positive: bool) -> ArithError {
        if positive {
            ArithError::Overflow
        } else {
            ArithError::Underflow
        }
    }

    #[inline]
    fn saturate(result: SafeResult<Self>) -> Self {
        match result {
            Ok(v) => v,
            Err(ArithError::Underflow) => Self::MIN,
            Err(_) => Self::MAX,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
