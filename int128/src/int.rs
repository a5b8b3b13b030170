//! Signed 128-bit integer: a two's-complement reading of [`U128`] storage.
//!
//! Addition, subtraction, multiplication, negation, left shift and the bitwise
//! operators are the unsigned ones, bit for bit. Only comparison, division,
//! right shift and overflow detection look at the sign.

use std::cmp::Ordering;

use crate::error::{ArithError, SafeResult};
use crate::macros::{impl_binop, impl_shift};
use crate::uint::U128;

/// Signed 128-bit integer; negative iff the top bit of the high word is set.
///
/// ```
/// use int128::I128;
///
/// let a = I128::from(-7i64);
/// let b = I128::from(2i64);
/// assert_eq!(a / b, I128::from(-3i64));
/// assert_eq!(a % b, I128::from(-1i64));
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct I128(U128);

const SIGN_BIT: u64 = 1 << 63;

impl I128 {
    pub const BITS: u32 = 128;
    pub const ZERO: Self = Self(U128::ZERO);
    pub const ONE: Self = Self(U128::ONE);
    pub const NEG_ONE: Self = Self(U128::MAX);
    /// -2^127
    pub const MIN: Self = Self(U128::from_parts(SIGN_BIT, 0));
    /// 2^127 - 1
    pub const MAX: Self = Self(U128::from_parts(!SIGN_BIT, u64::MAX));

    /// Construct from raw words; `high` carries the sign bit.
    #[inline]
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self(U128::from_parts(high, low))
    }

    /// Sign-extend a single signed word.
    #[inline]
    pub const fn from_i64(value: i64) -> Self {
        Self::from_parts((value >> 63) as u64, value as u64)
    }

    #[inline]
    pub const fn high(self) -> u64 {
        self.0.high()
    }

    #[inline]
    pub const fn low(self) -> u64 {
        self.0.low()
    }

    #[inline]
    pub const fn to_parts(self) -> (u64, u64) {
        self.0.to_parts()
    }

    /// Reinterpret the bits as unsigned.
    #[inline]
    pub const fn as_unsigned(self) -> U128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0.high() & SIGN_BIT != 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    // ========================================================================
    // Wrapping arithmetic (shared with U128)
    // ========================================================================

    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Truncating multiply; identical bits to the unsigned multiply.
    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// `-self`, with `-MIN == MIN`.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// `|self|`, with `|MIN| == MIN`.
    #[inline]
    pub const fn wrapping_abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Magnitude as unsigned; exact for every value including `MIN`.
    #[inline]
    pub const fn unsigned_abs(self) -> U128 {
        self.wrapping_abs().0
    }

    /// Apply a sign to a magnitude (two's-complement negate when `negative`).
    #[inline]
    const fn with_sign(magnitude: U128, negative: bool) -> Self {
        if negative {
            Self(magnitude.wrapping_neg())
        } else {
            Self(magnitude)
        }
    }

    // ========================================================================
    // Shifts
    // ========================================================================

    #[inline]
    pub const fn shift_left(self, n: u32) -> Self {
        Self(self.0.shift_left(n))
    }

    /// Arithmetic right shift: vacated bits copy the sign. Amounts of 128 or
    /// more leave 0 or -1.
    pub const fn shift_right(self, n: u32) -> Self {
        let high = self.0.high() as i64;
        if n == 0 {
            self
        } else if n >= Self::BITS {
            Self::from_parts((high >> 63) as u64, (high >> 63) as u64)
        } else if n >= 64 {
            Self::from_parts((high >> 63) as u64, (high >> (n - 64)) as u64)
        } else {
            Self::from_parts(
                (high >> n) as u64,
                (self.0.low() >> n) | ((high as u64) << (64 - n)),
            )
        }
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Truncating signed division: `(quotient, remainder)`.
    ///
    /// Runs the unsigned engine on the magnitudes; the quotient is negative
    /// when exactly one operand is, and the remainder takes the dividend's
    /// sign. `MIN / -1` wraps to `(MIN, 0)`; [`I128::safe_div`] rejects it.
    ///
    /// ```
    /// use int128::{ArithError, I128};
    ///
    /// let (q, r) = I128::from(-100i64).div_rem(I128::from(7i64)).unwrap();
    /// assert_eq!((q, r), (I128::from(-14i64), I128::from(-2i64)));
    /// assert_eq!(I128::ONE.div_rem(I128::ZERO), Err(ArithError::DivisionByZero));
    /// ```
    pub fn div_rem(self, divisor: Self) -> SafeResult<(Self, Self)> {
        let (q, r) = self.unsigned_abs().div_rem(divisor.unsigned_abs())?;
        let q_negative = self.is_negative() != divisor.is_negative();
        Ok((
            Self::with_sign(q, q_negative),
            Self::with_sign(r, self.is_negative()),
        ))
    }

    /// Quotient of the plain `/` operator: zero divisor yields zero,
    /// `MIN / -1` yields `MIN`.
    #[inline]
    pub fn wrapping_div(self, divisor: Self) -> Self {
        match self.div_rem(divisor) {
            Ok((q, _)) => q,
            Err(_) => Self::ZERO,
        }
    }

    /// Remainder of the plain `%` operator: zero divisor yields zero.
    #[inline]
    pub fn wrapping_rem(self, divisor: Self) -> Self {
        match self.div_rem(divisor) {
            Ok((_, r)) => r,
            Err(_) => Self::ZERO,
        }
    }

    /// Euclidean division: the remainder is always non-negative.
    pub fn div_rem_euclid(self, divisor: Self) -> SafeResult<(Self, Self)> {
        let (q, r) = self.div_rem(divisor)?;
        if !r.is_negative() {
            return Ok((q, r));
        }
        if divisor.is_negative() {
            Ok((q.wrapping_add(Self::ONE), r.wrapping_sub(divisor)))
        } else {
            Ok((q.wrapping_sub(Self::ONE), r.wrapping_add(divisor)))
        }
    }

    /// Euclidean quotient; zero for a zero divisor.
    pub fn div_euclid(self, divisor: Self) -> Self {
        self.div_rem_euclid(divisor).map_or(Self::ZERO, |(q, _)| q)
    }

    /// Euclidean remainder in `[0, |divisor|)`; zero for a zero divisor.
    pub fn rem_euclid(self, divisor: Self) -> Self {
        self.div_rem_euclid(divisor).map_or(Self::ZERO, |(_, r)| r)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Signed three-way comparison: high words as `i64`, then low as `u64`.
    #[inline]
    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        let (a, b) = (self.0.high() as i64, rhs.0.high() as i64);
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            U128::from_u64(self.0.low()).const_cmp(U128::from_u64(rhs.0.low()))
        }
    }

    /// Checked conversion from the unsigned reading.
    pub const fn try_from_unsigned(value: U128) -> SafeResult<Self> {
        if value.high() & SIGN_BIT != 0 {
            Err(ArithError::Overflow)
        } else {
            Ok(Self(value))
        }
    }
}

macro_rules! delegate_to_unsigned {
    ($($name:ident),+) => {
        impl I128 {
            $(
                /// Same as the [`U128`] method of this name, on the raw bits.
                #[inline]
                pub const fn $name(self) -> u32 {
                    self.0.$name()
                }
            )+
        }
    };
}

delegate_to_unsigned!(
    leading_zeros,
    trailing_zeros,
    leading_ones,
    trailing_ones,
    count_ones,
    count_zeros,
    effective_bits,
    find_first_set,
    find_last_set
);

/// Bit reordering, bit-field access and byte views on the raw two's-complement
/// bits. The power-of-two helpers are unsigned-only; reach them through
/// [`I128::as_unsigned`].
impl I128 {
    #[inline]
    pub const fn rotate_left(self, n: u32) -> Self {
        Self(self.0.rotate_left(n))
    }

    #[inline]
    pub const fn rotate_right(self, n: u32) -> Self {
        Self(self.0.rotate_right(n))
    }

    #[inline]
    pub const fn reverse_bits(self) -> Self {
        Self(self.0.reverse_bits())
    }

    #[inline]
    pub const fn swap_bytes(self) -> Self {
        Self(self.0.swap_bytes())
    }

    /// Bit `pos`; bit 127 is the sign.
    #[inline]
    pub const fn bit(self, pos: u32) -> bool {
        self.0.bit(pos)
    }

    #[inline]
    pub const fn with_bit(self, pos: u32, value: bool) -> Self {
        Self(self.0.with_bit(pos, value))
    }

    #[inline]
    pub const fn toggle_bit(self, pos: u32) -> Self {
        Self(self.0.toggle_bit(pos))
    }

    /// Zero-extended field; see [`U128::extract_bits`].
    #[inline]
    pub const fn extract_bits(self, offset: u32, width: u32) -> Self {
        Self(self.0.extract_bits(offset, width))
    }

    #[inline]
    pub const fn insert_bits(self, src: Self, offset: u32, width: u32) -> Self {
        Self(self.0.insert_bits(src.0, offset, width))
    }

    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self(U128::from_le_bytes(bytes))
    }

    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self(U128::from_be_bytes(bytes))
    }
}

impl U128 {
    /// Reinterpret the bits as signed.
    #[inline]
    pub const fn as_signed(self) -> I128 {
        I128(self)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl Ord for I128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(*other)
    }
}

impl PartialOrd for I128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl I128 {
    #[inline]
    const fn bit_and(self, rhs: Self) -> Self {
        Self(self.0.bit_and(rhs.0))
    }

    #[inline]
    const fn bit_or(self, rhs: Self) -> Self {
        Self(self.0.bit_or(rhs.0))
    }

    #[inline]
    const fn bit_xor(self, rhs: Self) -> Self {
        Self(self.0.bit_xor(rhs.0))
    }
}

impl_binop!(I128, Add::add, AddAssign::add_assign => wrapping_add);
impl_binop!(I128, Sub::sub, SubAssign::sub_assign => wrapping_sub);
impl_binop!(I128, Mul::mul, MulAssign::mul_assign => wrapping_mul);
impl_binop!(I128, Div::div, DivAssign::div_assign => wrapping_div);
impl_binop!(I128, Rem::rem, RemAssign::rem_assign => wrapping_rem);
impl_binop!(I128, BitAnd::bitand, BitAndAssign::bitand_assign => bit_and);
impl_binop!(I128, BitOr::bitor, BitOrAssign::bitor_assign => bit_or);
impl_binop!(I128, BitXor::bitxor, BitXorAssign::bitxor_assign => bit_xor);
impl_shift!(I128, Shl::shl, ShlAssign::shl_assign => shift_left; u32, usize);
impl_shift!(I128, Shr::shr, ShrAssign::shr_assign => shift_right; u32, usize);

impl core::ops::Neg for I128 {
    type Output = I128;

    #[inline]
    fn neg(self) -> I128 {
        self.wrapping_neg()
    }
}

impl core::ops::Not for I128 {
    type Output = I128;

    #[inline]
    fn not(self) -> I128 {
        Self(self.0.bit_not())
    }
}

impl core::iter::Sum for I128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::wrapping_add)
    }
}

impl core::iter::Product for I128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Self::wrapping_mul)
    }
}

// ============================================================================
// Tests
// ============================================================================
