//! Unsigned 128-bit integer stored as two 64-bit limbs.
//!
//! Plain arithmetic wraps modulo 2^128, exactly like a native register; the
//! checked variants live in [`crate::safe`].

use std::cmp::Ordering;

use crate::limb;
use crate::macros::{impl_binop, impl_shift};

/// Unsigned 128-bit integer: `high * 2^64 + low`.
///
/// Every value in `[0, 2^128)` has exactly one `(high, low)` pair.
///
/// ```
/// use int128::U128;
///
/// let a = U128::from_parts(0, u64::MAX);
/// let b = a + U128::ONE;
/// assert_eq!((b.high(), b.low()), (1, 0));
/// assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct U128 {
    high: u64,
    low: u64,
}

impl U128 {
    /// Width in bits.
    pub const BITS: u32 = 128;
    pub const ZERO: Self = Self::from_parts(0, 0);
    pub const ONE: Self = Self::from_parts(0, 1);
    pub const MIN: Self = Self::ZERO;
    pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX);

    /// Construct from the high and low 64-bit words.
    #[inline]
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Construct from a single word (high word zero).
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self::from_parts(0, value)
    }

    /// Most significant 64 bits.
    #[inline]
    pub const fn high(self) -> u64 {
        self.high
    }

    /// Least significant 64 bits.
    #[inline]
    pub const fn low(self) -> u64 {
        self.low
    }

    /// `(high, low)` pair.
    #[inline]
    pub const fn to_parts(self) -> (u64, u64) {
        (self.high, self.low)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Whether the value fits in the low word alone.
    #[inline]
    pub const fn fits_u64(self) -> bool {
        self.high == 0
    }

    // ========================================================================
    // Addition / subtraction
    // ========================================================================

    /// Sum and whether a carry escaped the high word.
    #[inline]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (low, carry) = limb::add_with_carry(self.low, rhs.low, 0);
        let (high, carry) = limb::add_with_carry(self.high, rhs.high, carry);
        (Self::from_parts(high, low), carry != 0)
    }

    /// Sum modulo 2^128.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Difference and whether a borrow escaped the high word.
    #[inline]
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (low, borrow) = limb::sub_with_borrow(self.low, rhs.low, 0);
        let (high, borrow) = limb::sub_with_borrow(self.high, rhs.high, borrow);
        (Self::from_parts(high, low), borrow != 0)
    }

    /// Difference modulo 2^128.
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Two's-complement negation: `!self + 1`.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    /// Negation and whether it overflowed (any nonzero value does).
    #[inline]
    pub const fn overflowing_neg(self) -> (Self, bool) {
        (self.wrapping_neg(), !self.is_zero())
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Truncating 128×128→128 multiply.
    ///
    /// `low*low` is widened; the two cross products only ever reach the high
    /// word, so they are computed modulo 2^64. `high*high` lands entirely
    /// above bit 127 and is dropped.
    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let (low, carry) = limb::widening_mul(self.low, rhs.low);
        let high = carry
            .wrapping_add(self.low.wrapping_mul(rhs.high))
            .wrapping_add(self.high.wrapping_mul(rhs.low));
        Self::from_parts(high, low)
    }

    /// Full 256-bit product as `(low, high)` halves.
    ///
    /// ```
    /// use int128::U128;
    ///
    /// let (lo, hi) = U128::MAX.widening_mul(U128::from_u64(2));
    /// assert_eq!(lo, U128::MAX - U128::ONE);
    /// assert_eq!(hi, U128::ONE);
    /// ```
    pub const fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let (w0, c) = limb::widening_mul(self.low, rhs.low);

        let (lo, hi) = limb::widening_mul(self.high, rhs.low);
        let (w1, k) = limb::add_with_carry(lo, c, 0);
        let (w2, _) = limb::add_with_carry(hi, 0, k);

        let (lo, hi) = limb::widening_mul(self.low, rhs.high);
        let (w1, k) = limb::add_with_carry(w1, lo, 0);
        let (w2, k2) = limb::add_with_carry(w2, hi, k);
        let (w3, _) = limb::add_with_carry(0, 0, k2);

        let (lo, hi) = limb::widening_mul(self.high, rhs.high);
        let (w2, k) = limb::add_with_carry(w2, lo, 0);
        let (w3, _) = limb::add_with_carry(w3, hi, k);

        (Self::from_parts(w1, w0), Self::from_parts(w3, w2))
    }

    // ========================================================================
    // Shifts
    // ========================================================================

    /// Logical left shift. Amounts of 128 or more clear every bit.
    #[inline]
    pub const fn shift_left(self, n: u32) -> Self {
        if n == 0 {
            self
        } else if n >= Self::BITS {
            Self::ZERO
        } else if n >= limb::LIMB_BITS {
            Self::from_parts(self.low << (n - limb::LIMB_BITS), 0)
        } else {
            Self::from_parts(
                (self.high << n) | (self.low >> (limb::LIMB_BITS - n)),
                self.low << n,
            )
        }
    }

    /// Logical right shift. Amounts of 128 or more clear every bit.
    #[inline]
    pub const fn shift_right(self, n: u32) -> Self {
        if n == 0 {
            self
        } else if n >= Self::BITS {
            Self::ZERO
        } else if n >= limb::LIMB_BITS {
            Self::from_parts(0, self.high >> (n - limb::LIMB_BITS))
        } else {
            Self::from_parts(
                self.high >> n,
                (self.low >> n) | (self.high << (limb::LIMB_BITS - n)),
            )
        }
    }

    // ========================================================================
    // Bitwise
    // ========================================================================

    #[inline]
    pub const fn bit_and(self, rhs: Self) -> Self {
        Self::from_parts(self.high & rhs.high, self.low & rhs.low)
    }

    #[inline]
    pub const fn bit_or(self, rhs: Self) -> Self {
        Self::from_parts(self.high | rhs.high, self.low | rhs.low)
    }

    #[inline]
    pub const fn bit_xor(self, rhs: Self) -> Self {
        Self::from_parts(self.high ^ rhs.high, self.low ^ rhs.low)
    }

    #[inline]
    pub const fn bit_not(self) -> Self {
        Self::from_parts(!self.high, !self.low)
    }

    /// Low `k` bits set, `k` in `[0, 128]`.
    #[inline]
    pub const fn low_mask(k: u32) -> Self {
        if k >= Self::BITS {
            Self::MAX
        } else {
            Self::ONE.shift_left(k).wrapping_sub(Self::ONE)
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Unsigned three-way comparison, high word first.
    #[inline]
    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        if self.high < rhs.high {
            Ordering::Less
        } else if self.high > rhs.high {
            Ordering::Greater
        } else if self.low < rhs.low {
            Ordering::Less
        } else if self.low > rhs.low {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// `self >= rhs`
    #[inline]
    pub(crate) const fn gte(self, rhs: Self) -> bool {
        !matches!(self.const_cmp(rhs), Ordering::Less)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl Ord for U128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.const_cmp(*other)
    }
}

impl PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl_binop!(U128, Add::add, AddAssign::add_assign => wrapping_add);
impl_binop!(U128, Sub::sub, SubAssign::sub_assign => wrapping_sub);
impl_binop!(U128, Mul::mul, MulAssign::mul_assign => wrapping_mul);
impl_binop!(U128, Div::div, DivAssign::div_assign => wrapping_div);
impl_binop!(U128, Rem::rem, RemAssign::rem_assign => wrapping_rem);
impl_binop!(U128, BitAnd::bitand, BitAndAssign::bitand_assign => bit_and);
impl_binop!(U128, BitOr::bitor, BitOrAssign::bitor_assign => bit_or);
impl_binop!(U128, BitXor::bitxor, BitXorAssign::bitxor_assign => bit_xor);
impl_shift!(U128, Shl::shl, ShlAssign::shl_assign => shift_left; u32, usize);
impl_shift!(U128, Shr::shr, ShrAssign::shr_assign => shift_right; u32, usize);

impl core::ops::Not for U128 {
    type Output = U128;

    #[inline]
    fn not(self) -> U128 {
        self.bit_not()
    }
}

impl core::iter::Sum for U128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::wrapping_add)
    }
}

impl core::iter::Product for U128 {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Self::wrapping_mul)
    }
}

// ============================================================================
// Tests
// ============================================================================
