//! Number-theoretic and rounding helpers: gcd, lcm, Bezout coefficients,
//! divisibility, powers, integer square root, midpoints and distances.

use crate::div::wrapping_div_rem;
use crate::error::{ArithError, SafeResult};
use crate::int::I128;
use crate::uint::U128;

// ============================================================================
// Unsigned
// ============================================================================

impl U128 {
    /// Greatest common divisor by the binary (Stein) algorithm.
    /// `gcd(0, x) == x`.
    ///
    /// ```
    /// use int128::U128;
    ///
    /// let a = U128::from_parts(6, 0); // 6 * 2^64
    /// let b = U128::from_u64(9 << 20);
    /// assert_eq!(a.gcd(b), U128::from_u64(3 << 20));
    /// ```
    pub fn gcd(self, other: Self) -> Self {
        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }
        if self.fits_u64() && other.fits_u64() {
            return Self::from_u64(gcd_u64(self.low(), other.low()));
        }

        let shift = self.bit_or(other).trailing_zeros();
        let mut a = self.shift_right(self.trailing_zeros());
        let mut b = other;
        loop {
            b = b.shift_right(b.trailing_zeros());
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            b = b.wrapping_sub(a);
            if b.is_zero() {
                break;
            }
        }
        a.shift_left(shift)
    }

    /// Least common multiple, `(a / gcd) * b`; zero if either operand is.
    /// Fails with `Overflow` when the result does not fit.
    pub fn lcm(self, other: Self) -> SafeResult<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::ZERO);
        }
        self.wrapping_div(self.gcd(other)).safe_mul(other)
    }

    /// Bezout coefficients `(x, y)` with `self*x + other*y == gcd(self, other)`,
    /// by the extended Euclidean algorithm.
    ///
    /// `(0, 0)` maps to `(0, 0)`, `(0, b)` to `(0, 1)` and `(a, 0)` to `(1, 0)`.
    /// The coefficients are tracked modulo 2^128; the final ones are bounded
    /// by `max(a, b) / (2 * gcd)`, so they always fit in `I128`.
    ///
    /// ```
    /// use int128::{I128, U128};
    ///
    /// let (x, y) = U128::from_u64(48).bezout(U128::from_u64(18));
    /// assert_eq!((x, y), (I128::from(-1i64), I128::from(3i64)));
    /// ```
    pub const fn bezout(self, other: Self) -> (I128, I128) {
        if self.is_zero() && other.is_zero() {
            return (I128::ZERO, I128::ZERO);
        }
        let (mut old_r, mut r) = (self, other);
        let (mut old_s, mut s) = (I128::ONE, I128::ZERO);
        let (mut old_t, mut t) = (I128::ZERO, I128::ONE);
        while !r.is_zero() {
            let (q, rem) = wrapping_div_rem(old_r, r);
            let q = q.as_signed();
            (old_r, r) = (r, rem);
            (old_s, s) = (s, old_s.wrapping_sub(q.wrapping_mul(s)));
            (old_t, t) = (t, old_t.wrapping_sub(q.wrapping_mul(t)));
        }
        (old_s, old_t)
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        self.low() & 1 == 0
    }

    #[inline]
    pub const fn is_odd(self) -> bool {
        !self.is_even()
    }

    /// `self % divisor == 0`. Only zero is a multiple of zero.
    #[inline]
    pub const fn is_multiple_of(self, divisor: Self) -> bool {
        match self.div_rem(divisor) {
            Ok((_, r)) => r.is_zero(),
            Err(_) => self.is_zero(),
        }
    }

    /// `self^exp` by squaring, wrapping like `*`.
    pub const fn pow(self, exp: u32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.wrapping_mul(base);
            }
            base = base.wrapping_mul(base);
            exp >>= 1;
        }
        result
    }

    /// Floor of the square root, by Newton iteration from a power-of-two
    /// starting point at or above the root.
    ///
    /// ```
    /// use int128::U128;
    ///
    /// assert_eq!(U128::MAX.isqrt(), U128::from_u64(u64::MAX));
    /// assert_eq!(U128::from_u64(99).isqrt(), U128::from_u64(9));
    /// ```
    pub fn isqrt(self) -> Self {
        if self.fits_u64() && self.low() < 2 {
            return self;
        }
        let mut x = Self::ONE.shift_left(self.effective_bits().div_ceil(2));
        loop {
            let y = x.wrapping_add(self.wrapping_div(x)).shift_right(1);
            if y >= x {
                return x;
            }
            x = y;
        }
    }

    /// `|self - other|`
    #[inline]
    pub fn abs_diff(self, other: Self) -> Self {
        if self >= other {
            self.wrapping_sub(other)
        } else {
            other.wrapping_sub(self)
        }
    }

    /// `floor((self + other) / 2)` without intermediate overflow.
    #[inline]
    pub const fn midpoint(self, other: Self) -> Self {
        self.bit_and(other)
            .wrapping_add(self.bit_xor(other).shift_right(1))
    }
}

const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// ============================================================================
// Signed
// ============================================================================

impl I128 {
    /// -1, 0 or 1.
    #[inline]
    pub const fn signum(self) -> Self {
        if self.is_negative() {
            Self::NEG_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// Same as [`I128::wrapping_abs`]: `abs(MIN) == MIN`. Use
    /// [`I128::safe_abs`] or [`I128::unsigned_abs`] to avoid the wrap.
    #[inline]
    pub const fn abs(self) -> Self {
        self.wrapping_abs()
    }

    /// `|self - other|` as unsigned; exact over the whole range.
    ///
    /// ```
    /// use int128::{I128, U128};
    ///
    /// assert_eq!(I128::MIN.abs_diff(I128::MAX), U128::MAX);
    /// ```
    #[inline]
    pub fn abs_diff(self, other: Self) -> U128 {
        if self >= other {
            self.wrapping_sub(other).as_unsigned()
        } else {
            other.wrapping_sub(self).as_unsigned()
        }
    }

    /// `(self + other) / 2` rounded toward negative infinity, without
    /// intermediate overflow.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        (self & other).wrapping_add((self ^ other).shift_right(1))
    }

    /// `self^exp` by squaring, wrapping like `*`.
    #[inline]
    pub const fn pow(self, exp: u32) -> Self {
        self.as_unsigned().pow(exp).as_signed()
    }

    /// Floor of the square root, or [`ArithError::NegativeSqrt`] for a
    /// negative value.
    ///
    /// ```
    /// use int128::{ArithError, I128};
    ///
    /// assert_eq!(I128::from(99i64).isqrt(), Ok(I128::from(9i64)));
    /// assert_eq!(I128::NEG_ONE.isqrt(), Err(ArithError::NegativeSqrt));
    /// ```
    pub fn isqrt(self) -> SafeResult<Self> {
        if self.is_negative() {
            return Err(ArithError::NegativeSqrt);
        }
        Ok(self.unsigned_abs().isqrt().as_signed())
    }

    #[inline]
    pub const fn is_even(self) -> bool {
        self.low() & 1 == 0
    }

    #[inline]
    pub const fn is_odd(self) -> bool {
        !self.is_even()
    }

    /// Divisibility of the magnitudes; the signs do not matter. Only zero is
    /// a multiple of zero.
    #[inline]
    pub const fn is_multiple_of(self, divisor: Self) -> bool {
        self.unsigned_abs().is_multiple_of(divisor.unsigned_abs())
    }

    /// Gcd of the magnitudes; `MIN` is handled through its unsigned magnitude.
    #[inline]
    pub fn gcd(self, other: Self) -> U128 {
        self.unsigned_abs().gcd(other.unsigned_abs())
    }

    /// Non-negative lcm of the magnitudes.
    #[inline]
    pub fn lcm(self, other: Self) -> SafeResult<U128> {
        self.unsigned_abs().lcm(other.unsigned_abs())
    }
}

// ============================================================================
// Tests
// ============================================================================
