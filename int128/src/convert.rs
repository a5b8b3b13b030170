//! Conversions between the 128-bit types, native integers and floats.
//!
//! Widening conversions are `From`; narrowing ones are `TryFrom` with
//! [`ArithError::Overflow`] above the target range and
//! [`ArithError::Underflow`] below it.

use crate::error::{ArithError, SafeResult};
use crate::int::I128;
use crate::uint::U128;

// ============================================================================
// Native interop
// ============================================================================

impl From<u128> for U128 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_parts((value >> 64) as u64, value as u64)
    }
}

impl From<U128> for u128 {
    #[inline]
    fn from(value: U128) -> Self {
        ((value.high() as u128) << 64) | value.low() as u128
    }
}

impl From<i128> for I128 {
    #[inline]
    fn from(value: i128) -> Self {
        U128::from(value as u128).as_signed()
    }
}

impl From<I128> for i128 {
    #[inline]
    fn from(value: I128) -> Self {
        u128::from(value.as_unsigned()) as i128
    }
}

macro_rules! widen_into {
    ($target:ty, $via:ty; $($src:ty),+) => {
        $(
            impl From<$src> for $target {
                #[inline]
                fn from(value: $src) -> Self {
                    <$target>::from(value as $via)
                }
            }
        )+
    };
}

widen_into!(U128, u128; u8, u16, u32, u64, usize);
widen_into!(I128, i128; i8, i16, i32, i64, isize, u8, u16, u32, u64);

/// Narrowing out of the 128-bit types, through the native 128-bit integer of
/// the same signedness.
macro_rules! narrow_from {
    ($src:ty, $via:ty, $negative:expr; $($target:ty),+) => {
        $(
            impl TryFrom<$src> for $target {
                type Error = ArithError;

                #[inline]
                fn try_from(value: $src) -> SafeResult<Self> {
                    let negative: fn($via) -> bool = $negative;
                    let wide = <$via>::from(value);
                    <$target>::try_from(wide).map_err(|_| out_of_range(negative(wide)))
                }
            }
        )+
    };
}

narrow_from!(U128, u128, |_| false; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
narrow_from!(I128, i128, |wide| wide < 0; u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize);

/// Checked conversion of a native integer into [`U128`].
macro_rules! checked_into_unsigned {
    ($($src:ty),+) => {
        $(
            impl TryFrom<$src> for U128 {
                type Error = ArithError;

                #[inline]
                fn try_from(value: $src) -> SafeResult<Self> {
                    u128::try_from(value)
                        .map(U128::from)
                        .map_err(|_| ArithError::Underflow)
                }
            }
        )+
    };
}

checked_into_unsigned!(i8, i16, i32, i64, isize, i128);

impl TryFrom<u128> for I128 {
    type Error = ArithError;

    #[inline]
    fn try_from(value: u128) -> SafeResult<Self> {
        I128::try_from_unsigned(U128::from(value))
    }
}

#[inline]
fn out_of_range(negative: bool) -> ArithError {
    if negative {
        ArithError::Underflow
    } else {
        ArithError::Overflow
    }
}

// ============================================================================
// Cross-signedness
// ============================================================================

impl TryFrom<U128> for I128 {
    type Error = ArithError;

    /// Fails with `Overflow` for values of 2^127 and above.
    #[inline]
    fn try_from(value: U128) -> SafeResult<Self> {
        I128::try_from_unsigned(value)
    }
}

impl TryFrom<I128> for U128 {
    type Error = ArithError;

    /// Fails with `Underflow` for negative values.
    #[inline]
    fn try_from(value: I128) -> SafeResult<Self> {
        if value.is_negative() {
            Err(ArithError::Underflow)
        } else {
            Ok(value.as_unsigned())
        }
    }
}

// ============================================================================
// Floats
// ============================================================================
//
// Best effort: rounding follows the native `as` casts, which saturate at the
// range ends and map NaN to zero.

impl U128 {
    #[inline]
    pub fn to_f64(self) -> f64 {
        u128::from(self) as f64
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        u128::from(self) as f32
    }

    /// Truncates toward zero; negative inputs and NaN give 0, values past
    /// the range give `MAX`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::from(value as u128)
    }
}

impl I128 {
    #[inline]
    pub fn to_f64(self) -> f64 {
        i128::from(self) as f64
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        i128::from(self) as f32
    }

    /// Truncates toward zero; NaN gives 0, values past either end give
    /// `MIN` or `MAX`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self::from(value as i128)
    }
}

// ============================================================================
// Tests
// ============================================================================
