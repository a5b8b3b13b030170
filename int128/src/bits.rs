//! Bit queries and bit manipulation on [`U128`].
//!
//! The counting functions are what the division engine normalizes with; the
//! rest are general-purpose helpers built from the same two-word pattern:
//! delegate to the limb primitive on whichever word decides the answer.

use crate::limb::{self, LIMB_BITS};
use crate::uint::U128;

impl U128 {
    // ========================================================================
    // Counting
    // ========================================================================

    /// Leading zero bits; 128 for zero.
    ///
    /// ```
    /// use int128::U128;
    ///
    /// assert_eq!(U128::ZERO.leading_zeros(), 128);
    /// assert_eq!(U128::ONE.leading_zeros(), 127);
    /// assert_eq!(U128::MAX.leading_zeros(), 0);
    /// ```
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if self.high() != 0 {
            limb::leading_zero_count(self.high())
        } else {
            LIMB_BITS + limb::leading_zero_count(self.low())
        }
    }

    /// Trailing zero bits; 128 for zero.
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        if self.low() != 0 {
            limb::trailing_zero_count(self.low())
        } else {
            LIMB_BITS + limb::trailing_zero_count(self.high())
        }
    }

    #[inline]
    pub const fn leading_ones(self) -> u32 {
        self.bit_not().leading_zeros()
    }

    #[inline]
    pub const fn trailing_ones(self) -> u32 {
        self.bit_not().trailing_zeros()
    }

    /// Number of set bits.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        limb::population_count(self.high()) + limb::population_count(self.low())
    }

    #[inline]
    pub const fn count_zeros(self) -> u32 {
        Self::BITS - self.count_ones()
    }

    /// Number of bits needed to represent the value: `128 - leading_zeros`.
    /// Zero has an effective bit length of zero.
    #[inline]
    pub const fn effective_bits(self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Exactly one bit set.
    #[inline]
    pub const fn is_power_of_two(self) -> bool {
        self.count_ones() == 1
    }

    /// 1-based index of the lowest set bit, 0 for zero.
    #[inline]
    pub const fn find_first_set(self) -> u32 {
        if self.is_zero() {
            0
        } else {
            self.trailing_zeros() + 1
        }
    }

    /// 1-based index of the highest set bit, 0 for zero.
    #[inline]
    pub const fn find_last_set(self) -> u32 {
        self.effective_bits()
    }

    // ========================================================================
    // Powers of two
    // ========================================================================

    /// Largest power of two not greater than `self`; zero for zero.
    pub const fn bit_floor(self) -> Self {
        if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE.shift_left(self.effective_bits() - 1)
        }
    }

    /// Smallest power of two not less than `self`, or `None` if that is
    /// 2^128. Zero rounds up to one.
    pub const fn checked_next_power_of_two(self) -> Option<Self> {
        if self.is_zero() || self.is_power_of_two() {
            return Some(if self.is_zero() { Self::ONE } else { self });
        }
        let width = self.effective_bits();
        if width >= Self::BITS {
            None
        } else {
            Some(Self::ONE.shift_left(width))
        }
    }

    // ========================================================================
    // Rotation and reordering
    // ========================================================================

    pub const fn rotate_left(self, n: u32) -> Self {
        let n = n % Self::BITS;
        if n == 0 {
            return self;
        }
        self.shift_left(n).bit_or(self.shift_right(Self::BITS - n))
    }

    pub const fn rotate_right(self, n: u32) -> Self {
        let n = n % Self::BITS;
        if n == 0 {
            return self;
        }
        self.shift_right(n).bit_or(self.shift_left(Self::BITS - n))
    }

    /// Mirror the bit order: bit 0 becomes bit 127.
    pub const fn reverse_bits(self) -> Self {
        Self::from_parts(self.low().reverse_bits(), self.high().reverse_bits())
    }

    /// Reverse the byte order.
    pub const fn swap_bytes(self) -> Self {
        Self::from_parts(self.low().swap_bytes(), self.high().swap_bytes())
    }

    // ========================================================================
    // Single bits and bit fields
    // ========================================================================

    /// Bit at `pos`; positions of 128 or more read as zero.
    #[inline]
    pub const fn bit(self, pos: u32) -> bool {
        pos < Self::BITS && !self.shift_right(pos).bit_and(Self::ONE).is_zero()
    }

    /// Copy with bit `pos` set to `value`. Out-of-range positions are ignored.
    #[inline]
    pub const fn with_bit(self, pos: u32, value: bool) -> Self {
        let mask = Self::ONE.shift_left(pos);
        if value {
            self.bit_or(mask)
        } else {
            self.bit_and(mask.bit_not())
        }
    }

    /// Copy with bit `pos` flipped. Out-of-range positions are ignored.
    #[inline]
    pub const fn toggle_bit(self, pos: u32) -> Self {
        self.bit_xor(Self::ONE.shift_left(pos))
    }

    /// The `width` bits starting at `offset`, moved down to bit 0.
    pub const fn extract_bits(self, offset: u32, width: u32) -> Self {
        if offset >= Self::BITS {
            return Self::ZERO;
        }
        self.shift_right(offset).bit_and(Self::low_mask(width))
    }

    /// Replace the `width` bits at `offset` with the low bits of `src`.
    pub const fn insert_bits(self, src: Self, offset: u32, width: u32) -> Self {
        if offset >= Self::BITS {
            return self;
        }
        let field = Self::low_mask(width).shift_left(offset);
        let placed = src.shift_left(offset).bit_and(field);
        self.bit_and(field.bit_not()).bit_or(placed)
    }

    // ========================================================================
    // Byte views
    // ========================================================================

    pub const fn to_le_bytes(self) -> [u8; 16] {
        let lo = self.low().to_le_bytes();
        let hi = self.high().to_le_bytes();
        let mut out = [0u8; 16];
        let mut i = 0;
        while i < 8 {
            out[i] = lo[i];
            out[i + 8] = hi[i];
            i += 1;
        }
        out
    }

    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.swap_bytes().to_le_bytes()
    }

    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        let mut i = 0;
        while i < 8 {
            lo[i] = bytes[i];
            hi[i] = bytes[i + 8];
            i += 1;
        }
        Self::from_parts(u64::from_le_bytes(hi), u64::from_le_bytes(lo))
    }

    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_le_bytes(bytes).swap_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(v: u128) -> U128 {
        U128::from_parts((v >> 64) as u64, v as u64)
    }

    #[test]
    fn test_zero_counts() {
        assert_eq!(U128::ZERO.leading_zeros(), 128);
        assert_eq!(U128::ZERO.trailing_zeros(), 128);
        assert_eq!(U128::ONE.leading_zeros(), 127);
        assert_eq!(U128::ONE.trailing_zeros(), 0);
        assert_eq!(U128::from_parts(1, 0).trailing_zeros(), 64);
        assert_eq!(U128::from_parts(1, 0).leading_zeros(), 63);
    }

    #[test]
    fn test_counts_match_native_on_every_single_bit() {
        for i in 0..128 {
            let v = 1u128 << i;
            assert_eq!(u(v).leading_zeros(), v.leading_zeros());
            assert_eq!(u(v).trailing_zeros(), v.trailing_zeros());
            assert_eq!(u(v).effective_bits(), 128 - v.leading_zeros());
            assert!(u(v).is_power_of_two());
        }
    }

    #[test]
    fn test_ones() {
        assert_eq!(U128::MAX.count_ones(), 128);
        assert_eq!(U128::MAX.leading_ones(), 128);
        assert_eq!(u(0b0111).trailing_ones(), 3);
        assert_eq!(U128::from_parts(u64::MAX, 0).leading_ones(), 64);
        assert_eq!(U128::ZERO.count_zeros(), 128);
    }

    #[test]
    fn test_power_of_two() {
        assert!(!U128::ZERO.is_power_of_two());
        assert!(!u(6).is_power_of_two());
        assert!(!U128::MAX.is_power_of_two());
    }

    #[test]
    fn test_find_set() {
        assert_eq!(U128::ZERO.find_first_set(), 0);
        assert_eq!(U128::ZERO.find_last_set(), 0);
        assert_eq!(u(0b1100).find_first_set(), 3);
        assert_eq!(u(0b1100).find_last_set(), 4);
        assert_eq!(U128::MAX.find_last_set(), 128);
    }

    #[test]
    fn test_bit_floor_and_ceil() {
        assert_eq!(U128::ZERO.bit_floor(), U128::ZERO);
        assert_eq!(u(100).bit_floor(), u(64));
        assert_eq!(U128::MAX.bit_floor(), U128::ONE << 127u32);

        assert_eq!(U128::ZERO.checked_next_power_of_two(), Some(U128::ONE));
        assert_eq!(u(64).checked_next_power_of_two(), Some(u(64)));
        assert_eq!(u(65).checked_next_power_of_two(), Some(u(128)));
        assert_eq!(U128::MAX.checked_next_power_of_two(), None);
        assert_eq!(
            (U128::ONE << 127u32).checked_next_power_of_two(),
            Some(U128::ONE << 127u32)
        );
    }

    #[test]
    fn test_rotate() {
        let v = 0x8000_0000_0000_0000_0000_0000_0000_0001u128;
        for n in [0, 1, 63, 64, 65, 127, 128, 300] {
            assert_eq!(u(v).rotate_left(n), u(v.rotate_left(n)), "rotl {n}");
            assert_eq!(u(v).rotate_right(n), u(v.rotate_right(n)), "rotr {n}");
        }
    }

    #[test]
    fn test_reverse_and_swap() {
        let v = 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210u128;
        assert_eq!(u(v).reverse_bits(), u(v.reverse_bits()));
        assert_eq!(u(v).swap_bytes(), u(v.swap_bytes()));
    }

    #[test]
    fn test_single_bits() {
        let v = U128::ZERO.with_bit(100, true);
        assert!(v.bit(100));
        assert!(!v.bit(99));
        assert!(!v.bit(200));
        assert_eq!(v.with_bit(100, false), U128::ZERO);
        assert_eq!(v.toggle_bit(100), U128::ZERO);
        assert_eq!(U128::ZERO.toggle_bit(0), U128::ONE);
        assert_eq!(U128::ZERO.with_bit(128, true), U128::ZERO);
    }

    #[test]
    fn test_bit_fields() {
        let v = u(0xabcd_0000_0000_0000_0000);
        assert_eq!(v.extract_bits(64, 16), u(0xabcd));
        assert_eq!(v.extract_bits(68, 8), u(0xbc));
        assert_eq!(v.extract_bits(200, 8), U128::ZERO);

        let w = U128::ZERO.insert_bits(u(0xff_ff), 60, 8);
        assert_eq!(w, u(0xff << 60));
        let x = U128::MAX.insert_bits(U128::ZERO, 0, 128);
        assert_eq!(x, U128::ZERO);
    }

    #[test]
    fn test_bytes() {
        let v = 0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10u128;
        assert_eq!(u(v).to_le_bytes(), v.to_le_bytes());
        assert_eq!(u(v).to_be_bytes(), v.to_be_bytes());
        assert_eq!(U128::from_le_bytes(v.to_le_bytes()), u(v));
        assert_eq!(U128::from_be_bytes(v.to_be_bytes()), u(v));
    }
}
