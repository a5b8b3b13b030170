//! Single-word (limb) primitives.
//!
//! Everything above this module is built from these operations. Each one
//! has two implementations: the default one leans on the compiler (which
//! lowers `u128` widening and `leading_zeros` to dedicated instructions where
//! the target has them), and a `*_portable` twin that only uses 64-bit
//! arithmetic. The `portable` feature routes the public entry points through
//! the twins. Both must agree bit-for-bit on every input.

/// Number of bits in one limb.
pub const LIMB_BITS: u32 = 64;

// ============================================================================
// Dispatching entry points
// ============================================================================

/// Add with carry: `(sum, carry_out) = a + b + carry_in`.
///
/// `carry_in` must be 0 or 1; `carry_out` is always 0 or 1.
///
/// ```
/// use int128::limb::add_with_carry;
///
/// assert_eq!(add_with_carry(u64::MAX, 1, 0), (0, 1));
/// assert_eq!(add_with_carry(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
/// ```
#[inline(always)]
pub const fn add_with_carry(a: u64, b: u64, carry_in: u64) -> (u64, u64) {
    if cfg!(feature = "portable") {
        add_with_carry_portable(a, b, carry_in)
    } else {
        add_with_carry_native(a, b, carry_in)
    }
}

/// Subtract with borrow: `(diff, borrow_out) = a - b - borrow_in`.
///
/// ```
/// use int128::limb::sub_with_borrow;
///
/// assert_eq!(sub_with_borrow(0, 1, 0), (u64::MAX, 1));
/// assert_eq!(sub_with_borrow(5, 3, 1), (1, 0));
/// ```
#[inline(always)]
pub const fn sub_with_borrow(a: u64, b: u64, borrow_in: u64) -> (u64, u64) {
    if cfg!(feature = "portable") {
        sub_with_borrow_portable(a, b, borrow_in)
    } else {
        sub_with_borrow_native(a, b, borrow_in)
    }
}

/// Widening multiply: `(low, high)` of the exact 128-bit product `a * b`.
#[inline(always)]
pub const fn widening_mul(a: u64, b: u64) -> (u64, u64) {
    if cfg!(feature = "portable") {
        widening_mul_portable(a, b)
    } else {
        widening_mul_native(a, b)
    }
}

/// Leading zero bits of `word`; 64 for zero.
#[inline(always)]
pub const fn leading_zero_count(word: u64) -> u32 {
    if cfg!(feature = "portable") {
        leading_zero_count_portable(word)
    } else {
        word.leading_zeros()
    }
}

/// Trailing zero bits of `word`; 64 for zero.
#[inline(always)]
pub const fn trailing_zero_count(word: u64) -> u32 {
    if cfg!(feature = "portable") {
        trailing_zero_count_portable(word)
    } else {
        word.trailing_zeros()
    }
}

/// Number of set bits in `word`.
#[inline(always)]
pub const fn population_count(word: u64) -> u32 {
    if cfg!(feature = "portable") {
        population_count_portable(word)
    } else {
        word.count_ones()
    }
}

// ============================================================================
// Native implementations
// ============================================================================

#[inline(always)]
const fn add_with_carry_native(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

#[inline(always)]
const fn sub_with_borrow_native(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let tmp = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (tmp as u64, (tmp >> 127) as u64)
}

#[inline(always)]
const fn widening_mul_native(a: u64, b: u64) -> (u64, u64) {
    let tmp = a as u128 * b as u128;
    (tmp as u64, (tmp >> 64) as u64)
}

// ============================================================================
// Portable implementations (64-bit arithmetic only)
// ============================================================================

/// Portable [`add_with_carry`].
#[inline]
pub const fn add_with_carry_portable(a: u64, b: u64, carry_in: u64) -> (u64, u64) {
    let partial = a.wrapping_add(b);
    let c1 = (partial < a) as u64;
    let sum = partial.wrapping_add(carry_in);
    let c2 = (sum < partial) as u64;
    (sum, c1 | c2)
}

/// Portable [`sub_with_borrow`].
#[inline]
pub const fn sub_with_borrow_portable(a: u64, b: u64, borrow_in: u64) -> (u64, u64) {
    let partial = a.wrapping_sub(b);
    let b1 = (a < b) as u64;
    let diff = partial.wrapping_sub(borrow_in);
    let b2 = (partial < borrow_in) as u64;
    (diff, b1 | b2)
}

/// Portable [`widening_mul`]: four 32×32→64 partial products.
///
/// ```text
///              a_hi a_lo
///            × b_hi b_lo
///   -----------------------
///              [ lo_lo  ]
///         [ hi_lo  ]
///         [ lo_hi  ]
///    [ hi_hi  ]
/// ```
#[inline]
pub const fn widening_mul_portable(a: u64, b: u64) -> (u64, u64) {
    const MASK: u64 = 0xffff_ffff;
    let (a_lo, a_hi) = (a & MASK, a >> 32);
    let (b_lo, b_hi) = (b & MASK, b >> 32);

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    // Middle column: at most 3 * (2^32 - 1), no overflow.
    let cross = (lo_lo >> 32) + (hi_lo & MASK) + (lo_hi & MASK);
    let low = (cross << 32) | (lo_lo & MASK);
    let high = hi_hi + (hi_lo >> 32) + (lo_hi >> 32) + (cross >> 32);
    (low, high)
}

/// Portable [`leading_zero_count`]: binary search over halving windows.
#[inline]
pub const fn leading_zero_count_portable(word: u64) -> u32 {
    if word == 0 {
        return LIMB_BITS;
    }
    let mut x = word;
    let mut n = 0;
    if x & 0xffff_ffff_0000_0000 == 0 {
        n += 32;
        x <<= 32;
    }
    if x & 0xffff_0000_0000_0000 == 0 {
        n += 16;
        x <<= 16;
    }
    if x & 0xff00_0000_0000_0000 == 0 {
        n += 8;
        x <<= 8;
    }
    if x & 0xf000_0000_0000_0000 == 0 {
        n += 4;
        x <<= 4;
    }
    if x & 0xc000_0000_0000_0000 == 0 {
        n += 2;
        x <<= 2;
    }
    if x & 0x8000_0000_0000_0000 == 0 {
        n += 1;
    }
    n
}

/// Portable [`trailing_zero_count`].
#[inline]
pub const fn trailing_zero_count_portable(word: u64) -> u32 {
    if word == 0 {
        return LIMB_BITS;
    }
    let mut x = word;
    let mut n = 0;
    if x & 0xffff_ffff == 0 {
        n += 32;
        x >>= 32;
    }
    if x & 0xffff == 0 {
        n += 16;
        x >>= 16;
    }
    if x & 0xff == 0 {
        n += 8;
        x >>= 8;
    }
    if x & 0xf == 0 {
        n += 4;
        x >>= 4;
    }
    if x & 0x3 == 0 {
        n += 2;
        x >>= 2;
    }
    if x & 0x1 == 0 {
        n += 1;
    }
    n
}

/// Portable [`population_count`] (SWAR).
#[inline]
pub const fn population_count_portable(word: u64) -> u32 {
    let mut x = word;
    x -= (x >> 1) & 0x5555_5555_5555_5555;
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
    x = (x + (x >> 4)) & 0x0f0f_0f0f_0f0f_0f0f;
    (x.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u64; 12] = [
        0,
        1,
        2,
        3,
        0xffff_ffff,
        0x1_0000_0000,
        0x8000_0000_0000_0000,
        0x7fff_ffff_ffff_ffff,
        0xdead_beef_cafe_babe,
        0x0123_4567_89ab_cdef,
        u64::MAX - 1,
        u64::MAX,
    ];

    #[test]
    fn test_add_with_carry_agrees() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                for c in 0..=1 {
                    assert_eq!(
                        add_with_carry_native(a, b, c),
                        add_with_carry_portable(a, b, c),
                        "adc({a:#x}, {b:#x}, {c})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_sub_with_borrow_agrees() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                for c in 0..=1 {
                    assert_eq!(
                        sub_with_borrow_native(a, b, c),
                        sub_with_borrow_portable(a, b, c),
                        "sbb({a:#x}, {b:#x}, {c})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_widening_mul_agrees() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(widening_mul_native(a, b), widening_mul_portable(a, b));
            }
        }
    }

    #[test]
    fn test_widening_mul_max() {
        // (2^64-1)^2 = 2^128 - 2^65 + 1
        assert_eq!(widening_mul_portable(u64::MAX, u64::MAX), (1, u64::MAX - 1));
    }

    #[test]
    fn test_zero_counts_of_zero() {
        assert_eq!(leading_zero_count(0), 64);
        assert_eq!(trailing_zero_count(0), 64);
        assert_eq!(leading_zero_count_portable(0), 64);
        assert_eq!(trailing_zero_count_portable(0), 64);
    }

    #[test]
    fn test_zero_counts_every_single_bit() {
        for i in 0..64 {
            let w = 1u64 << i;
            assert_eq!(leading_zero_count_portable(w), 63 - i);
            assert_eq!(trailing_zero_count_portable(w), i);
            assert_eq!(leading_zero_count_portable(w | 1), 63 - i);
        }
    }

    #[test]
    fn test_population_count_agrees() {
        for &a in &SAMPLES {
            assert_eq!(population_count_portable(a), a.count_ones());
        }
    }

    #[test]
    fn test_carry_chain() {
        let (lo, c) = add_with_carry(u64::MAX, 1, 0);
        let (hi, c) = add_with_carry(0, 0, c);
        assert_eq!((lo, hi, c), (0, 1, 0));

        let (lo, b) = sub_with_borrow(0, 1, 0);
        let (hi, b) = sub_with_borrow(1, 0, b);
        assert_eq!((lo, hi, b), (u64::MAX, 0, 0));
    }
}
