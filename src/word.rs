use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Rem, Shl, Shr};
use wrapping_arithmetic::wrappit;

/// State word of a Mersenne Twister.
/// Carries the width-specific constants and the scalar arithmetic
/// that the generic engine is built from.
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Rem<Output = Self>
{
    /// Signed integer of the same width.
    type Signed;

    const ZERO: Self;
    const ONE: Self;
    /// Twist matrix, applied when the combined word is odd.
    const MATRIX_A: Self;
    /// Most significant w - 31 bits.
    const UPPER_MASK: Self;
    /// Least significant 31 bits.
    const LOWER_MASK: Self;
    /// Most significant bit.
    const SIGN_BIT: Self;

    /// Low bits of a scalar seed.
    fn from_seed(seed: i64) -> Self;

    /// Scalar seeding recurrence: `f * (prev ^ (prev >> (w - 2))) + j`.
    fn init_step(prev: Self, j: usize) -> Self;

    /// Forward mixing step of array seeding.
    fn mix_forward(word: Self, prev: Self, key: Self, j: usize) -> Self;

    /// Reverse mixing step of array seeding.
    fn mix_backward(word: Self, prev: Self, i: usize) -> Self;

    /// Output tempering.
    fn temper(self) -> Self;

    /// Clears the sign bit and reinterprets as signed.
    fn to_non_negative(self) -> Self::Signed;

    /// Real on the closed interval [0, 1].
    fn to_real1(self) -> f64;

    /// Real on the half-open interval [0, 1).
    fn to_real2(self) -> f64;

    /// Real on the open interval (0, 1).
    fn to_real3(self) -> f64;
}

impl Word for u32 {
    type Signed = i32;

    const ZERO: u32 = 0;
    const ONE: u32 = 1;
    const MATRIX_A: u32 = 0x9908_b0df;
    const UPPER_MASK: u32 = 0x8000_0000;
    const LOWER_MASK: u32 = 0x7fff_ffff;
    const SIGN_BIT: u32 = 0x8000_0000;

    #[inline]
    fn from_seed(seed: i64) -> u32 {
        seed as u32
    }

    // Knuth TAOCP Vol. 2, 3rd ed., p. 106 multiplier.
    #[wrappit] #[inline]
    fn init_step(prev: u32, j: usize) -> u32 {
        (prev ^ (prev >> 30)) * 1812433253 + j as u32
    }

    #[wrappit] #[inline]
    fn mix_forward(word: u32, prev: u32, key: u32, j: usize) -> u32 {
        (word ^ ((prev ^ (prev >> 30)) * 1664525)) + key + j as u32
    }

    #[wrappit] #[inline]
    fn mix_backward(word: u32, prev: u32, i: usize) -> u32 {
        (word ^ ((prev ^ (prev >> 30)) * 1566083941)) - i as u32
    }

    #[inline]
    fn temper(self) -> u32 {
        let y = self ^ (self >> 11);
        let y = y ^ ((y << 7) & 0x9d2c_5680);
        let y = y ^ ((y << 15) & 0xefc6_0000);
        y ^ (y >> 18)
    }

    #[inline]
    fn to_non_negative(self) -> i32 {
        (self & !Self::SIGN_BIT) as i32
    }

    // Divided by 2^32 - 1.
    #[inline]
    fn to_real1(self) -> f64 {
        self as f64 * (1.0 / 4294967295.0)
    }

    // Divided by 2^32.
    #[inline]
    fn to_real2(self) -> f64 {
        self as f64 * (1.0 / 4294967296.0)
    }

    #[inline]
    fn to_real3(self) -> f64 {
        (self as f64 + 0.5) * (1.0 / 4294967296.0)
    }
}

impl Word for u64 {
    type Signed = i64;

    const ZERO: u64 = 0;
    const ONE: u64 = 1;
    const MATRIX_A: u64 = 0xb502_6f5a_a966_19e9;
    const UPPER_MASK: u64 = 0xffff_ffff_8000_0000;
    const LOWER_MASK: u64 = 0x7fff_ffff;
    const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

    #[inline]
    fn from_seed(seed: i64) -> u64 {
        seed as u64
    }

    #[wrappit] #[inline]
    fn init_step(prev: u64, j: usize) -> u64 {
        (prev ^ (prev >> 62)) * 6364136223846793005 + j as u64
    }

    #[wrappit] #[inline]
    fn mix_forward(word: u64, prev: u64, key: u64, j: usize) -> u64 {
        (word ^ ((prev ^ (prev >> 62)) * 3935559000370003845)) + key + j as u64
    }

    #[wrappit] #[inline]
    fn mix_backward(word: u64, prev: u64, i: usize) -> u64 {
        (word ^ ((prev ^ (prev >> 62)) * 2862933555777941757)) - i as u64
    }

    #[inline]
    fn temper(self) -> u64 {
        let x = self ^ ((self >> 29) & 0x5555_5555_5555_5555);
        let x = x ^ ((x << 17) & 0x71d6_7fff_eda6_0000);
        let x = x ^ ((x << 37) & 0xfff7_eee0_0000_0000);
        x ^ (x >> 43)
    }

    #[inline]
    fn to_non_negative(self) -> i64 {
        (self & !Self::SIGN_BIT) as i64
    }

    // The 53 high bits fill the mantissa; divided by 2^53 - 1.
    #[inline]
    fn to_real1(self) -> f64 {
        (self >> 11) as f64 * (1.0 / 9007199254740991.0)
    }

    // Divided by 2^53.
    #[inline]
    fn to_real2(self) -> f64 {
        (self >> 11) as f64 * (1.0 / 9007199254740992.0)
    }

    // 52 high bits plus one half, divided by 2^52.
    #[inline]
    fn to_real3(self) -> f64 {
        ((self >> 12) as f64 + 0.5) * (1.0 / 4503599627370496.0)
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] fn extremal_reals_stay_in_range() {
        assert_eq!(0.0, 0u32.to_real1());
        assert_eq!(1.0, u32::MAX.to_real1());
        assert_eq!(0.0, 0u32.to_real2());
        assert!(u32::MAX.to_real2() < 1.0);
        assert!(0u32.to_real3() > 0.0);
        assert!(u32::MAX.to_real3() < 1.0);

        assert_eq!(0.0, 0u64.to_real1());
        assert!(u64::MAX.to_real1() <= 1.0);
        assert!(u64::MAX.to_real1() > 0.9999999999999998);
        assert_eq!(0.0, 0u64.to_real2());
        assert!(u64::MAX.to_real2() < 1.0);
        assert!(0u64.to_real3() > 0.0);
        assert!(u64::MAX.to_real3() < 1.0);
    }

    #[test] fn reals_use_exact_denominators() {
        assert_eq!(0.5, 0x8000_0000u32.to_real2());
        assert_eq!(0.5 / 4294967296.0, 0u32.to_real3());
        assert_eq!(0.5, 0x8000_0000_0000_0000u64.to_real2());
        assert_eq!(0.5 / 4503599627370496.0, 0u64.to_real3());
    }

    #[test] fn sign_bit_is_masked() {
        assert_eq!(i32::MAX, u32::MAX.to_non_negative());
        assert_eq!(5, (0x8000_0005u32).to_non_negative());
        assert_eq!(i64::MAX, u64::MAX.to_non_negative());
        assert_eq!(0, (1u64 << 63).to_non_negative());
    }

    #[test] fn masks_split_words() {
        assert_eq!(u32::MAX, u32::UPPER_MASK | u32::LOWER_MASK);
        assert_eq!(0, u32::UPPER_MASK & u32::LOWER_MASK);
        assert_eq!(u64::MAX, u64::UPPER_MASK | u64::LOWER_MASK);
        assert_eq!(0, u64::UPPER_MASK & u64::LOWER_MASK);
    }

    #[test] fn seeding_recurrence_wraps() {
        // First step from the default seed, computed by hand modulo 2^32.
        let expected = (5489u64 * 1812433253 + 1) as u32;
        assert_eq!(expected, u32::init_step(5489, 1));
        assert_eq!(5489u64.wrapping_mul(6364136223846793005).wrapping_add(1), u64::init_step(5489, 1));
    }
}
