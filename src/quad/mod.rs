/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! A 128-bit binary float: a 64-bit sign-and-fraction significand next to
//! a 64-bit signed binary exponent, trading some of [`BigDouble`](crate::BigDouble)'s
//! range for close to `f64`-competitive precision.

pub(crate) mod arith;
pub mod format;
pub(crate) mod pow;
pub(crate) mod sentinel;

use std::ops::{Shl, Shr};
use std::str::FromStr;

use crate::error::NumError;
use crate::powers::nlz;
use sentinel::{classify, Category};

/// Sign bit of the 64-bit significand word.
const SIGN_BIT: u64 = 1 << 63;
/// The 63-bit fraction field (bits 0..=62); the leading `1.` is implicit.
const FRACTION_MASK: u64 = SIGN_BIT - 1;

/// Reserved exponents, at the very bottom of `i64`'s range, that encode
/// the four non-finite sentinels rather than a real binary exponent.
const EXP_ZERO: i64 = i64::MIN;
const EXP_POSITIVE_INFINITY: i64 = i64::MIN + 1;
const EXP_NEGATIVE_INFINITY: i64 = i64::MIN + 2;
const EXP_NAN: i64 = i64::MIN + 3;

/// Largest/smallest exponent a finite `Quad` may carry. Kept well clear
/// of `i64`'s extremes so the `+1`/`-1` adjustments normalization and
/// arithmetic apply near the boundary never themselves overflow `i64`.
const EXP_CEIL: i64 = i64::MAX - 16;
const EXP_FLOOR: i64 = i64::MIN + 16;

const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// `significand * 2^exponent`.
///
/// `significand_bits`'s bit 63 is the sign, bits 62..=0 are the fraction
/// (implicit leading `1.`); `exponent` is a signed binary exponent. Four
/// reserved exponents at the bottom of `i64`'s range encode `0`, `+∞`,
/// `-∞` and `NaN` (with `significand_bits == 0`); every other exponent
/// pairs with a nonzero `significand_bits` to mean a finite value.
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    significand_bits: u64,
    exponent: i64,
}

impl Quad {
    pub const ZERO: Self = Self {
        significand_bits: 0,
        exponent: EXP_ZERO,
    };
    pub const INFINITY: Self = Self {
        significand_bits: 0,
        exponent: EXP_POSITIVE_INFINITY,
    };
    pub const NEG_INFINITY: Self = Self {
        significand_bits: 0,
        exponent: EXP_NEGATIVE_INFINITY,
    };
    pub const NAN: Self = Self {
        significand_bits: 0,
        exponent: EXP_NAN,
    };

    /// Magnitude as a 64-bit fixed-point integer in `[2^63, 2^64)`: the
    /// implicit leading one, made explicit, followed by the 63 stored
    /// fraction bits. `value = magnitude() * 2^(exponent - 63)`.
    #[inline]
    pub(crate) fn magnitude(&self) -> u64 {
        SIGN_BIT | (self.significand_bits & FRACTION_MASK)
    }

    #[inline]
    pub(crate) fn exponent_raw(&self) -> i64 {
        self.exponent
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significand_bits == 0 && self.exponent == EXP_ZERO
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.exponent == EXP_NAN
    }

    #[inline]
    pub fn is_positive_infinity(&self) -> bool {
        self.exponent == EXP_POSITIVE_INFINITY
    }

    #[inline]
    pub fn is_negative_infinity(&self) -> bool {
        self.exponent == EXP_NEGATIVE_INFINITY
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.is_positive_infinity() || self.is_negative_infinity()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// `false` for zero, `+∞` and `NaN` (none of which carry a sign).
    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        classify(self) == Category::NegativeFinite || self.is_negative_infinity()
    }

    pub(crate) fn category(&self) -> Category {
        classify(self)
    }

    /// The significand as a value in `[1, 2)` (or `(-2, -1]`).
    pub(crate) fn significand_f64(&self) -> f64 {
        let mag = self.magnitude() as f64 / TWO_POW_63;
        if self.is_sign_negative() {
            -mag
        } else {
            mag
        }
    }

    /// Builds a finite, normalized `Quad` from `value = magnitude *
    /// 2^(exponent - 63)`, shifting `magnitude` into `[2^63, 2^64)` (and
    /// adjusting `exponent` to compensate) if it isn't already there, and
    /// saturating to a sentinel if the result lands outside the
    /// representable exponent range.
    pub(crate) fn normalize(negative: bool, magnitude: u64, exponent: i64) -> Self {
        if magnitude == 0 {
            return Self::ZERO;
        }
        let shift = nlz(magnitude) as i64;
        let magnitude = magnitude << shift;
        let exponent = exponent.saturating_sub(shift);
        if exponent > EXP_CEIL {
            return if negative { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        if exponent < EXP_FLOOR {
            return Self::ZERO;
        }
        let frac = magnitude & FRACTION_MASK;
        Self {
            significand_bits: if negative { SIGN_BIT | frac } else { frac },
            exponent,
        }
    }

    pub(crate) fn from_significand_exponent(negative: bool, significand: f64, exponent: i64) -> Self {
        if !significand.is_finite() || significand <= 0.0 {
            return Self::NAN;
        }
        let magnitude = (significand * TWO_POW_63) as u64;
        Self::normalize(negative, magnitude, exponent)
    }

    pub fn from_f64(x: f64) -> Self {
        if x.is_nan() {
            return Self::NAN;
        }
        if x == f64::INFINITY {
            return Self::INFINITY;
        }
        if x == f64::NEG_INFINITY {
            return Self::NEG_INFINITY;
        }
        if x == 0.0 {
            return Self::ZERO;
        }
        let bits = x.to_bits();
        let negative = (bits >> 63) & 1 == 1;
        let biased_exp = ((bits >> 52) & 0x7FF) as i64;
        let frac52 = bits & 0x000F_FFFF_FFFF_FFFF;
        if biased_exp == 0 {
            // Subnormal: value = frac52 * 2^(-1074) = frac52 * 2^(-1011 - 63).
            return Self::normalize(negative, frac52, -1011);
        }
        let binary_exponent = biased_exp - 1023;
        let magnitude = (1u64 << 63) | (frac52 << 11);
        Self::normalize(negative, magnitude, binary_exponent)
    }

    pub fn from_i64(n: i64) -> Self {
        if n == 0 {
            return Self::ZERO;
        }
        let negative = n < 0;
        let magnitude = n.unsigned_abs();
        Self::normalize(negative, magnitude, 63)
    }

    /// Converts back to `f64`, saturating to `0`/`±∞` outside `f64`'s
    /// exponent range and truncating the low 11 fraction bits this
    /// type carries beyond `f64`'s own 52. Exponents between `f64`'s
    /// smallest normal and smallest subnormal are reproduced as `f64`
    /// subnormals rather than flushed to zero.
    pub fn to_f64(&self) -> f64 {
        match self.category() {
            Category::Nan => f64::NAN,
            Category::PositiveInfinity => f64::INFINITY,
            Category::NegativeInfinity => f64::NEG_INFINITY,
            Category::Zero => 0.0,
            Category::PositiveFinite | Category::NegativeFinite => {
                let negative = self.is_sign_negative();
                if self.exponent > 1023 {
                    return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
                }
                if self.exponent < -1074 {
                    return if negative { -0.0 } else { 0.0 };
                }
                if self.exponent < -1022 {
                    // Subnormal range: the implicit leading bit is no
                    // longer implicit, so round the full 64-bit magnitude
                    // into a 52-bit subnormal mantissa. A rounding carry
                    // out of the mantissa field lands exactly on the
                    // smallest-normal encoding for free, since IEEE-754's
                    // sign/exponent/mantissa bits are laid out contiguously.
                    let shift = (-1022 - self.exponent) as u32 + 11;
                    let half = 1u128 << (shift - 1);
                    let mantissa = ((self.magnitude() as u128 + half) >> shift) as u64;
                    let bits = ((negative as u64) << 63) | mantissa;
                    return f64::from_bits(bits);
                }
                let frac63 = self.significand_bits & FRACTION_MASK;
                let biased = (self.exponent + 1023) as u64;
                let bits = ((negative as u64) << 63) | (biased << 52) | (frac63 >> 11);
                f64::from_bits(bits)
            }
        }
    }

    /// Fails for non-finite values and magnitudes outside `i64`'s range.
    pub fn to_i64(&self) -> Result<i64, NumError> {
        match self.category() {
            Category::Nan | Category::PositiveInfinity | Category::NegativeInfinity => {
                Err(NumError::InvalidCast("value is not finite"))
            }
            Category::Zero => Ok(0),
            _ => {
                let v = self.to_f64();
                // `i64::MAX as f64` rounds up to exactly 2^63, one past the
                // true maximum, so the upper bound is an exclusive `<`;
                // `i64::MIN as f64` is exactly -2^63 and is reachable.
                if v < -TWO_POW_63 || v >= TWO_POW_63 {
                    Err(NumError::InvalidCast("value out of range for i64"))
                } else {
                    Ok(v as i64)
                }
            }
        }
    }

    /// Fails for non-finite values, negative values, and magnitudes
    /// outside `u64`'s range.
    pub fn to_u64(&self) -> Result<u64, NumError> {
        match self.category() {
            Category::Nan | Category::PositiveInfinity | Category::NegativeInfinity => {
                Err(NumError::InvalidCast("value is not finite"))
            }
            Category::Zero => Ok(0),
            Category::NegativeFinite => Err(NumError::InvalidCast("value is negative")),
            Category::PositiveFinite => {
                let v = self.to_f64();
                // `u64::MAX as f64` rounds up to exactly 2^64.
                if v >= 18_446_744_073_709_551_616.0 {
                    Err(NumError::InvalidCast("value out of range for u64"))
                } else {
                    Ok(v as u64)
                }
            }
        }
    }

    pub fn abs(self) -> Self {
        match self.category() {
            Category::NegativeFinite => Self {
                significand_bits: self.significand_bits & FRACTION_MASK,
                exponent: self.exponent,
            },
            Category::NegativeInfinity => Self::INFINITY,
            _ => self,
        }
    }

    /// `-1`, `0` or `1`; `NaN` has no sign and returns `NaN`.
    pub fn sign(&self) -> Self {
        match self.category() {
            Category::Nan => Self::NAN,
            Category::Zero => Self::ZERO,
            Category::PositiveFinite | Category::PositiveInfinity => Self::from_i64(1),
            Category::NegativeFinite | Category::NegativeInfinity => Self::from_i64(-1),
        }
    }

    pub fn max(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self >= other { self } else { other }
    }

    pub fn min(self, other: Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self <= other { self } else { other }
    }

    pub fn reciprocal(self) -> Self {
        Self::from_i64(1) / self
    }

    /// `true` if `self` and `other` differ by no more than `tolerance`
    /// times the larger magnitude (or by no more than `tolerance` itself,
    /// whichever is greater, so comparisons near zero don't demand
    /// unreachable precision).
    pub fn eq_tolerance(self, other: Self, tolerance: Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self == other {
            return true;
        }
        let diff = (self - other).abs();
        let scale = self.abs().max(other.abs()) * tolerance;
        diff <= scale.max(tolerance)
    }

    pub fn eq_tolerance_default(self, other: Self) -> bool {
        self.eq_tolerance(other, Self::from_f64(crate::consts::DEFAULT_TOLERANCE))
    }

    /// The next representable value strictly greater than `self`, moving
    /// through the fraction field and carrying into the exponent at the
    /// `2^64` boundary the same way an IEEE-754 increment does.
    pub fn increment(self) -> Self {
        match self.category() {
            Category::Nan | Category::PositiveInfinity | Category::NegativeInfinity => self,
            Category::Zero => Self::normalize(false, 1u64 << 63, EXP_FLOOR),
            Category::PositiveFinite => {
                let mag = self.magnitude();
                if mag == u64::MAX {
                    Self::normalize(false, 1u64 << 63, self.exponent.saturating_add(1))
                } else {
                    Self::normalize(false, mag + 1, self.exponent)
                }
            }
            Category::NegativeFinite => {
                // Magnitude shrinks toward zero; normalize() renormalizes
                // the mantissa shift if it drops below 2^63.
                Self::normalize(true, self.magnitude() - 1, self.exponent)
            }
        }
    }

    /// The next representable value strictly less than `self`.
    pub fn decrement(self) -> Self {
        self.neg_checked().increment().neg_checked()
    }

    fn neg_checked(self) -> Self {
        match self.category() {
            Category::PositiveFinite => Self {
                significand_bits: SIGN_BIT | (self.significand_bits & FRACTION_MASK),
                exponent: self.exponent,
            },
            Category::NegativeFinite => Self {
                significand_bits: self.significand_bits & FRACTION_MASK,
                exponent: self.exponent,
            },
            Category::PositiveInfinity => Self::NEG_INFINITY,
            Category::NegativeInfinity => Self::INFINITY,
            Category::Zero | Category::Nan => self,
        }
    }
}

impl Default for Quad {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Quad {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<i64> for Quad {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl TryFrom<Quad> for i64 {
    type Error = NumError;
    fn try_from(value: Quad) -> Result<Self, Self::Error> {
        value.to_i64()
    }
}

impl TryFrom<Quad> for u64 {
    type Error = NumError;
    fn try_from(value: Quad) -> Result<Self, Self::Error> {
        value.to_u64()
    }
}

impl FromStr for Quad {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        format::parse(s)
    }
}

/// Scales by `2^rhs`, i.e. shifts the binary exponent directly.
impl Shl<i64> for Quad {
    type Output = Self;

    fn shl(self, rhs: i64) -> Self {
        if !self.category().is_finite_nonzero() {
            return self;
        }
        Self::normalize(
            self.is_sign_negative(),
            self.magnitude(),
            self.exponent.saturating_add(rhs),
        )
    }
}

/// Scales by `2^-rhs`.
impl Shr<i64> for Quad {
    type Output = Self;

    fn shr(self, rhs: i64) -> Self {
        if !self.category().is_finite_nonzero() {
            return self;
        }
        Self::normalize(
            self.is_sign_negative(),
            self.magnitude(),
            self.exponent.saturating_sub(rhs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_simple_integers() {
        for n in [0i64, 1, -1, 2, -7, 1_000_000, i64::MAX / 4] {
            let q = Quad::from_i64(n);
            assert!((q.to_f64() - n as f64).abs() <= n.unsigned_abs() as f64 * 1e-18 + 1e-9);
        }
    }

    #[test]
    fn round_trips_through_f64() {
        for x in [1.5, -1.5, 0.1, 123456.789, -0.0004, 1e100, -1e-100] {
            let q = Quad::from_f64(x);
            let back = q.to_f64();
            assert!((back - x).abs() <= x.abs() * 1e-12 + 1e-300);
        }
    }

    #[test]
    fn zero_and_sentinels_round_trip() {
        assert_eq!(Quad::from_f64(0.0).to_f64(), 0.0);
        assert_eq!(Quad::from_f64(f64::INFINITY).to_f64(), f64::INFINITY);
        assert_eq!(Quad::from_f64(f64::NEG_INFINITY).to_f64(), f64::NEG_INFINITY);
        assert!(Quad::from_f64(f64::NAN).to_f64().is_nan());
    }

    #[test]
    fn subnormal_round_trips() {
        for x in [5e-324, -5e-324] {
            let q = Quad::from_f64(x);
            assert_eq!(q.to_f64(), x);
        }
        // A subnormal away from either boundary also round-trips exactly.
        let mid = f64::from_bits(1u64 << 30);
        assert_eq!(Quad::from_f64(mid).to_f64(), mid);
    }

    #[test]
    fn shift_scales_by_power_of_two() {
        let one = Quad::from_i64(1);
        assert_eq!((one << 3).to_f64(), 8.0);
        assert_eq!((one >> 1).to_f64(), 0.5);
    }

    #[test]
    fn cast_to_i64_rejects_non_finite() {
        assert!(Quad::NAN.to_i64().is_err());
        assert!(Quad::INFINITY.to_i64().is_err());
        assert_eq!(Quad::from_i64(42).to_i64().unwrap(), 42);
    }

    #[test]
    fn cast_to_u64_rejects_negative() {
        assert!(Quad::from_i64(-1).to_u64().is_err());
        assert_eq!(Quad::from_i64(42).to_u64().unwrap(), 42);
    }

    #[test]
    fn abs_strips_sign() {
        assert_eq!(Quad::from_i64(-5).abs().to_f64(), 5.0);
        assert_eq!(Quad::NEG_INFINITY.abs().to_f64(), f64::INFINITY);
    }

    #[test]
    fn sign_reports_direction() {
        assert_eq!(Quad::from_i64(5).sign().to_f64(), 1.0);
        assert_eq!(Quad::from_i64(-5).sign().to_f64(), -1.0);
        assert_eq!(Quad::ZERO.sign().to_f64(), 0.0);
        assert!(Quad::NAN.sign().is_nan());
    }

    #[test]
    fn min_max_propagate_nan() {
        let a = Quad::from_i64(3);
        let b = Quad::from_i64(7);
        assert_eq!(a.max(b).to_f64(), 7.0);
        assert_eq!(a.min(b).to_f64(), 3.0);
        assert!(a.max(Quad::NAN).is_nan());
    }

    #[test]
    fn increment_moves_toward_positive_infinity() {
        let x = Quad::from_i64(1);
        let incremented = x.increment();
        assert!(incremented.to_f64() > x.to_f64());
        assert!(incremented.decrement().eq_tolerance_default(x));
    }

    #[test]
    fn increment_from_zero_gives_smallest_positive() {
        let smallest = Quad::ZERO.increment();
        assert!(smallest.to_f64() >= 0.0);
        assert!(!smallest.is_sign_negative());
    }
}
