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
//! Bit-level `+`, `-`, `x`, `/`, and ordering for finite nonzero `Quad`s,
//! plus the trait glue that routes through [`super::sentinel`] first. The
//! source material reached for a 32-bit hi/lo multiply split and the
//! Hacker's Delight `divlu` long-division routine because its host
//! language had no native 128-bit integer; here `u128` does both jobs
//! directly.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::sentinel;
use super::Quad;

impl Quad {
    /// Aligns `b`'s magnitude to `a`'s exponent (shifting right, losing
    /// only bits below the 64-bit window) and adds or subtracts the two
    /// fixed-point magnitudes, renormalizing the 65th-bit carry (or a
    /// borrow, for subtraction) back into the shared exponent.
    fn add_magnitudes(a_mag: u64, a_exp: i64, a_neg: bool, b_mag: u64, b_exp: i64, b_neg: bool) -> Self {
        let shift = a_exp - b_exp;
        if shift > 64 {
            return Self::normalize(a_neg, a_mag, a_exp);
        }
        let b_shifted = if shift >= 64 { 0 } else { (b_mag as u128) >> shift };
        let a_wide = a_mag as u128;

        if a_neg == b_neg {
            let sum = a_wide + b_shifted;
            if sum >> 64 != 0 {
                // 65-bit carry: shift the whole sum right one bit into the
                // vacated top, bump the exponent to compensate.
                let carried = (sum >> 1) as u64;
                Self::normalize(a_neg, carried, a_exp + 1)
            } else {
                Self::normalize(a_neg, sum as u64, a_exp)
            }
        } else if a_wide >= b_shifted {
            Self::normalize(a_neg, (a_wide - b_shifted) as u64, a_exp)
        } else {
            Self::normalize(b_neg, (b_shifted - a_wide) as u64, a_exp)
        }
    }

    pub(crate) fn add_finite(self, other: Self) -> Self {
        let (a, b) = (self, other);
        // Put the larger exponent first so `add_magnitudes` only ever
        // shifts the smaller operand right.
        if a.exponent_raw() >= b.exponent_raw() {
            Self::add_magnitudes(
                a.magnitude(),
                a.exponent_raw(),
                a.is_sign_negative(),
                b.magnitude(),
                b.exponent_raw(),
                b.is_sign_negative(),
            )
        } else {
            Self::add_magnitudes(
                b.magnitude(),
                b.exponent_raw(),
                b.is_sign_negative(),
                a.magnitude(),
                a.exponent_raw(),
                a.is_sign_negative(),
            )
        }
    }

    pub(crate) fn mul_finite(self, other: Self) -> Self {
        let negative = self.is_sign_negative() != other.is_sign_negative();
        // Both magnitudes live in [2^63, 2^64); their product lives in
        // [2^126, 2^128), i.e. its top bit is bit 126 or 127.
        let product = (self.magnitude() as u128) * (other.magnitude() as u128);
        let top_bit = 127 - product.leading_zeros() as i64;
        // value = (a.magnitude * 2^(a.exp-63)) * (b.magnitude * 2^(b.exp-63))
        //       = product * 2^(a.exp + b.exp - 126)
        //       = (product >> shift) * 2^(a.exp + b.exp - 63 + shift), shift = top_bit - 63
        let shift = top_bit - 63;
        let magnitude = (product >> shift) as u64;
        let exponent = self
            .exponent_raw()
            .saturating_add(other.exponent_raw())
            .saturating_sub(63)
            .saturating_add(shift);
        Self::normalize(negative, magnitude, exponent)
    }

    pub(crate) fn div_finite(self, other: Self) -> Self {
        let negative = self.is_sign_negative() != other.is_sign_negative();
        // Widen the dividend so the quotient keeps 64 bits of precision:
        // a.magnitude (64 bits) << 64, divided by b.magnitude (64 bits),
        // gives a 64-bit quotient whose top bit is bit 63 or 64 of that
        // widened numerator (the true quotient of two values each in
        // [2^63, 2^64) always falls in (2^62, 2^65)).
        let numerator = (self.magnitude() as u128) << 64;
        let quotient = numerator / (other.magnitude() as u128);
        let top_bit = 63u32.max(quotient.ilog2()) as i64;
        // value = (a.magnitude * 2^(a.exp-63)) / (b.magnitude * 2^(b.exp-63))
        //       = (numerator / b.magnitude) * 2^(a.exp - b.exp - 64)
        //       = quotient * 2^(a.exp - b.exp - 64)
        //       = (quotient >> shift) * 2^(a.exp - b.exp - 1 + shift), shift = top_bit - 63
        let shift = top_bit - 63;
        let magnitude = (quotient >> shift) as u64;
        let exponent = self
            .exponent_raw()
            .saturating_sub(other.exponent_raw())
            .saturating_sub(1)
            .saturating_add(shift);
        Self::normalize(negative, magnitude, exponent)
    }

    /// Magnitude-only comparison of two same-signed finite nonzero
    /// values: exponent first, then the 64-bit fixed-point magnitude.
    fn cmp_finite(self, other: Self) -> Ordering {
        self.exponent_raw()
            .cmp(&other.exponent_raw())
            .then_with(|| self.magnitude().cmp(&other.magnitude()))
    }
}

pub(crate) fn add(a: Quad, b: Quad) -> Quad {
    match sentinel::add_sentinel(&a, &b) {
        Some(r) => r,
        None => a.add_finite(b),
    }
}

pub(crate) fn sub(a: Quad, b: Quad) -> Quad {
    add(a, neg(b))
}

pub(crate) fn mul(a: Quad, b: Quad) -> Quad {
    match sentinel::mul_sentinel(&a, &b) {
        Some(r) => r,
        None => a.mul_finite(b),
    }
}

pub(crate) fn div(a: Quad, b: Quad) -> Quad {
    match sentinel::div_sentinel(&a, &b) {
        Some(r) => r,
        None => a.div_finite(b),
    }
}

pub(crate) fn neg(a: Quad) -> Quad {
    a.neg_checked()
}

pub(crate) fn compare(a: &Quad, b: &Quad) -> Option<Ordering> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    match sentinel::compare_sentinel(a, b) {
        Some(ord) => Some(ord),
        None => {
            let negative = a.is_sign_negative();
            debug_assert_eq!(negative, b.is_sign_negative());
            let magnitude_order = a.cmp_finite(*b);
            Some(if negative { magnitude_order.reverse() } else { magnitude_order })
        }
    }
}

impl Add for Quad {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        add(self, rhs)
    }
}

impl Sub for Quad {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        sub(self, rhs)
    }
}

impl Mul for Quad {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        mul(self, rhs)
    }
}

impl Div for Quad {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        div(self, rhs)
    }
}

impl Neg for Quad {
    type Output = Self;
    fn neg(self) -> Self {
        neg(self)
    }
}

impl AddAssign for Quad {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quad {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Quad {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Quad {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl PartialEq for Quad {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Quad {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_matches_f64_for_representable_values() {
        let a = Quad::from_f64(1.5);
        let b = Quad::from_f64(2.25);
        assert!((a + b).to_f64() - 3.75 < 1e-12);
    }

    #[test]
    fn sub_of_equal_magnitudes_is_zero() {
        let a = Quad::from_i64(7);
        assert!((a - a).is_zero());
    }

    #[test]
    fn mul_of_reciprocals_is_one() {
        let a = Quad::from_f64(3.0);
        let r = a.reciprocal();
        let product = a * r;
        assert!((product.to_f64() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn div_one_over_one_is_one() {
        let one = Quad::from_i64(1);
        assert_eq!((one / one).to_f64(), 1.0);
    }

    #[test]
    fn div_one_over_two_is_half() {
        let one = Quad::from_i64(1);
        let two = Quad::from_i64(2);
        assert_eq!((one / two).to_f64(), 0.5);
    }

    #[test]
    fn div_by_zero_matches_ieee754() {
        let one = Quad::from_i64(1);
        assert!((one / Quad::ZERO).is_positive_infinity());
        assert!((Quad::ZERO / Quad::ZERO).is_nan());
    }

    #[test]
    fn ordering_handles_mixed_signs_and_magnitudes() {
        let small = Quad::from_f64(0.001);
        let big = Quad::from_f64(1e50);
        assert!(small < big);
        assert!(-big < small);
        assert!(Quad::from_i64(5) > Quad::from_i64(-5));
    }

    #[test]
    fn large_magnitude_arithmetic_stays_finite() {
        let a = Quad::from_f64(1e300);
        let b = Quad::from_f64(1e300);
        let product = a * b;
        assert!(product.is_finite());
        assert!(product.to_f64().is_infinite()); // 1e600 overflows f64 but not Quad
    }

    #[test]
    fn negation_round_trips() {
        let a = Quad::from_f64(42.5);
        assert_eq!(-(-a), a);
        assert!((a + (-a)).is_zero());
    }
}
