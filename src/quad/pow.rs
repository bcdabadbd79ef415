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
//! Logarithms, `pow`, `exp`, roots, hyperbolics and `factorial` for
//! [`Quad`]. Unlike `BigDouble`'s base-10 pair, `Quad`'s own significand
//! and binary exponent make log-space math naturally base-2: every op
//! here that needs to leave `f64`'s range goes through [`Quad::from_log2`],
//! which is this module's `2^t` builder (the binary-exponent analogue of
//! `BigDouble::normalize`).

use super::{Quad, EXP_CEIL, EXP_FLOOR};
use crate::consts::LN2;

impl Quad {
    /// `log2(self)`, returned as a plain `f64` — taking a log collapses
    /// the value back into `f64`'s own range.
    pub fn log2(self) -> f64 {
        if self.is_nan() || self.is_sign_negative() {
            return f64::NAN;
        }
        if self.is_zero() {
            return f64::NEG_INFINITY;
        }
        if self.is_positive_infinity() {
            return f64::INFINITY;
        }
        self.exponent_raw() as f64 + self.significand_f64().log2()
    }

    pub fn ln(self) -> f64 {
        self.log2() * LN2
    }

    pub fn log10(self) -> f64 {
        self.ln() * std::f64::consts::LOG10_E
    }

    pub fn log(self, base: f64) -> f64 {
        self.ln() / base.ln()
    }

    /// Builds `2^log2_magnitude` (optionally negated), saturating to a
    /// sentinel once the binary exponent runs past what `Quad` can hold.
    fn from_log2(negative: bool, log2_magnitude: f64) -> Self {
        if log2_magnitude.is_nan() {
            return Self::NAN;
        }
        if log2_magnitude == f64::NEG_INFINITY {
            return Self::ZERO;
        }
        if log2_magnitude == f64::INFINITY || log2_magnitude > EXP_CEIL as f64 {
            return if negative { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        if log2_magnitude < EXP_FLOOR as f64 {
            return Self::ZERO;
        }
        let exponent = log2_magnitude.floor();
        let frac = log2_magnitude - exponent;
        let significand = 2f64.powf(frac);
        Self::from_significand_exponent(negative, significand, exponent as i64)
    }

    /// `e^self`, treating `self` as the exponent.
    pub fn exp(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_positive_infinity() {
            return Self::INFINITY;
        }
        if self.is_negative_infinity() {
            return Self::ZERO;
        }
        let x = self.to_f64();
        if x.abs() < 300.0 {
            return Self::from_f64(x.exp());
        }
        // e^x is always positive; only its magnitude can leave f64's range.
        Self::from_log2(false, x / LN2)
    }

    /// `self^p`: an integer-exponent fast path via binary exponentiation
    /// (reusing `Mul` and `reciprocal`, which also inherits their
    /// saturation behavior for free), and a log-space fallback for
    /// fractional exponents.
    pub fn pow(self, p: f64) -> Self {
        if self.is_nan() || p.is_nan() {
            return Self::NAN;
        }
        if p == 0.0 {
            return Self::from_i64(1);
        }
        if self.is_zero() {
            return if p > 0.0 { Self::ZERO } else { Self::INFINITY };
        }
        if self.is_sign_negative() && p.fract() != 0.0 {
            return Self::NAN;
        }
        if self.is_infinite() {
            let negative = self.is_sign_negative() && is_odd_integer(p);
            return if p > 0.0 {
                if negative { Self::NEG_INFINITY } else { Self::INFINITY }
            } else {
                Self::ZERO
            };
        }
        if p.fract() == 0.0 && p.abs() < 9_000_000_000_000_000.0 {
            return pow_integer_binexp(self, p as i64);
        }
        let negative = self.is_sign_negative() && is_odd_integer(p);
        Self::from_log2(negative, self.abs().log2() * p)
    }

    pub fn sqrt(self) -> Self {
        if self.is_sign_negative() && !self.is_zero() {
            return Self::NAN;
        }
        self.pow(0.5)
    }

    pub fn cbrt(self) -> Self {
        if self.is_zero() {
            return self;
        }
        let magnitude = self.abs().pow(1.0 / 3.0);
        if self.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    pub fn sinh(self) -> Self {
        Self::from_f64(self.to_f64().sinh())
    }

    pub fn cosh(self) -> Self {
        Self::from_f64(self.to_f64().cosh())
    }

    pub fn tanh(self) -> Self {
        Self::from_f64(self.to_f64().tanh())
    }

    pub fn asinh(self) -> Self {
        Self::from_f64(self.to_f64().asinh())
    }

    pub fn acosh(self) -> Self {
        Self::from_f64(self.to_f64().acosh())
    }

    pub fn atanh(self) -> Self {
        Self::from_f64(self.to_f64().atanh())
    }

    /// Stirling's approximation in log2 space: `log2(n!) ~=
    /// 0.5*log2(2*pi*n) + n*(log2(n) - log2(e))`.
    pub fn factorial(self) -> Self {
        let n = self.to_f64();
        if n.is_nan() {
            return Self::NAN;
        }
        if n < 0.0 {
            return Self::NAN;
        }
        if n == 0.0 || n == 1.0 {
            return Self::from_i64(1);
        }
        let log2_n_factorial =
            0.5 * (2.0 * std::f64::consts::PI * n).log2() + n * (n.log2() - std::f64::consts::LOG2_E);
        Self::from_log2(false, log2_n_factorial)
    }
}

impl num_traits::Pow<f64> for Quad {
    type Output = Self;

    fn pow(self, rhs: f64) -> Self {
        Quad::pow(self, rhs)
    }
}

fn is_odd_integer(p: f64) -> bool {
    p.fract() == 0.0 && p.rem_euclid(2.0) != 0.0
}

fn pow_integer_binexp(base: Quad, exp: i64) -> Quad {
    if exp == 0 {
        return Quad::from_i64(1);
    }
    let negative_exp = exp < 0;
    let mut e = exp.unsigned_abs();
    let mut result = Quad::from_i64(1);
    let mut b = base;
    while e > 0 {
        if e & 1 == 1 {
            result = result * b;
        }
        b = b * b;
        e >>= 1;
    }
    if negative_exp { result.reciprocal() } else { result }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log2_and_exp_round_trip() {
        let x = Quad::from_f64(1024.0);
        assert!((x.log2() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn integer_pow_matches_f64_in_range() {
        let base = Quad::from_f64(1.5);
        let p = base.pow(4.0);
        assert!((p.to_f64() - 1.5f64.powi(4)).abs() < 1e-9);
    }

    #[test]
    fn pow_survives_overflow_of_f64_range() {
        let base = Quad::from_f64(1.15);
        let p = base.pow(6000.0);
        assert!(p.is_finite());
        // log10(1.15^6000) = 6000*log10(1.15) ~= 362.8
        assert!((p.log10() - 362.8).abs() < 1.0);
    }

    #[test]
    fn negative_base_odd_integer_power_keeps_sign() {
        let base = Quad::from_f64(-2.0);
        assert!(base.pow(3.0).is_sign_negative());
        assert!(!base.pow(2.0).is_sign_negative());
    }

    #[test]
    fn negative_base_fractional_power_is_nan() {
        assert!(Quad::from_f64(-4.0).pow(0.5).is_nan());
    }

    #[test]
    fn sqrt_matches_f64() {
        let x = Quad::from_f64(2.0);
        assert!((x.sqrt().to_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn cbrt_of_negative_keeps_sign() {
        let x = Quad::from_f64(-27.0);
        assert!((x.cbrt().to_f64() - (-3.0)).abs() < 1e-9);
    }

    #[test]
    fn factorial_matches_known_small_values() {
        // Stirling's approximation is only asymptotic; small `n` needs a
        // relative, not absolute, tolerance (same bound as BigDouble's
        // equivalent test).
        assert!((Quad::from_i64(5).factorial().to_f64() - 120.0).abs() / 120.0 < 0.02);
        assert!((Quad::from_i64(0).factorial().to_f64() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn negative_integer_pow_uses_reciprocal() {
        let base = Quad::from_f64(2.0);
        let inv = base.pow(-3.0);
        assert!((inv.to_f64() - 0.125).abs() < 1e-12);
    }
}
