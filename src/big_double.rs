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
//! A normalized `mantissa * 10^exponent` pair: fast, ~15-significant-digit
//! arithmetic across a base-10 exponent range of roughly ±9e15.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::consts::{
    BIG_DOUBLE_EXP_LIMIT, DEFAULT_TOLERANCE, INV_LN10, LN10, LOG2_10, MAX_SIGNIFICANT_DIGITS,
    MIN_POSITIVE_SUBNORMAL,
};
use crate::error::NumError;
use crate::format;
use crate::parse::{self, Sentinel};
use crate::powers::{self, DOUBLE_EXP_MAX, DOUBLE_EXP_MIN};

/// `mantissa * 10^exponent`.
///
/// In canonical form `mantissa` is either exactly `0.0`, a non-finite
/// sentinel (`±∞`/`NaN`), or has absolute value in `[1, 10)`. Every
/// constructor and arithmetic operation returns a canonical value;
/// nothing in this module produces a `BigDouble` outside that invariant.
#[derive(Clone, Copy, Debug)]
pub struct BigDouble {
    mantissa: f64,
    exponent: i64,
}

impl BigDouble {
    /// The unique representation of zero.
    pub const ZERO: Self = Self {
        mantissa: 0.0,
        exponent: 0,
    };
    /// Positive infinity.
    pub const INFINITY: Self = Self {
        mantissa: f64::INFINITY,
        exponent: 0,
    };
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self {
        mantissa: f64::NEG_INFINITY,
        exponent: 0,
    };
    /// Not-a-number.
    pub const NAN: Self = Self {
        mantissa: f64::NAN,
        exponent: 0,
    };

    /// Builds a value from a raw `(mantissa, exponent)` pair, normalizing
    /// it into canonical form (§4.1.1).
    #[inline]
    pub fn new(mantissa: f64, exponent: i64) -> Self {
        Self::normalize(mantissa, exponent)
    }

    /// Builds a value directly from `f64`, propagating NaN/±∞/0 to their
    /// sentinels and normalizing everything else.
    #[inline]
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
        Self::normalize(x, 0)
    }

    /// Builds a value from a signed 64-bit integer. Beyond `2^53` this is
    /// no more precise than the underlying `f64` mantissa allows — the
    /// same bound every other operation in this type is subject to.
    #[inline]
    pub fn from_i64(n: i64) -> Self {
        Self::from_f64(n as f64)
    }

    fn normalize(m: f64, e: i64) -> Self {
        if m.is_nan() {
            return Self::NAN;
        }
        if m.is_infinite() {
            return Self {
                mantissa: m,
                exponent: 0,
            };
        }
        if m == 0.0 {
            return Self::ZERO;
        }
        let abs_m = m.abs();
        if (1.0..10.0).contains(&abs_m) {
            return Self::clamp_exponent(m, e);
        }

        let k = abs_m.log10().floor() as i64;
        let mut new_m = if k == DOUBLE_EXP_MIN {
            // Dividing by the smallest representable power of ten loses
            // precision to subnormal rounding; scale through 1e-323 instead.
            (m * 10.0) / 1e-323
        } else {
            m / powers::power_of_10(k)
        };
        let mut new_e = e.saturating_add(k);

        // The log10/floor estimate can land one ULP outside [1, 10) at
        // exact powers of ten; nudge back in rather than recursing.
        if new_m.abs() >= 10.0 {
            new_m /= 10.0;
            new_e = new_e.saturating_add(1);
        } else if new_m.abs() < 1.0 {
            new_m *= 10.0;
            new_e = new_e.saturating_sub(1);
        }

        Self::clamp_exponent(new_m, new_e)
    }

    /// Applies invariant 5: an exponent magnitude beyond `EXP_LIMIT`
    /// denotes overflow and saturates to ±∞ by mantissa sign.
    fn clamp_exponent(m: f64, e: i64) -> Self {
        if e.unsigned_abs() > BIG_DOUBLE_EXP_LIMIT as u64 {
            return if m < 0.0 { Self::NEG_INFINITY } else { Self::INFINITY };
        }
        Self {
            mantissa: m,
            exponent: e,
        }
    }

    /// Converts back to `f64` (§4.1.2): sentinels propagate directly,
    /// exponents outside `f64`'s own range saturate to ±∞/0, and the
    /// subnormal boundary is special-cased. For non-negative exponents,
    /// a result within `1e-10` of an integer snaps to that integer —
    /// the scale-factor division routinely introduces FP noise like
    /// `116 -> 115.99999999999999`, and this heuristic is deliberate
    /// rather than an oversight (§9).
    pub fn to_f64(&self) -> f64 {
        if self.mantissa.is_nan() {
            return f64::NAN;
        }
        if self.mantissa.is_infinite() {
            return self.mantissa;
        }
        if self.mantissa == 0.0 {
            return 0.0;
        }
        if self.exponent > DOUBLE_EXP_MAX {
            return if self.mantissa < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        if self.exponent < DOUBLE_EXP_MIN {
            return 0.0;
        }
        if self.exponent == DOUBLE_EXP_MIN {
            return if self.mantissa < 0.0 {
                -MIN_POSITIVE_SUBNORMAL
            } else {
                MIN_POSITIVE_SUBNORMAL
            };
        }
        let v = self.mantissa * powers::power_of_10(self.exponent);
        if self.exponent >= 0 {
            let rounded = v.round();
            if (v - rounded).abs() < 1e-10 {
                return rounded;
            }
        }
        v
    }

    /// Raw mantissa of the canonical representation.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    /// Base-10 exponent of the canonical representation.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.mantissa.is_nan()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.mantissa.is_infinite()
    }

    #[inline]
    pub fn is_positive_infinity(&self) -> bool {
        self.mantissa == f64::INFINITY
    }

    #[inline]
    pub fn is_negative_infinity(&self) -> bool {
        self.mantissa == f64::NEG_INFINITY
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.mantissa.is_finite()
    }

    /// `-1`, `0`, or `1`, matching the sign of the mantissa. Unlike
    /// `f64::signum`, zero maps to `0.0` rather than `1.0`.
    #[inline]
    pub fn sign(&self) -> f64 {
        if self.mantissa == 0.0 {
            0.0
        } else {
            self.mantissa.signum()
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            mantissa: self.mantissa.abs(),
            exponent: self.exponent,
        }
    }

    #[inline]
    pub fn reciprocal(self) -> Self {
        Self::from_f64(1.0) / self
    }

    #[inline]
    pub fn increment(self) -> Self {
        self + Self::from_f64(1.0)
    }

    #[inline]
    pub fn decrement(self) -> Self {
        self - Self::from_f64(1.0)
    }

    pub fn max(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Less) => other,
            Some(_) => self,
            None => if self.mantissa.is_nan() { other } else { self },
        }
    }

    pub fn min(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Greater) => other,
            Some(_) => self,
            None => if self.mantissa.is_nan() { other } else { self },
        }
    }

    /// `|a - b| <= max(|a|, |b|) * tolerance`.
    pub fn eq_tolerance(&self, other: &Self, tolerance: f64) -> bool {
        if self.mantissa.is_nan() || other.mantissa.is_nan() {
            return false;
        }
        if self.mantissa.is_infinite() || other.mantissa.is_infinite() {
            return self.mantissa == other.mantissa;
        }
        let diff = (*self - *other).abs();
        let bound = self.abs().max(other.abs());
        diff.to_f64() <= bound.to_f64() * tolerance
    }

    /// [`eq_tolerance`](Self::eq_tolerance) at the default relative
    /// tolerance of `1e-9`.
    #[inline]
    pub fn eq_tolerance_default(&self, other: &Self) -> bool {
        self.eq_tolerance(other, DEFAULT_TOLERANCE)
    }

    /// A total order over every `BigDouble` including NaN, for sorting.
    /// NaN compares equal to NaN and greater than every other value,
    /// mirroring the common "NaN sorts last" convention (contrast with
    /// `partial_cmp`, which returns `None` whenever either side is NaN).
    pub fn cmp_total(&self, other: &Self) -> Ordering {
        match self.partial_cmp(other) {
            Some(ord) => ord,
            None => match (self.mantissa.is_nan(), other.mantissa.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => unreachable!("partial_cmp only returns None for NaN"),
            },
        }
    }

    fn magnitude_cmp(&self, other: &Self) -> Ordering {
        match self.exponent.cmp(&other.exponent) {
            Ordering::Equal => self
                .mantissa
                .abs()
                .partial_cmp(&other.mantissa.abs())
                .unwrap_or(Ordering::Equal),
            ord => ord,
        }
    }

    pub fn floor(self) -> Self {
        self.round_like(RoundOp::Floor, f64::floor)
    }

    pub fn ceil(self) -> Self {
        self.round_like(RoundOp::Ceil, f64::ceil)
    }

    pub fn round(self) -> Self {
        self.round_like(RoundOp::Round, f64::round)
    }

    pub fn truncate(self) -> Self {
        self.round_like(RoundOp::Truncate, f64::trunc)
    }

    fn round_like(self, op: RoundOp, host_round: fn(f64) -> f64) -> Self {
        if !self.mantissa.is_finite() || self.mantissa == 0.0 {
            return self;
        }
        if self.exponent < -1 {
            return match op {
                RoundOp::Floor if self.mantissa < 0.0 => Self::from_f64(-1.0),
                RoundOp::Floor => Self::ZERO,
                RoundOp::Ceil if self.mantissa > 0.0 => Self::from_f64(1.0),
                RoundOp::Ceil => Self::ZERO,
                RoundOp::Round | RoundOp::Truncate => Self::ZERO,
            };
        }
        if self.exponent < MAX_SIGNIFICANT_DIGITS {
            return Self::from_f64(host_round(self.to_f64()));
        }
        // Already an integer at this scale.
        self
    }

    /// `log10(v) = v.exponent + log10(|v.mantissa|)`, returned as a plain
    /// `f64` since taking a log collapses the value back into `f64`'s own
    /// range.
    pub fn log10(self) -> f64 {
        self.exponent as f64 + self.mantissa.abs().log10()
    }

    pub fn ln(self) -> f64 {
        self.log10() * LN10
    }

    pub fn log2(self) -> f64 {
        self.log10() * LOG2_10
    }

    pub fn log(self, base: f64) -> f64 {
        self.ln() / base.ln()
    }

    /// `e^self`, treating `self` as the exponent.
    pub fn exp(self) -> Self {
        let x = self.to_f64();
        if x.is_nan() {
            return Self::NAN;
        }
        if x == f64::INFINITY {
            return Self::INFINITY;
        }
        if x == f64::NEG_INFINITY {
            return Self::ZERO;
        }
        if x.abs() < 300.0 {
            return Self::from_f64(x.exp());
        }
        let log10_result = x * INV_LN10;
        let exponent = log10_result.floor();
        let frac = log10_result - exponent;
        Self::normalize(10f64.powf(frac), exponent as i64)
    }

    /// `self^p` (§4.1.3): an exact-integer fast path for exact powers of
    /// ten, an integer-exponent fast path that keeps `f64::powf`'s result
    /// when it stays finite, and a general log-space path with a final
    /// fallback for cases where the first log-space attempt overflows.
    pub fn pow(self, p: f64) -> Self {
        if self.mantissa.is_nan() || p.is_nan() {
            return Self::NAN;
        }
        if p == 0.0 {
            return Self::from_f64(1.0);
        }
        if p.fract() == 0.0 && self.mantissa == 1.0 {
            let new_e = self.exponent as f64 * p;
            return Self::normalize(1.0, clamp_to_i64_exponent(new_e));
        }

        let t = self.exponent as f64 * p;
        if t.fract() == 0.0 && t.abs() < BIG_DOUBLE_EXP_LIMIT as f64 {
            let new_m = self.mantissa.powf(p);
            if new_m.is_finite() {
                return Self::normalize(new_m, t as i64);
            }
        }

        let new_e = t.trunc();
        let r = t - new_e;
        let candidate_m = 10f64.powf(p * self.mantissa.abs().log10() + r);
        if candidate_m.is_finite() {
            let signed = apply_odd_power_sign(candidate_m, self.mantissa, p);
            return Self::normalize(signed, new_e as i64);
        }

        let abs_log10_v = self.exponent as f64 + self.mantissa.abs().log10();
        let fallback = apply_odd_power_sign(10f64.powf(p * abs_log10_v), self.mantissa, p);
        Self::from_f64(fallback)
    }

    pub fn sqrt(self) -> Self {
        if self.mantissa.is_sign_negative() && self.mantissa != 0.0 {
            return Self::NAN;
        }
        self.pow(0.5)
    }

    pub fn cbrt(self) -> Self {
        if self.mantissa == 0.0 {
            return self;
        }
        let magnitude = self.abs().pow(1.0 / 3.0);
        if self.mantissa.is_sign_negative() {
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

    /// Stirling's approximation: `log10(n!) ~= 0.5*log10(2*pi*n) + n*(log10(n) - log10(e))`.
    pub fn factorial(self) -> Self {
        let n = self.to_f64();
        if n.is_nan() {
            return Self::NAN;
        }
        if n < 0.0 {
            return Self::NAN;
        }
        if n == 0.0 || n == 1.0 {
            return Self::from_f64(1.0);
        }
        let log10_n_factorial = 0.5 * (2.0 * std::f64::consts::PI * n).log10()
            + n * (n.log10() - std::f64::consts::LOG10_E);
        let exponent = log10_n_factorial.floor();
        let frac = log10_n_factorial - exponent;
        Self::normalize(10f64.powf(frac), exponent as i64)
    }

    /// `E[digits]`: `d.ddd...E±exponent`. `None` uses the shortest
    /// round-trip digit string for the mantissa.
    pub fn to_exponential(&self, digits: Option<usize>) -> String {
        if let Some(s) = sentinel_string(self.mantissa) {
            return s;
        }
        format::format_scientific(self.mantissa, self.exponent, digits, 'E')
    }

    /// `F[digits]`: fixed-point. Once the exponent is too large for the
    /// value to round-trip through `f64` without losing the mantissa's
    /// own significant digits, the mantissa digits are emitted directly
    /// and padded with zeros rather than multiplied out.
    pub fn to_fixed(&self, digits: usize) -> String {
        if let Some(s) = sentinel_string(self.mantissa) {
            return s;
        }
        if self.exponent >= MAX_SIGNIFICANT_DIGITS {
            return format::format_fixed_large(self.mantissa, self.exponent, digits);
        }
        format!("{:.*}", digits, self.to_f64())
    }

    /// `R`: an exact reconstruction of this value's canonical pair —
    /// parsing this string always returns a bit-identical `BigDouble`.
    pub fn to_round_trip(&self) -> String {
        if let Some(s) = sentinel_string(self.mantissa) {
            return s;
        }
        format!("{}e{}", self.mantissa, self.exponent)
    }

    /// Parses a .NET-style format specifier: `G`, `E[n]`, `F[n]`, `R`.
    pub fn format_with(&self, spec: &str) -> Result<String, NumError> {
        if spec.is_empty() {
            return Ok(self.to_string());
        }
        let bad = || NumError::ParseError(spec.to_string());
        let (kind, rest) = spec.split_at(1);
        match kind.to_ascii_uppercase().as_str() {
            "G" => Ok(self.to_string()),
            "E" => {
                let digits = if rest.is_empty() {
                    None
                } else {
                    Some(rest.parse::<usize>().map_err(|_| bad())?)
                };
                Ok(self.to_exponential(digits))
            }
            "F" => {
                let digits = if rest.is_empty() {
                    0
                } else {
                    rest.parse::<usize>().map_err(|_| bad())?
                };
                Ok(self.to_fixed(digits))
            }
            "R" => Ok(self.to_round_trip()),
            _ => Err(bad()),
        }
    }
}

#[derive(Clone, Copy)]
enum RoundOp {
    Floor,
    Ceil,
    Round,
    Truncate,
}

fn apply_odd_power_sign(magnitude: f64, base_mantissa: f64, p: f64) -> f64 {
    let is_odd_integer = p.fract() == 0.0 && (p.rem_euclid(2.0)) != 0.0;
    if base_mantissa.is_sign_negative() && is_odd_integer {
        -magnitude
    } else {
        magnitude
    }
}

fn clamp_to_i64_exponent(e: f64) -> i64 {
    if e > BIG_DOUBLE_EXP_LIMIT as f64 {
        BIG_DOUBLE_EXP_LIMIT + 1
    } else if e < -(BIG_DOUBLE_EXP_LIMIT as f64) {
        -(BIG_DOUBLE_EXP_LIMIT + 1)
    } else {
        e as i64
    }
}

fn sentinel_string(mantissa: f64) -> Option<String> {
    if mantissa.is_nan() {
        Some("NaN".to_string())
    } else if mantissa == f64::INFINITY {
        Some("Infinity".to_string())
    } else if mantissa == f64::NEG_INFINITY {
        Some("-Infinity".to_string())
    } else {
        None
    }
}

impl Default for BigDouble {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for BigDouble {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<i64> for BigDouble {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl FromStr for BigDouble {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match parse::match_sentinel(trimmed) {
            Some(Sentinel::Zero) => return Ok(Self::ZERO),
            Some(Sentinel::PositiveInfinity) => return Ok(Self::INFINITY),
            Some(Sentinel::NegativeInfinity) => return Ok(Self::NEG_INFINITY),
            Some(Sentinel::NaN) => return Ok(Self::NAN),
            None => {}
        }
        let lit = parse::tokenize(trimmed)?;
        let mut mantissa = lit.mantissa_as_f64()?;
        if lit.negative {
            mantissa = -mantissa;
        }
        Ok(Self::normalize(mantissa, lit.exponent))
    }
}

impl fmt::Display for BigDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = sentinel_string(self.mantissa) {
            return write!(f, "{s}");
        }
        if self.mantissa == 0.0 {
            return write!(f, "0");
        }
        if (-6..=20).contains(&self.exponent) {
            write!(f, "{}", self.to_f64())
        } else {
            write!(f, "{}", format::format_scientific(self.mantissa, self.exponent, None, 'E'))
        }
    }
}

impl PartialEq for BigDouble {
    fn eq(&self, other: &Self) -> bool {
        if self.mantissa.is_nan() || other.mantissa.is_nan() {
            return false;
        }
        self.mantissa.to_bits() == other.mantissa.to_bits() && self.exponent == other.exponent
    }
}

impl PartialOrd for BigDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.mantissa.is_nan() || other.mantissa.is_nan() {
            return None;
        }
        if self.mantissa.is_infinite() || other.mantissa.is_infinite() {
            return self.mantissa.partial_cmp(&other.mantissa);
        }
        let self_sign = self.sign();
        let other_sign = other.sign();
        if self_sign != other_sign {
            return self_sign.partial_cmp(&other_sign);
        }
        match self_sign {
            s if s > 0.0 => Some(self.magnitude_cmp(other)),
            s if s < 0.0 => Some(self.magnitude_cmp(other).reverse()),
            _ => Some(Ordering::Equal),
        }
    }
}

impl Neg for BigDouble {
    type Output = Self;

    fn neg(self) -> Self {
        if self.mantissa == 0.0 {
            return self;
        }
        Self {
            mantissa: -self.mantissa,
            exponent: self.exponent,
        }
    }
}

impl Add for BigDouble {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.mantissa == 0.0 {
            return rhs;
        }
        if rhs.mantissa == 0.0 {
            return self;
        }
        if !self.mantissa.is_finite() || !rhs.mantissa.is_finite() {
            return Self {
                mantissa: self.mantissa + rhs.mantissa,
                exponent: 0,
            };
        }

        let (big, small) = if self.exponent >= rhs.exponent {
            (self, rhs)
        } else {
            (rhs, self)
        };
        if big.exponent - small.exponent > MAX_SIGNIFICANT_DIGITS {
            return big;
        }

        let scaled = (1e14 * big.mantissa
            + 1e14 * small.mantissa * powers::power_of_10(small.exponent - big.exponent))
        .round();
        Self::normalize(scaled, big.exponent - 14)
    }
}

impl Sub for BigDouble {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for BigDouble {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::normalize(
            self.mantissa * rhs.mantissa,
            self.exponent.saturating_add(rhs.exponent),
        )
    }
}

impl Div for BigDouble {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::normalize(
            self.mantissa / rhs.mantissa,
            self.exponent.saturating_sub(rhs.exponent),
        )
    }
}

impl AddAssign for BigDouble {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for BigDouble {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for BigDouble {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for BigDouble {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl num_traits::Pow<f64> for BigDouble {
    type Output = Self;

    fn pow(self, rhs: f64) -> Self {
        BigDouble::pow(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_small_integers_stay_exact() {
        let sum = BigDouble::from_i64(299) + BigDouble::from_i64(18);
        assert_eq!(sum, BigDouble::from_i64(317));
        assert_eq!(sum.mantissa(), 3.17);
        assert_eq!(sum.exponent(), 2);
    }

    #[test]
    fn addition_far_apart_collapses_to_larger() {
        let big: BigDouble = "1.23456789e1234".parse().unwrap();
        let small: BigDouble = "1.23456789e123".parse().unwrap();
        assert_eq!(big + small, big);
    }

    #[test]
    fn cancellation_yields_exact_zero() {
        let a: BigDouble = "1.23456789e1234".parse().unwrap();
        let b: BigDouble = "-1.23456789e1234".parse().unwrap();
        let sum = a + b;
        assert_eq!(sum.mantissa(), 0.0);
        assert_eq!(sum.exponent(), 0);
    }

    #[test]
    fn tolerance_equality_examples() {
        let a = BigDouble::from_f64(300.0);
        let b = BigDouble::from_f64(300.00000002);
        let c = BigDouble::from_f64(300.0000005);
        assert!(a.eq_tolerance(&b, 1e-9));
        assert!(!a.eq_tolerance(&c, 1e-9));
        assert!(a.eq_tolerance(&c, 1e-8));
    }

    #[test]
    fn pow_survives_overflow() {
        let base = BigDouble::from_f64(1.15);
        let result = base.pow(6000.0);
        assert!(result.is_finite());
        assert!(result.log10().is_finite());
    }

    #[test]
    fn identity_laws_hold_for_finite_values() {
        let mut rng_state = 0x2545F4914F6CDD1Du64;
        let mut next = move || {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;
            rng_state
        };
        for _ in 0..200 {
            let raw = (next() as i64 as f64) / 1e9;
            if raw == 0.0 {
                continue;
            }
            let x = BigDouble::from_f64(raw);
            assert!((x + BigDouble::ZERO).eq_tolerance_default(&x));
            assert!((x * BigDouble::from_i64(1)).eq_tolerance_default(&x));
            assert!((x - x).mantissa() == 0.0);
        }
    }

    #[test]
    fn commutativity_holds() {
        let a = BigDouble::from_f64(1.234e50);
        let b = BigDouble::from_f64(-9.87e10);
        assert!((a + b).eq_tolerance_default(&(b + a)));
        assert!((a * b).eq_tolerance_default(&(b * a)));
    }

    #[test]
    fn sign_and_abs() {
        let neg = BigDouble::from_f64(-42.0);
        assert_eq!(neg.sign(), -1.0);
        assert_eq!((-neg).sign(), 1.0);
        assert!(neg.abs().sign() >= 0.0);
        assert_eq!(BigDouble::ZERO.sign(), 0.0);
    }

    #[test]
    fn normalization_invariant_holds_after_arithmetic() {
        let values = [
            BigDouble::from_f64(123.456),
            BigDouble::from_f64(-0.0001),
            BigDouble::from_i64(7),
        ];
        for a in values {
            for b in values {
                for v in [a + b, a - b, a * b, a.pow(2.0)] {
                    if v.mantissa() != 0.0 && v.is_finite() {
                        assert!(v.mantissa().abs() >= 1.0 && v.mantissa().abs() < 10.0);
                    } else if v.mantissa() == 0.0 {
                        assert_eq!(v.exponent(), 0);
                    }
                }
            }
        }
    }

    #[test]
    fn sentinel_totality() {
        assert!((BigDouble::INFINITY + BigDouble::NEG_INFINITY).is_nan());
        assert_eq!(BigDouble::INFINITY + BigDouble::INFINITY, BigDouble::INFINITY);
        assert!((BigDouble::ZERO / BigDouble::ZERO).is_nan());
        assert_eq!(
            BigDouble::from_i64(5) / BigDouble::ZERO,
            BigDouble::INFINITY
        );
        assert_eq!(
            BigDouble::from_i64(-5) / BigDouble::ZERO,
            BigDouble::NEG_INFINITY
        );
        assert!((BigDouble::NAN + BigDouble::from_i64(1)).is_nan());
    }

    #[test]
    fn round_trip_through_f64() {
        for x in [1.5, -1.5, 123456.789, -0.0004, 9.999999999] {
            let bd = BigDouble::from_f64(x);
            assert!((bd.to_f64() - x).abs() < 1e-9);
        }
    }

    #[test]
    fn increment_and_decrement_are_plus_minus_one() {
        let x = BigDouble::from_i64(41);
        assert_eq!(x.increment(), BigDouble::from_i64(42));
        assert_eq!(x.decrement(), BigDouble::from_i64(40));
        assert_eq!(BigDouble::ZERO.increment(), BigDouble::from_i64(1));
    }

    #[test]
    fn monotonicity_holds() {
        let a = BigDouble::from_f64(5.0);
        let b = BigDouble::from_f64(7.0);
        let c = BigDouble::from_f64(1000.0);
        assert!(a < b);
        assert!(a + c < b + c);
    }

    #[test]
    fn formatting_modes() {
        let v = BigDouble::from_f64(317.0);
        assert_eq!(v.to_string(), "317");
        assert_eq!(v.to_exponential(Some(2)), "3.17E+2");
        assert_eq!(v.to_fixed(1), "317.0");
        assert!(v.format_with("E2").unwrap() == "3.17E+2");

        let huge: BigDouble = "6.022e23".parse().unwrap();
        assert_eq!(huge.to_string(), "6.022E+23");
    }

    #[test]
    fn parses_sentinel_forms() {
        assert!("NaN".parse::<BigDouble>().unwrap().is_nan());
        assert_eq!("Infinity".parse::<BigDouble>().unwrap(), BigDouble::INFINITY);
        assert_eq!(
            "-Infinity".parse::<BigDouble>().unwrap(),
            BigDouble::NEG_INFINITY
        );
        assert_eq!("0".parse::<BigDouble>().unwrap(), BigDouble::ZERO);
    }

    #[test]
    fn floor_ceil_round_truncate_small_magnitudes() {
        let small_pos = BigDouble::from_f64(0.05);
        let small_neg = BigDouble::from_f64(-0.05);
        assert_eq!(small_pos.floor(), BigDouble::ZERO);
        assert_eq!(small_neg.floor(), BigDouble::from_f64(-1.0));
        assert_eq!(small_pos.ceil(), BigDouble::from_f64(1.0));
        assert_eq!(small_neg.ceil(), BigDouble::ZERO);
        assert_eq!(small_pos.round(), BigDouble::ZERO);
        assert_eq!(small_neg.truncate(), BigDouble::ZERO);
    }

    #[test]
    fn factorial_matches_known_values() {
        let f5 = BigDouble::from_i64(5).factorial();
        assert!((f5.to_f64() - 120.0).abs() / 120.0 < 0.02);
    }
}
