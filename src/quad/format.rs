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
//! Parsing and the four named string representations a [`Quad`] supports:
//! hex-exponential (the classic C99 `%a` layout over this type's own
//! significand/exponent pair), decimal-exponential, and two scientific
//! modes that differ in how the binary value is redecimalized —
//! `ScientificApproximate` round-trips through a single `f64`,
//! `ScientificExact` works the decimal exponent out of the full-precision
//! `Quad` division directly.

use std::fmt;

use crate::error::NumError;
use crate::format as shared_format;
use crate::parse::{self, Sentinel};

use super::Quad;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecimalExponentialOptions {
    pub digits: usize,
}

impl Default for DecimalExponentialOptions {
    fn default() -> Self {
        Self { digits: 17 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScientificExactOptions {
    pub digits: Option<usize>,
}

impl Default for ScientificExactOptions {
    fn default() -> Self {
        Self { digits: None }
    }
}

pub(crate) fn parse(s: &str) -> Result<Quad, NumError> {
    let trimmed = s.trim();
    match parse::match_sentinel(trimmed) {
        Some(Sentinel::Zero) => return Ok(Quad::ZERO),
        Some(Sentinel::PositiveInfinity) => return Ok(Quad::INFINITY),
        Some(Sentinel::NegativeInfinity) => return Ok(Quad::NEG_INFINITY),
        Some(Sentinel::NaN) => return Ok(Quad::NAN),
        None => {}
    }
    let lit = parse::tokenize(trimmed)?;
    let mut result = mantissa_as_quad(trimmed, &lit)?;
    if lit.exponent != 0 {
        result *= Quad::from_i64(10).pow(lit.exponent as f64);
    }
    if lit.negative {
        result = -result;
    }
    Ok(result)
}

/// Parses a literal's integer/fractional digit runs as two 64-bit
/// integers and combines them (`left + right / 10^len(right)`) entirely
/// in `Quad`'s own domain, rather than routing the mantissa through a
/// single lossy `f64` parse first. This is what carries `Quad`'s extra
/// precision past `f64`'s ~15-17 significant digits through to parsing.
fn mantissa_as_quad(original: &str, lit: &parse::DecimalLiteral) -> Result<Quad, NumError> {
    let bad = || NumError::ParseError(original.to_string());
    let left: i64 = if lit.int_digits.is_empty() {
        0
    } else {
        lit.int_digits.parse().map_err(|_| bad())?
    };
    if lit.frac_digits.is_empty() {
        return Ok(Quad::from_i64(left));
    }
    let right: i64 = lit.frac_digits.parse().map_err(|_| bad())?;
    let scale = Quad::from_i64(10).pow(lit.frac_digits.len() as f64);
    Ok(Quad::from_i64(left) + Quad::from_i64(right) / scale)
}

fn sentinel_string(q: &Quad) -> Option<&'static str> {
    if q.is_nan() {
        Some("NaN")
    } else if q.is_positive_infinity() {
        Some("Infinity")
    } else if q.is_negative_infinity() {
        Some("-Infinity")
    } else {
        None
    }
}

impl Quad {
    /// Splits `|self|` into a decimal exponent and an `f64` mantissa in
    /// `[1, 10)`, working entirely in `Quad`'s own precision (dividing by
    /// `10^exponent` as a `Quad` before the final drop to `f64`) rather
    /// than going through a single lossy `to_f64()` call up front.
    fn decimal_split_exact(&self) -> (i64, f64) {
        let log10_abs = self.abs().log10();
        let mut exponent = log10_abs.floor() as i64;
        let scale = Quad::from_i64(10).pow(exponent as f64);
        let mut mantissa = (self.abs() / scale).to_f64();
        if mantissa >= 10.0 {
            exponent += 1;
            mantissa /= 10.0;
        } else if mantissa < 1.0 {
            exponent -= 1;
            mantissa *= 10.0;
        }
        (exponent, mantissa)
    }

    /// Splits `|self|` the cheap way: drop to `f64` first, then take
    /// `log10`/`powi` on that single double.
    fn decimal_split_approximate(&self) -> (i64, f64) {
        let v = self.to_f64().abs();
        let mut exponent = v.log10().floor() as i64;
        let mut mantissa = v / 10f64.powi(exponent as i32);
        if mantissa >= 10.0 {
            exponent += 1;
            mantissa /= 10.0;
        } else if mantissa < 1.0 {
            exponent -= 1;
            mantissa *= 10.0;
        }
        (exponent, mantissa)
    }

    /// Hex-exponential: `[-]0x1.<63-bit fraction in hex>p±<exponent>`, the
    /// layout C99's `%a` uses for `double`, extended to this type's wider
    /// significand and exponent.
    pub fn to_hex_exponential(&self) -> String {
        if let Some(s) = sentinel_string(self) {
            return s.to_string();
        }
        if self.is_zero() {
            return "0x0.0000000000000000p+0".to_string();
        }
        let sign = if self.is_sign_negative() { "-" } else { "" };
        let frac64 = self.fraction_bits() << 1;
        let exponent = self.exponent_raw();
        format!(
            "{sign}0x1.{frac64:016x}p{}{}",
            if exponent >= 0 { "+" } else { "-" },
            exponent.abs()
        )
    }

    /// Decimal-exponential with a fixed digit count, computed from the
    /// exact `Quad`-domain decimal split.
    pub fn to_decimal_exponential(&self, options: &DecimalExponentialOptions) -> String {
        if let Some(s) = sentinel_string(self) {
            return s.to_string();
        }
        if self.is_zero() {
            return shared_format::format_scientific(0.0, 0, Some(options.digits), 'E');
        }
        let (exponent, mantissa) = self.decimal_split_exact();
        let signed = if self.is_sign_negative() { -mantissa } else { mantissa };
        shared_format::format_scientific(signed, exponent, Some(options.digits), 'E')
    }

    /// Scientific notation redecimalized through a single `f64` drop —
    /// fast, but limited to `f64`'s own ~15-17 significant digits.
    pub fn to_scientific_approximate(&self) -> String {
        if let Some(s) = sentinel_string(self) {
            return s.to_string();
        }
        if self.is_zero() {
            return shared_format::format_scientific(0.0, 0, None, 'E');
        }
        let (exponent, mantissa) = self.decimal_split_approximate();
        let signed = if self.is_sign_negative() { -mantissa } else { mantissa };
        shared_format::format_scientific(signed, exponent, None, 'E')
    }

    /// Scientific notation redecimalized from the exact `Quad`-domain
    /// split, with an optional explicit digit count.
    pub fn to_scientific_exact(&self, options: &ScientificExactOptions) -> String {
        if let Some(s) = sentinel_string(self) {
            return s.to_string();
        }
        if self.is_zero() {
            return shared_format::format_scientific(0.0, 0, options.digits, 'E');
        }
        let (exponent, mantissa) = self.decimal_split_exact();
        let signed = if self.is_sign_negative() { -mantissa } else { mantissa };
        shared_format::format_scientific(signed, exponent, options.digits, 'E')
    }

    /// The 63-bit fraction field with the implicit leading one made
    /// explicit in bit 63 stripped back out, i.e. the raw stored bits.
    fn fraction_bits(&self) -> u64 {
        self.magnitude() & ((1u64 << 63) - 1)
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = sentinel_string(self) {
            return write!(f, "{s}");
        }
        if self.is_zero() {
            return write!(f, "0");
        }
        let log10_abs = self.abs().log10();
        if (-6.0..=20.0).contains(&log10_abs) {
            write!(f, "{}", self.to_f64())
        } else {
            write!(f, "{}", self.to_scientific_exact(&ScientificExactOptions::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_exponential_forms() {
        assert_eq!(parse("317").unwrap().to_f64(), 317.0);
        assert!((parse("1.5e3").unwrap().to_f64() - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn parses_fraction_via_integer_combination() {
        assert_eq!(parse("3.25").unwrap().to_f64(), 3.25);
    }

    #[test]
    fn parses_large_integer_mantissa_without_f64_rounding() {
        // 2^53 + 1 is the smallest positive integer an `f64` can't
        // represent exactly (it's equidistant between two representable
        // doubles and rounds to the even one, 2^53). Compared bit-for-bit
        // against `Quad::from_i64` (built from the integer directly, no
        // `f64` involved) rather than through a lossy `to_f64()`/`to_i64()`
        // round trip, this pins down that parsing itself stays exact.
        let parsed = parse("9007199254740993").unwrap();
        let expected = Quad::from_i64(9_007_199_254_740_993);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parses_signed_exponent_forms() {
        for form in ["1e308", "1E308", "1e+308", "1E+308"] {
            let q = parse(form).unwrap();
            assert!(q.is_finite());
            assert!((q.log10() - 308.0).abs() < 1e-6);
        }
    }

    #[test]
    fn parses_sentinels() {
        assert!(parse("NaN").unwrap().is_nan());
        assert!(parse("Infinity").unwrap().is_positive_infinity());
        assert!(parse("-Infinity").unwrap().is_negative_infinity());
        assert!(parse("0").unwrap().is_zero());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("not a number").is_err());
    }

    #[test]
    fn display_uses_plain_form_for_moderate_magnitudes() {
        assert_eq!(Quad::from_f64(3.5).to_string(), "3.5");
    }

    #[test]
    fn display_uses_scientific_form_for_large_magnitudes() {
        let s = Quad::from_f64(1e100).to_string();
        assert!(s.contains('E'));
    }

    #[test]
    fn hex_exponential_round_trips_sign_and_exponent() {
        let q = Quad::from_i64(-8);
        let hex = q.to_hex_exponential();
        assert!(hex.starts_with("-0x1."));
        assert!(hex.ends_with("p+3"));
    }
}
