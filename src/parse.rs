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
//! Shared decimal-literal tokenizer used by both `BigDouble::from_str` and
//! `Quad::from_str`. Accepted form: `[sign] digits [. digits] [(e|E)[+|-]
//! digits]`, with whitespace around the exponent marker normalized away.

use crate::NumError;

/// A sentinel literal recognized ahead of general numeric parsing.
pub(crate) enum Sentinel {
    Zero,
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

/// Matches the fixed sentinel spellings the spec requires on parse:
/// `"NaN"`, `"Infinity"`, `"-Infinity"`, `"0"`.
pub(crate) fn match_sentinel(trimmed: &str) -> Option<Sentinel> {
    match trimmed {
        "0" => Some(Sentinel::Zero),
        "Infinity" => Some(Sentinel::PositiveInfinity),
        "-Infinity" => Some(Sentinel::NegativeInfinity),
        "NaN" => Some(Sentinel::NaN),
        _ => None,
    }
}

/// The pieces of a decimal literal after the sentinel forms have been
/// ruled out: an optional sign, integer and fractional digit runs, and a
/// base-10 exponent (`0` if the literal carried none).
pub(crate) struct DecimalLiteral<'a> {
    pub negative: bool,
    pub int_digits: &'a str,
    pub frac_digits: &'a str,
    pub exponent: i64,
}

impl DecimalLiteral<'_> {
    /// Parses the mantissa digits (ignoring sign and exponent) as an
    /// `f64` via `int.frac`. Used by `BigDouble`, whose mantissa is
    /// never more precise than `f64` to begin with.
    pub(crate) fn mantissa_as_f64(&self) -> Result<f64, NumError> {
        let joined = if self.frac_digits.is_empty() {
            self.int_digits.to_string()
        } else {
            format!("{}.{}", self.int_digits, self.frac_digits)
        };
        joined
            .parse::<f64>()
            .map_err(|_| NumError::ParseError(joined))
    }
}

/// Splits a literal (sentinel forms already ruled out by the caller) into
/// sign, integer digits, fractional digits and exponent.
pub(crate) fn tokenize(input: &str) -> Result<DecimalLiteral<'_>, NumError> {
    let bad = || NumError::ParseError(input.to_string());

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(bad());
    }

    let (negative, rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if rest.is_empty() {
        return Err(bad());
    }

    let (mantissa_part, exponent) = match rest.find(['e', 'E']) {
        Some(idx) => {
            let mantissa = rest[..idx].trim_end();
            let exp_str = rest[idx + 1..].trim();
            let exp_str = exp_str.strip_prefix('+').unwrap_or(exp_str);
            if exp_str.is_empty() {
                return Err(bad());
            }
            let exponent: i64 = exp_str.parse().map_err(|_| bad())?;
            (mantissa, exponent)
        }
        None => (rest, 0),
    };

    let (int_digits, frac_digits) = match mantissa_part.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa_part, ""),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(bad());
    }
    let all_digits =
        |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) || s.is_empty();
    if !all_digits(int_digits) || !all_digits(frac_digits) {
        return Err(bad());
    }

    Ok(DecimalLiteral {
        negative,
        int_digits,
        frac_digits,
        exponent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        let lit = tokenize("317").unwrap();
        assert!(!lit.negative);
        assert_eq!(lit.int_digits, "317");
        assert_eq!(lit.frac_digits, "");
        assert_eq!(lit.exponent, 0);
    }

    #[test]
    fn parses_signed_decimal_with_exponent() {
        for form in ["1e308", "1E308", "1e+308", "1E+308"] {
            let lit = tokenize(form).unwrap();
            assert!(!lit.negative);
            assert_eq!(lit.exponent, 308);
            assert_eq!(lit.mantissa_as_f64().unwrap(), 1.0);
        }
    }

    #[test]
    fn parses_negative_exponent_and_fraction() {
        let lit = tokenize("-1.5e-10").unwrap();
        assert!(lit.negative);
        assert_eq!(lit.int_digits, "1");
        assert_eq!(lit.frac_digits, "5");
        assert_eq!(lit.exponent, -10);
    }

    #[test]
    fn rejects_garbage() {
        assert!(tokenize("").is_err());
        assert!(tokenize("abc").is_err());
        assert!(tokenize("1.2.3").is_err());
        assert!(tokenize("1e").is_err());
        assert!(tokenize("-").is_err());
    }

    #[test]
    fn recognizes_sentinels() {
        assert!(matches!(match_sentinel("NaN"), Some(Sentinel::NaN)));
        assert!(matches!(
            match_sentinel("Infinity"),
            Some(Sentinel::PositiveInfinity)
        ));
        assert!(matches!(
            match_sentinel("-Infinity"),
            Some(Sentinel::NegativeInfinity)
        ));
        assert!(matches!(match_sentinel("0"), Some(Sentinel::Zero)));
        assert!(match_sentinel("1").is_none());
    }
}
