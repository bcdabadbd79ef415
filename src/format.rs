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
//! Fixed/exponential string formatting shared by `BigDouble` and `Quad`.

/// Formats `mantissa * 10^exponent` as `d[.ddd]<marker>±exponent`,
/// re-normalizing if rounding the mantissa to `digits` fractional places
/// carries into a new leading digit (e.g. `9.996e0` at 2 digits becomes
/// `1.00e1`, never `10.00e0`).
pub(crate) fn format_scientific(
    mantissa: f64,
    mut exponent: i64,
    digits: Option<usize>,
    marker: char,
) -> String {
    if mantissa == 0.0 {
        let body = match digits {
            Some(d) if d > 0 => format!("0.{}", "0".repeat(d)),
            _ => "0".to_string(),
        };
        return format!("{body}{marker}+0");
    }

    let sign = if mantissa.is_sign_negative() { "-" } else { "" };
    let mut m = mantissa.abs();
    let mut body = render_mantissa(m, digits);

    // A rounding carry can push "9.999..." up to "10.00..."; renormalize.
    if body.starts_with("10") && (body.len() == 2 || body.as_bytes()[2] == b'.') {
        exponent += 1;
        m /= 10.0;
        body = render_mantissa(m, digits);
    }

    format!(
        "{sign}{body}{marker}{}{}",
        if exponent >= 0 { "+" } else { "-" },
        exponent.abs()
    )
}

fn render_mantissa(m: f64, digits: Option<usize>) -> String {
    match digits {
        Some(d) => format!("{m:.d$}"),
        None => {
            // Default ("G"-style) precision: Rust's shortest round-trip
            // Display, which for a value already in [1, 10) is exactly
            // the digit string we want.
            let s = format!("{m}");
            if s.contains('.') { s } else { format!("{s}.0") }
        }
    }
}

/// Formats `mantissa * 10^exponent` (with `|mantissa| ∈ [1, 10)`) as a
/// fixed-point decimal when `exponent` is too large for `f64` to carry
/// the integer part without losing the mantissa's own significant
/// digits: the mantissa's ~17 significant decimal digits are emitted
/// verbatim and padded with zeros out to `exponent`, rather than routed
/// through `f64` multiplication (which would simply return `mantissa *
/// 10^exponent`, i.e. ±∞, for `exponent` this large).
pub(crate) fn format_fixed_large(mantissa: f64, exponent: i64, digits: usize) -> String {
    let sign = if mantissa.is_sign_negative() { "-" } else { "" };
    let m = mantissa.abs();
    // `f64`'s own shortest round-trip rendering, not a fixed `{:.N}`
    // precision: past ~15-16 significant digits a fixed width just prints
    // binary rounding noise instead of the mantissa's true digits.
    let rendered = format!("{m}");
    let (int_digits, frac_digits) = match rendered.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rendered.as_str(), ""),
    };
    let digit_str = format!("{int_digits}{frac_digits}");
    let zeros_needed = (exponent - frac_digits.len() as i64).max(0) as usize;

    let mut int_part = digit_str;
    int_part.push_str(&"0".repeat(zeros_needed));

    if digits == 0 {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{}", "0".repeat(digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_basic() {
        assert_eq!(format_scientific(3.17, 2, None, 'E'), "3.17E+2");
        assert_eq!(format_scientific(-1.5, -10, Some(2), 'E'), "-1.50E-10");
    }

    #[test]
    fn scientific_rounding_carries() {
        // 9.996 rounded to 2 digits is 10.00, which must renormalize.
        assert_eq!(format_scientific(9.996, 0, Some(2), 'E'), "1.00E+1");
    }

    #[test]
    fn scientific_zero() {
        assert_eq!(format_scientific(0.0, 0, None, 'E'), "0E+0");
        assert_eq!(format_scientific(0.0, 0, Some(3), 'E'), "0.000E+0");
    }

    #[test]
    fn fixed_large_pads_zeros() {
        // 3.17e20 == 317 * 10^18.
        assert_eq!(format_fixed_large(3.17, 20, 0), format!("317{}", "0".repeat(18)));
    }
}
