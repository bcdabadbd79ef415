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
//! Precomputed powers of ten, shared by both engines for converting a
//! `BigDouble` back to `f64` and for the exact-decimal formatting paths.
//!
//! `f64::powf(10.0, k)` drifts from the true value once `|k|` gets large;
//! building the table once from `"1e" + k`, parsed through the standard
//! library's decimal parser, avoids that systematic error entirely.

use std::sync::OnceLock;

/// Largest base-10 exponent an `f64` can represent without becoming ∞.
pub(crate) const DOUBLE_EXP_MAX: i64 = 308;
/// The `f64` subnormal boundary exponent (`5e-324`); handled as a special
/// case by callers rather than stored in the table.
pub(crate) const DOUBLE_EXP_MIN: i64 = -324;

static POWERS_OF_10: OnceLock<Vec<f64>> = OnceLock::new();

fn build_powers_of_10() -> Vec<f64> {
    ((DOUBLE_EXP_MIN + 1)..=DOUBLE_EXP_MAX)
        .map(|k| format!("1e{k}").parse::<f64>().expect("valid power-of-10 literal"))
        .collect()
}

/// Looks up `10^k` as an `f64`, via the precomputed table when `k` is in
/// range and by saturating to `0.0`/`f64::INFINITY` outside it.
#[inline]
pub(crate) fn power_of_10(k: i64) -> f64 {
    if k > DOUBLE_EXP_MAX {
        return f64::INFINITY;
    }
    if k < DOUBLE_EXP_MIN + 1 {
        return 0.0;
    }
    let table = POWERS_OF_10.get_or_init(build_powers_of_10);
    table[(k - (DOUBLE_EXP_MIN + 1)) as usize]
}

/// Number of leading zero bits in a 64-bit word. A thin named wrapper
/// around the hardware intrinsic the spec calls for, kept as its own
/// function so call sites (the `Quad` divide/normalize paths) read the
/// same as the source material's `nlz`.
#[inline(always)]
pub(crate) const fn nlz(x: u64) -> u32 {
    x.leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_parsed_literal() {
        assert_eq!(power_of_10(0), 1.0);
        assert_eq!(power_of_10(3), 1000.0);
        assert_eq!(power_of_10(-3), 0.001);
        assert_eq!(power_of_10(308), 1e308);
    }

    #[test]
    fn saturates_outside_range() {
        assert_eq!(power_of_10(309), f64::INFINITY);
        assert_eq!(power_of_10(-324), 0.0);
        assert_eq!(power_of_10(-400), 0.0);
    }

    #[test]
    fn nlz_matches_leading_zeros() {
        assert_eq!(nlz(0), 64);
        assert_eq!(nlz(1), 63);
        assert_eq!(nlz(u64::MAX), 0);
        assert_eq!(nlz(1u64 << 63), 0);
    }
}
