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
//! Shared constants used by both engines.

/// `ln(10)`.
pub(crate) const LN10: f64 = std::f64::consts::LN_10;
/// `ln(2)`.
pub(crate) const LN2: f64 = std::f64::consts::LN_2;
/// `1 / ln(10)`, used to turn a natural log into a base-10 log by a
/// single multiply instead of a division per call.
pub(crate) const INV_LN10: f64 = 1.0 / LN10;
/// `log2(10)`.
pub(crate) const LOG2_10: f64 = LN10 / LN2;
/// `log10(2)`.
pub(crate) const LOG10_2: f64 = LN2 / LN10;

/// Largest base-10 exponent magnitude [`BigDouble`](crate::BigDouble) keeps
/// as finite. Beyond this, a result saturates to ±∞.
///
/// The source material carries two variants across versions (`9e15` and
/// `i64::MAX`); `i64::MAX` leaves no numeric headroom for an overflow
/// check to ever trip (`exponent + exponent` would wrap before crossing
/// it), so this port fixes the threshold at `9e15`, matching the other
/// cited variant.
pub(crate) const BIG_DOUBLE_EXP_LIMIT: i64 = 9_000_000_000_000_000;

/// Exponent gap past which the smaller addend of a `BigDouble` sum is
/// entirely below the larger operand's precision floor, and also the
/// rounding digit count `Add` preserves of the smaller operand.
pub(crate) const MAX_SIGNIFICANT_DIGITS: i64 = 17;

/// Default relative tolerance for [`BigDouble::eq_tolerance`](crate::BigDouble::eq_tolerance).
pub(crate) const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Smallest positive `f64` subnormal, `5e-324`. Conversions at the
/// exponent boundary `-324` special-case this value (see
/// `powers::DOUBLE_EXP_MIN`).
pub(crate) const MIN_POSITIVE_SUBNORMAL: f64 = 5e-324;
