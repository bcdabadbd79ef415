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
#![deny(unreachable_pub)]
#![allow(clippy::excessive_precision)]
//! Extended-range floating-point number types for incremental and
//! simulation workloads, where values routinely leave the range a plain
//! `f64` can represent but full arbitrary-precision arithmetic is more
//! than the problem calls for.
//!
//! [`BigDouble`] pairs a binary64 mantissa in `[1, 10)` with a base-10
//! exponent, trading unbounded range for roughly 15-16 significant
//! decimal digits of precision — the representation incremental games
//! use to display huge currency counters.
//!
//! [`Quad`] instead keeps a 64-bit signed-and-fractional significand next
//! to a 64-bit signed binary exponent, trading some of that range for
//! close to `f64`-competitive (~63-64 bit) precision.
//!
//! Both types are total over their sentinel values (`0`, `±∞`, `NaN`):
//! every arithmetic operation returns a value of the same type rather
//! than a `Result`, and only construction from an external string or
//! cast to a fixed-width integer can fail (see [`NumError`]).

mod big_double;
mod consts;
mod error;
mod format;
mod parse;
mod powers;
mod quad;

pub use big_double::BigDouble;
pub use error::NumError;
pub use quad::format::{DecimalExponentialOptions, ScientificExactOptions};
pub use quad::Quad;
