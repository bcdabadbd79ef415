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
//! The six value categories a [`Quad`](super::Quad) can fall into, and the
//! degenerate-case dispatch every arithmetic op and comparison starts
//! from. Only the `PositiveFinite`/`NegativeFinite` combinations fall
//! through to the real bit-level algorithms in [`super::arith`] — the
//! `None` return from each of the functions below *is* that fallthrough
//! signal, not a missing case.

use std::cmp::Ordering;

use super::Quad;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    Zero,
    PositiveInfinity,
    NegativeInfinity,
    Nan,
    PositiveFinite,
    NegativeFinite,
}

impl Category {
    #[inline]
    pub(crate) fn is_finite_nonzero(self) -> bool {
        matches!(self, Category::PositiveFinite | Category::NegativeFinite)
    }
}

pub(crate) fn classify(q: &Quad) -> Category {
    if q.is_zero() {
        Category::Zero
    } else if q.is_positive_infinity() {
        Category::PositiveInfinity
    } else if q.is_negative_infinity() {
        Category::NegativeInfinity
    } else if q.is_nan() {
        Category::Nan
    } else if q.is_sign_negative() {
        Category::NegativeFinite
    } else {
        Category::PositiveFinite
    }
}

/// §4.2.2's 6x6 table for `+`. `None` means both operands are finite and
/// nonzero, i.e. the real bit-level algorithm in [`super::arith`] runs.
pub(crate) fn add_sentinel(a: &Quad, b: &Quad) -> Option<Quad> {
    use Category::*;
    match (classify(a), classify(b)) {
        (Nan, _) | (_, Nan) => Some(Quad::NAN),
        (Zero, Zero) => Some(Quad::ZERO),
        (Zero, _) => Some(*b),
        (_, Zero) => Some(*a),
        (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => {
            Some(Quad::NAN)
        }
        (PositiveInfinity, _) | (_, PositiveInfinity) => Some(Quad::INFINITY),
        (NegativeInfinity, _) | (_, NegativeInfinity) => Some(Quad::NEG_INFINITY),
        (PositiveFinite, PositiveFinite)
        | (PositiveFinite, NegativeFinite)
        | (NegativeFinite, PositiveFinite)
        | (NegativeFinite, NegativeFinite) => None,
    }
}

/// The table for `x`. `None` signals both operands are finite nonzero
/// (`arith::mul` runs the hi/lo-split bit algorithm from there).
pub(crate) fn mul_sentinel(a: &Quad, b: &Quad) -> Option<Quad> {
    use Category::*;
    match (classify(a), classify(b)) {
        (Nan, _) | (_, Nan) => Some(Quad::NAN),
        (Zero, PositiveInfinity) | (Zero, NegativeInfinity) | (PositiveInfinity, Zero) | (NegativeInfinity, Zero) => {
            Some(Quad::NAN)
        }
        (Zero, Zero) | (Zero, _) | (_, Zero) => Some(Quad::ZERO),
        (PositiveInfinity, PositiveInfinity) | (NegativeInfinity, NegativeInfinity) => Some(Quad::INFINITY),
        (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => Some(Quad::NEG_INFINITY),
        (PositiveInfinity, PositiveFinite) | (PositiveFinite, PositiveInfinity) => Some(Quad::INFINITY),
        (PositiveInfinity, NegativeFinite) | (NegativeFinite, PositiveInfinity) => Some(Quad::NEG_INFINITY),
        (NegativeInfinity, PositiveFinite) | (PositiveFinite, NegativeInfinity) => Some(Quad::NEG_INFINITY),
        (NegativeInfinity, NegativeFinite) | (NegativeFinite, NegativeInfinity) => Some(Quad::INFINITY),
        (PositiveFinite, PositiveFinite)
        | (NegativeFinite, NegativeFinite)
        | (PositiveFinite, NegativeFinite)
        | (NegativeFinite, PositiveFinite) => None,
    }
}

/// The table for `/`. `None` signals both operands are finite nonzero.
pub(crate) fn div_sentinel(a: &Quad, b: &Quad) -> Option<Quad> {
    use Category::*;
    match (classify(a), classify(b)) {
        (Nan, _) | (_, Nan) => Some(Quad::NAN),
        (Zero, Zero) => Some(Quad::NAN),
        (Zero, _) => Some(Quad::ZERO),
        (PositiveFinite, Zero) | (PositiveInfinity, Zero) => Some(Quad::INFINITY),
        (NegativeFinite, Zero) | (NegativeInfinity, Zero) => Some(Quad::NEG_INFINITY),
        (PositiveInfinity, PositiveInfinity)
        | (PositiveInfinity, NegativeInfinity)
        | (NegativeInfinity, PositiveInfinity)
        | (NegativeInfinity, NegativeInfinity) => Some(Quad::NAN),
        (PositiveInfinity, PositiveFinite) => Some(Quad::INFINITY),
        (PositiveInfinity, NegativeFinite) => Some(Quad::NEG_INFINITY),
        (NegativeInfinity, PositiveFinite) => Some(Quad::NEG_INFINITY),
        (NegativeInfinity, NegativeFinite) => Some(Quad::INFINITY),
        (PositiveFinite, PositiveInfinity) | (NegativeFinite, NegativeInfinity) => Some(Quad::ZERO),
        (PositiveFinite, NegativeInfinity) | (NegativeFinite, PositiveInfinity) => Some(Quad::ZERO),
        (PositiveFinite, PositiveFinite)
        | (NegativeFinite, NegativeFinite)
        | (PositiveFinite, NegativeFinite)
        | (NegativeFinite, PositiveFinite) => None,
    }
}

/// The tables for `<`/`<=`/`>`/`>=`/`==`, folded into one `Ordering`.
/// `None` means both operands are finite, nonzero, same-signed: the real
/// magnitude compare in [`super::arith`] runs. NaN is handled by the
/// caller before this is ever reached (NaN has no ordering at all, not
/// even "equal to itself", which a table entry can't express as cleanly
/// as an early return).
pub(crate) fn compare_sentinel(a: &Quad, b: &Quad) -> Option<Ordering> {
    use Category::*;
    match (classify(a), classify(b)) {
        (Nan, _) | (_, Nan) => None,
        (Zero, Zero) => Some(Ordering::Equal),
        (Zero, PositiveInfinity) | (Zero, PositiveFinite) => Some(Ordering::Less),
        (Zero, NegativeInfinity) | (Zero, NegativeFinite) => Some(Ordering::Greater),
        (PositiveInfinity, Zero) | (PositiveFinite, Zero) => Some(Ordering::Greater),
        (NegativeInfinity, Zero) | (NegativeFinite, Zero) => Some(Ordering::Less),
        (PositiveInfinity, PositiveInfinity) => Some(Ordering::Equal),
        (NegativeInfinity, NegativeInfinity) => Some(Ordering::Equal),
        (PositiveInfinity, _) => Some(Ordering::Greater),
        (_, PositiveInfinity) => Some(Ordering::Less),
        (NegativeInfinity, _) => Some(Ordering::Less),
        (_, NegativeInfinity) => Some(Ordering::Greater),
        (PositiveFinite, NegativeFinite) => Some(Ordering::Greater),
        (NegativeFinite, PositiveFinite) => Some(Ordering::Less),
        (PositiveFinite, PositiveFinite) | (NegativeFinite, NegativeFinite) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_table_matches_ieee754_corners() {
        assert!(add_sentinel(&Quad::INFINITY, &Quad::NEG_INFINITY).unwrap().is_nan());
        assert!(add_sentinel(&Quad::NAN, &Quad::from_i64(1)).unwrap().is_nan());
        assert_eq!(add_sentinel(&Quad::ZERO, &Quad::from_i64(5)).unwrap(), Quad::from_i64(5));
        assert!(add_sentinel(&Quad::from_i64(1), &Quad::from_i64(2)).is_none());
    }

    #[test]
    fn div_table_matches_ieee754_corners() {
        assert!(div_sentinel(&Quad::ZERO, &Quad::ZERO).unwrap().is_nan());
        assert_eq!(div_sentinel(&Quad::from_i64(5), &Quad::ZERO), Some(Quad::INFINITY));
        assert_eq!(div_sentinel(&Quad::from_i64(-5), &Quad::ZERO), Some(Quad::NEG_INFINITY));
        assert!(div_sentinel(&Quad::from_i64(1), &Quad::from_i64(2)).is_none());
    }
}
