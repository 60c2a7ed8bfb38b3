// SPDX-License-Identifier: MPL-2.0
//! Rational → floating point conversion.
//!
//! Every function here is total: a zero denominator or a value of the wrong
//! shape yields `0.0`, never an error.

use super::raw_tag::{RawTag, Rational};

/// Converts `numerator / denominator` to `f64`, returning `0.0` when the
/// denominator is zero.
///
/// # Example
///
/// ```
/// use airlens::domain::metadata::rational::to_decimal;
///
/// assert_eq!(to_decimal(1, 125), 0.008);
/// assert_eq!(to_decimal(5, 0), 0.0);
/// ```
#[must_use]
pub fn to_decimal(numerator: i64, denominator: i64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let value = numerator as f64 / denominator as f64;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// [`to_decimal`] for a [`Rational`].
#[must_use]
pub fn rational_to_decimal(value: Rational) -> f64 {
    to_decimal(value.num, value.den)
}

/// Interprets three rationals as degrees, minutes and seconds and returns
/// `d + m/60 + s/3600`.
///
/// A missing element contributes `0` for its term only, and elements past
/// the third are ignored, so a truncated triple still yields its degrees.
#[must_use]
pub fn sequence_to_decimal(values: &[Rational]) -> f64 {
    let term = |index: usize| values.get(index).copied().map_or(0.0, rational_to_decimal);
    term(0) + term(1) / 60.0 + term(2) / 3600.0
}

/// Numeric value of a scalar tag: rationals are divided out, integers taken
/// as-is, a one-element rational sequence is unwrapped. Any other shape is
/// `0.0`.
#[must_use]
pub fn tag_to_decimal(tag: &RawTag) -> f64 {
    match tag {
        RawTag::Rational(r) => rational_to_decimal(*r),
        #[allow(clippy::cast_precision_loss)]
        RawTag::Integer(v) => *v as f64,
        RawTag::RationalSeq(seq) if seq.len() == 1 => rational_to_decimal(seq[0]),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    fn r(num: i64, den: i64) -> Rational {
        Rational::new(num, den)
    }

    #[test]
    fn exposure_fraction_converts() {
        assert_abs_diff_eq!(to_decimal(1, 125), 0.008);
    }

    #[test]
    fn zero_denominator_is_zero() {
        for num in [-7, 0, 1, 42, i64::MAX] {
            assert_eq!(to_decimal(num, 0), 0.0);
        }
    }

    #[test]
    fn negative_rationals_keep_their_sign() {
        assert_abs_diff_eq!(to_decimal(-1, 2), -0.5);
    }

    #[test]
    fn dms_triple_converts() {
        assert_abs_diff_eq!(sequence_to_decimal(&[r(37, 1), r(30, 1), r(0, 1)]), 37.5);
    }

    #[test]
    fn fractional_seconds_convert() {
        // 10° 15' 36.36"
        let value = sequence_to_decimal(&[r(10, 1), r(15, 1), r(3636, 100)]);
        assert_abs_diff_eq!(value, 10.0 + 15.0 / 60.0 + 36.36 / 3600.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn short_sequence_degrades_per_term() {
        assert_abs_diff_eq!(sequence_to_decimal(&[r(12, 1), r(30, 1)]), 12.5);
        assert_abs_diff_eq!(sequence_to_decimal(&[r(12, 1)]), 12.0);
        assert_eq!(sequence_to_decimal(&[]), 0.0);
    }

    #[test]
    fn zero_denominator_term_is_dropped() {
        assert_abs_diff_eq!(sequence_to_decimal(&[r(12, 1), r(30, 0), r(36, 1)]), 12.01, epsilon = F64_EPSILON);
    }

    #[test]
    fn extra_elements_are_ignored() {
        let value = sequence_to_decimal(&[r(1, 1), r(0, 1), r(0, 1), r(99, 1)]);
        assert_abs_diff_eq!(value, 1.0);
    }

    #[test]
    fn tag_to_decimal_handles_shapes() {
        assert_abs_diff_eq!(tag_to_decimal(&RawTag::Rational(r(28, 10))), 2.8);
        assert_abs_diff_eq!(tag_to_decimal(&RawTag::Integer(50)), 50.0);
        assert_abs_diff_eq!(tag_to_decimal(&RawTag::RationalSeq(vec![r(35, 1)])), 35.0);
        assert_eq!(tag_to_decimal(&RawTag::from("1/125")), 0.0);
        assert_eq!(tag_to_decimal(&RawTag::RationalSeq(vec![r(1, 1), r(2, 1)])), 0.0);
        assert_eq!(tag_to_decimal(&RawTag::Bytes(vec![1, 2])), 0.0);
    }
}
