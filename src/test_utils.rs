// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and tag fixtures.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision where `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::metadata::Rational;

/// Tolerance for values that are exact in decimal but not in binary
/// (0.475, 2.8, ...).
pub const F64_EPSILON: f64 = 1e-12;

/// Builds a rational sequence from `(numerator, denominator)` pairs.
pub fn rationals(pairs: &[(i64, i64)]) -> Vec<Rational> {
    pairs.iter().copied().map(Rational::from).collect()
}
