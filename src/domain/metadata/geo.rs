// SPDX-License-Identifier: MPL-2.0
//! Degree/minute/second and altitude conversion for GPS tags.
//!
//! All three conversions are total. The sign only flips on the exact
//! southern/western/below-sea-level reference; any other reference value,
//! including a missing one, is read as the positive hemisphere.

use super::rational::{rational_to_decimal, sequence_to_decimal};
use super::raw_tag::Rational;

/// Latitude reference marking the southern hemisphere.
pub const SOUTH: &str = "S";
/// Longitude reference marking the western hemisphere.
pub const WEST: &str = "W";
/// Altitude reference marking a position below sea level.
pub const BELOW_SEA_LEVEL: i64 = 1;

fn signed_degrees(dms: &[Rational], reference: &str, negative: &str) -> f64 {
    let degrees = sequence_to_decimal(dms);
    if reference == negative {
        -degrees
    } else {
        degrees
    }
}

/// Signed decimal latitude; negative for reference `"S"`.
///
/// # Example
///
/// ```
/// use airlens::domain::metadata::geo::latitude;
/// use airlens::domain::metadata::Rational;
///
/// let dms = [Rational::new(37, 1), Rational::new(30, 1), Rational::new(0, 1)];
/// assert_eq!(latitude(&dms, "N"), 37.5);
/// assert_eq!(latitude(&dms, "S"), -37.5);
/// ```
#[must_use]
pub fn latitude(dms: &[Rational], hemisphere_ref: &str) -> f64 {
    signed_degrees(dms, hemisphere_ref, SOUTH)
}

/// Signed decimal longitude; negative for reference `"W"`.
#[must_use]
pub fn longitude(dms: &[Rational], hemisphere_ref: &str) -> f64 {
    signed_degrees(dms, hemisphere_ref, WEST)
}

/// Signed altitude in meters; negative when `below_sea_ref` is `1`.
#[must_use]
pub fn altitude(value: Rational, below_sea_ref: i64) -> f64 {
    let meters = rational_to_decimal(value);
    if below_sea_ref == BELOW_SEA_LEVEL {
        -meters
    } else {
        meters
    }
}
