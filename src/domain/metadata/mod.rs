// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types and the pure conversions behind extraction.
//!
//! - [`RawTag`]: one loosely-typed value from the metadata reader
//! - [`rational`]: rational → decimal conversion
//! - [`geo`]: DMS/hemisphere and altitude conversion
//! - [`ImageMetadata`]: the strongly-typed, unit-normalized record
//! - [`GpsCoordinates`]: position value with display formatting

pub mod geo;
pub mod rational;
mod raw_tag;
mod types;

pub use raw_tag::{GpsInfo, RawTag, RawTags, Rational, GPS_INFO_TAG};
pub use types::{ColorProfile, Dpi, GpsCoordinates, ImageMetadata, ICC_PROFILE_TYPE};
