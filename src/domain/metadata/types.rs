// SPDX-License-Identifier: MPL-2.0
//! Metadata domain types.
//!
//! Pure value types for image metadata. [`ImageMetadata`] is only built by
//! [`crate::media::metadata::extract`] and is read-only afterwards.

use super::raw_tag::RawTags;
use serde::Serialize;
use std::collections::BTreeMap;

/// A known position, as reported by [`ImageMetadata::gps`].
///
/// ```
/// use airlens::domain::metadata::GpsCoordinates;
///
/// let seoul = GpsCoordinates::new(37.5, 127.016_667);
/// assert_eq!(seoul.format(), "37.500000° N, 127.016667° E");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsCoordinates {
    latitude: f64,
    longitude: f64,
}

impl GpsCoordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Absolute degrees with six decimals and a hemisphere letter.
    #[must_use]
    pub fn format(&self) -> String {
        let north_south = if self.latitude < 0.0 { 'S' } else { 'N' };
        let east_west = if self.longitude < 0.0 { 'W' } else { 'E' };
        format!(
            "{:.6}° {north_south}, {:.6}° {east_west}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

// =============================================================================
// ColorProfile
// =============================================================================

/// Label reported for every embedded profile.
pub const ICC_PROFILE_TYPE: &str = "ICC";

/// Summary of an embedded color profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorProfile {
    #[serde(rename = "profileSize")]
    pub size: usize,
    pub profile_type: String,
    /// Color space guessed from the profile text, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_hint: Option<String>,
}

// =============================================================================
// ImageMetadata
// =============================================================================

/// Horizontal and vertical resolution; `0.0` means unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Dpi {
    pub x: f64,
    pub y: f64,
}

/// Geometry, camera, capture and location metadata for one image.
///
/// Every numeric field holds either a measured value or its "unknown"
/// sentinel (`0`, or an empty string for text). Latitude, longitude and
/// altitude use `0.0` for "absent", which cannot be told apart from a
/// position on the equator, the prime meridian or at sea level.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) channels: u8,
    pub(crate) color_space: String,
    pub(crate) format: String,
    pub(crate) dpi: Dpi,
    pub(crate) has_alpha: bool,

    pub(crate) camera_make: String,
    pub(crate) camera_model: String,
    pub(crate) datetime_original: String,
    pub(crate) exposure_time: f64,
    pub(crate) f_number: f64,
    pub(crate) iso_speed: u32,
    pub(crate) focal_length: f64,

    pub(crate) gps_latitude: f64,
    pub(crate) gps_longitude: f64,
    pub(crate) gps_altitude: f64,

    #[serde(rename = "exifData")]
    pub(crate) raw_tags: RawTags,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) color_profile: Option<ColorProfile>,
}

impl ImageMetadata {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// `"L"`, `"RGB"`, `"RGBA"`, `"UNKNOWN"`, or a profile-derived label.
    #[must_use]
    pub fn color_space(&self) -> &str {
        &self.color_space
    }

    /// Container format reported by the decoder, empty when unknown.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub fn dpi(&self) -> Dpi {
        self.dpi
    }

    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    #[must_use]
    pub fn camera_make(&self) -> &str {
        &self.camera_make
    }

    #[must_use]
    pub fn camera_model(&self) -> &str {
        &self.camera_model
    }

    /// Capture timestamp, ISO-8601 when the source used the EXIF layout.
    #[must_use]
    pub fn datetime_original(&self) -> &str {
        &self.datetime_original
    }

    /// Exposure time in seconds.
    #[must_use]
    pub fn exposure_time(&self) -> f64 {
        self.exposure_time
    }

    #[must_use]
    pub fn f_number(&self) -> f64 {
        self.f_number
    }

    #[must_use]
    pub fn iso_speed(&self) -> u32 {
        self.iso_speed
    }

    /// Focal length in millimeters.
    #[must_use]
    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    #[must_use]
    pub fn gps_latitude(&self) -> f64 {
        self.gps_latitude
    }

    #[must_use]
    pub fn gps_longitude(&self) -> f64 {
        self.gps_longitude
    }

    /// Altitude in meters, negative below sea level.
    #[must_use]
    pub fn gps_altitude(&self) -> f64 {
        self.gps_altitude
    }

    /// Position as coordinates, or `None` when both axes hold the sentinel.
    #[must_use]
    pub fn gps(&self) -> Option<GpsCoordinates> {
        let unset = self.gps_latitude == 0.0 && self.gps_longitude == 0.0;
        (!unset).then(|| GpsCoordinates::new(self.gps_latitude, self.gps_longitude))
    }

    #[must_use]
    pub fn color_profile(&self) -> Option<&ColorProfile> {
        self.color_profile.as_ref()
    }

    /// Every tag the reader supplied, with byte blobs rendered as text.
    #[must_use]
    pub fn raw_tags(&self) -> &RawTags {
        &self.raw_tags
    }

    /// Pretty-printed JSON export.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Serialize`] if serialization fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Flat string view for a metadata panel.
    #[must_use]
    pub fn to_display_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        let mut put = |key: &str, value: String| {
            map.insert(key.to_string(), value);
        };

        put("width", self.width.to_string());
        put("height", self.height.to_string());
        put("channels", self.channels.to_string());
        put("colorSpace", self.color_space.clone());
        put("format", self.format.clone());
        put("dpi", format!("{} x {}", self.dpi.x, self.dpi.y));
        put("hasAlpha", self.has_alpha.to_string());

        put("cameraMake", self.camera_make.clone());
        put("cameraModel", self.camera_model.clone());
        put("datetimeOriginal", self.datetime_original.clone());
        put("exposureTime", self.exposure_time.to_string());
        put("fNumber", self.f_number.to_string());
        put("isoSpeed", self.iso_speed.to_string());
        put("focalLength", self.focal_length.to_string());

        put("gpsLatitude", self.gps_latitude.to_string());
        put("gpsLongitude", self.gps_longitude.to_string());
        put("gpsAltitude", self.gps_altitude.to_string());
        if let Some(coords) = self.gps() {
            put("gpsPosition", coords.format());
        }

        if let Some(profile) = &self.color_profile {
            put("colorProfile", format!("{} ({} bytes)", profile.profile_type, profile.size));
        }

        map
    }
}

// =============================================================================
// Tests
// =============================================================================
