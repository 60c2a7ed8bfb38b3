// SPDX-License-Identifier: MPL-2.0
//! Metadata source port definition.
//!
//! This module defines the trait through which the extractor receives what
//! an external codec and metadata reader found in a file. The production
//! adapter is [`crate::media::image::CodecSource`] (`image` + `kamadak-exif`);
//! tests substitute canned values.
//!
//! # What a source supplies
//!
//! - **Geometry**: width, height and channel count of the decoded buffer
//! - **Format**: container label such as `"JPEG"`
//! - **Tags**: EXIF-style tags keyed by name, GPS grouped under `GPSInfo`
//! - **ICC Profile**: embedded color profile bytes (opaque)

use crate::domain::metadata::RawTags;
use crate::error::Result;
use std::path::Path;

// =============================================================================
// ProbedImage
// =============================================================================

/// Everything the extractor needs from one decoded file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbedImage {
    pub width: u32,
    pub height: u32,
    /// Channels per pixel (1 = gray, 3 = RGB, 4 = RGBA, ...).
    pub channel_count: u8,
    /// Container format label, empty when unknown.
    pub format: String,
    pub raw_tags: RawTags,
    pub icc_profile: Option<Vec<u8>>,
}

// =============================================================================
// MetadataSource
// =============================================================================

/// Reads geometry, tags and color profile from an image file.
///
/// A missing or undecodable file is an error; a decodable file without any
/// metadata is not, and yields empty tags and no profile.
pub trait MetadataSource {
    /// Opens `path` and returns what the codec and tag reader found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    fn probe(&self, path: &Path) -> Result<ProbedImage>;
}
