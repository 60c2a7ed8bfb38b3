// SPDX-License-Identifier: MPL-2.0
//! Codec-backed metadata source.
//!
//! [`CodecSource`] reads image headers with the `image` crate (geometry,
//! channel layout, embedded ICC profile) and the EXIF block with
//! `kamadak-exif`. Pixels are never decoded.

use crate::application::port::metadata::{MetadataSource, ProbedImage};
use crate::error::Result;
use crate::media::exif_tags;
use image_rs::{ImageDecoder, ImageFormat, ImageReader};
use log::debug;
use std::path::Path;

/// Production [`MetadataSource`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecSource;

impl MetadataSource for CodecSource {
    fn probe(&self, path: &Path) -> Result<ProbedImage> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format().map(format_label).unwrap_or_default();

        let mut decoder = reader.into_decoder()?;
        let (width, height) = decoder.dimensions();
        let channel_count = decoder.color_type().channel_count();
        let icc_profile = decoder.icc_profile().unwrap_or_else(|err| {
            debug!("{}: unreadable ICC profile: {err}", path.display());
            None
        });

        Ok(ProbedImage {
            width,
            height,
            channel_count,
            format,
            raw_tags: exif_tags::read_raw_tags(path),
            icc_profile,
        })
    }
}

/// Upper-case container label, e.g. `"JPEG"` or `"PNG"`.
#[must_use]
pub fn format_label(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        other => format!("{other:?}").to_uppercase(),
    }
}
