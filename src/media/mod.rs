// SPDX-License-Identifier: MPL-2.0
//! Image file access and metadata extraction.
//!
//! - [`image`]: codec-backed [`MetadataSource`](crate::application::port::MetadataSource)
//! - [`exif_tags`]: EXIF fields → raw tag mapping
//! - [`color_profile`]: ICC profile summary
//! - [`metadata`]: raw inputs → [`ImageMetadata`](crate::domain::metadata::ImageMetadata)

pub mod color_profile;
pub mod exif_tags;
pub mod image;
pub mod metadata;

pub use image::CodecSource;
pub use metadata::{extract, extract_probed, load_metadata};

/// Extensions the codec source is expected to open.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp"];

/// Checks whether `path` has one of [`IMAGE_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_supported_image<P: AsRef<std::path::Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
