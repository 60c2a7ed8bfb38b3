// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring extraction stays independent of
//! the concrete codec and tag reader.
//!
//! # Available Ports
//!
//! - [`metadata`]: Geometry, tags and color profile of an image file
//!
//! # Example
//!
//! ```ignore
//! use airlens::application::port::metadata::MetadataSource;
//! use std::path::Path;
//!
//! fn pixel_count(source: &impl MetadataSource, path: &Path) -> u64 {
//!     source
//!         .probe(path)
//!         .map(|probed| u64::from(probed.width) * u64::from(probed.height))
//!         .unwrap_or(0)
//! }
//! ```

pub mod metadata;

// Re-export main types for convenience
pub use metadata::{MetadataSource, ProbedImage};
