// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core logic with no decoder or windowing dependencies.
//!
//! This module contains pure domain types, value objects, and conversion
//! rules. Nothing here performs I/O, so everything is testable in isolation.
//!
//! # Modules
//!
//! - [`metadata`]: Raw tag values, rational and GPS conversion, and the
//!   [`ImageMetadata`](metadata::ImageMetadata) record
//! - [`measurement`]: Distance and area measurement on the image plane
//! - [`ui`]: Viewer value objects
//!   ([`ViewportTransformState`](ui::ViewportTransformState))

pub mod measurement;
pub mod metadata;
pub mod ui;
