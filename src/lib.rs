// SPDX-License-Identifier: MPL-2.0
//! `airlens` extracts camera, capture and location metadata from aerial and
//! ground photographs, and models the zoom/fit transform of an image viewer.
//!
//! # Layers
//!
//! - [`domain`]: pure value types and conversions (rationals, GPS, transform)
//! - [`application`]: ports the extractor depends on
//! - [`media`]: codec and EXIF adapters plus the metadata extractor
//! - [`ui`]: viewer session state
//! - [`config`]: user preferences stored in `settings.toml`

#![doc(html_root_url = "https://docs.rs/airlens/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
