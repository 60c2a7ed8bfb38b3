// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the domain and its collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The media layer implements application layer ports
//! - The binary and viewer session use application layer ports
//!
//! # Example
//!
//! ```ignore
//! use airlens::application::port::MetadataSource;
//! use airlens::media::image::CodecSource;
//!
//! // The media layer implements the port trait
//! let probed = CodecSource.probe(Path::new("photo.jpg"))?;
//! ```

pub mod port;
