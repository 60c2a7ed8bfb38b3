// SPDX-License-Identifier: MPL-2.0
//! Viewer-facing state.
//!
//! - [`state`] - Per-image viewer session (transform, viewport, status line)

pub mod state;
