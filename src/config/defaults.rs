// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Multiplicative zoom factors and the initial scale
//! - **Fit**: Fit-to-window margin and the fallback viewport size

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale of a freshly loaded image (1.0 = original size).
pub const DEFAULT_SCALE: f64 = 1.0;

/// Factor applied by a zoom-in action.
pub const ZOOM_IN_FACTOR: f64 = 1.25;

/// Factor applied by a zoom-out action.
///
/// Kept as the literal 0.8 rather than `1.0 / ZOOM_IN_FACTOR`.
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Factor applied per mouse-wheel notch (divided out when scrolling down).
pub const WHEEL_ZOOM_FACTOR: f64 = 1.15;

// ==========================================================================
// Fit Defaults
// ==========================================================================

/// Fraction of the viewport an image fills after fit-to-window.
pub const DEFAULT_FIT_MARGIN: f64 = 0.95;

/// Viewport used by the command line when none is given.
pub const DEFAULT_VIEWPORT: (u32, u32) = (1280, 800);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCALE > 0.0);
    assert!(ZOOM_IN_FACTOR > 1.0);
    assert!(ZOOM_OUT_FACTOR > 0.0);
    assert!(ZOOM_OUT_FACTOR < 1.0);
    assert!(WHEEL_ZOOM_FACTOR > 1.0);

    assert!(DEFAULT_FIT_MARGIN > 0.0);
    assert!(DEFAULT_FIT_MARGIN <= 1.0);
    assert!(DEFAULT_VIEWPORT.0 > 0);
    assert!(DEFAULT_VIEWPORT.1 > 0);
};
