// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that a front end keeps per open image, kept free of any toolkit
//! types so it can be driven from a GUI event loop or from the command line.

pub mod session;

pub use session::{ViewerAction, ViewerSession};
