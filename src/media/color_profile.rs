// SPDX-License-Identifier: MPL-2.0
//! Embedded color profile detection.
//!
//! This is a best-effort heuristic, not an ICC parser: the profile bytes are
//! read as lossy text and searched for a few well-known profile names.

use crate::domain::metadata::{ColorProfile, ICC_PROFILE_TYPE};

/// Profile names searched for, in priority order. The first match wins.
pub const KNOWN_SPACES: [&str; 3] = ["Adobe RGB", "sRGB", "ProPhoto RGB"];

/// Summarizes `profile` as size, type and an optional color space hint.
///
/// Returns `None` when no profile bytes were supplied.
#[must_use]
pub fn inspect(profile: Option<&[u8]>) -> Option<ColorProfile> {
    let bytes = profile?;
    let text = String::from_utf8_lossy(bytes);
    let space_hint = KNOWN_SPACES
        .iter()
        .find(|name| text.contains(*name))
        .map(|name| (*name).to_string());

    Some(ColorProfile {
        size: bytes.len(),
        profile_type: ICC_PROFILE_TYPE.to_string(),
        space_hint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_description(description: &str) -> Vec<u8> {
        let mut bytes = vec![0u8; 128];
        bytes.extend_from_slice(b"desc\0\0\0\0");
        bytes.extend_from_slice(description.as_bytes());
        bytes.extend_from_slice(&[0xff, 0xfe, 0x00]);
        bytes
    }

    #[test]
    fn no_bytes_no_profile() {
        assert!(inspect(None).is_none());
    }

    #[test]
    fn empty_blob_is_still_a_profile() {
        let profile = inspect(Some(&[] as &[u8])).expect("profile");
        assert_eq!(profile.size, 0);
        assert_eq!(profile.profile_type, "ICC");
        assert!(profile.space_hint.is_none());
    }

    #[test]
    fn detects_srgb() {
        let bytes = profile_with_description("sRGB IEC61966-2.1");
        let profile = inspect(Some(bytes.as_slice())).expect("profile");
        assert_eq!(profile.size, bytes.len());
        assert_eq!(profile.space_hint.as_deref(), Some("sRGB"));
    }

    #[test]
    fn adobe_rgb_wins_over_srgb() {
        let bytes = profile_with_description("sRGB-compatible Adobe RGB (1998)");
        let profile = inspect(Some(bytes.as_slice())).expect("profile");
        assert_eq!(profile.space_hint.as_deref(), Some("Adobe RGB"));
    }

    #[test]
    fn detects_prophoto() {
        let bytes = profile_with_description("ProPhoto RGB");
        let profile = inspect(Some(bytes.as_slice())).expect("profile");
        assert_eq!(profile.space_hint.as_deref(), Some("ProPhoto RGB"));
    }

    #[test]
    fn unknown_profile_has_no_hint() {
        let bytes = profile_with_description("Display P3");
        let profile = inspect(Some(bytes.as_slice())).expect("profile");
        assert!(profile.space_hint.is_none());
    }
}
