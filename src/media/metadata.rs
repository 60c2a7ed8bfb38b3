// SPDX-License-Identifier: MPL-2.0
//! Image metadata extraction.
//!
//! Turns the pixel attributes and the raw tag mapping supplied by the codec
//! and tag reader into an [`ImageMetadata`] record. Extraction never fails:
//! a missing tag, or a tag of the wrong shape, leaves its field at the
//! documented default and the remaining fields are still extracted.

use crate::application::port::metadata::{MetadataSource, ProbedImage};
use crate::domain::metadata::{
    geo, rational, Dpi, GpsInfo, ImageMetadata, RawTag, RawTags, Rational, GPS_INFO_TAG,
};
use crate::error::Result;
use crate::media::color_profile;
use chrono::NaiveDateTime;
use log::debug;
use std::path::Path;

/// Shown in place of a byte blob that is not valid UTF-8.
pub const UNDECODABLE_BYTES: &str = "<undecodable bytes>";

const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";
const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `ResolutionUnit` value meaning pixels per centimeter.
const RESOLUTION_UNIT_CM: i64 = 3;
const CM_PER_INCH: f64 = 2.54;

// GPS sub-tag indices inside the `GPSInfo` directory.
const GPS_LATITUDE_REF: u16 = 1;
const GPS_LATITUDE: u16 = 2;
const GPS_LONGITUDE_REF: u16 = 3;
const GPS_LONGITUDE: u16 = 4;
const GPS_ALTITUDE_REF: u16 = 5;
const GPS_ALTITUDE: u16 = 6;

/// Builds the metadata record for an image of the given geometry.
///
/// `raw_tags` is keyed by tag name (`Make`, `ExposureTime`, `GPSInfo`, ...);
/// `profile` is the embedded ICC profile, if any.
#[must_use]
pub fn extract(
    width: u32,
    height: u32,
    channel_count: u8,
    raw_tags: &RawTags,
    profile: Option<&[u8]>,
) -> ImageMetadata {
    build(width, height, channel_count, "", raw_tags, profile)
}

/// [`extract`] over everything a metadata source returned, including the
/// container format label.
#[must_use]
pub fn extract_probed(probed: &ProbedImage) -> ImageMetadata {
    build(
        probed.width,
        probed.height,
        probed.channel_count,
        &probed.format,
        &probed.raw_tags,
        probed.icc_profile.as_deref(),
    )
}

/// Probes `path` through `source` and extracts its metadata.
///
/// # Errors
///
/// Returns the source's error when the file cannot be read or decoded.
pub fn load_metadata<S: MetadataSource + ?Sized>(source: &S, path: &Path) -> Result<ImageMetadata> {
    let probed = source.probe(path)?;
    Ok(extract_probed(&probed))
}

/// Color space label implied by the channel count alone.
#[must_use]
pub fn channel_color_space(channel_count: u8) -> &'static str {
    match channel_count {
        1 => "L",
        3 => "RGB",
        4 => "RGBA",
        _ => "UNKNOWN",
    }
}

fn build(
    width: u32,
    height: u32,
    channel_count: u8,
    format: &str,
    tags: &RawTags,
    profile: Option<&[u8]>,
) -> ImageMetadata {
    let has_alpha = matches!(channel_count, 2 | 4);

    let camera_make = text_tag(tags, "Make");
    let camera_model = text_tag(tags, "Model");
    let datetime_original = capture_time(tags);
    let exposure_time = non_negative_tag(tags, "ExposureTime");
    let f_number = non_negative_tag(tags, "FNumber");
    let iso_speed = iso_tag(tags, "ISOSpeedRatings");
    let focal_length = non_negative_tag(tags, "FocalLength");
    let dpi = resolution(tags);

    let (gps_latitude, gps_longitude, gps_altitude) = match tags.get(GPS_INFO_TAG) {
        Some(RawTag::Gps(info)) => gps_position(info),
        Some(other) => {
            debug!("{GPS_INFO_TAG}: expected gps directory, found {}", other.kind());
            (0.0, 0.0, 0.0)
        }
        None => (0.0, 0.0, 0.0),
    };

    let color_profile = color_profile::inspect(profile);
    let color_space = color_profile
        .as_ref()
        .and_then(|p| p.space_hint.clone())
        .unwrap_or_else(|| channel_color_space(channel_count).to_string());

    let raw_tags = tags
        .iter()
        .map(|(name, value)| (name.clone(), text_safe(value)))
        .collect();

    ImageMetadata {
        width,
        height,
        channels: channel_count,
        color_space,
        format: format.to_string(),
        dpi,
        has_alpha,
        camera_make,
        camera_model,
        datetime_original,
        exposure_time,
        f_number,
        iso_speed,
        focal_length,
        gps_latitude,
        gps_longitude,
        gps_altitude,
        raw_tags,
        color_profile,
    }
}

fn clean_text(value: &str) -> &str {
    value.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

fn text_tag(tags: &RawTags, name: &str) -> String {
    match tags.get(name) {
        Some(RawTag::Text(value)) => clean_text(value).to_string(),
        Some(other) => {
            debug!("{name}: expected text, found {}", other.kind());
            String::new()
        }
        None => String::new(),
    }
}

/// `DateTimeOriginal`, falling back to `DateTime`, as ISO-8601 when the
/// value uses the EXIF `YYYY:MM:DD HH:MM:SS` layout.
fn capture_time(tags: &RawTags) -> String {
    let raw = match text_tag(tags, "DateTimeOriginal") {
        value if value.is_empty() => text_tag(tags, "DateTime"),
        value => value,
    };
    match NaiveDateTime::parse_from_str(&raw, EXIF_DATETIME_FORMAT) {
        Ok(parsed) => parsed.format(ISO_DATETIME_FORMAT).to_string(),
        Err(_) => raw,
    }
}

fn decimal_tag(tags: &RawTags, name: &str) -> f64 {
    match tags.get(name) {
        Some(tag @ (RawTag::Rational(_) | RawTag::Integer(_))) => rational::tag_to_decimal(tag),
        Some(tag @ RawTag::RationalSeq(seq)) if seq.len() == 1 => rational::tag_to_decimal(tag),
        Some(other) => {
            debug!("{name}: expected rational, found {}", other.kind());
            0.0
        }
        None => 0.0,
    }
}

fn non_negative_tag(tags: &RawTags, name: &str) -> f64 {
    let value = decimal_tag(tags, name);
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

fn iso_tag(tags: &RawTags, name: &str) -> u32 {
    match tags.get(name) {
        Some(RawTag::Integer(value)) => u32::try_from(*value).unwrap_or(0),
        Some(other) => {
            debug!("{name}: expected integer, found {}", other.kind());
            0
        }
        None => 0,
    }
}

fn resolution(tags: &RawTags) -> Dpi {
    let per_inch = match tags.get("ResolutionUnit") {
        Some(RawTag::Integer(RESOLUTION_UNIT_CM)) => CM_PER_INCH,
        _ => 1.0,
    };
    Dpi {
        x: non_negative_tag(tags, "XResolution") * per_inch,
        y: non_negative_tag(tags, "YResolution") * per_inch,
    }
}

fn hemisphere_ref(info: &GpsInfo, index: u16) -> &str {
    match info.get(&index) {
        Some(RawTag::Text(value)) => clean_text(value),
        Some(RawTag::Bytes(bytes)) => std::str::from_utf8(bytes).map_or("", clean_text),
        _ => "",
    }
}

fn dms_axis(
    info: &GpsInfo,
    index: u16,
    reference: u16,
    convert: fn(&[Rational], &str) -> f64,
) -> f64 {
    match info.get(&index) {
        Some(RawTag::RationalSeq(dms)) => convert(dms, hemisphere_ref(info, reference)),
        // truncated DMS: the reader unwraps a single rational
        Some(RawTag::Rational(degrees)) => {
            convert(std::slice::from_ref(degrees), hemisphere_ref(info, reference))
        }
        Some(other) => {
            debug!("GPS sub-tag {index}: expected rational sequence, found {}", other.kind());
            0.0
        }
        None => 0.0,
    }
}

fn gps_altitude(info: &GpsInfo) -> f64 {
    let below_sea_ref = match info.get(&GPS_ALTITUDE_REF) {
        Some(RawTag::Integer(value)) => *value,
        Some(RawTag::Bytes(bytes)) if bytes.len() == 1 => i64::from(bytes[0]),
        _ => 0,
    };
    match info.get(&GPS_ALTITUDE) {
        Some(RawTag::Rational(value)) => geo::altitude(*value, below_sea_ref),
        Some(RawTag::RationalSeq(seq)) if seq.len() == 1 => geo::altitude(seq[0], below_sea_ref),
        Some(other) => {
            debug!("GPS altitude: expected rational, found {}", other.kind());
            0.0
        }
        None => 0.0,
    }
}

/// `value` when it lies within `[-limit, limit]`, the 0 sentinel otherwise.
fn within_range(value: f64, limit: f64, axis: &str) -> f64 {
    if (-limit..=limit).contains(&value) {
        value
    } else {
        debug!("GPS {axis} {value} out of range, ignored");
        0.0
    }
}

/// Latitude, longitude and altitude; each axis degrades on its own.
fn gps_position(info: &GpsInfo) -> (f64, f64, f64) {
    let latitude = dms_axis(info, GPS_LATITUDE, GPS_LATITUDE_REF, geo::latitude);
    let longitude = dms_axis(info, GPS_LONGITUDE, GPS_LONGITUDE_REF, geo::longitude);
    (
        within_range(latitude, 90.0, "latitude"),
        within_range(longitude, 180.0, "longitude"),
        gps_altitude(info),
    )
}

/// Copy of `value` with byte blobs replaced by text.
fn text_safe(value: &RawTag) -> RawTag {
    match value {
        RawTag::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => RawTag::Text(text.trim_end_matches('\0').to_string()),
            Err(_) => RawTag::Text(UNDECODABLE_BYTES.to_string()),
        },
        RawTag::Gps(info) => RawTag::Gps(
            info.iter()
                .map(|(index, value)| (*index, text_safe(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::metadata::tests::MockSource;
    use crate::error::Error;
    use crate::test_utils::{assert_abs_diff_eq, rationals, F64_EPSILON};

    fn r(num: i64, den: i64) -> Rational {
        Rational::new(num, den)
    }

    fn tags(entries: Vec<(&str, RawTag)>) -> RawTags {
        entries
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    fn gps(entries: Vec<(u16, RawTag)>) -> RawTag {
        RawTag::Gps(entries.into_iter().collect())
    }

    #[test]
    fn no_tags_yields_defaults() {
        let meta = extract(640, 480, 3, &RawTags::new(), None);
        assert_eq!(meta.width(), 640);
        assert_eq!(meta.height(), 480);
        assert_eq!(meta.channels(), 3);
        assert_eq!(meta.color_space(), "RGB");
        assert!(!meta.has_alpha());
        assert_eq!(meta.camera_make(), "");
        assert_eq!(meta.camera_model(), "");
        assert_eq!(meta.datetime_original(), "");
        assert_eq!(meta.exposure_time(), 0.0);
        assert_eq!(meta.f_number(), 0.0);
        assert_eq!(meta.iso_speed(), 0);
        assert_eq!(meta.focal_length(), 0.0);
        assert_eq!(meta.gps_latitude(), 0.0);
        assert_eq!(meta.gps_longitude(), 0.0);
        assert_eq!(meta.gps_altitude(), 0.0);
        assert!(meta.raw_tags().is_empty());
        assert!(meta.color_profile().is_none());
    }

    #[test]
    fn channel_count_drives_alpha_and_color_space() {
        let empty = RawTags::new();
        let cases = [
            (1, "L", false),
            (2, "UNKNOWN", true),
            (3, "RGB", false),
            (4, "RGBA", true),
            (5, "UNKNOWN", false),
        ];
        for (channels, space, alpha) in cases {
            let meta = extract(1, 1, channels, &empty, None);
            assert_eq!(meta.color_space(), space, "channels = {channels}");
            assert_eq!(meta.has_alpha(), alpha, "channels = {channels}");
        }
    }

    #[test]
    fn camera_settings_are_converted() {
        let raw = tags(vec![
            ("Make", "Canon".into()),
            ("Model", "EOS 5D\0".into()),
            ("DateTimeOriginal", "2023:06:15 14:30:00".into()),
            ("ExposureTime", r(1, 125).into()),
            ("FNumber", r(28, 10).into()),
            ("ISOSpeedRatings", RawTag::Integer(400)),
            ("FocalLength", r(50, 1).into()),
        ]);
        let meta = extract(6000, 4000, 3, &raw, None);
        assert_eq!(meta.camera_make(), "Canon");
        assert_eq!(meta.camera_model(), "EOS 5D");
        assert_eq!(meta.datetime_original(), "2023-06-15T14:30:00");
        assert_eq!(meta.exposure_time(), 0.008);
        assert_abs_diff_eq!(meta.f_number(), 2.8, epsilon = F64_EPSILON);
        assert_eq!(meta.iso_speed(), 400);
        assert_eq!(meta.focal_length(), 50.0);
    }

    #[test]
    fn datetime_falls_back_to_modification_time() {
        let raw = tags(vec![("DateTime", "2020:01:02 03:04:05".into())]);
        assert_eq!(
            extract(1, 1, 3, &raw, None).datetime_original(),
            "2020-01-02T03:04:05"
        );
    }

    #[test]
    fn unparseable_datetime_is_kept_verbatim() {
        let raw = tags(vec![("DateTimeOriginal", "sometime in June".into())]);
        assert_eq!(
            extract(1, 1, 3, &raw, None).datetime_original(),
            "sometime in June"
        );
    }

    #[test]
    fn zero_denominator_degrades_to_zero() {
        let raw = tags(vec![
            ("ExposureTime", r(1, 0).into()),
            ("FNumber", r(28, 10).into()),
        ]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.exposure_time(), 0.0);
        assert_abs_diff_eq!(meta.f_number(), 2.8, epsilon = F64_EPSILON);
    }

    #[test]
    fn mistyped_tags_degrade_independently() {
        let raw = tags(vec![
            ("ExposureTime", "1/125".into()),
            ("FNumber", RawTag::Bytes(vec![1, 2, 3])),
            ("ISOSpeedRatings", "fast".into()),
            ("Make", RawTag::Integer(42)),
            ("Model", "X100V".into()),
            ("FocalLength", r(23, 1).into()),
        ]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.exposure_time(), 0.0);
        assert_eq!(meta.f_number(), 0.0);
        assert_eq!(meta.iso_speed(), 0);
        assert_eq!(meta.camera_make(), "");
        assert_eq!(meta.camera_model(), "X100V");
        assert_eq!(meta.focal_length(), 23.0);
    }

    #[test]
    fn negative_values_clamp_to_zero() {
        let raw = tags(vec![
            ("ExposureTime", r(-1, 125).into()),
            ("FNumber", r(28, -10).into()),
            ("ISOSpeedRatings", RawTag::Integer(-100)),
            ("FocalLength", RawTag::Integer(-50)),
        ]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.exposure_time(), 0.0);
        assert_eq!(meta.f_number(), 0.0);
        assert_eq!(meta.iso_speed(), 0);
        assert_eq!(meta.focal_length(), 0.0);
    }

    #[test]
    fn resolution_in_centimeters_is_converted_to_dpi() {
        let raw = tags(vec![
            ("XResolution", r(300, 1).into()),
            ("YResolution", r(300, 1).into()),
        ]);
        let dpi = extract(1, 1, 3, &raw, None).dpi();
        assert_eq!((dpi.x, dpi.y), (300.0, 300.0));

        let raw = tags(vec![
            ("XResolution", r(100, 1).into()),
            ("YResolution", r(50, 1).into()),
            ("ResolutionUnit", RawTag::Integer(3)),
        ]);
        let dpi = extract(1, 1, 3, &raw, None).dpi();
        assert_abs_diff_eq!(dpi.x, 254.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dpi.y, 127.0, epsilon = 1e-9);
    }

    #[test]
    fn gps_south_west_below_sea_level() {
        let raw = tags(vec![(
            GPS_INFO_TAG,
            gps(vec![
                (1, "S".into()),
                (2, RawTag::RationalSeq(rationals(&[(33, 1), (51, 1), (54, 1)]))),
                (3, "W".into()),
                (4, RawTag::RationalSeq(rationals(&[(70, 1), (30, 1), (0, 1)]))),
                (5, RawTag::Integer(1)),
                (6, r(1005, 10).into()),
            ]),
        )]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_abs_diff_eq!(meta.gps_latitude(), -33.865, epsilon = 1e-9);
        assert_abs_diff_eq!(meta.gps_longitude(), -70.5, epsilon = 1e-9);
        assert_abs_diff_eq!(meta.gps_altitude(), -100.5, epsilon = 1e-9);
    }

    #[test]
    fn gps_references_may_arrive_as_bytes() {
        let raw = tags(vec![(
            GPS_INFO_TAG,
            gps(vec![
                (1, RawTag::Bytes(b"S\0".to_vec())),
                (2, RawTag::RationalSeq(rationals(&[(10, 1), (0, 1), (0, 1)]))),
                (5, RawTag::Bytes(vec![1])),
                (6, r(20, 1).into()),
            ]),
        )]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.gps_latitude(), -10.0);
        assert_eq!(meta.gps_altitude(), -20.0);
    }

    #[test]
    fn gps_axes_default_independently() {
        let raw = tags(vec![(
            GPS_INFO_TAG,
            gps(vec![
                (1, "N".into()),
                (2, RawTag::RationalSeq(rationals(&[(48, 1), (51, 1), (30, 1)]))),
                (4, "not a position".into()),
            ]),
        )]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_abs_diff_eq!(meta.gps_latitude(), 48.858_333_333, epsilon = 1e-8);
        assert_eq!(meta.gps_longitude(), 0.0);
        assert_eq!(meta.gps_altitude(), 0.0);
    }

    #[test]
    fn unknown_hemisphere_reference_is_positive() {
        let raw = tags(vec![(
            GPS_INFO_TAG,
            gps(vec![
                (1, "s".into()),
                (2, RawTag::RationalSeq(rationals(&[(12, 1)]))),
            ]),
        )]);
        assert_eq!(extract(1, 1, 3, &raw, None).gps_latitude(), 12.0);
    }

    #[test]
    fn out_of_range_coordinates_fall_back_to_sentinel() {
        let raw = tags(vec![(
            GPS_INFO_TAG,
            gps(vec![
                (2, RawTag::RationalSeq(rationals(&[(95, 1), (0, 1), (0, 1)]))),
                (3, "W".into()),
                (4, RawTag::RationalSeq(rationals(&[(200, 1), (0, 1), (0, 1)]))),
                (6, r(12, 1).into()),
            ]),
        )]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.gps_latitude(), 0.0);
        assert_eq!(meta.gps_longitude(), 0.0);
        assert_eq!(meta.gps_altitude(), 12.0);
        assert!(meta.gps().is_none());
    }

    #[test]
    fn boundary_coordinates_are_kept() {
        let raw = tags(vec![(
            GPS_INFO_TAG,
            gps(vec![
                (1, "S".into()),
                (2, RawTag::RationalSeq(rationals(&[(90, 1), (0, 1), (0, 1)]))),
                (4, RawTag::RationalSeq(rationals(&[(180, 1), (0, 1), (0, 1)]))),
            ]),
        )]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.gps_latitude(), -90.0);
        assert_eq!(meta.gps_longitude(), 180.0);
    }

    #[test]
    fn single_rational_position_is_read_as_degrees() {
        let raw = tags(vec![(
            GPS_INFO_TAG,
            gps(vec![
                (1, "N".into()),
                (2, r(12, 1).into()),
                (3, "W".into()),
                (4, r(45, 2).into()),
            ]),
        )]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.gps_latitude(), 12.0);
        assert_eq!(meta.gps_longitude(), -22.5);
    }

    #[test]
    fn gps_tag_of_wrong_shape_is_ignored() {
        let raw = tags(vec![(GPS_INFO_TAG, "somewhere".into())]);
        let meta = extract(1, 1, 3, &raw, None);
        assert_eq!(meta.gps_latitude(), 0.0);
        assert!(meta.gps().is_none());
    }

    #[test]
    fn profile_hint_overrides_channel_color_space() {
        let mut profile = vec![0u8; 64];
        profile.extend_from_slice(b"Adobe RGB (1998)");
        let meta = extract(1, 1, 3, &RawTags::new(), Some(profile.as_slice()));
        assert_eq!(meta.color_space(), "Adobe RGB");
        let summary = meta.color_profile().expect("profile");
        assert_eq!(summary.size, profile.len());
        assert_eq!(summary.profile_type, "ICC");
    }

    #[test]
    fn unrecognized_profile_keeps_channel_color_space() {
        let meta = extract(1, 1, 4, &RawTags::new(), Some([0u8; 32].as_slice()));
        assert_eq!(meta.color_space(), "RGBA");
        assert!(meta.color_profile().is_some());
    }

    #[test]
    fn byte_blobs_become_text_in_raw_copy() {
        let raw = tags(vec![
            ("UserComment", RawTag::Bytes(b"hello\0\0".to_vec())),
            ("MakerNote", RawTag::Bytes(vec![0xff, 0xfe, 0xfd])),
            (GPS_INFO_TAG, gps(vec![(0, RawTag::Bytes(vec![0xc3, 0x28]))])),
            ("Make", "Nikon".into()),
        ]);
        let meta = extract(1, 1, 3, &raw, None);
        let copy = meta.raw_tags();
        assert_eq!(copy["UserComment"], RawTag::Text("hello".into()));
        assert_eq!(copy["MakerNote"], RawTag::Text(UNDECODABLE_BYTES.into()));
        assert_eq!(copy["Make"], RawTag::Text("Nikon".into()));
        let RawTag::Gps(info) = &copy[GPS_INFO_TAG] else {
            panic!("GPSInfo should stay a directory");
        };
        assert_eq!(info[&0u16], RawTag::Text(UNDECODABLE_BYTES.into()));
    }

    #[test]
    fn raw_copy_keeps_every_tag_name() {
        let raw = tags(vec![
            ("Orientation", RawTag::Integer(6)),
            ("Software", "darktable".into()),
            ("ExposureBiasValue", r(-1, 3).into()),
        ]);
        let meta = extract(1, 1, 3, &raw, None);
        let names: Vec<_> = meta.raw_tags().keys().cloned().collect();
        assert_eq!(names, vec!["ExposureBiasValue", "Orientation", "Software"]);
    }

    #[test]
    fn load_metadata_goes_through_source() {
        let probed = ProbedImage {
            width: 1920,
            height: 1080,
            channel_count: 3,
            format: "JPEG".into(),
            raw_tags: tags(vec![("Make", "Fujifilm".into())]),
            icc_profile: None,
        };
        let source = MockSource::with_image("/photos/a.jpg", probed);

        let meta = load_metadata(&source, Path::new("/photos/a.jpg")).expect("metadata");
        assert_eq!(meta.camera_make(), "Fujifilm");
        assert_eq!(meta.format(), "JPEG");

        let missing = load_metadata(&source, Path::new("/photos/b.jpg"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }

    #[test]
    fn probed_image_carries_format() {
        let probed = ProbedImage {
            width: 32,
            height: 16,
            channel_count: 4,
            format: "PNG".into(),
            ..ProbedImage::default()
        };
        let meta = extract_probed(&probed);
        assert_eq!(meta.format(), "PNG");
        assert_eq!(meta.color_space(), "RGBA");
        assert_eq!(extract(32, 16, 4, &RawTags::new(), None).format(), "");
    }
}
