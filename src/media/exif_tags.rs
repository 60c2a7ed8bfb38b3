// SPDX-License-Identifier: MPL-2.0
//! Bridge from `kamadak-exif` fields to [`RawTags`].
//!
//! Only the primary image directory is read; thumbnail fields are skipped.
//! GPS fields are grouped under [`GPS_INFO_TAG`] keyed by their tag number,
//! everything else is keyed by the tag's EXIF name.

use crate::domain::metadata::{GpsInfo, RawTag, RawTags, Rational, GPS_INFO_TAG};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Name under which `PhotographicSensitivity` is exposed.
const ISO_TAG: &str = "ISOSpeedRatings";

/// Reads the EXIF tags of the file at `path`.
///
/// A file that cannot be opened, or that carries no EXIF block, yields an
/// empty mapping.
#[must_use]
pub fn read_raw_tags(path: &Path) -> RawTags {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("{}: cannot open for EXIF: {err}", path.display());
            return RawTags::new();
        }
    };
    let mut reader = BufReader::new(file);
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => collect_fields(exif.fields()),
        Err(err) => {
            debug!("{}: no EXIF data: {err}", path.display());
            RawTags::new()
        }
    }
}

/// Converts EXIF fields into the tag mapping consumed by the extractor.
pub fn collect_fields<'a, I>(fields: I) -> RawTags
where
    I: IntoIterator<Item = &'a exif::Field>,
{
    let mut tags = RawTags::new();
    let mut gps = GpsInfo::new();

    for field in fields {
        if field.ifd_num != exif::In::PRIMARY {
            continue;
        }
        let Some(value) = convert_value(&field.value) else {
            debug!("{}: unsupported value type, skipped", field.tag);
            continue;
        };
        if field.tag.context() == exif::Context::Gps {
            gps.insert(field.tag.number(), value);
        } else if field.tag == exif::Tag::PhotographicSensitivity {
            tags.insert(ISO_TAG.to_string(), value);
        } else {
            tags.insert(field.tag.to_string(), value);
        }
    }

    if !gps.is_empty() {
        tags.insert(GPS_INFO_TAG.to_string(), RawTag::Gps(gps));
    }
    tags
}

fn rationals(values: Vec<Rational>) -> Option<RawTag> {
    match values.as_slice() {
        [] => None,
        [single] => Some(RawTag::Rational(*single)),
        _ => Some(RawTag::RationalSeq(values)),
    }
}

fn first_integer<T: Copy + Into<i64>>(values: &[T]) -> Option<RawTag> {
    values.first().map(|v| RawTag::Integer((*v).into()))
}

fn convert_value(value: &exif::Value) -> Option<RawTag> {
    match value {
        exif::Value::Ascii(lines) => {
            // NUL padding splits into empty strings
            let text = lines
                .iter()
                .filter(|line| !line.is_empty())
                .map(|line| String::from_utf8_lossy(line).into_owned())
                .collect::<Vec<_>>()
                .join(", ");
            Some(RawTag::Text(text))
        }
        exif::Value::Rational(values) => rationals(
            values
                .iter()
                .map(|r| Rational::new(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        exif::Value::SRational(values) => rationals(
            values
                .iter()
                .map(|r| Rational::new(i64::from(r.num), i64::from(r.denom)))
                .collect(),
        ),
        exif::Value::Short(values) => first_integer(values),
        exif::Value::Long(values) => first_integer(values),
        exif::Value::SShort(values) => first_integer(values),
        exif::Value::SLong(values) => first_integer(values),
        exif::Value::SByte(values) => first_integer(values),
        exif::Value::Byte(bytes) | exif::Value::Undefined(bytes, _) => {
            Some(RawTag::Bytes(bytes.clone()))
        }
        _ => None,
    }
}
