// SPDX-License-Identifier: MPL-2.0
//! Raw tag values as handed over by an external metadata reader.
//!
//! The reader is loosely typed, so every value arrives as one [`RawTag`]
//! variant and each extraction step pattern-matches on the shape it expects.
//! A shape it does not expect falls through to that field's default.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Tag name → value mapping produced by the metadata reader.
pub type RawTags = BTreeMap<String, RawTag>;

/// GPS sub-tag index → value mapping carried by the `GPSInfo` composite.
pub type GpsInfo = BTreeMap<u16, RawTag>;

/// Key of the composite GPS tag in a [`RawTags`] mapping.
pub const GPS_INFO_TAG: &str = "GPSInfo";

/// Numerator/denominator pair as stored in the source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}

impl Rational {
    #[must_use]
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<(i64, i64)> for Rational {
    fn from((num, den): (i64, i64)) -> Self {
        Self { num, den }
    }
}

/// One loosely-typed tag value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawTag {
    Integer(i64),
    Text(String),
    Rational(Rational),
    RationalSeq(Vec<Rational>),
    Bytes(Vec<u8>),
    /// Nested GPS directory, keyed by sub-tag index.
    Gps(GpsInfo),
}

impl RawTag {
    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            RawTag::Integer(_) => "integer",
            RawTag::Text(_) => "text",
            RawTag::Rational(_) => "rational",
            RawTag::RationalSeq(_) => "rational sequence",
            RawTag::Bytes(_) => "bytes",
            RawTag::Gps(_) => "gps directory",
        }
    }
}

impl From<&str> for RawTag {
    fn from(value: &str) -> Self {
        RawTag::Text(value.to_string())
    }
}

impl From<i64> for RawTag {
    fn from(value: i64) -> Self {
        RawTag::Integer(value)
    }
}

impl From<Rational> for RawTag {
    fn from(value: Rational) -> Self {
        RawTag::Rational(value)
    }
}

fn join_rationals(values: &[Rational]) -> String {
    values
        .iter()
        .map(Rational::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for RawTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTag::Integer(v) => write!(f, "{v}"),
            RawTag::Text(s) => f.write_str(s),
            RawTag::Rational(r) => write!(f, "{r}"),
            RawTag::RationalSeq(seq) => f.write_str(&join_rationals(seq)),
            RawTag::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
            RawTag::Gps(info) => write!(f, "<{} GPS entries>", info.len()),
        }
    }
}

/// Serializes to JSON-compatible scalars: rationals become `"n/d"` strings,
/// the GPS directory becomes a nested mapping keyed by the decimal index.
impl Serialize for RawTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawTag::Integer(v) => serializer.serialize_i64(*v),
            RawTag::Text(s) => serializer.serialize_str(s),
            RawTag::Rational(r) => serializer.collect_str(r),
            RawTag::RationalSeq(seq) => serializer.serialize_str(&join_rationals(seq)),
            RawTag::Bytes(_) => serializer.collect_str(self),
            RawTag::Gps(info) => {
                let mut map = serializer.serialize_map(Some(info.len()))?;
                for (index, value) in info {
                    map.serialize_entry(&index.to_string(), value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_displays_as_fraction() {
        assert_eq!(Rational::new(1, 125).to_string(), "1/125");
    }

    #[test]
    fn sequence_displays_comma_separated() {
        let tag = RawTag::RationalSeq(vec![
            Rational::new(37, 1),
            Rational::new(30, 1),
            Rational::new(0, 1),
        ]);
        assert_eq!(tag.to_string(), "37/1, 30/1, 0/1");
    }

    #[test]
    fn serializes_to_json_scalars() {
        let mut gps = GpsInfo::new();
        gps.insert(1, RawTag::from("N"));
        gps.insert(6, RawTag::Rational(Rational::new(120, 1)));

        let mut tags = RawTags::new();
        tags.insert("ISOSpeedRatings".into(), RawTag::Integer(200));
        tags.insert("ExposureTime".into(), RawTag::Rational(Rational::new(1, 125)));
        tags.insert(GPS_INFO_TAG.into(), RawTag::Gps(gps));

        let json = serde_json::to_value(&tags).expect("serialize");
        assert_eq!(json["ISOSpeedRatings"], 200);
        assert_eq!(json["ExposureTime"], "1/125");
        assert_eq!(json["GPSInfo"]["1"], "N");
        assert_eq!(json["GPSInfo"]["6"], "120/1");
    }

    #[test]
    fn kind_names_variants() {
        assert_eq!(RawTag::Bytes(vec![0]).kind(), "bytes");
        assert_eq!(RawTag::from("x").kind(), "text");
    }
}
