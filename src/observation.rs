use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_derive::Deserialize;
use std::fmt;

use nalgebra as na;

/// Track identifier as written by the tracker, either a number or a string.
///
/// `1` and `"1"` are different identifiers. Integers above `i64::MAX` land in `UInt`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ObjectId {
    Int(i64),
    UInt(u64),
    Str(String),
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Int(id) => write!(f, "{}", id),
            ObjectId::UInt(id) => write!(f, "{}", id),
            ObjectId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        ObjectId::Int(id)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        ObjectId::Str(id.to_string())
    }
}

/// One tracked object in a frame: identifier and (x,y) of the centroid
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TrackedObject {
    pub id: ObjectId,
    #[serde(deserialize_with = "coordinate")]
    pub x: f64,
    #[serde(deserialize_with = "coordinate")]
    pub y: f64,
}

impl TrackedObject {
    #[inline]
    pub fn new(id: impl Into<ObjectId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    #[inline(always)]
    pub fn centroid(&self) -> na::Point2<f64> {
        na::Point2::new(self.x, self.y)
    }
}

// Numbers pass through, numeric strings are parsed, anything else is rejected.
fn coordinate<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    match Raw::deserialize(de) {
        Ok(Raw::Num(v)) => Ok(v),
        Ok(Raw::Str(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("coordinate {:?} is not a number", s))),
        Err(_) => Err(D::Error::custom("coordinate must be a number")),
    }
}
