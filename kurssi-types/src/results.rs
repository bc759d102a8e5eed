//! Display-ready outputs of the analytics.
//!
//! Serialized shapes match what presentation code destructures: a missing
//! trend endpoint is `""`, an empty extremum is `[]`, and profit fields use
//! camelCase.

use serde::de::{Deserializer, Error as _, IgnoredAny};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::series::TimeValuePair;

/// Longest run of strictly decreasing consecutive values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Sample immediately before the first decrease; `None` when `length == 0`.
    #[serde(with = "placeholder")]
    pub start: Option<TimeValuePair>,
    /// Last sample of the decreasing run; `None` when `length == 0`.
    #[serde(with = "placeholder")]
    pub end: Option<TimeValuePair>,
    /// Number of decreasing steps (a run visiting three samples has length 2).
    pub length: usize,
}

impl TrendResult {
    /// True when no decrease was observed.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.length == 0
    }
}

mod placeholder {
    use super::{Deserialize, Deserializer, Serialize, Serializer, TimeValuePair};
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Slot {
        Pair(TimeValuePair),
        Blank(String),
    }

    pub fn serialize<S: Serializer>(v: &Option<TimeValuePair>, s: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(p) => p.serialize(s),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<TimeValuePair>, D::Error> {
        match Slot::deserialize(d)? {
            Slot::Pair(p) => Ok(Some(p)),
            Slot::Blank(s) if s.is_empty() => Ok(None),
            Slot::Blank(s) => Err(D::Error::custom(format!(
                "expected [timestamp, value] or \"\", got {s:?}"
            ))),
        }
    }
}

/// Highest or lowest sample of a series.
///
/// A missing series is represented one level up as `Option::None`, so
/// "no data" and "empty data" stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extremum {
    /// The series had no samples.
    Empty,
    /// First occurrence of the extreme value.
    At(TimeValuePair),
}

impl Extremum {
    /// The located sample, if any.
    #[must_use]
    pub const fn pair(&self) -> Option<TimeValuePair> {
        match self {
            Self::Empty => None,
            Self::At(p) => Some(*p),
        }
    }

    /// The located value, if any.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.pair().map(|p| p.value)
    }
}

impl Serialize for Extremum {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => s.serialize_seq(Some(0))?.end(),
            Self::At(p) => p.serialize(s),
        }
    }
}

impl<'de> Deserialize<'de> for Extremum {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Pair(TimeValuePair),
            Seq(Vec<IgnoredAny>),
        }
        match Shape::deserialize(d)? {
            Shape::Pair(p) => Ok(Self::At(p)),
            Shape::Seq(v) if v.is_empty() => Ok(Self::Empty),
            Shape::Seq(v) => Err(D::Error::invalid_length(v.len(), &"0 or 2 elements")),
        }
    }
}

/// Best single buy-then-sell pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResult {
    /// Entry sample; never later than `sell`.
    pub buy: TimeValuePair,
    /// Exit sample.
    pub sell: TimeValuePair,
    /// `sell.value - buy.value`; never negative.
    pub max_profit: f64,
    /// `max_profit / buy.value * 100`, or `-1` when `buy.value == 0`.
    pub percent: f64,
}

impl ProfitResult {
    /// Sentinel `percent` used when the buy value is zero.
    pub const PERCENT_UNDEFINED: f64 = -1.0;

    /// True when a positive profit exists.
    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.max_profit > 0.0
    }
}
