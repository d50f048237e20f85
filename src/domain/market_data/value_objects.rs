use chrono::NaiveDate;
use derive_more::{Constructor, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - one dated price observation
///
/// Day resolution, whole currency units. Sequences of points are
/// chronologically ascending with one point per calendar day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Constructor, Display, Serialize, Deserialize,
)]
#[display(fmt = "{} @ {}", value, date)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub value: i64,
}

/// Value Object - trend direction of a series
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
pub enum Trend {
    #[display(fmt = "Upward")]
    #[strum(serialize = "up")]
    #[serde(rename = "up")]
    Up,

    #[display(fmt = "Downward")]
    #[strum(serialize = "down")]
    #[serde(rename = "down")]
    Down,

    #[display(fmt = "Stable")]
    #[strum(serialize = "stable")]
    #[serde(rename = "stable")]
    Stable,
}

impl Trend {
    /// Per-step multiplicative drift applied before noise in projections.
    pub fn drift_factor(self) -> f64 {
        match self {
            Self::Up => 1.001,
            Self::Down => 0.999,
            Self::Stable => 1.0,
        }
    }

    /// Classify a span by comparing its first and last value.
    /// `Stable` only when the two are exactly equal.
    pub fn classify(first: i64, last: i64) -> Self {
        match last.cmp(&first) {
            std::cmp::Ordering::Greater => Self::Up,
            std::cmp::Ordering::Less => Self::Down,
            std::cmp::Ordering::Equal => Self::Stable,
        }
    }
}

/// Value Object - named chart window
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
pub enum ChartRange {
    #[display(fmt = "1M")]
    #[strum(serialize = "1M")]
    #[serde(rename = "1M")]
    OneMonth,

    #[display(fmt = "3M")]
    #[strum(serialize = "3M")]
    #[serde(rename = "3M")]
    ThreeMonths,

    #[display(fmt = "All")]
    #[strum(serialize = "All")]
    #[serde(rename = "All")]
    All,

    #[display(fmt = "Prediction")]
    #[strum(serialize = "Prediction")]
    #[serde(rename = "Prediction")]
    Prediction,
}

impl ChartRange {
    /// Historical lookback of the window, `None` for the full series.
    ///
    /// The prediction window keeps a fixed 30-day historical lookback no
    /// matter how long the historical series is.
    pub fn lookback_days(self) -> Option<usize> {
        match self {
            Self::OneMonth => Some(30),
            Self::ThreeMonths => Some(90),
            Self::All => None,
            Self::Prediction => Some(30),
        }
    }
}

/// Value Object - catalog metal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize,
    Deserialize,
)]
pub enum Metal {
    #[display(fmt = "Gold")]
    #[strum(serialize = "gold")]
    #[serde(rename = "gold")]
    Gold,

    #[display(fmt = "Silver")]
    #[strum(serialize = "silver")]
    #[serde(rename = "silver")]
    Silver,
}
