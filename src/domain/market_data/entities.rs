use serde::{Deserialize, Serialize};

use super::value_objects::{Metal, PricePoint};

/// Domain entity - ordered daily price series
///
/// Points are chronologically ascending, one per calendar day. The
/// generators uphold this; callers constructing a series by hand are
/// expected to do the same.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Most recent point.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Point one day before the most recent.
    pub fn previous(&self) -> Option<&PricePoint> {
        self.points.len().checked_sub(2).map(|i| &self.points[i])
    }

    /// Trailing window of at most `n` points.
    pub fn last_n(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }

    /// Min and max value over the whole series.
    pub fn value_range(&self) -> Option<(i64, i64)> {
        let min = self.points.iter().map(|p| p.value).min()?;
        let max = self.points.iter().map(|p| p.value).max()?;
        Some((min, max))
    }
}

/// Domain entity - one row of the reference rate table
///
/// `rate_per_kg` and `rate_per_100g` are independent seed fields; the
/// catalog does not derive one from the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetalRate {
    pub id: &'static str,
    pub metal: Metal,
    pub purity: &'static str,
    pub rate_per_kg: i64,
    pub rate_per_100g: i64,
    pub change_24h: i64,
    pub change_percentage: f64,
}

impl MetalRate {
    /// Metal label as shown on a rate card.
    pub fn name(&self) -> &'static str {
        match self.metal {
            Metal::Gold => "Gold",
            Metal::Silver => "Silver",
        }
    }
}
