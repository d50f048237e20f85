use chrono::NaiveDate;
use serde::Serialize;

use super::entities::PriceSeries;
use super::value_objects::{ChartRange, PricePoint, Trend};

/// Latest historical value and its change against the prior day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatestQuote {
    pub latest: i64,
    pub previous: i64,
    pub change: i64,
    pub change_percent: f64,
}

/// Direction and total percentage move of the projected span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSummary {
    pub trend: Trend,
    pub change_percent: f64,
}

/// Projected point for a requested horizon, measured against the last
/// historical value rather than the projection's own start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizonOutlook {
    pub date: NaiveDate,
    pub value: i64,
    pub change: i64,
    pub change_percent: f64,
}

/// Domain service - derived views over a historical/prediction pair.
pub struct SeriesAnalytics<'a> {
    historical: &'a PriceSeries,
    prediction: &'a PriceSeries,
}

impl<'a> SeriesAnalytics<'a> {
    pub fn new(historical: &'a PriceSeries, prediction: &'a PriceSeries) -> Self {
        Self { historical, prediction }
    }

    /// Last historical value, the one before it, and their delta.
    /// `None` when fewer than two historical points exist; a zero prior
    /// value yields a 0% change instead of dividing by zero.
    pub fn latest_and_delta(&self) -> Option<LatestQuote> {
        let latest = self.historical.latest()?.value;
        let previous = self.historical.previous()?.value;
        let change = latest - previous;
        Some(LatestQuote {
            latest,
            previous,
            change,
            change_percent: percent_of(change, previous),
        })
    }

    /// Direction of the projected span, first value vs last value.
    /// An empty prediction or a zero first value collapses to `Stable`
    /// at 0%.
    pub fn overall_trend(&self) -> TrendSummary {
        let (Some(first), Some(last)) = (self.prediction.first(), self.prediction.latest()) else {
            return TrendSummary { trend: Trend::Stable, change_percent: 0.0 };
        };
        if first.value == 0 {
            return TrendSummary { trend: Trend::Stable, change_percent: 0.0 };
        }
        TrendSummary {
            trend: Trend::classify(first.value, last.value),
            change_percent: percent_of(last.value - first.value, first.value),
        }
    }

    /// Projected point `days` ahead, clamped to the end of the
    /// prediction. `None` when either series is empty.
    ///
    /// Accepts any horizon, not just the 1/7/30/60 menu a dashboard
    /// offers.
    pub fn prediction_for_horizon(&self, days: u32) -> Option<HorizonOutlook> {
        let anchor = self.historical.latest()?.value;
        if self.prediction.is_empty() {
            return None;
        }
        let index = usize::min(
            days.saturating_sub(1) as usize,
            self.prediction.len() - 1,
        );
        let target = self.prediction.points()[index];
        let change = target.value - anchor;
        Some(HorizonOutlook {
            date: target.date,
            value: target.value,
            change,
            change_percent: percent_of(change, anchor),
        })
    }

    /// Points for a named chart window.
    ///
    /// `Prediction` concatenates the trailing 30 historical days with the
    /// full prediction; the other windows slice the historical series
    /// only.
    pub fn windowed_slice(&self, range: ChartRange) -> Vec<PricePoint> {
        match range {
            ChartRange::Prediction => {
                let mut data = self.historical.last_n(30).to_vec();
                data.extend_from_slice(self.prediction.points());
                data
            }
            other => match other.lookback_days() {
                Some(days) => self.historical.last_n(days).to_vec(),
                None => self.historical.points().to_vec(),
            },
        }
    }
}

/// Y-axis bounds for a charted slice, padded half a percent each way.
pub fn chart_bounds(points: &[PricePoint]) -> Option<(f64, f64)> {
    let min = points.iter().map(|p| p.value).min()?;
    let max = points.iter().map(|p| p.value).max()?;
    Some((min as f64 * 0.995, max as f64 * 1.005))
}

fn percent_of(change: i64, base: i64) -> f64 {
    if base == 0 {
        return 0.0;
    }
    change as f64 / base as f64 * 100.0
}
