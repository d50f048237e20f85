use chrono::{Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};

use super::entities::PriceSeries;
use super::value_objects::{PricePoint, Trend};

/// Default history depth: three months of daily points.
pub const DEFAULT_HISTORY_DAYS: u32 = 90;
/// Default history noise amplitude.
pub const DEFAULT_HISTORY_VOLATILITY: f64 = 0.01;
/// Default projection horizon.
pub const DEFAULT_PREDICTION_DAYS: u32 = 60;
/// Default projection noise amplitude.
pub const DEFAULT_PREDICTION_VOLATILITY: f64 = 0.005;

/// Domain service - bounded random walk around a starting price.
pub struct RandomWalkGenerator;

impl RandomWalkGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Walk `days + 1` consecutive calendar days ending on `today`,
    /// oldest first.
    ///
    /// Each step draws uniform noise in `[-volatility, +volatility]` of
    /// the running price, adds it, and records the rounded result; the
    /// rounded value is what carries into the next step, so rounding
    /// compounds. The first point already has one noise step applied and
    /// is in general not equal to `start_price`.
    ///
    /// A day count below zero is unrepresentable (`days` is unsigned).
    /// `start_price <= 0.0` is accepted and produces a degenerate series.
    pub fn generate(
        &self,
        start_price: f64,
        volatility: f64,
        days: u32,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> DomainResult<PriceSeries> {
        validate_volatility(volatility)?;

        let mut points = Vec::with_capacity(days as usize + 1);
        let mut current = start_price;
        for offset in (0..=i64::from(days)).rev() {
            let date = today - Duration::days(offset);
            let change = current * draw_noise(rng, volatility);
            current += change;
            let value = current.round() as i64;
            current = value as f64;
            points.push(PricePoint::new(date, value));
        }

        debug!(
            start_price,
            volatility,
            days,
            last = points.last().map(|p| p.value),
            "generated random-walk history"
        );
        Ok(PriceSeries::new(points))
    }
}

/// Domain service - forward projection with constant per-step drift.
pub struct TrendProjector;

impl TrendProjector {
    pub fn new() -> Self {
        Self
    }

    /// Project `days` points, one per calendar day starting the day
    /// after `today`.
    ///
    /// Each step multiplies the running price by the trend's drift
    /// factor, then adds uniform noise in `[-volatility, +volatility]`
    /// of the post-drift price; the rounded value carries forward
    /// exactly as in the random walk.
    pub fn project(
        &self,
        last_price: f64,
        days: u32,
        trend: Trend,
        volatility: f64,
        today: NaiveDate,
        rng: &mut impl Rng,
    ) -> DomainResult<PriceSeries> {
        if days == 0 {
            return Err(DomainError::InvalidArgument(
                "projection horizon must be at least one day".to_string(),
            ));
        }
        validate_volatility(volatility)?;

        let drift = trend.drift_factor();
        let mut points = Vec::with_capacity(days as usize);
        let mut current = last_price;
        for offset in 1..=i64::from(days) {
            let date = today + Duration::days(offset);
            let drifted = current * drift;
            let value = (drifted + drifted * draw_noise(rng, volatility)).round() as i64;
            current = value as f64;
            points.push(PricePoint::new(date, value));
        }

        debug!(
            last_price,
            days,
            %trend,
            volatility,
            projected_end = points.last().map(|p| p.value),
            "projected forward series"
        );
        Ok(PriceSeries::new(points))
    }
}

/// Uniform draw in `[-volatility, +volatility]`.
fn draw_noise(rng: &mut impl Rng, volatility: f64) -> f64 {
    if volatility == 0.0 {
        // Keep the zero-volatility path exact.
        return 0.0;
    }
    rng.gen_range(-volatility..=volatility)
}

fn validate_volatility(volatility: f64) -> DomainResult<()> {
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(DomainError::InvalidArgument(format!(
            "volatility must be a non-negative fraction, got {volatility}"
        )));
    }
    Ok(())
}
