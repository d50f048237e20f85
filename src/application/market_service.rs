use rand::Rng;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::market_data::{
    DEFAULT_HISTORY_DAYS, DEFAULT_HISTORY_VOLATILITY, DEFAULT_PREDICTION_DAYS,
    DEFAULT_PREDICTION_VOLATILITY, Metal, PriceSeries, RandomWalkGenerator, Trend, TrendProjector,
};
use crate::domain::time::{Clock, SystemClock};

// Historical walk anchors per purity, as seeded in the reference data.
const GOLD_24K_START: f64 = 620_000.0;
const GOLD_22K_START: f64 = 570_000.0;
const GOLD_OTHER_START: f64 = 465_000.0;
const SILVER_999_START: f64 = 74_000.0;
const SILVER_OTHER_START: f64 = 68_500.0;

// Silver moves more than gold, both in history and in projection.
const SILVER_HISTORY_VOLATILITY: f64 = 0.015;
const SILVER_PREDICTION_VOLATILITY: f64 = 0.01;

/// Historical and projected series for one catalog entry.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub metal: Metal,
    pub purity: String,
    pub historical: PriceSeries,
    pub prediction: PriceSeries,
}

/// Application service - assembles the mock market a dashboard renders.
///
/// The clock is injectable so snapshots can be pinned to a known day in
/// tests; callers supply the random source.
pub struct MarketDataService<C: Clock = SystemClock> {
    clock: C,
    walker: RandomWalkGenerator,
    projector: TrendProjector,
}

impl MarketDataService<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> MarketDataService<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            walker: RandomWalkGenerator::new(),
            projector: TrendProjector::new(),
        }
    }

    /// 90 days of gold history for a purity grade.
    pub fn gold_historical(&self, purity: &str, rng: &mut impl Rng) -> DomainResult<PriceSeries> {
        let start = match purity {
            "24K" => GOLD_24K_START,
            "22K" => GOLD_22K_START,
            _ => GOLD_OTHER_START,
        };
        self.walker.generate(
            start,
            DEFAULT_HISTORY_VOLATILITY,
            DEFAULT_HISTORY_DAYS,
            self.clock.today(),
            rng,
        )
    }

    /// 90 days of silver history for a purity grade.
    pub fn silver_historical(&self, purity: &str, rng: &mut impl Rng) -> DomainResult<PriceSeries> {
        let start = match purity {
            "999" => SILVER_999_START,
            _ => SILVER_OTHER_START,
        };
        self.walker.generate(
            start,
            SILVER_HISTORY_VOLATILITY,
            DEFAULT_HISTORY_DAYS,
            self.clock.today(),
            rng,
        )
    }

    /// 60-day projection anchored on the last value of `historical`.
    ///
    /// Gold drifts upward at low volatility; silver holds stable with a
    /// wider band. An empty historical series anchors the projection at
    /// zero rather than failing.
    pub fn prediction(
        &self,
        metal: Metal,
        historical: &PriceSeries,
        rng: &mut impl Rng,
    ) -> DomainResult<PriceSeries> {
        let last_price = historical.latest().map_or(0.0, |p| p.value as f64);
        let (trend, volatility) = match metal {
            Metal::Gold => (Trend::Up, DEFAULT_PREDICTION_VOLATILITY),
            Metal::Silver => (Trend::Stable, SILVER_PREDICTION_VOLATILITY),
        };
        self.projector.project(
            last_price,
            DEFAULT_PREDICTION_DAYS,
            trend,
            volatility,
            self.clock.today(),
            rng,
        )
    }

    /// Coupled historical + prediction pair for one metal and purity.
    pub fn market_snapshot(
        &self,
        metal: Metal,
        purity: &str,
        rng: &mut impl Rng,
    ) -> DomainResult<MarketSnapshot> {
        let historical = match metal {
            Metal::Gold => self.gold_historical(purity, rng)?,
            Metal::Silver => self.silver_historical(purity, rng)?,
        };
        let prediction = self.prediction(metal, &historical, rng)?;

        info!(
            %metal,
            purity,
            historical_points = historical.len(),
            prediction_points = prediction.len(),
            "📊 market snapshot assembled"
        );
        Ok(MarketSnapshot {
            metal,
            purity: purity.to_string(),
            historical,
            prediction,
        })
    }
}
