//! Text rendition of the dashboard. Thin layer over the domain API -
//! every number shown here is computed by `SeriesAnalytics` or read off
//! the catalog; this module only formats.

use crate::application::market_service::MarketSnapshot;
use crate::domain::market_data::{ChartRange, MetalRate, RateCatalog, SeriesAnalytics};
use crate::price_format::{format_inr, format_percent, format_signed};

/// Horizons a dashboard offers: next day, one week, one month, two months.
pub const HORIZON_MENU: [u32; 4] = [1, 7, 30, 60];

/// One rate card line: metal, purity, both unit prices, 24h move.
pub fn rate_card(rate: &MetalRate) -> String {
    format!(
        "{} {} | {}/kg | {}/100g | 24h: {} ({})",
        rate.name(),
        rate.purity,
        format_inr(rate.rate_per_kg),
        format_inr(rate.rate_per_100g),
        format_signed(rate.change_24h),
        format_percent(rate.change_percentage),
    )
}

/// Chart header: latest price with its 24h delta.
pub fn chart_header(title: &str, analytics: &SeriesAnalytics<'_>) -> String {
    match analytics.latest_and_delta() {
        Some(quote) => format!(
            "{title}: {} {} ({})",
            format_inr(quote.latest),
            format_signed(quote.change),
            format_percent(quote.change_percent),
        ),
        None => format!("{title}: no data"),
    }
}

/// Prediction block for one horizon; `None` without prediction data.
pub fn prediction_summary(analytics: &SeriesAnalytics<'_>, horizon_days: u32) -> Option<String> {
    let outlook = analytics.prediction_for_horizon(horizon_days)?;
    let summary = analytics.overall_trend();
    Some(format!(
        "Predicted for {}: {} ({}) | Overall trend: {} {}",
        outlook.date.format("%-d %b %Y"),
        format_inr(outlook.value),
        format_percent(outlook.change_percent),
        summary.trend,
        format_percent(summary.change_percent),
    ))
}

/// Whole-page text rendition: rate cards, then one chart header and
/// prediction block per snapshot.
pub fn render_dashboard(snapshots: &[MarketSnapshot]) -> String {
    let mut out = String::new();
    out.push_str("Lucknow Bullion Market\n");
    out.push_str("======================\n\n");
    out.push_str("Today's Rates\n");
    for rate in RateCatalog::all(None) {
        out.push_str("  ");
        out.push_str(&rate_card(rate));
        out.push('\n');
    }

    for snapshot in snapshots {
        let analytics = SeriesAnalytics::new(&snapshot.historical, &snapshot.prediction);
        let title = format!("{} {}", snapshot.metal, snapshot.purity);
        out.push('\n');
        out.push_str(&chart_header(&title, &analytics));
        out.push('\n');
        for horizon in HORIZON_MENU {
            if let Some(line) = prediction_summary(&analytics, horizon) {
                out.push_str("  ");
                out.push_str(&line);
                out.push('\n');
            }
        }
    }
    out
}

/// Windowed chart points as JSON, the shape a web chart consumes.
pub fn chart_payload_json(
    analytics: &SeriesAnalytics<'_>,
    range: ChartRange,
) -> serde_json::Result<String> {
    serde_json::to_string(&analytics.windowed_slice(range))
}
