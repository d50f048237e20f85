use bullion_rates::application::market_service::MarketDataService;
use bullion_rates::domain::market_data::{
    ChartRange, Metal, PricePoint, PriceSeries, RateCatalog, SeriesAnalytics,
};
use bullion_rates::domain::time::FixedClock;
use bullion_rates::presentation::report;
use chrono::{Duration, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

fn series_from(start: NaiveDate, values: &[i64]) -> PriceSeries {
    PriceSeries::new(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| PricePoint::new(start + Duration::days(i as i64), v))
            .collect(),
    )
}

#[test]
fn rate_card_golden_line() {
    let rate = RateCatalog::by_id("gold-24k").unwrap();
    insta::assert_snapshot!(
        report::rate_card(rate),
        @"Gold 24K | ₹62,83,500/kg | ₹6,28,350/100g | 24h: +1250 (+0.20%)"
    );
}

#[test]
fn silver_rate_card_shows_the_negative_move() {
    let rate = RateCatalog::by_id("silver-999").unwrap();
    insta::assert_snapshot!(
        report::rate_card(rate),
        @"Silver 999 | ₹75,600/kg | ₹7,560/100g | 24h: -350 (-0.46%)"
    );
}

#[test]
fn chart_header_carries_the_latest_delta() {
    let base = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
    let historical = series_from(base, &[627_100, 628_350]);
    let prediction = PriceSeries::empty();
    let analytics = SeriesAnalytics::new(&historical, &prediction);

    insta::assert_snapshot!(
        report::chart_header("Gold 24K", &analytics),
        @"Gold 24K: ₹6,28,350 +1250 (+0.20%)"
    );
}

#[test]
fn chart_header_survives_missing_data() {
    let historical = PriceSeries::empty();
    let prediction = PriceSeries::empty();
    let analytics = SeriesAnalytics::new(&historical, &prediction);
    assert_eq!(report::chart_header("Gold 24K", &analytics), "Gold 24K: no data");
}

#[test]
fn prediction_summary_names_the_predicted_day() {
    let base = NaiveDate::from_ymd_opt(2025, 6, 29).unwrap();
    let historical = series_from(base, &[1_000, 1_000]);
    let prediction = series_from(base + Duration::days(2), &[1_010, 1_020, 1_030]);
    let analytics = SeriesAnalytics::new(&historical, &prediction);

    insta::assert_snapshot!(
        report::prediction_summary(&analytics, 2).unwrap(),
        @"Predicted for 2 Jul 2025: ₹1,020 (+2.00%) | Overall trend: Upward +1.98%"
    );
}

#[test]
fn prediction_summary_without_data_is_none() {
    let historical = PriceSeries::empty();
    let prediction = PriceSeries::empty();
    let analytics = SeriesAnalytics::new(&historical, &prediction);
    assert!(report::prediction_summary(&analytics, 7).is_none());
}

#[test]
fn dashboard_lists_every_rate_and_both_markets() {
    let svc = MarketDataService::with_clock(FixedClock(
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    ));
    let mut rng = StdRng::seed_from_u64(9);
    let snapshots = vec![
        svc.market_snapshot(Metal::Gold, "24K", &mut rng).unwrap(),
        svc.market_snapshot(Metal::Silver, "999", &mut rng).unwrap(),
    ];

    let page = report::render_dashboard(&snapshots);
    assert!(page.starts_with("Lucknow Bullion Market\n"));
    for rate in RateCatalog::all(None) {
        assert!(page.contains(&report::rate_card(rate)));
    }
    assert!(page.contains("Gold 24K:"));
    assert!(page.contains("Silver 999:"));
    assert_eq!(page.matches("Predicted for").count(), 8);
}

#[test]
fn chart_payload_is_the_windowed_slice_as_json() {
    let base = NaiveDate::from_ymd_opt(2025, 6, 29).unwrap();
    let historical = series_from(base, &[1_000, 1_100]);
    let prediction = PriceSeries::empty();
    let analytics = SeriesAnalytics::new(&historical, &prediction);

    let payload = report::chart_payload_json(&analytics, ChartRange::All).unwrap();
    let parsed: Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"date": "2025-06-29", "value": 1_000},
            {"date": "2025-06-30", "value": 1_100},
        ])
    );
}
