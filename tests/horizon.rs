use bullion_rates::domain::market_data::{PricePoint, PriceSeries, SeriesAnalytics};
use chrono::{Duration, NaiveDate};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn series_from(start: NaiveDate, values: impl IntoIterator<Item = i64>) -> PriceSeries {
    PriceSeries::new(
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| PricePoint::new(start + Duration::days(i as i64), v))
            .collect(),
    )
}

/// Historical ending at 1000; 60 prediction points 1001, 1002, ... 1060.
fn fixture() -> (PriceSeries, PriceSeries) {
    let historical = series_from(base(), [990, 1000]);
    let prediction = series_from(base() + Duration::days(2), (1_i64..=60).map(|i| 1_000 + i));
    (historical, prediction)
}

#[test]
fn one_week_horizon_lands_on_the_seventh_point() {
    let (historical, prediction) = fixture();
    let outlook = SeriesAnalytics::new(&historical, &prediction)
        .prediction_for_horizon(7)
        .unwrap();

    assert_eq!(outlook.value, 1_007);
    assert_eq!(outlook.date, prediction.points()[6].date);
    assert_eq!(outlook.change, 7);
    assert!((outlook.change_percent - 0.7).abs() < 1e-9);
}

#[test]
fn oversized_horizon_clamps_to_the_last_point() {
    let (historical, prediction) = fixture();
    let outlook = SeriesAnalytics::new(&historical, &prediction)
        .prediction_for_horizon(100)
        .unwrap();

    assert_eq!(outlook.value, 1_060);
    assert_eq!(outlook.date, prediction.latest().unwrap().date);
}

#[test]
fn next_day_horizon_is_the_first_point() {
    let (historical, prediction) = fixture();
    let outlook = SeriesAnalytics::new(&historical, &prediction)
        .prediction_for_horizon(1)
        .unwrap();

    assert_eq!(outlook.value, 1_001);
}

#[test]
fn zero_horizon_saturates_to_the_first_point() {
    let (historical, prediction) = fixture();
    let outlook = SeriesAnalytics::new(&historical, &prediction)
        .prediction_for_horizon(0)
        .unwrap();

    assert_eq!(outlook.value, 1_001);
}

#[test]
fn change_is_measured_against_the_last_historical_value() {
    // Prediction opens well above the historical close; the delta must
    // anchor on the close, not on the prediction's own first value.
    let historical = series_from(base(), [500, 800]);
    let prediction = series_from(base() + Duration::days(2), [1_000, 1_200]);
    let outlook = SeriesAnalytics::new(&historical, &prediction)
        .prediction_for_horizon(1)
        .unwrap();

    assert_eq!(outlook.change, 200);
    assert!((outlook.change_percent - 25.0).abs() < 1e-9);
}

#[test]
fn missing_data_yields_no_outlook() {
    let (historical, prediction) = fixture();
    let empty = PriceSeries::empty();

    assert!(SeriesAnalytics::new(&historical, &empty).prediction_for_horizon(7).is_none());
    assert!(SeriesAnalytics::new(&empty, &prediction).prediction_for_horizon(7).is_none());
}

#[test]
fn zero_anchor_reports_zero_percent() {
    let historical = series_from(base(), [10, 0]);
    let prediction = series_from(base() + Duration::days(2), [50]);
    let outlook = SeriesAnalytics::new(&historical, &prediction)
        .prediction_for_horizon(1)
        .unwrap();

    assert_eq!(outlook.change, 50);
    assert_eq!(outlook.change_percent, 0.0);
}
