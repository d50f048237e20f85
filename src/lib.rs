//! Synthetic gold/silver price series and derived analytics for a mock
//! Lucknow bullion dashboard.
//!
//! The domain layer generates random-walk history and trend-biased
//! projections, derives the summary statistics a chart needs, and holds
//! the static rate catalog. The application layer reproduces the
//! dashboard's per-metal orchestration, and the presentation layer
//! renders a plain-text report. Every series is synthetic - there is no
//! backend and no external data source.

pub mod application;
pub mod domain;
pub mod presentation;
pub mod price_format;
