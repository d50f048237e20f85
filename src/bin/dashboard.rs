use bullion_rates::application::market_service::MarketDataService;
use bullion_rates::domain::market_data::Metal;
use bullion_rates::presentation::report;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("bullion_rates=debug".parse()?),
        )
        .with_target(true)
        .init();

    info!("🚀 Generating mock bullion market data...");

    let service = MarketDataService::new();
    let mut rng = rand::thread_rng();

    let snapshots = vec![
        service.market_snapshot(Metal::Gold, "24K", &mut rng)?,
        service.market_snapshot(Metal::Silver, "999", &mut rng)?,
    ];

    print!("{}", report::render_dashboard(&snapshots));
    Ok(())
}
