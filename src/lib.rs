pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod price_fetcher;
pub mod updater;
pub mod utils;

// Re-export main types
pub use catalog::default_vehicles;
pub use config::JobConfig;
pub use error::VehicleError;
pub use models::{Brand, PartsPrices, VehicleRecord};
pub use price_fetcher::{fetch_ford_price, fetch_honda_price, fetch_price, fetch_toyota_price};
pub use updater::{update_prices, UpdateSummary};
pub use utils::{load_vehicles_from_json, save_vehicles_to_json};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging. `RUST_LOG` wins over `level` when set.
///
/// Only the first call installs a subscriber; later calls are ignored.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .ok();
}

/// Build the catalog, price it and write it to `config.output_path`.
///
/// Returns the priced records.
pub fn run_job(config: &JobConfig) -> Result<Vec<VehicleRecord>, VehicleError> {
    let mut vehicles = default_vehicles();
    let summary = update_prices(&mut vehicles);
    tracing::debug!(updated = summary.updated, skipped = summary.skipped, "prices updated");

    save_vehicles_to_json(&vehicles, &config.output_path)?;
    Ok(vehicles)
}
