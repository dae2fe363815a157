use crate::models::VehicleRecord;
use crate::price_fetcher::fetch_price;
use chrono::Local;
use tracing::{info, warn};

/// Counts reported by [`update_prices`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub updated: usize,
    pub skipped: usize,
}

/// Price every record in place, in list order.
///
/// Records whose brand has no fetcher keep their current price.
pub fn update_prices(vehicles: &mut [VehicleRecord]) -> UpdateSummary {
    info!("[{}] Starting price update job...", Local::now());

    let mut summary = UpdateSummary::default();
    for vehicle in vehicles.iter_mut() {
        match vehicle.known_brand() {
            Some(brand) => {
                vehicle.price = fetch_price(brand, &vehicle.model);
                summary.updated += 1;
            }
            None => {
                warn!(id = %vehicle.id, brand = %vehicle.brand, "no price fetcher for brand");
                summary.skipped += 1;
            }
        }

        info!("Updated {} {} price to: ${}", vehicle.brand, vehicle.model, vehicle.price);
    }

    summary
}
