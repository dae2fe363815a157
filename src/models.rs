use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Brands that have a price lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Toyota,
    Ford,
    Honda,
}

impl Brand {
    /// Resolve a record's brand string. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Toyota" => Some(Brand::Toyota),
            "Ford" => Some(Brand::Ford),
            "Honda" => Some(Brand::Honda),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Toyota => "Toyota",
            Brand::Ford => "Ford",
            Brand::Honda => "Honda",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replacement part prices in catalog order
pub type PartsPrices = IndexMap<String, u32>;

/// One vehicle's specification plus its fetched price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price: u32,
    pub displacement: u32,
    pub horsepower: f64,
    pub torque: f64,
    pub avg_fuel_consumption: f64,
    pub transmission: String,
    pub front_suspension: String,
    pub rear_suspension: String,
    pub engine_type: String,
    #[serde(rename = "maintenanceCost60k")]
    pub maintenance_cost_60k: u32,
    pub parts_prices: PartsPrices,
    pub reliability_score: u8,
}

impl VehicleRecord {
    /// The brand this record dispatches to, if it is one we can price
    pub fn known_brand(&self) -> Option<Brand> {
        Brand::from_name(&self.brand)
    }
}
