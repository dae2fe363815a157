use crate::models::{PartsPrices, VehicleRecord};

/// The vehicles the update job prices. Every price starts at zero.
pub fn default_vehicles() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            id: "v1".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla Altis 1.8 汽油尊爵".to_string(),
            price: 0,
            displacement: 1798,
            horsepower: 140.0,
            torque: 17.5,
            avg_fuel_consumption: 14.9,
            transmission: "Super CVT-i 無段變速".to_string(),
            front_suspension: "麥花臣".to_string(),
            rear_suspension: "扭力樑".to_string(),
            engine_type: "自然進氣".to_string(),
            maintenance_cost_60k: 24000,
            parts_prices: PartsPrices::from([
                ("前保桿".to_string(), 4500),
                ("頭燈總成".to_string(), 6000),
                ("照後鏡".to_string(), 2500),
            ]),
            reliability_score: 92,
        },
        VehicleRecord {
            id: "v2".to_string(),
            brand: "Ford".to_string(),
            model: "Focus 5D ST-Line Vignale".to_string(),
            price: 0,
            displacement: 1497,
            horsepower: 182.0,
            torque: 24.5,
            avg_fuel_consumption: 16.7,
            transmission: "SelectShift™ 8速手自排".to_string(),
            front_suspension: "麥花臣".to_string(),
            rear_suspension: "多連桿".to_string(),
            engine_type: "渦輪增壓".to_string(),
            maintenance_cost_60k: 35040,
            parts_prices: PartsPrices::from([
                ("前保桿".to_string(), 5500),
                ("頭燈總成".to_string(), 12000),
                ("照後鏡".to_string(), 3500),
            ]),
            reliability_score: 78,
        },
        VehicleRecord {
            id: "v3".to_string(),
            brand: "Honda".to_string(),
            model: "CR-V 1.5 VTi-S".to_string(),
            price: 0,
            displacement: 1498,
            horsepower: 193.0,
            torque: 24.8,
            avg_fuel_consumption: 14.7,
            transmission: "CVT 無段變速".to_string(),
            front_suspension: "麥花臣".to_string(),
            rear_suspension: "多連桿".to_string(),
            engine_type: "渦輪增壓".to_string(),
            maintenance_cost_60k: 30497,
            parts_prices: PartsPrices::from([
                ("前保桿".to_string(), 6500),
                ("頭燈總成".to_string(), 9500),
                ("照後鏡".to_string(), 4000),
            ]),
            reliability_score: 88,
        },
        VehicleRecord {
            id: "v4".to_string(),
            brand: "Toyota".to_string(),
            model: "Corolla Altis Hybrid 旗艦".to_string(),
            price: 0,
            displacement: 1798,
            horsepower: 122.0,
            torque: 14.5,
            avg_fuel_consumption: 25.3,
            transmission: "E-CVT 電子控制無段變速".to_string(),
            front_suspension: "麥花臣".to_string(),
            rear_suspension: "扭力樑".to_string(),
            engine_type: "油電混合".to_string(),
            maintenance_cost_60k: 26000,
            parts_prices: PartsPrices::from([
                ("前保桿".to_string(), 4500),
                ("頭燈總成".to_string(), 8000),
                ("照後鏡".to_string(), 2500),
            ]),
            reliability_score: 94,
        },
    ]
}
