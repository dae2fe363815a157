use std::fs;
use vehicle_price_updater::{default_vehicles, load_vehicles_from_json, run_job, JobConfig};

fn config_in(dir: &tempfile::TempDir) -> JobConfig {
    JobConfig {
        output_path: dir.path().join("vehicles.json"),
        ..JobConfig::default()
    }
}

#[test]
fn test_job_writes_priced_vehicles() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let priced = run_job(&config).unwrap();
    let loaded = load_vehicles_from_json(&config.output_path).unwrap();

    assert_eq!(loaded.len(), 4);
    assert_eq!(loaded, priced);

    let prices: Vec<(&str, u32)> = loaded.iter().map(|v| (v.id.as_str(), v.price)).collect();
    assert_eq!(
        prices,
        vec![("v1", 885_000), ("v2", 979_000), ("v3", 1_059_000), ("v4", 930_000)]
    );
}

#[test]
fn test_job_output_matches_catalog_apart_from_price() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    run_job(&config).unwrap();

    let loaded = load_vehicles_from_json(&config.output_path).unwrap();
    for (written, original) in loaded.into_iter().zip(default_vehicles()) {
        assert_eq!(written.parts_prices, original.parts_prices);
        assert_eq!(
            written,
            vehicle_price_updater::VehicleRecord { price: written.price, ..original }
        );
    }
}

#[test]
fn test_job_output_is_byte_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    run_job(&config).unwrap();
    let first = fs::read(&config.output_path).unwrap();
    run_job(&config).unwrap();
    let second = fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_job_output_key_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    run_job(&config).unwrap();

    let written = fs::read_to_string(&config.output_path).unwrap();
    let first_record = &written[..written.find("\n  },").unwrap()];

    let keys = [
        "id",
        "brand",
        "model",
        "price",
        "displacement",
        "horsepower",
        "torque",
        "avgFuelConsumption",
        "transmission",
        "frontSuspension",
        "rearSuspension",
        "engineType",
        "maintenanceCost60k",
        "partsPrices",
        "reliabilityScore",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| first_record.find(&format!("\n    \"{}\":", key)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(first_record.contains("\"horsepower\": 140.0,"));
    assert!(first_record.contains(concat!(
        "\"partsPrices\": {\n",
        "      \"前保桿\": 4500,\n",
        "      \"頭燈總成\": 6000,\n",
        "      \"照後鏡\": 2500\n",
        "    },"
    )));
}

#[test]
fn test_job_fails_when_output_not_writable() {
    let dir = tempfile::tempdir().unwrap();
    let config = JobConfig {
        output_path: dir.path().join("no_such_dir").join("vehicles.json"),
        ..JobConfig::default()
    };

    assert!(run_job(&config).is_err());
}
