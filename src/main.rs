use std::error::Error;
use vehicle_price_updater::{init_tracing, run_job, JobConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let config = JobConfig::from_env();
    init_tracing(&config.log_level);

    run_job(&config)?;
    Ok(())
}
