use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "vehicles.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for one run of the price update job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub output_path: PathBuf,
    pub log_level: String,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl JobConfig {
    /// Build the config from environment variables, loading `.env` first if present.
    ///
    /// `VEHICLES_OUTPUT_PATH` and `VEHICLES_LOG_LEVEL` override the defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            output_path: non_empty("VEHICLES_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            log_level: non_empty("VEHICLES_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}
