use crate::error::VehicleError;
use crate::models::VehicleRecord;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Save vehicles to a JSON file, replacing whatever is already there.
///
/// Output is indented by two spaces and non-ASCII text is written as-is.
pub fn save_vehicles_to_json<P: AsRef<Path>>(
    vehicles: &[VehicleRecord],
    path: P,
) -> Result<(), VehicleError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(vehicles)?;
    let mut file = File::create(path).map_err(|e| VehicleError::io(path, e))?;
    file.write_all(json.as_bytes()).map_err(|e| VehicleError::io(path, e))?;

    info!("Update complete. '{}' generated.", path.display());
    Ok(())
}

/// Load vehicles from a file written by [`save_vehicles_to_json`]
pub fn load_vehicles_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<VehicleRecord>, VehicleError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| VehicleError::io(path, e))?;
    Ok(serde_json::from_str(&json)?)
}
