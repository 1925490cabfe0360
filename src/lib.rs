use crate::api::config_dto::SimulationConfigDto;
use crate::domain::settings::SimulationSettings;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads and validates a simulation config file.
pub fn load_settings(file_path: &str) -> Result<SimulationSettings> {
    let dto: SimulationConfigDto = parse_json_file::<SimulationConfigDto>(file_path)?;
    log::info!("Simulation config parsed successfully.");

    let settings = SimulationSettings::from_dto(dto)?;
    log::info!("Simulation settings validated successfully.");

    Ok(settings)
}
