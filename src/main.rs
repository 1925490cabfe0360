use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use restaurant_seating::api::reservation_dto::ReservationDto;
use restaurant_seating::domain::customer::CustomerPool;
use restaurant_seating::domain::settings::SimulationSettings;
use restaurant_seating::domain::simulation::driver::SimulationDriver;
use restaurant_seating::domain::utils::statistics;
use restaurant_seating::{load_settings, logger};

/// Restaurant seating simulation: books, cancels and rebooks random parties
/// until every table in the room has served at least once.
#[derive(Debug, Parser)]
#[command(name = "restaurant_seating", version, about)]
struct Cli {
    /// Path to a JSON config file overriding the built-in defaults.
    #[arg(long)]
    config: Option<String>,

    /// Seed for the simulation random source. Runs are reproducible for a fixed seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulation runs, overrides the config value.
    #[arg(long)]
    runs: Option<u64>,

    /// Write per-run statistics to this CSV file.
    #[arg(long)]
    stats_file: Option<String>,

    /// Write the final run's remaining reservations to this JSON file.
    #[arg(long)]
    export_file: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => {
            log::info!("Loading simulation config from '{}'.", path);
            load_settings(path).with_context(|| format!("loading config '{}'", path))?
        }
        None => SimulationSettings::default(),
    };

    if let Some(runs) = cli.runs {
        settings.simulation_runs = runs;
    }

    if let Some(stats_file) = cli.stats_file.clone() {
        statistics::init_global(Some(stats_file));
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let customers = CustomerPool::generate(settings.num_customers, &mut rng);
    log::info!("Generated {} customers.", customers.len());

    log::info!(
        "Starting {} simulation runs against a room of {} tables.",
        settings.simulation_runs,
        settings.num_tables
    );

    let mut driver = SimulationDriver::new(settings, rng);
    let reports = driver.run_all(&customers);

    let completed = reports.iter().filter(|r| r.completed).count();
    let total_calls: u64 = reports.iter().map(|r| r.calls).sum();
    let total_served: u64 = reports.iter().map(|r| r.served).sum();
    let total_rejected: u64 = reports.iter().map(|r| r.rejected).sum();
    let total_cancellations: u64 = reports.iter().map(|r| r.cancellations).sum();
    let total_modifications: u64 = reports.iter().map(|r| r.modifications).sum();

    log::info!("--- Simulation Summary ---");
    log::info!("Runs: {} ({} seated every table)", reports.len(), completed);
    log::info!("Calls: {}", total_calls);
    log::info!("Parties served: {}", total_served);
    log::info!("Parties rejected: {}", total_rejected);
    log::info!("Cancellations: {}", total_cancellations);
    log::info!("Rebooking attempts: {}", total_modifications);
    log::info!("--------------------------");

    if let Some(path) = &cli.export_file {
        if let Some(last) = reports.last() {
            let dtos: Vec<ReservationDto> = last.remaining.iter().map(ReservationDto::from).collect();
            let json = serde_json::to_string_pretty(&dtos).context("serializing reservation export")?;
            std::fs::write(path, json).with_context(|| format!("writing reservation export '{}'", path))?;
            log::info!("Exported {} remaining reservations to '{}'.", dtos.len(), path);
        }
    }

    statistics::shutdown_global();

    println!("{}", "All simulation runs completed.".green().bold());

    Ok(())
}
