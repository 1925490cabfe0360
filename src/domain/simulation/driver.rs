use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::domain::allocator::find_tables_for_guests;
use crate::domain::customer::CustomerPool;
use crate::domain::ledger::ReservationLedger;
use crate::domain::reservation::Reservation;
use crate::domain::settings::SimulationSettings;
use crate::domain::table::TableRegistry;
use crate::domain::utils::statistics::{self, StatParameter, StatisticEvent};

/// Outcome of a single simulation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Ledger calls issued before the run stopped.
    pub calls: u64,

    /// Parties that received tables (initial bookings, not rebookings).
    pub served: u64,

    /// Parties turned away because no table set was available.
    pub rejected: u64,

    /// Cancellations issued by the driver.
    pub cancellations: u64,

    /// Rebooking attempts issued by the driver.
    pub modifications: u64,

    /// Rebooking attempts that lost their booking.
    pub failed_modifications: u64,

    /// Whether every table served at least one party before the call cap.
    pub completed: bool,

    /// Bookings still active when the run stopped.
    pub remaining: Vec<Reservation>,
}

/// Drives randomized load against a fresh dining room until every table has
/// served at least once, or the per-run call cap is hit.
///
/// Each run owns its own registry and ledger; nothing is shared between
/// runs except the customer pool and the random source.
#[derive(Debug)]
pub struct SimulationDriver {
    settings: SimulationSettings,
    time_slots: Vec<i64>,
    rng: StdRng,
}

impl SimulationDriver {
    /// Creates a driver around a caller-owned random source. Seeding that
    /// source makes every run reproducible.
    pub fn new(settings: SimulationSettings, rng: StdRng) -> Self {
        let time_slots = settings.time_slots();

        SimulationDriver { settings, time_slots, rng }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Runs one simulation against a fresh registry and ledger.
    ///
    /// Every 20th call cancels a random active booking, every remaining
    /// 10th call rebooks one with fresh draws, every other call tries to
    /// seat a new party.
    pub fn run_once(&mut self, customers: &CustomerPool, run_index: u64) -> RunReport {
        let mut registry = TableRegistry::new(self.settings.num_tables);
        let mut ledger = ReservationLedger::new();
        let mut report = RunReport::default();

        loop {
            report.calls += 1;

            let guests = 1 + self.rng.random_range(0..self.settings.max_party_size);
            let start_time = *self.time_slots.choose(&mut self.rng).expect("Time grid must not be empty.");

            if report.calls % 20 == 0 && !ledger.is_empty() {
                let id = ledger.random_id(&mut self.rng).expect("Active set is not empty.");
                ledger.cancel(&id, &mut registry);
                report.cancellations += 1;
            } else if report.calls % 10 == 0 && !ledger.is_empty() {
                let id = ledger.random_id(&mut self.rng).expect("Active set is not empty.");
                let new_guests = 1 + self.rng.random_range(0..self.settings.max_party_size);
                let new_start_time = *self.time_slots.choose(&mut self.rng).expect("Time grid must not be empty.");

                let replacement = ledger.modify(&id, new_guests, new_start_time, &mut registry, &self.settings.layout, customers, &mut self.rng);

                report.modifications += 1;
                if replacement.is_none() {
                    report.failed_modifications += 1;
                }
            } else {
                match find_tables_for_guests(guests, &registry, &self.settings.layout) {
                    Some(table_ids) => {
                        ledger.occupy(&mut registry, table_ids, guests, start_time, customers, &mut self.rng);
                        report.served += 1;
                    }
                    None => report.rejected += 1,
                }
            }

            if registry.all_tables_used_once() {
                report.completed = true;
                break;
            }

            if report.calls > self.settings.call_cap {
                break;
            }
        }

        report.remaining = ledger.active_reservations().cloned().collect();

        log::debug!(
            "Run {} finished after {} calls: {} served, {} rejected, {} active (completed: {}).",
            run_index,
            report.calls,
            report.served,
            report.rejected,
            report.remaining.len(),
            report.completed
        );

        if statistics::is_initialized() {
            let mut event = StatisticEvent::new();
            event
                .set(StatParameter::LogDescription, "RunFinished")
                .set(StatParameter::RunIndex, run_index)
                .set(StatParameter::Calls, report.calls)
                .set(StatParameter::Served, report.served)
                .set(StatParameter::Rejected, report.rejected)
                .set(StatParameter::Cancellations, report.cancellations)
                .set(StatParameter::Modifications, report.modifications)
                .set(StatParameter::FailedModifications, report.failed_modifications)
                .set(StatParameter::ActiveReservations, report.remaining.len())
                .set(StatParameter::Completed, report.completed);

            statistics::add_global_event(event);
        }

        report
    }

    /// Runs the configured number of simulations and collects all reports.
    pub fn run_all(&mut self, customers: &CustomerPool) -> Vec<RunReport> {
        (0..self.settings.simulation_runs).map(|run_index| self.run_once(customers, run_index)).collect()
    }
}
