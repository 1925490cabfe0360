use crate::api::config_dto::SimulationConfigDto;
use crate::domain::capacity::SeatingLayout;
use crate::error::{Error, Result};

pub const DEFAULT_NUM_TABLES: usize = 100;
pub const DEFAULT_PER_TABLE_CAPACITY: i64 = 4;
pub const DEFAULT_SHARED_SEAT_LOSS: i64 = 2;
pub const DEFAULT_NUM_CUSTOMERS: usize = 200;

/// 12:00 in minutes from start of day
pub const DEFAULT_OPENING_MINUTE: i64 = 12 * 60;

/// 22:00 in minutes
pub const DEFAULT_CLOSING_MINUTE: i64 = 22 * 60;

/// Bookings start on a 15-minute grid
pub const DEFAULT_SLOT_INTERVAL: i64 = 15;

pub const DEFAULT_MAX_PARTY_SIZE: i64 = 15;
pub const DEFAULT_CALL_CAP: u64 = 100_000;
pub const DEFAULT_SIMULATION_RUNS: u64 = 100_000;

/// Validated runtime settings of the seating simulation.
///
/// Built from [`SimulationConfigDto`] with every missing field falling back
/// to the defaults above.
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Number of tables in the dining room.
    pub num_tables: usize,

    /// Seat counts for joined table groups.
    pub layout: SeatingLayout,

    /// Size of the pre-generated customer pool.
    pub num_customers: usize,

    /// First bookable minute of the day.
    pub opening_minute: i64,

    /// Last bookable minute of the day.
    pub closing_minute: i64,

    /// Distance between bookable start times, in minutes.
    pub slot_interval: i64,

    /// Largest party size the driver draws (inclusive).
    pub max_party_size: i64,

    /// Per-run cap on ledger calls. Guards against a run that never manages
    /// to seat every table.
    pub call_cap: u64,

    /// Number of independent simulation runs.
    pub simulation_runs: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            num_tables: DEFAULT_NUM_TABLES,
            layout: SeatingLayout::default(),
            num_customers: DEFAULT_NUM_CUSTOMERS,
            opening_minute: DEFAULT_OPENING_MINUTE,
            closing_minute: DEFAULT_CLOSING_MINUTE,
            slot_interval: DEFAULT_SLOT_INTERVAL,
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
            call_cap: DEFAULT_CALL_CAP,
            simulation_runs: DEFAULT_SIMULATION_RUNS,
        }
    }
}

impl SimulationSettings {
    /// Builds validated settings from a parsed config file.
    ///
    /// # Returns
    /// `Error::InvalidConfigError` if any field combination cannot describe
    /// a usable dining room.
    pub fn from_dto(dto: SimulationConfigDto) -> Result<Self> {
        let settings = SimulationSettings {
            num_tables: dto.num_tables.unwrap_or(DEFAULT_NUM_TABLES),
            layout: SeatingLayout::new(
                dto.per_table_capacity.unwrap_or(DEFAULT_PER_TABLE_CAPACITY),
                dto.shared_seat_loss.unwrap_or(DEFAULT_SHARED_SEAT_LOSS),
            ),
            num_customers: dto.num_customers.unwrap_or(DEFAULT_NUM_CUSTOMERS),
            opening_minute: dto.opening_minute.unwrap_or(DEFAULT_OPENING_MINUTE),
            closing_minute: dto.closing_minute.unwrap_or(DEFAULT_CLOSING_MINUTE),
            slot_interval: dto.slot_interval.unwrap_or(DEFAULT_SLOT_INTERVAL),
            max_party_size: dto.max_party_size.unwrap_or(DEFAULT_MAX_PARTY_SIZE),
            call_cap: dto.call_cap.unwrap_or(DEFAULT_CALL_CAP),
            simulation_runs: dto.simulation_runs.unwrap_or(DEFAULT_SIMULATION_RUNS),
        };

        settings.validate()?;

        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.num_tables == 0 {
            return Err(Error::InvalidConfigError("numTables must be at least 1".to_string()));
        }

        if self.layout.per_table_capacity() <= 0 {
            return Err(Error::InvalidConfigError("perTableCapacity must be positive".to_string()));
        }

        if self.layout.shared_seat_loss() < 0 || self.layout.shared_seat_loss() >= self.layout.per_table_capacity() {
            return Err(Error::InvalidConfigError(
                "sharedSeatLoss must be between 0 and perTableCapacity - 1".to_string(),
            ));
        }

        if self.num_customers == 0 {
            return Err(Error::InvalidConfigError("numCustomers must be at least 1".to_string()));
        }

        if self.slot_interval <= 0 {
            return Err(Error::InvalidConfigError("slotInterval must be positive".to_string()));
        }

        if self.closing_minute < self.opening_minute {
            return Err(Error::InvalidConfigError("closingMinute must not be before openingMinute".to_string()));
        }

        if self.max_party_size <= 0 {
            return Err(Error::InvalidConfigError("maxPartySize must be positive".to_string()));
        }

        Ok(())
    }

    /// All bookable start times: every `slot_interval` minutes from opening
    /// to closing, both inclusive.
    pub fn time_slots(&self) -> Vec<i64> {
        let mut slots = Vec::new();

        let mut t = self.opening_minute;
        while t <= self.closing_minute {
            slots.push(t);
            t += self.slot_interval;
        }

        slots
    }
}
