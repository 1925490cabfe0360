use serde::Deserialize;

/// Shape of the optional simulation config file.
///
/// Every field may be left out; missing fields fall back to the built-in
/// defaults in `domain::settings`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfigDto {
    pub num_tables: Option<usize>,
    pub per_table_capacity: Option<i64>,
    pub shared_seat_loss: Option<i64>,
    pub num_customers: Option<usize>,
    pub opening_minute: Option<i64>,
    pub closing_minute: Option<i64>,
    pub slot_interval: Option<i64>,
    pub max_party_size: Option<i64>,
    pub call_cap: Option<u64>,
    pub simulation_runs: Option<u64>,
}
