use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock, mpsc};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

/// Each event consists of a set of key-value-pairs with the measured data or some meta data of the event.
/// This enum specifies all allowed key values and thus the columns in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatParameter {
    /// Time in seconds since simulation start.
    Time,

    /// Description why this entry was made
    LogDescription,

    /// Zero-based index of the simulation run the entry belongs to.
    RunIndex,

    /// Ledger calls issued during the run.
    Calls,

    /// Parties that received tables.
    Served,

    /// Parties turned away because no table set was available.
    Rejected,

    /// Cancellations issued during the run.
    Cancellations,

    /// Rebooking attempts issued during the run.
    Modifications,

    /// Rebooking attempts that lost their booking.
    FailedModifications,

    /// Reservations still active when the run stopped.
    ActiveReservations,

    /// Whether every table served at least once before the call cap.
    Completed,
}

/// Column order of the CSV output. Header strings and row values are both
/// derived from this one array.
const COLUMNS: [StatParameter; 11] = [
    StatParameter::Time,
    StatParameter::LogDescription,
    StatParameter::RunIndex,
    StatParameter::Calls,
    StatParameter::Served,
    StatParameter::Rejected,
    StatParameter::Cancellations,
    StatParameter::Modifications,
    StatParameter::FailedModifications,
    StatParameter::ActiveReservations,
    StatParameter::Completed,
];

impl StatParameter {
    fn as_str(&self) -> &'static str {
        match self {
            StatParameter::Time => "Time",
            StatParameter::LogDescription => "LogDescription",
            StatParameter::RunIndex => "RunIndex",
            StatParameter::Calls => "Calls",
            StatParameter::Served => "Served",
            StatParameter::Rejected => "Rejected",
            StatParameter::Cancellations => "Cancellations",
            StatParameter::Modifications => "Modifications",
            StatParameter::FailedModifications => "FailedModifications",
            StatParameter::ActiveReservations => "ActiveReservations",
            StatParameter::Completed => "Completed",
        }
    }

    /// Returns the defined order of columns for the CSV header
    pub fn headers() -> Vec<&'static str> {
        COLUMNS.iter().map(StatParameter::as_str).collect()
    }
}

/// store values in their native format, only format them when writing to the CSV.
#[derive(Debug, Clone)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

// Automatic conversion helpers
impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        StatValue::Integer(v)
    }
}

impl From<u64> for StatValue {
    fn from(v: u64) -> Self {
        StatValue::Integer(v as i64)
    }
}

impl From<usize> for StatValue {
    fn from(v: usize) -> Self {
        StatValue::Integer(v as i64)
    }
}

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        StatValue::Float(v)
    }
}

impl From<String> for StatValue {
    fn from(v: String) -> Self {
        StatValue::Text(v)
    }
}

impl From<&str> for StatValue {
    fn from(v: &str) -> Self {
        StatValue::Text(v.to_string())
    }
}

impl From<bool> for StatValue {
    fn from(v: bool) -> Self {
        StatValue::Bool(v)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatisticEvent {
    data: HashMap<StatParameter, StatValue>,
}

impl StatisticEvent {
    pub fn new() -> Self {
        Self { data: HashMap::new() }
    }

    pub fn set<V: Into<StatValue>>(&mut self, param: StatParameter, value: V) -> &mut Self {
        self.data.insert(param, value.into());
        self
    }

    pub fn get(&self, param: StatParameter) -> Option<&StatValue> {
        self.data.get(&param)
    }
}

/// Messages sent from the simulation to the writer thread.
enum StatsMessage {
    Log(StatisticEvent),
    Flush,
    Shutdown,
}

/// The handle that allows the simulation to log events.
/// It holds the "Sender" side of the channel.
pub struct StatsCollector {
    sender: mpsc::Sender<StatsMessage>,
    start_time: u64,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
}

impl StatsCollector {
    /// Initialize the statistics system.
    /// Spawns a background thread that manages the file writing.
    pub fn init(filename: Option<String>) -> Self {
        let (tx, rx) = mpsc::channel();

        let start_time = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();

        let worker = thread::spawn(move || {
            Self::worker_loop(rx, filename);
        });

        StatsCollector { sender: tx, start_time, worker: Mutex::new(Some(worker)) }
    }

    /// The logic running in the background thread.
    fn worker_loop(rx: mpsc::Receiver<StatsMessage>, filename: Option<String>) {
        // Setup Output (File or Stdout)
        let writer: Box<dyn Write> = match filename {
            Some(f) => match File::create(&f) {
                Ok(file) => Box::new(file),
                Err(e) => {
                    log::error!("Stats Error: Could not create statistics file '{}': {}. Writing to stdout.", f, e);
                    Box::new(io::stdout())
                }
            },
            None => Box::new(io::stdout()),
        };

        let mut csv_wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);

        // Write Header
        if let Err(e) = csv_wtr.write_record(StatParameter::headers()) {
            log::error!("Stats Error: Failed to write headers: {}", e);
        }

        // Process incoming messages
        for msg in rx {
            match msg {
                StatsMessage::Log(event) => {
                    // Convert the map into a row following the column order
                    let row: Vec<String> = COLUMNS
                        .iter()
                        .map(|param| match event.data.get(param) {
                            Some(StatValue::Text(t)) => t.clone(),
                            Some(StatValue::Integer(i)) => i.to_string(),
                            Some(StatValue::Float(f)) => f.to_string(),
                            Some(StatValue::Bool(b)) => b.to_string(),
                            None => "NA".to_string(),
                        })
                        .collect();

                    if let Err(e) = csv_wtr.write_record(&row) {
                        eprintln!("Stats Error: Failed to write record: {}", e);
                    }
                }
                StatsMessage::Flush => {
                    let _ = csv_wtr.flush();
                }
                StatsMessage::Shutdown => {
                    let _ = csv_wtr.flush();
                    break;
                }
            }
        }
    }

    /// Public API to log an event.
    /// This is non-blocking (just sends a message).
    pub fn add_event(&self, mut event: StatisticEvent) {
        // Inject timestamp automatically if not present
        if event.get(StatParameter::Time).is_none() {
            let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
            let relative = now.saturating_sub(self.start_time);
            event.set(StatParameter::Time, relative as i64);
        }

        // Send to writer thread
        // We ignore errors here (e.g., if writer thread crashed) to not crash the simulation
        let _ = self.sender.send(StatsMessage::Log(event));
    }

    /// Flushes the writer and stops the background thread.
    pub fn shutdown(&self) {
        let _ = self.sender.send(StatsMessage::Shutdown);

        if let Ok(mut guard) = self.worker.lock() {
            if let Some(handle) = guard.take() {
                let _ = handle.join();
            }
        }
    }
}

static GLOBAL_STATS: OnceLock<StatsCollector> = OnceLock::new();

/// Initialize the global statistics collector.
pub fn init_global(filename: Option<String>) {
    let collector = StatsCollector::init(filename);
    let _ = GLOBAL_STATS.set(collector);
}

/// Reports whether the global collector was initialized. Callers can skip
/// assembling events entirely when statistics are disabled.
pub fn is_initialized() -> bool {
    GLOBAL_STATS.get().is_some()
}

/// Helper to log an event to the global collector.
/// Safe to call from anywhere, from any thread.
pub fn add_global_event(event: StatisticEvent) {
    if let Some(collector) = GLOBAL_STATS.get() {
        collector.add_event(event);
    } else {
        log::error!("Statistics event dropped. Call init_global() first.");
    }
}

/// Flushes and stops the global collector. Pending events are written out
/// before this returns.
pub fn shutdown_global() {
    if let Some(collector) = GLOBAL_STATS.get() {
        collector.shutdown();
    }
}
