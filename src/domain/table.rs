/// A single physical seating unit.
#[derive(Debug, Clone)]
pub struct Table {
    /// Stable index of the table within its registry.
    pub id: usize,

    /// Whether an active reservation currently holds this table.
    pub occupied: bool,

    /// Lifetime count of reservations this table was part of.
    /// Never decremented; cancellations leave it untouched.
    pub times_used: i64,
}

/// The fixed pool of tables of one dining room.
///
/// Table state is owned exclusively by this registry and only changes
/// through [`TableRegistry::mark_occupied`] / [`TableRegistry::mark_free`],
/// which the reservation ledger drives. Single writer, no interior locking.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    /// Creates `num_tables` free tables with ids `0..num_tables`.
    pub fn new(num_tables: usize) -> Self {
        let tables = (0..num_tables).map(|id| Table { id, occupied: false, times_used: 0 }).collect();

        TableRegistry { tables }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn is_occupied(&self, table_id: usize) -> bool {
        self.tables[table_id].occupied
    }

    pub fn times_used(&self, table_id: usize) -> i64 {
        self.tables[table_id].times_used
    }

    /// Ids of all currently free tables, in ascending id order.
    pub fn free_tables(&self) -> Vec<usize> {
        self.tables.iter().filter(|t| !t.occupied).map(|t| t.id).collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.tables.iter().filter(|t| t.occupied).count()
    }

    /// Marks every given table occupied and counts the assignment.
    ///
    /// Only the reservation ledger calls this, with a table set obtained
    /// from the allocator.
    pub fn mark_occupied(&mut self, table_ids: &[usize]) {
        for &id in table_ids {
            let table = &mut self.tables[id];

            if table.occupied {
                log::warn!("Table {} was already occupied when marked occupied again.", id);
            }

            table.occupied = true;
            table.times_used += 1;
        }
    }

    /// Marks every given table free again. `times_used` keeps its value.
    pub fn mark_free(&mut self, table_ids: &[usize]) {
        for &id in table_ids {
            let table = &mut self.tables[id];

            if !table.occupied {
                log::warn!("Table {} was already free when marked free again.", id);
            }

            table.occupied = false;
        }
    }

    /// Reports whether every table has served at least one reservation.
    /// The simulation driver uses this as its termination signal.
    pub fn all_tables_used_once(&self) -> bool {
        self.tables.iter().all(|t| t.times_used > 0)
    }
}
