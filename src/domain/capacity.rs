/// Seat counts for joined table groups.
///
/// A single table seats `per_table_capacity` guests. Joining tables loses
/// `shared_seat_loss` seats per additional table, along the shared edges.
/// With the default layout: 1 table seats 4, 2 seat 6, 3 seat 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatingLayout {
    per_table_capacity: i64,
    shared_seat_loss: i64,
}

impl SeatingLayout {
    pub fn new(per_table_capacity: i64, shared_seat_loss: i64) -> Self {
        SeatingLayout { per_table_capacity, shared_seat_loss }
    }

    /// Total seats available when `num_tables` tables are joined into one group.
    ///
    /// Pure and total over positive table counts.
    pub fn combined_capacity(&self, num_tables: usize) -> i64 {
        let n = num_tables as i64;
        n * self.per_table_capacity - (n - 1) * self.shared_seat_loss
    }

    pub fn per_table_capacity(&self) -> i64 {
        self.per_table_capacity
    }

    pub fn shared_seat_loss(&self) -> i64 {
        self.shared_seat_loss
    }
}

impl Default for SeatingLayout {
    fn default() -> Self {
        SeatingLayout { per_table_capacity: 4, shared_seat_loss: 2 }
    }
}
