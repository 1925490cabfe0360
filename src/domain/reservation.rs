use crate::domain::customer::Customer;
use crate::domain::utils::id::ReservationId;

/// Minutes a party of the given size keeps its tables: a base hour plus
/// five minutes per guest.
pub fn service_duration(guests: i64) -> i64 {
    60 + guests * 5
}

/// A booking binding a party and its time window to a set of tables.
///
/// A reservation only exists while it is active: it is created by a
/// successful allocation and dropped again on cancellation. Modification
/// replaces the record under a fresh id; the old id does not survive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Unique id of the booking, minted from 32 bytes of entropy.
    pub id: ReservationId,

    /// The guest identity the booking was made for.
    pub customer: Customer,

    /// Party size.
    pub guests: i64,

    /// Start of the booking, in minutes of the day.
    pub start_time: i64,

    /// End of the booking: `start_time` plus the service duration.
    pub end_time: i64,

    /// Ids of all tables joined for this party, as picked by the allocator.
    pub tables: Vec<usize>,
}
