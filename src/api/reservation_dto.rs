use serde::Serialize;

use crate::domain::reservation::Reservation;

/// Serialized view of one reservation. Used for the optional JSON export of
/// the final run's remaining bookings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub guests: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub tables: Vec<usize>,
}

impl From<&Reservation> for ReservationDto {
    fn from(reservation: &Reservation) -> Self {
        ReservationDto {
            id: reservation.id.to_string(),
            name: reservation.customer.name.clone(),
            phone: reservation.customer.phone.clone(),
            guests: reservation.guests,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            tables: reservation.tables.clone(),
        }
    }
}
