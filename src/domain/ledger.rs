use rand::Rng;
use rand::seq::IndexedRandom;
use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

use crate::domain::allocator::find_tables_for_guests;
use crate::domain::capacity::SeatingLayout;
use crate::domain::customer::CustomerPool;
use crate::domain::reservation::{Reservation, service_duration};
use crate::domain::table::TableRegistry;
use crate::domain::utils::entropy::mint_reservation_id;
use crate::domain::utils::id::ReservationId;

new_key_type! {
    pub struct ActiveReservationKey;
}

/// Owns the active reservations of one dining room and drives every
/// occupancy change of the table registry.
///
/// Storage is a slot map plus an id index. Removal reuses slots, so no
/// ordering of the active set is guaranteed.
#[derive(Debug, Default)]
pub struct ReservationLedger {
    active: SlotMap<ActiveReservationKey, Reservation>,
    id_index: HashMap<ReservationId, ActiveReservationKey>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        ReservationLedger { active: SlotMap::with_key(), id_index: HashMap::new() }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, reservation_id: &ReservationId) -> bool {
        self.id_index.contains_key(reservation_id)
    }

    pub fn get(&self, reservation_id: &ReservationId) -> Option<&Reservation> {
        let key = self.id_index.get(reservation_id)?;
        self.active.get(*key)
    }

    pub fn active_reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.active.values()
    }

    /// Draws the id of one active reservation uniformly at random.
    ///
    /// # Returns
    /// `None` if the active set is empty.
    pub fn random_id<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ReservationId> {
        // Draw over slot order, which is reproducible for a fixed operation
        // sequence. Hash map iteration order is not.
        let keys: Vec<ActiveReservationKey> = self.active.keys().collect();

        keys.choose(rng).map(|key| self.active[*key].id.clone())
    }

    /// Books the given tables for a party.
    ///
    /// Marks every table occupied (counting the assignment), mints a fresh
    /// reservation id, attaches a random customer from the pool and stores
    /// the new reservation in the active set.
    ///
    /// The caller must have obtained `table_ids` from the allocator for this
    /// party size; the ledger does not re-check capacity.
    ///
    /// # Returns
    /// A clone of the stored reservation.
    pub fn occupy<R: Rng + ?Sized>(
        &mut self,
        registry: &mut TableRegistry,
        table_ids: Vec<usize>,
        guests: i64,
        start_time: i64,
        customers: &CustomerPool,
        rng: &mut R,
    ) -> Reservation {
        let end_time = start_time + service_duration(guests);

        registry.mark_occupied(&table_ids);

        let reservation = Reservation {
            id: mint_reservation_id(rng),
            customer: customers.pick_random(rng).clone(),
            guests,
            start_time,
            end_time,
            tables: table_ids,
        };

        let key = self.active.insert(reservation.clone());
        self.id_index.insert(reservation.id.clone(), key);

        log::debug!(
            "Reservation {} booked: {} guests on tables {:?} from {} to {}.",
            reservation.id,
            guests,
            reservation.tables,
            start_time,
            end_time
        );

        reservation
    }

    /// Cancels an active reservation, freeing all of its tables.
    ///
    /// # Returns
    /// `true` if the reservation existed and was removed; `false` otherwise,
    /// in which case neither the registry nor the active set changed.
    pub fn cancel(&mut self, reservation_id: &ReservationId, registry: &mut TableRegistry) -> bool {
        let Some(key) = self.id_index.remove(reservation_id) else {
            log::debug!("Cancel for unknown reservation id {} ignored.", reservation_id);
            return false;
        };

        match self.active.remove(key) {
            Some(reservation) => {
                registry.mark_free(&reservation.tables);
                log::debug!("Reservation {} cancelled, tables {:?} freed.", reservation.id, reservation.tables);
                true
            }
            None => {
                log::error!("Id index pointed at a missing slot for reservation {}.", reservation_id);
                false
            }
        }
    }

    /// Rebooks an active reservation for a new party size and start slot.
    ///
    /// The old reservation is cancelled first, then the allocator is asked
    /// for a fresh table set. The replacement carries a new id.
    ///
    /// If no table set satisfies the new party size, the booking is lost:
    /// the cancel step already freed its tables and the old record is not
    /// restored.
    ///
    /// # Returns
    /// The replacement reservation, or `None` if the id was unknown or no
    /// tables were available for the new party size.
    pub fn modify<R: Rng + ?Sized>(
        &mut self,
        reservation_id: &ReservationId,
        new_guests: i64,
        new_start_time: i64,
        registry: &mut TableRegistry,
        layout: &SeatingLayout,
        customers: &CustomerPool,
        rng: &mut R,
    ) -> Option<Reservation> {
        if !self.cancel(reservation_id, registry) {
            return None;
        }

        let Some(table_ids) = find_tables_for_guests(new_guests, registry, layout) else {
            log::warn!(
                "Rebooking {} for {} guests found no tables. The old booking stays cancelled.",
                reservation_id,
                new_guests
            );
            return None;
        };

        Some(self.occupy(registry, table_ids, new_guests, new_start_time, customers, rng))
    }
}
