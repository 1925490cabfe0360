use rand::SeedableRng;
use rand::rngs::StdRng;

use restaurant_seating::domain::allocator::find_tables_for_guests;
use restaurant_seating::domain::capacity::SeatingLayout;
use restaurant_seating::domain::customer::CustomerPool;
use restaurant_seating::domain::ledger::ReservationLedger;
use restaurant_seating::domain::table::TableRegistry;
use restaurant_seating::domain::utils::id::ReservationId;

fn setup(num_tables: usize) -> (TableRegistry, ReservationLedger, CustomerPool, StdRng) {
    let mut rng = StdRng::seed_from_u64(42);
    let customers = CustomerPool::generate(10, &mut rng);

    (TableRegistry::new(num_tables), ReservationLedger::new(), customers, rng)
}

#[test]
fn occupy_marks_tables_and_counts_usage() {
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let reservation = ledger.occupy(&mut registry, vec![0, 1], 5, 720, &customers, &mut rng);

    assert_eq!(reservation.guests, 5);
    assert_eq!(reservation.start_time, 720);
    assert_eq!(reservation.end_time, 720 + 60 + 5 * 5);
    assert_eq!(reservation.tables, vec![0, 1]);

    assert!(registry.is_occupied(0));
    assert!(registry.is_occupied(1));
    assert_eq!(registry.times_used(0), 1);
    assert_eq!(registry.times_used(1), 1);

    assert_eq!(ledger.len(), 1);
    assert!(ledger.contains(&reservation.id));
}

#[test]
fn occupy_for_ten_guests_at_noon_ends_at_830() {
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let reservation = ledger.occupy(&mut registry, vec![0, 1, 2, 3], 10, 720, &customers, &mut rng);

    assert_eq!(reservation.end_time, 830);
}

#[test]
fn reservation_ids_are_64_char_hex_and_distinct() {
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let first = ledger.occupy(&mut registry, vec![0], 2, 720, &customers, &mut rng);
    let second = ledger.occupy(&mut registry, vec![1], 2, 735, &customers, &mut rng);

    assert_ne!(first.id, second.id);

    for reservation in [&first, &second] {
        let encoded = reservation.id.to_string();
        assert_eq!(encoded.len(), 64);
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn cancel_frees_tables_and_removes_the_booking() {
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let reservation = ledger.occupy(&mut registry, vec![0, 1], 6, 750, &customers, &mut rng);

    assert!(ledger.cancel(&reservation.id, &mut registry));

    assert!(!registry.is_occupied(0));
    assert!(!registry.is_occupied(1));
    assert!(ledger.is_empty());
    assert!(!ledger.contains(&reservation.id));
}

#[test]
fn cancel_of_an_unknown_id_changes_nothing() {
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let reservation = ledger.occupy(&mut registry, vec![0], 3, 780, &customers, &mut rng);

    let unknown = ReservationId::new("does-not-exist");
    assert!(!ledger.cancel(&unknown, &mut registry));

    assert_eq!(ledger.len(), 1);
    assert!(ledger.contains(&reservation.id));
    assert!(registry.is_occupied(0));
}

#[test]
fn occupy_then_cancel_restores_occupancy_but_not_usage_counts() {
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let free_before = registry.free_tables();

    let reservation = ledger.occupy(&mut registry, vec![2, 3], 5, 900, &customers, &mut rng);
    assert!(ledger.cancel(&reservation.id, &mut registry));

    assert_eq!(registry.free_tables(), free_before);
    assert_eq!(registry.times_used(2), 1);
    assert_eq!(registry.times_used(3), 1);
}

#[test]
fn modify_replaces_the_booking_under_a_fresh_id() {
    let layout = SeatingLayout::default();
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let original = ledger.occupy(&mut registry, vec![0], 2, 720, &customers, &mut rng);

    let replacement = ledger
        .modify(&original.id, 5, 780, &mut registry, &layout, &customers, &mut rng)
        .expect("Rebooking must succeed in an almost empty room.");

    assert_ne!(replacement.id, original.id);
    assert!(!ledger.contains(&original.id));
    assert!(ledger.contains(&replacement.id));

    assert_eq!(replacement.guests, 5);
    assert_eq!(replacement.start_time, 780);
    assert_eq!(replacement.end_time, 780 + 60 + 5 * 5);
    // Table 0 was freed by the cancel step and picked up again by the rescan.
    assert_eq!(replacement.tables, vec![0, 1]);
    assert_eq!(registry.times_used(0), 2);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn modify_of_an_unknown_id_leaves_the_active_set_unchanged() {
    let layout = SeatingLayout::default();
    let (mut registry, mut ledger, customers, mut rng) = setup(10);

    let reservation = ledger.occupy(&mut registry, vec![0], 2, 720, &customers, &mut rng);

    let unknown = ReservationId::new("does-not-exist");
    let outcome = ledger.modify(&unknown, 4, 780, &mut registry, &layout, &customers, &mut rng);

    assert!(outcome.is_none());
    assert_eq!(ledger.len(), 1);
    assert!(ledger.contains(&reservation.id));
    assert!(registry.is_occupied(0));
}

#[test]
fn failed_rebooking_loses_the_original_booking() {
    let layout = SeatingLayout::default();
    let (mut registry, mut ledger, customers, mut rng) = setup(1);

    let table_ids = find_tables_for_guests(2, &registry, &layout).expect("One free table seats a party of 2.");
    let original = ledger.occupy(&mut registry, table_ids, 2, 720, &customers, &mut rng);

    // A party of 6 needs two tables; the room only has one. The cancel step
    // has already run, so the old booking is gone and its table is free.
    let outcome = ledger.modify(&original.id, 6, 780, &mut registry, &layout, &customers, &mut rng);

    assert!(outcome.is_none());
    assert!(ledger.is_empty());
    assert!(!ledger.contains(&original.id));
    assert!(!registry.is_occupied(0));
}
