use restaurant_seating::domain::table::TableRegistry;

#[test]
fn new_registry_is_free_and_unused() {
    let registry = TableRegistry::new(4);

    assert_eq!(registry.len(), 4);
    assert_eq!(registry.free_tables(), vec![0, 1, 2, 3]);
    assert_eq!(registry.occupied_count(), 0);
    assert!(!registry.all_tables_used_once());
}

#[test]
fn marking_occupied_counts_the_assignment() {
    let mut registry = TableRegistry::new(3);

    registry.mark_occupied(&[1, 2]);

    assert!(!registry.is_occupied(0));
    assert!(registry.is_occupied(1));
    assert!(registry.is_occupied(2));
    assert_eq!(registry.times_used(1), 1);
    assert_eq!(registry.free_tables(), vec![0]);
    assert_eq!(registry.occupied_count(), 2);
}

#[test]
fn marking_free_keeps_the_usage_count() {
    let mut registry = TableRegistry::new(2);

    registry.mark_occupied(&[0]);
    registry.mark_free(&[0]);

    assert!(!registry.is_occupied(0));
    assert_eq!(registry.times_used(0), 1);
}

#[test]
fn all_tables_used_once_needs_every_table() {
    let mut registry = TableRegistry::new(2);

    registry.mark_occupied(&[0]);
    assert!(!registry.all_tables_used_once());

    registry.mark_occupied(&[1]);
    assert!(registry.all_tables_used_once());

    registry.mark_free(&[0, 1]);
    assert!(registry.all_tables_used_once());
}
