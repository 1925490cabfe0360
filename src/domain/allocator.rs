use crate::domain::capacity::SeatingLayout;
use crate::domain::table::TableRegistry;

/// Selects a table set for a party of `guest_count` guests.
///
/// For every group size `n` starting at a single table, the search checks
/// whether `n` joined tables seat the party at all and, if so, collects the
/// first `n` free tables in ascending id order. The first group size for
/// which both hold wins.
///
/// The scan restarts from table 0 for every `n`, so the outcome depends only
/// on the occupancy state at call time. There is no search over alternative
/// subsets of the free tables and no preference for adjacent ids; the
/// returned set is the greedy first fit, not the best packing.
///
/// # Returns
/// The ids of the selected tables in ascending order, or `None` if no group
/// size yields both enough seats and enough free tables.
pub fn find_tables_for_guests(guest_count: i64, registry: &TableRegistry, layout: &SeatingLayout) -> Option<Vec<usize>> {
    for n in 1..=registry.len() {
        let capacity = layout.combined_capacity(n);
        if capacity < guest_count {
            continue;
        }

        let mut free_tables = Vec::with_capacity(n);
        for table in registry.tables() {
            if free_tables.len() >= n {
                break;
            }
            if !table.occupied {
                free_tables.push(table.id);
            }
        }

        if free_tables.len() == n {
            return Some(free_tables);
        }
    }

    None
}
