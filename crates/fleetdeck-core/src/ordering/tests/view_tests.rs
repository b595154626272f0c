use super::host;
use crate::ordering::view::{array_move, ordered, sortable, sortable_ids};
use fleetdeck_types::Host;

#[test]
fn test_ordered_sorts_ascending_by_priority() {
    let hosts = vec![host(1, "a", 5), host(2, "b", -1), host(3, "c", 2)];
    let ids: Vec<_> = ordered(&hosts).iter().filter_map(|h| h.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_ordered_breaks_ties_by_last_known_index() {
    // Equal priorities keep server-response order, and repeated derivations
    // never shuffle them.
    let hosts = vec![host(1, "a", 0), host(2, "b", 0), host(3, "c", 0)];
    let first: Vec<_> = ordered(&hosts).iter().filter_map(|h| h.id).collect();
    let second: Vec<_> = ordered(&hosts).iter().filter_map(|h| h.id).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);
}

#[test]
fn test_sortable_excludes_records_without_identity() {
    let mut placeholder = Host::new("pending", "p.example.com", "vless-tcp");
    placeholder.priority = 1;
    let hosts = vec![host(1, "a", 0), placeholder, host(3, "c", 2)];

    assert_eq!(sortable_ids(&hosts), vec![1, 3]);
    assert_eq!(sortable(&hosts).len(), 2);
    // Still present in the full display order.
    assert_eq!(ordered(&hosts).len(), 3);
}

#[test]
fn test_array_move_shifts_not_swaps() {
    let mut items = vec![1, 2, 3];
    array_move(&mut items, 2, 0);
    assert_eq!(items, vec![3, 1, 2]);

    let mut items = vec![1, 2, 3];
    array_move(&mut items, 0, 2);
    assert_eq!(items, vec![2, 3, 1]);
}

#[test]
fn test_array_move_noop_cases() {
    let mut items = vec![1, 2, 3];
    array_move(&mut items, 1, 1);
    assert_eq!(items, vec![1, 2, 3]);

    array_move(&mut items, 9, 0);
    assert_eq!(items, vec![1, 2, 3]);

    // Target past the end clamps to the tail.
    array_move(&mut items, 0, 9);
    assert_eq!(items, vec![2, 3, 1]);
}
