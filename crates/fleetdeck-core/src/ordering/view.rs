//! Stable display-order derivation.

use fleetdeck_types::HostId;

use super::OrderedRecord;

/// Display order: ascending priority, ties broken by position in the
/// last-known server response.
///
/// The sort is stable, so two calls over the same slice yield the same
/// sequence and unrelated re-renders never shuffle equal-priority records.
pub fn ordered<R: OrderedRecord>(records: &[R]) -> Vec<&R> {
    let mut view: Vec<&R> = records.iter().collect();
    view.sort_by_key(|r| r.priority());
    view
}

/// Drag-eligible subset of the display order: records with identity only.
///
/// Unsynced placeholders are still rendered elsewhere but cannot be dragged
/// or bulk-persisted, so they are excluded here.
pub fn sortable<R: OrderedRecord>(records: &[R]) -> Vec<&R> {
    ordered(records)
        .into_iter()
        .filter(|r| r.identity().is_some())
        .collect()
}

/// Ids of the drag-eligible subset, in display order.
pub fn sortable_ids<R: OrderedRecord>(records: &[R]) -> Vec<HostId> {
    sortable(records)
        .into_iter()
        .filter_map(OrderedRecord::identity)
        .collect()
}

/// Move the element at `from` to index `to`, shifting everything in between
/// by one slot (array move, not a swap).
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}
