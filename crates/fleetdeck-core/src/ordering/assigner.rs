//! Pure priority arithmetic.
//!
//! No I/O and no access to the session state: every function here maps an
//! observed ordering to new priority values and leaves persistence to the
//! caller.

use std::collections::HashMap;

use fleetdeck_types::HostId;

use super::OrderedRecord;

/// Where a newly inserted record lands, plus the bumps required to make room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Priority for the inserted record.
    pub priority: i64,
    /// Existing records whose priority must change alongside the insert,
    /// as `(id, new_priority)` pairs. Empty when a gap absorbed the insert.
    pub cascade: Vec<(HostId, i64)>,
}

impl Placement {
    /// Placement that fits without touching any other record.
    pub const fn fits(priority: i64) -> Self {
        Self { priority, cascade: Vec::new() }
    }
}

/// Map the i-th id of `ordered_ids` to priority `i`.
///
/// Used after a drag reorder normalizes the whole list: the output is
/// contiguous `0..N-1`, strictly increasing in the given order, and touches
/// no record outside `ordered_ids`.
pub fn assign_sequential(ordered_ids: &[HostId]) -> HashMap<HostId, i64> {
    ordered_ids.iter().enumerate().map(|(i, id)| (*id, i as i64)).collect()
}

/// Compute a priority for a record that must display immediately after
/// `anchor_id` in `sorted` (records in display order).
///
/// When the next record leaves an integer gap the insert slides in without
/// side effects; otherwise every record at or after the insertion position
/// is bumped (by one, or further when the input carries ties) to a strictly
/// increasing value past the insert, and returned in the cascade. Priorities
/// never decrease and no touched record ends up sharing a value with the
/// insert or another touched record.
///
/// Returns `None` only when a bump would overflow `i64` — the caller then
/// falls back to a full renumber via [`assign_sequential`].
pub fn insert_after<R: OrderedRecord>(sorted: &[&R], anchor_id: HostId) -> Option<Placement> {
    if sorted.is_empty() {
        return Some(Placement::fits(0));
    }

    let anchor_pos = sorted.iter().position(|r| r.identity() == Some(anchor_id));

    let Some(anchor_pos) = anchor_pos else {
        // Unknown anchor: treat as append after the current tail.
        let max = sorted.iter().map(|r| r.priority()).max().unwrap_or(0);
        return Some(Placement::fits(max.checked_add(1)?));
    };

    let current = sorted[anchor_pos].priority();
    let target = current.checked_add(1)?;

    let next = match sorted.get(anchor_pos + 1) {
        Some(record) => record.priority(),
        None => return Some(Placement::fits(target)),
    };

    if next > target {
        // Gap between anchor and its successor absorbs the insert.
        return Some(Placement::fits(target));
    }

    let mut cascade = Vec::with_capacity(sorted.len() - anchor_pos - 1);
    let mut prev = target;
    for record in &sorted[anchor_pos + 1..] {
        let id = match record.identity() {
            Some(id) => id,
            None => continue,
        };
        // Clear both the previous touched value and the record's own
        // original, so ties in the input cannot tie with the insert.
        let bumped = prev.checked_add(1)?.max(record.priority().checked_add(1)?);
        cascade.push((id, bumped));
        prev = bumped;
    }
    Some(Placement { priority: target, cascade })
}

/// Priority for a brand-new (non-duplicate) record: in front of everything.
pub fn prepend_new<R: OrderedRecord>(sorted: &[&R]) -> i64 {
    sorted
        .iter()
        .map(|r| r.priority())
        .min()
        .map_or(0, |min| min.saturating_sub(1))
}
