//! ChangesDiscarded applier

use super::{deselect, prune_empty_groups, stamp};
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

/// ChangesDiscarded applier
pub struct ChangesDiscardedApplier;

impl EventApplier for ChangesDiscardedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ChangesDiscarded { item_ids } = &event.payload {
            for group in &mut snapshot.groups {
                group.items.retain(|i| !item_ids.contains(&i.id));
            }
            deselect(snapshot, item_ids);
            snapshot.active_group_id = None;
            prune_empty_groups(snapshot);
            stamp(snapshot, event);
        }
    }
}
