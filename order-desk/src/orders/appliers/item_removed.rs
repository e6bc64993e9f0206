//! ItemRemoved applier

use super::{deselect, prune_empty_groups, stamp};
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

/// ItemRemoved applier
pub struct ItemRemovedApplier;

impl EventApplier for ItemRemovedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemRemoved {
            group_id, item_id, ..
        } = &event.payload
        {
            if let Some(group) = snapshot.group_mut(group_id) {
                group.items.retain(|i| &i.id != item_id);
            }
            deselect(snapshot, std::slice::from_ref(item_id));
            prune_empty_groups(snapshot);
            stamp(snapshot, event);
        }
    }
}
