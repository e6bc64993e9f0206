//! OrderFired applier
//!
//! `has_been_fired` is only ever set here and never cleared.

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

/// OrderFired applier
pub struct OrderFiredApplier;

impl EventApplier for OrderFiredApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::OrderFired {
            sent_item_ids,
            fired_item_ids,
        } = &event.payload
        {
            for item in snapshot.groups.iter_mut().flat_map(|g| g.items.iter_mut()) {
                if sent_item_ids.contains(&item.id) {
                    item.is_sent = true;
                }
                if fired_item_ids.contains(&item.id) {
                    item.has_been_fired = true;
                }
            }
            snapshot.fire_success = true;
            snapshot.active_group_id = None;
            stamp(snapshot, event);
        }
    }
}
