//! ItemsCombined / ItemsSeparated appliers
//!
//! New lines are appended at the end of the course, not at the position of
//! the lines they replace. Both leave item selection mode.

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, Selection};

/// ItemsCombined applier
pub struct ItemsCombinedApplier;

impl EventApplier for ItemsCombinedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemsCombined {
            group_id,
            item_ids,
            combo,
        } = &event.payload
        {
            if let Some(group) = snapshot.group_mut(group_id) {
                group.items.retain(|i| !item_ids.contains(&i.id));
                group.items.push(combo.clone());
            }
            snapshot.selection = Selection::None;
            stamp(snapshot, event);
        }
    }
}

/// ItemsSeparated applier
pub struct ItemsSeparatedApplier;

impl EventApplier for ItemsSeparatedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemsSeparated {
            group_id,
            combo_ids,
            items,
        } = &event.payload
        {
            if let Some(group) = snapshot.group_mut(group_id) {
                group.items.retain(|i| !combo_ids.contains(&i.id));
                group.items.extend(items.iter().cloned());
            }
            snapshot.selection = Selection::None;
            stamp(snapshot, event);
        }
    }
}
