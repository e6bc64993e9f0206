//! Selection appliers
//!
//! The `Selection` enum holds either item ids or a group id, never both,
//! so switching modes drops the previous mode's state.

use super::{prune_empty_groups, stamp};
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, Selection};

/// SelectionModeChanged applier
pub struct SelectionModeChangedApplier;

impl EventApplier for SelectionModeChangedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::SelectionModeChanged { active } = &event.payload {
            snapshot.selection = if *active {
                Selection::Items {
                    selected: Vec::new(),
                }
            } else {
                Selection::None
            };
            stamp(snapshot, event);
        }
    }
}

/// ItemSelectionToggled applier
pub struct ItemSelectionToggledApplier;

impl EventApplier for ItemSelectionToggledApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemSelectionToggled { item_id, selected } = &event.payload {
            if let Selection::Items { selected: ids } = &mut snapshot.selection {
                let present = ids.contains(item_id);
                if *selected && !present {
                    ids.push(item_id.clone());
                } else if !*selected {
                    ids.retain(|id| id != item_id);
                }
            }
            stamp(snapshot, event);
        }
    }
}

/// GroupSelectionModeChanged applier
pub struct GroupSelectionModeChangedApplier;

impl EventApplier for GroupSelectionModeChangedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::GroupSelectionModeChanged { active, group_id } = &event.payload {
            snapshot.selection = if *active {
                Selection::Group {
                    group_id: group_id.clone(),
                }
            } else {
                Selection::None
            };
            stamp(snapshot, event);
        }
    }
}

/// SelectedItemsRemoved applier
pub struct SelectedItemsRemovedApplier;

impl EventApplier for SelectedItemsRemovedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::SelectedItemsRemoved { group_id, item_ids } = &event.payload {
            if let Some(group) = snapshot.group_mut(group_id) {
                group.items.retain(|i| !item_ids.contains(&i.id));
            }
            snapshot.selection = Selection::None;
            prune_empty_groups(snapshot);
            stamp(snapshot, event);
        }
    }
}
