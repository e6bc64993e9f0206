//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use shared::order::{EventPayload, OrderEvent, OrderSnapshot, Selection};

mod changes_discarded;
mod fire_status;
mod group_toggles_changed;
mod item_added;
mod item_removed;
mod items_combined;
mod items_reordered;
mod navigation;
mod notices;
mod order_fired;
mod selection;

pub use changes_discarded::ChangesDiscardedApplier;
pub use fire_status::{GroupFireStatusSetApplier, ItemStatusToggledApplier};
pub use group_toggles_changed::GroupTogglesChangedApplier;
pub use item_added::{ItemAddedApplier, ItemQuantityIncrementedApplier};
pub use item_removed::ItemRemovedApplier;
pub use items_combined::{ItemsCombinedApplier, ItemsSeparatedApplier};
pub use items_reordered::ItemsReorderedApplier;
pub use navigation::{GroupSelectedApplier, SelectionErrorChangedApplier};
pub use notices::{FireSuccessChangedApplier, ScrollTargetClearedApplier};
pub use order_fired::OrderFiredApplier;
pub use selection::{
    GroupSelectionModeChangedApplier, ItemSelectionToggledApplier, SelectedItemsRemovedApplier,
    SelectionModeChangedApplier,
};

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    GroupSelected(GroupSelectedApplier),
    SelectionErrorChanged(SelectionErrorChangedApplier),
    ItemAdded(ItemAddedApplier),
    ItemQuantityIncremented(ItemQuantityIncrementedApplier),
    ItemRemoved(ItemRemovedApplier),
    ItemsReordered(ItemsReorderedApplier),
    ItemStatusToggled(ItemStatusToggledApplier),
    GroupFireStatusSet(GroupFireStatusSetApplier),
    ChangesDiscarded(ChangesDiscardedApplier),
    OrderFired(OrderFiredApplier),
    SelectionModeChanged(SelectionModeChangedApplier),
    ItemSelectionToggled(ItemSelectionToggledApplier),
    GroupSelectionModeChanged(GroupSelectionModeChangedApplier),
    SelectedItemsRemoved(SelectedItemsRemovedApplier),
    ItemsCombined(ItemsCombinedApplier),
    ItemsSeparated(ItemsSeparatedApplier),
    GroupTogglesChanged(GroupTogglesChangedApplier),
    ScrollTargetCleared(ScrollTargetClearedApplier),
    FireSuccessChanged(FireSuccessChangedApplier),
}

/// Convert OrderEvent reference to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&OrderEvent> for EventAction {
    fn from(event: &OrderEvent) -> Self {
        match &event.payload {
            EventPayload::GroupSelected { .. } => EventAction::GroupSelected(GroupSelectedApplier),
            EventPayload::SelectionErrorChanged { .. } => {
                EventAction::SelectionErrorChanged(SelectionErrorChangedApplier)
            }
            EventPayload::ItemAdded { .. } => EventAction::ItemAdded(ItemAddedApplier),
            EventPayload::ItemQuantityIncremented { .. } => {
                EventAction::ItemQuantityIncremented(ItemQuantityIncrementedApplier)
            }
            EventPayload::ItemRemoved { .. } => EventAction::ItemRemoved(ItemRemovedApplier),
            EventPayload::ItemsReordered { .. } => {
                EventAction::ItemsReordered(ItemsReorderedApplier)
            }
            EventPayload::ItemStatusToggled { .. } => {
                EventAction::ItemStatusToggled(ItemStatusToggledApplier)
            }
            EventPayload::GroupFireStatusSet { .. } => {
                EventAction::GroupFireStatusSet(GroupFireStatusSetApplier)
            }
            EventPayload::ChangesDiscarded { .. } => {
                EventAction::ChangesDiscarded(ChangesDiscardedApplier)
            }
            EventPayload::OrderFired { .. } => EventAction::OrderFired(OrderFiredApplier),
            EventPayload::SelectionModeChanged { .. } => {
                EventAction::SelectionModeChanged(SelectionModeChangedApplier)
            }
            EventPayload::ItemSelectionToggled { .. } => {
                EventAction::ItemSelectionToggled(ItemSelectionToggledApplier)
            }
            EventPayload::GroupSelectionModeChanged { .. } => {
                EventAction::GroupSelectionModeChanged(GroupSelectionModeChangedApplier)
            }
            EventPayload::SelectedItemsRemoved { .. } => {
                EventAction::SelectedItemsRemoved(SelectedItemsRemovedApplier)
            }
            EventPayload::ItemsCombined { .. } => EventAction::ItemsCombined(ItemsCombinedApplier),
            EventPayload::ItemsSeparated { .. } => {
                EventAction::ItemsSeparated(ItemsSeparatedApplier)
            }
            EventPayload::GroupTogglesChanged { .. } => {
                EventAction::GroupTogglesChanged(GroupTogglesChangedApplier)
            }
            EventPayload::ScrollTargetCleared {} => {
                EventAction::ScrollTargetCleared(ScrollTargetClearedApplier)
            }
            EventPayload::FireSuccessChanged { .. } => {
                EventAction::FireSuccessChanged(FireSuccessChangedApplier)
            }
        }
    }
}

/// Record the event on the snapshot (sequence, timestamp, checksum)
///
/// Every applier calls this last.
pub(crate) fn stamp(snapshot: &mut OrderSnapshot, event: &OrderEvent) {
    snapshot.last_sequence = event.sequence;
    snapshot.updated_at = event.timestamp;
    snapshot.update_checksum();
}

/// Drop empty groups that are not pinned, and any reference to them
pub(crate) fn prune_empty_groups(snapshot: &mut OrderSnapshot) {
    let pruned: Vec<String> = snapshot
        .groups
        .iter()
        .filter(|g| g.items.is_empty() && !g.pinned)
        .map(|g| g.id.clone())
        .collect();
    if pruned.is_empty() {
        return;
    }

    snapshot.groups.retain(|g| !pruned.contains(&g.id));

    let is_pruned = |id: &Option<String>| id.as_ref().is_some_and(|id| pruned.contains(id));
    if is_pruned(&snapshot.active_group_id) {
        snapshot.active_group_id = None;
    }
    if is_pruned(&snapshot.scroll_target) {
        snapshot.scroll_target = None;
    }
    if let Selection::Group { group_id } = &mut snapshot.selection {
        if is_pruned(group_id) {
            *group_id = None;
        }
    }
}

/// Remove deleted line ids from the item selection
pub(crate) fn deselect(snapshot: &mut OrderSnapshot, item_ids: &[String]) {
    if let Selection::Items { selected } = &mut snapshot.selection {
        selected.retain(|id| !item_ids.contains(id));
    }
}
