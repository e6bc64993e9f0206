//! ItemAdded / ItemQuantityIncremented appliers
//!
//! Both make the target course active and flag it for scroll-into-view.

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderGroup, OrderSnapshot};

/// ItemAdded applier
pub struct ItemAddedApplier;

impl EventApplier for ItemAddedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemAdded {
            group_id,
            group_name,
            item,
            ..
        } = &event.payload
        {
            if snapshot.group(group_id).is_none() {
                snapshot
                    .groups
                    .push(OrderGroup::new(group_id.clone(), group_name.clone()));
            }
            if let Some(group) = snapshot.group_mut(group_id) {
                group.items.push(item.clone());
            }
            focus(snapshot, group_id);
            stamp(snapshot, event);
        }
    }
}

/// ItemQuantityIncremented applier
pub struct ItemQuantityIncrementedApplier;

impl EventApplier for ItemQuantityIncrementedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemQuantityIncremented {
            group_id,
            item_id,
            qty,
        } = &event.payload
        {
            if let Some(item) = snapshot
                .group_mut(group_id)
                .and_then(|g| g.item_mut(item_id))
            {
                item.qty = *qty;
            }
            focus(snapshot, group_id);
            stamp(snapshot, event);
        }
    }
}

fn focus(snapshot: &mut OrderSnapshot, group_id: &str) {
    snapshot.active_group_id = Some(group_id.to_string());
    snapshot.scroll_target = Some(group_id.to_string());
    snapshot.show_selection_error = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::{event, group, line, snapshot};

    #[test]
    fn test_item_added_creates_group_in_order() {
        let mut snapshot = snapshot(vec![group("appetizer", vec![line("a", "app_1", 45000, 1)])]);
        let added = event(
            1,
            EventPayload::ItemAdded {
                group_id: "main".to_string(),
                group_name: "Main Course".to_string(),
                group_created: true,
                item: line("b", "main_1", 125000, 1),
            },
        );
        ItemAddedApplier.apply(&mut snapshot, &added);

        assert_eq!(snapshot.groups.len(), 2);
        assert_eq!(snapshot.groups[1].name, "Main Course");
        assert_eq!(snapshot.groups[1].items[0].id, "b");
        assert_eq!(snapshot.active_group_id.as_deref(), Some("main"));
        assert_eq!(snapshot.scroll_target.as_deref(), Some("main"));
        assert_eq!(snapshot.subtotal(), 45000 + 125000);
    }

    #[test]
    fn test_quantity_increment() {
        let mut snapshot = snapshot(vec![group("main", vec![line("a", "main_1", 125000, 1)])]);
        let bump = event(
            2,
            EventPayload::ItemQuantityIncremented {
                group_id: "main".to_string(),
                item_id: "a".to_string(),
                qty: 2,
            },
        );
        ItemQuantityIncrementedApplier.apply(&mut snapshot, &bump);

        assert_eq!(snapshot.groups[0].items.len(), 1);
        assert_eq!(snapshot.groups[0].items[0].qty, 2);
        assert_eq!(snapshot.last_sequence, 2);
        assert!(snapshot.verify_checksum());
    }
}
