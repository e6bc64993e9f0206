//! ItemStatusToggled / GroupFireStatusSet appliers
//!
//! Intent changes never touch `is_sent` or `has_been_fired`.

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

/// ItemStatusToggled applier
pub struct ItemStatusToggledApplier;

impl EventApplier for ItemStatusToggledApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemStatusToggled {
            group_id,
            item_id,
            is_fired,
        } = &event.payload
        {
            if let Some(item) = snapshot
                .group_mut(group_id)
                .and_then(|g| g.item_mut(item_id))
            {
                item.is_fired = *is_fired;
            }
            snapshot.active_group_id = Some(group_id.clone());
            stamp(snapshot, event);
        }
    }
}

/// GroupFireStatusSet applier
pub struct GroupFireStatusSetApplier;

impl EventApplier for GroupFireStatusSetApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::GroupFireStatusSet {
            group_id,
            is_fired,
            item_ids,
        } = &event.payload
        {
            if let Some(group) = snapshot.group_mut(group_id) {
                for item in group.items.iter_mut().filter(|i| item_ids.contains(&i.id)) {
                    item.is_fired = *is_fired;
                }
            }
            snapshot.active_group_id = Some(group_id.clone());
            stamp(snapshot, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::{event, fulfilled, group, held, line, snapshot};

    #[test]
    fn test_toggle_activates_owning_group() {
        let mut snapshot = snapshot(vec![group("main", vec![held("a", "p1", 10)])]);
        let toggled = event(
            1,
            EventPayload::ItemStatusToggled {
                group_id: "main".to_string(),
                item_id: "a".to_string(),
                is_fired: true,
            },
        );
        ItemStatusToggledApplier.apply(&mut snapshot, &toggled);

        let item = &snapshot.groups[0].items[0];
        assert!(item.is_fired);
        assert!(item.is_sent);
        assert!(!item.has_been_fired);
        assert_eq!(snapshot.active_group_id.as_deref(), Some("main"));
    }

    #[test]
    fn test_group_status_leaves_fulfilled_lines() {
        let mut snapshot = snapshot(vec![group(
            "main",
            vec![line("a", "p1", 10, 1), fulfilled("b", "p2", 10)],
        )]);
        let set = event(
            1,
            EventPayload::GroupFireStatusSet {
                group_id: "main".to_string(),
                is_fired: false,
                item_ids: vec!["a".to_string()],
            },
        );
        GroupFireStatusSetApplier.apply(&mut snapshot, &set);

        assert!(!snapshot.groups[0].items[0].is_fired);
        assert!(snapshot.groups[0].items[1].is_fired);
    }
}
