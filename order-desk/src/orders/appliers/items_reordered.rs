//! ItemsReordered applier

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

/// ItemsReordered applier
pub struct ItemsReorderedApplier;

impl EventApplier for ItemsReorderedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ItemsReordered {
            group_id,
            item_id,
            to_index,
            ..
        } = &event.payload
        {
            if let Some(group) = snapshot.group_mut(group_id) {
                if let Some(from) = group.position(item_id) {
                    let item = group.items.remove(from);
                    let to = (*to_index).min(group.items.len());
                    group.items.insert(to, item);
                }
            }
            stamp(snapshot, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::{event, group, line, snapshot};

    fn ids(snapshot: &OrderSnapshot) -> Vec<&str> {
        snapshot.groups[0]
            .items
            .iter()
            .map(|i| i.id.as_str())
            .collect()
    }

    fn reordered(item_id: &str, from_index: usize, to_index: usize) -> OrderEvent {
        event(
            1,
            EventPayload::ItemsReordered {
                group_id: "main".to_string(),
                item_id: item_id.to_string(),
                from_index,
                to_index,
            },
        )
    }

    #[test]
    fn test_move_forward_and_back() {
        let mut snapshot = snapshot(vec![group(
            "main",
            vec![
                line("a", "p1", 10, 1),
                line("b", "p2", 10, 1),
                line("c", "p3", 10, 1),
            ],
        )]);

        ItemsReorderedApplier.apply(&mut snapshot, &reordered("a", 0, 2));
        assert_eq!(ids(&snapshot), ["b", "c", "a"]);

        ItemsReorderedApplier.apply(&mut snapshot, &reordered("a", 2, 0));
        assert_eq!(ids(&snapshot), ["a", "b", "c"]);
    }
}
