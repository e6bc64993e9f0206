//! CombineSelectedItems command handler
//!
//! Replaces the selected lines with one combo appended at the end of the
//! target course. The target is the active course, or the course of the
//! first selected line when browsing.
//!
//! Rejected when:
//! - fewer than two lines are selected
//! - the selection spans more than one course
//! - a selected line was already sent

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderItem};
use shared::util::new_instance_id;

/// CombineSelectedItems action
#[derive(Debug, Clone)]
pub struct CombineSelectedItemsAction;

impl CommandHandler for CombineSelectedItemsAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.snapshot();
        let selected = snapshot.selection.selected_items();

        if selected.len() < 2 {
            return Err(OrderError::InsufficientSelection(format!(
                "combine needs at least 2 items, {} selected",
                selected.len()
            )));
        }

        let target = match snapshot.active_group() {
            Some(group) => group,
            None => {
                let first = &selected[0];
                snapshot
                    .find_item(first)
                    .map(|(group, _)| group)
                    .ok_or_else(|| OrderError::ItemNotFound(first.clone()))?
            }
        };

        let mut sub_items: Vec<OrderItem> = Vec::with_capacity(selected.len());
        for item_id in selected {
            let item = match target.item(item_id) {
                Some(item) => item,
                None if snapshot.find_item(item_id).is_some() => {
                    return Err(OrderError::CrossGroupSelection);
                }
                None => return Err(OrderError::ItemNotFound(item_id.clone())),
            };
            if item.is_sent {
                return Err(OrderError::ItemAlreadySent(item_id.clone()));
            }
            sub_items.push(item.clone());
        }

        let is_fired = ctx.can_edit_existing(&target.id);
        let combo = OrderItem::combo(new_instance_id(), sub_items, is_fired);

        tracing::debug!(
            group_id = %target.id,
            combo_id = %combo.id,
            price = combo.price,
            "Combining selected items"
        );

        let event = ctx.event(
            metadata,
            EventPayload::ItemsCombined {
                group_id: target.id.clone(),
                item_ids: selected.to_vec(),
                combo,
            },
        );
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::{group, held, line, run, selecting, snapshot};
    use shared::order::OrderSnapshot;

    fn order() -> OrderSnapshot {
        snapshot(vec![
            group("appetizer", vec![line("x", "app_1", 45000, 1)]),
            group(
                "main",
                vec![
                    line("a", "main_1", 125000, 2),
                    line("b", "main_2", 180000, 1),
                    held("c", "main_3", 95000),
                ],
            ),
        ])
    }

    #[test]
    fn test_combine_builds_priced_combo() {
        let mut snapshot = order();
        snapshot.active_group_id = Some("main".to_string());
        selecting(&mut snapshot, &["b", "a"]);

        let events = run(&CombineSelectedItemsAction, &snapshot).unwrap();
        match &events[0].payload {
            EventPayload::ItemsCombined {
                group_id,
                item_ids,
                combo,
            } => {
                assert_eq!(group_id, "main");
                assert_eq!(item_ids, &["b".to_string(), "a".to_string()]);
                assert_eq!(combo.price, 180000 + 125000 * 2);
                assert_eq!(combo.qty, 1);
                // Sub items keep selection order
                assert_eq!(combo.sub_items()[0].id, "b");
                // main is locked behind the unfulfilled appetizer
                assert!(!combo.is_fired);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_target_falls_back_to_first_selected_group() {
        let mut snapshot = order();
        selecting(&mut snapshot, &["a", "b"]);
        let events = run(&CombineSelectedItemsAction, &snapshot).unwrap();
        assert!(matches!(
            &events[0].payload,
            EventPayload::ItemsCombined { group_id, .. } if group_id == "main"
        ));
    }

    #[test]
    fn test_single_selection_rejected() {
        let mut snapshot = order();
        selecting(&mut snapshot, &["a"]);
        assert!(matches!(
            run(&CombineSelectedItemsAction, &snapshot).unwrap_err(),
            OrderError::InsufficientSelection(_)
        ));
    }

    #[test]
    fn test_cross_group_selection_rejected() {
        let mut snapshot = order();
        selecting(&mut snapshot, &["a", "x"]);
        assert_eq!(
            run(&CombineSelectedItemsAction, &snapshot).unwrap_err(),
            OrderError::CrossGroupSelection
        );
    }

    #[test]
    fn test_sent_line_cannot_be_combined() {
        let mut snapshot = order();
        selecting(&mut snapshot, &["a", "c"]);
        assert_eq!(
            run(&CombineSelectedItemsAction, &snapshot).unwrap_err(),
            OrderError::ItemAlreadySent("c".to_string())
        );
    }
}
