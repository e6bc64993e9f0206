//! FireToKitchen command handler
//!
//! Global commit across every course. Settled lines (sent on hold, or
//! fulfilled) are skipped; every other line becomes sent, and fulfilled if
//! its intent was fire at this moment.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// FireToKitchen action
#[derive(Debug, Clone)]
pub struct FireToKitchenAction;

impl CommandHandler for FireToKitchenAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let mut sent_item_ids = Vec::new();
        let mut fired_item_ids = Vec::new();

        for item in ctx.snapshot().groups.iter().flat_map(|g| g.items.iter()) {
            if item.is_settled() {
                continue;
            }
            sent_item_ids.push(item.id.clone());
            if item.is_fired {
                fired_item_ids.push(item.id.clone());
            }
        }

        tracing::info!(
            sent = sent_item_ids.len(),
            fired = fired_item_ids.len(),
            "Firing order to kitchen"
        );

        let event = ctx.event(
            metadata,
            EventPayload::OrderFired {
                sent_item_ids,
                fired_item_ids,
            },
        );
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::{fulfilled, group, held, line, run, snapshot};

    #[test]
    fn test_settled_lines_skipped() {
        let mut hold_draft = line("b", "p2", 10, 1);
        hold_draft.is_fired = false;
        let mut queued_fire = held("d", "p4", 10);
        queued_fire.is_fired = true;

        let snapshot = snapshot(vec![
            group("appetizer", vec![line("a", "p1", 10, 1), hold_draft]),
            group(
                "main",
                vec![held("c", "p3", 10), queued_fire, fulfilled("e", "p5", 10)],
            ),
        ]);

        let events = run(&FireToKitchenAction, &snapshot).unwrap();
        match &events[0].payload {
            EventPayload::OrderFired {
                sent_item_ids,
                fired_item_ids,
            } => {
                assert_eq!(
                    sent_item_ids,
                    &["a".to_string(), "b".to_string(), "d".to_string()]
                );
                assert_eq!(fired_item_ids, &["a".to_string(), "d".to_string()]);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_nothing_to_fire_still_signals() {
        let snapshot = snapshot(vec![group("main", vec![fulfilled("a", "p", 10)])]);
        let events = run(&FireToKitchenAction, &snapshot).unwrap();
        match &events[0].payload {
            EventPayload::OrderFired { sent_item_ids, .. } => assert!(sent_item_ids.is_empty()),
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}
