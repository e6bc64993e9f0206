//! DiscardChanges command handler
//!
//! Abandons the draft: every unsent line in every course is dropped,
//! courses left empty are pruned and the active course is cleared.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// DiscardChanges action
#[derive(Debug, Clone)]
pub struct DiscardChangesAction;

impl CommandHandler for DiscardChangesAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let item_ids: Vec<String> = ctx
            .snapshot()
            .groups
            .iter()
            .flat_map(|g| g.items.iter())
            .filter(|i| !i.is_sent)
            .map(|i| i.id.clone())
            .collect();

        tracing::debug!(count = item_ids.len(), "Discarding unsent items");

        let event = ctx.event(metadata, EventPayload::ChangesDiscarded { item_ids });
        Ok(vec![event])
    }
}
