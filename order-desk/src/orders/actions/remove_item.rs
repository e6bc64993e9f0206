//! RemoveItem command handler
//!
//! Deletes an unsent line from a course. Sent lines are immutable to
//! deletion. A course left empty is pruned by the applier (dynamic layout).

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// RemoveItem action
#[derive(Debug, Clone)]
pub struct RemoveItemAction {
    pub group_id: String,
    pub item_id: String,
}

impl CommandHandler for RemoveItemAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let group = ctx.require_group(&self.group_id)?;
        let item = group
            .item(&self.item_id)
            .ok_or_else(|| OrderError::ItemNotFound(self.item_id.clone()))?;

        if item.is_sent {
            return Err(OrderError::ItemAlreadySent(self.item_id.clone()));
        }

        let event = ctx.event(
            metadata,
            EventPayload::ItemRemoved {
                group_id: self.group_id.clone(),
                item_id: self.item_id.clone(),
                item_name: item.name.clone(),
            },
        );
        Ok(vec![event])
    }
}
