//! ReorderItems command handler
//!
//! Moves a line to the position currently held by another line of the same
//! course (remove-then-insert splice).

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// ReorderItems action
#[derive(Debug, Clone)]
pub struct ReorderItemsAction {
    pub group_id: String,
    pub active_item_id: String,
    pub over_item_id: String,
}

impl CommandHandler for ReorderItemsAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let group = ctx.require_group(&self.group_id)?;
        let from_index = group
            .position(&self.active_item_id)
            .ok_or_else(|| OrderError::ItemNotFound(self.active_item_id.clone()))?;
        let to_index = group
            .position(&self.over_item_id)
            .ok_or_else(|| OrderError::ItemNotFound(self.over_item_id.clone()))?;

        if from_index == to_index {
            return Ok(vec![]);
        }

        let event = ctx.event(
            metadata,
            EventPayload::ItemsReordered {
                group_id: self.group_id.clone(),
                item_id: self.active_item_id.clone(),
                from_index,
                to_index,
            },
        );
        Ok(vec![event])
    }
}
