//! ToggleItemStatus command handler
//!
//! Flips a line between fire and hold and makes its course active. Callers
//! disable the toggle for fulfilled lines; a toggle that reaches one anyway
//! is logged and applied.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// ToggleItemStatus action
#[derive(Debug, Clone)]
pub struct ToggleItemStatusAction {
    pub item_id: String,
}

impl CommandHandler for ToggleItemStatusAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let (group, item) = ctx
            .snapshot()
            .find_item(&self.item_id)
            .ok_or_else(|| OrderError::ItemNotFound(self.item_id.clone()))?;

        if item.has_been_fired {
            tracing::warn!(
                item_id = %item.id,
                group_id = %group.id,
                "Toggling intent of a fulfilled item"
            );
        }

        let event = ctx.event(
            metadata,
            EventPayload::ItemStatusToggled {
                group_id: group.id.clone(),
                item_id: item.id.clone(),
                is_fired: !item.is_fired,
            },
        );
        Ok(vec![event])
    }
}
