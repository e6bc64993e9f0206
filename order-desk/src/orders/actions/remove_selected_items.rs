//! RemoveSelectedItems command handler
//!
//! Within the active course, deletes every selected unsent line. Selected
//! sent lines stay where they are. Always leaves item selection mode.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// RemoveSelectedItems action
#[derive(Debug, Clone)]
pub struct RemoveSelectedItemsAction;

impl CommandHandler for RemoveSelectedItemsAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.snapshot();
        let group = snapshot.active_group().ok_or(OrderError::NoActiveGroup)?;

        let item_ids: Vec<String> = group
            .items
            .iter()
            .filter(|i| !i.is_sent && snapshot.selection.is_selected(&i.id))
            .map(|i| i.id.clone())
            .collect();

        let skipped = snapshot
            .selection
            .selected_items()
            .len()
            .saturating_sub(item_ids.len());
        if skipped > 0 {
            tracing::debug!(skipped, group_id = %group.id, "Selected items kept in place");
        }

        let event = ctx.event(
            metadata,
            EventPayload::SelectedItemsRemoved {
                group_id: group.id.clone(),
                item_ids,
            },
        );
        Ok(vec![event])
    }
}
