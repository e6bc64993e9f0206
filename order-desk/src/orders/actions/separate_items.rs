//! SeparateSelectedItems command handler
//!
//! Splits the selected combos of the active course back into independent
//! lines. Each former sub item gets a fresh id and inherits the combo's
//! intent. Non-combo and sent selections are ignored; with nothing left to
//! split the command only leaves selection mode.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderItem};
use shared::util::new_instance_id;

/// SeparateSelectedItems action
#[derive(Debug, Clone)]
pub struct SeparateSelectedItemsAction;

impl CommandHandler for SeparateSelectedItemsAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.snapshot();
        let group = snapshot.active_group().ok_or(OrderError::NoActiveGroup)?;

        let combos: Vec<&OrderItem> = snapshot
            .selection
            .selected_items()
            .iter()
            .filter_map(|id| group.item(id))
            .filter(|item| item.is_combo() && !item.is_sent)
            .collect();

        if combos.is_empty() {
            if !snapshot.selection.is_item_mode() {
                return Ok(vec![]);
            }
            tracing::debug!(group_id = %group.id, "No unsent combo selected, leaving selection mode");
            let event = ctx.event(metadata, EventPayload::SelectionModeChanged { active: false });
            return Ok(vec![event]);
        }

        let combo_ids = combos.iter().map(|c| c.id.clone()).collect();
        let items = combos
            .iter()
            .flat_map(|combo| {
                combo.sub_items().iter().map(|sub| OrderItem {
                    id: new_instance_id(),
                    is_fired: combo.is_fired,
                    is_sent: false,
                    has_been_fired: false,
                    ..sub.clone()
                })
            })
            .collect();

        let event = ctx.event(
            metadata,
            EventPayload::ItemsSeparated {
                group_id: group.id.clone(),
                combo_ids,
                items,
            },
        );
        Ok(vec![event])
    }
}
