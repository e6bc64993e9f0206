//! SetGroupFireStatus command handler
//!
//! Group-level fire/hold: writes the intent on every line of the course
//! except fulfilled ones, and makes the course active.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// SetGroupFireStatus action
#[derive(Debug, Clone)]
pub struct SetGroupFireStatusAction {
    pub group_id: String,
    pub is_fired: bool,
}

impl CommandHandler for SetGroupFireStatusAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let group = ctx.require_group(&self.group_id)?;

        let item_ids = group
            .items
            .iter()
            .filter(|i| !i.has_been_fired)
            .map(|i| i.id.clone())
            .collect();

        let event = ctx.event(
            metadata,
            EventPayload::GroupFireStatusSet {
                group_id: self.group_id.clone(),
                is_fired: self.is_fired,
                item_ids,
            },
        );
        Ok(vec![event])
    }
}
