//! ClearScrollTarget / SetFireSuccess command handlers
//!
//! Acknowledgements from the view layer for one-shot signals.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// ClearScrollTarget action
#[derive(Debug, Clone)]
pub struct ClearScrollTargetAction;

impl CommandHandler for ClearScrollTargetAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        if ctx.snapshot().scroll_target.is_none() {
            return Ok(vec![]);
        }
        Ok(vec![ctx.event(metadata, EventPayload::ScrollTargetCleared {})])
    }
}

/// SetFireSuccess action
#[derive(Debug, Clone)]
pub struct SetFireSuccessAction {
    pub value: bool,
}

impl CommandHandler for SetFireSuccessAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        if ctx.snapshot().fire_success == self.value {
            return Ok(vec![]);
        }
        let event = ctx.event(
            metadata,
            EventPayload::FireSuccessChanged { value: self.value },
        );
        Ok(vec![event])
    }
}
