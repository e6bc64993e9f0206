//! SelectGroup / SetSelectionError command handlers
//!
//! Navigation between the browse view and a course. Selecting a group
//! clears the "select a group first" error.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// SelectGroup action
#[derive(Debug, Clone)]
pub struct SelectGroupAction {
    pub group_id: Option<String>,
}

impl CommandHandler for SelectGroupAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.snapshot();

        if let Some(group_id) = &self.group_id {
            ctx.require_group(group_id)?;
        }

        let unchanged = snapshot.active_group_id == self.group_id
            && (self.group_id.is_none() || !snapshot.show_selection_error);
        if unchanged {
            return Ok(vec![]);
        }

        let event = ctx.event(
            metadata,
            EventPayload::GroupSelected {
                group_id: self.group_id.clone(),
            },
        );
        Ok(vec![event])
    }
}

/// SetSelectionError action
#[derive(Debug, Clone)]
pub struct SetSelectionErrorAction {
    pub visible: bool,
}

impl CommandHandler for SetSelectionErrorAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        if ctx.snapshot().show_selection_error == self.visible {
            return Ok(vec![]);
        }
        let event = ctx.event(
            metadata,
            EventPayload::SelectionErrorChanged {
                visible: self.visible,
            },
        );
        Ok(vec![event])
    }
}
