//! Selection-mode command handlers
//!
//! Item selection and group selection are exclusive: entering either one
//! replaces whatever mode was active before.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, LongPressTarget, OrderEvent, Selection};

/// ToggleSelectionMode action (item selection)
#[derive(Debug, Clone)]
pub struct ToggleSelectionModeAction {
    pub active: bool,
}

impl CommandHandler for ToggleSelectionModeAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        if ctx.snapshot().selection.is_item_mode() == self.active {
            return Ok(vec![]);
        }
        let event = ctx.event(
            metadata,
            EventPayload::SelectionModeChanged {
                active: self.active,
            },
        );
        Ok(vec![event])
    }
}

/// ToggleItemSelection action
#[derive(Debug, Clone)]
pub struct ToggleItemSelectionAction {
    pub item_id: String,
}

impl CommandHandler for ToggleItemSelectionAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.snapshot();
        if !snapshot.selection.is_item_mode() {
            return Err(OrderError::InvalidOperation(
                "item selection mode is not active".to_string(),
            ));
        }

        let (_, item) = snapshot
            .find_item(&self.item_id)
            .ok_or_else(|| OrderError::ItemNotFound(self.item_id.clone()))?;

        let selected = !snapshot.selection.is_selected(&item.id);
        if selected && item.has_been_fired {
            return Err(OrderError::InvalidOperation(format!(
                "fulfilled item cannot be selected: {}",
                item.id
            )));
        }

        let event = ctx.event(
            metadata,
            EventPayload::ItemSelectionToggled {
                item_id: self.item_id.clone(),
                selected,
            },
        );
        Ok(vec![event])
    }
}

/// ToggleGroupSelectionMode action
#[derive(Debug, Clone)]
pub struct ToggleGroupSelectionModeAction {
    pub active: bool,
    pub group_id: Option<String>,
}

impl CommandHandler for ToggleGroupSelectionModeAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let selection = &ctx.snapshot().selection;

        let payload = if self.active {
            if let Some(group_id) = &self.group_id {
                ctx.require_group(group_id)?;
            }
            let target = Selection::Group {
                group_id: self.group_id.clone(),
            };
            if *selection == target {
                return Ok(vec![]);
            }
            EventPayload::GroupSelectionModeChanged {
                active: true,
                group_id: self.group_id.clone(),
            }
        } else {
            if !selection.is_group_mode() {
                return Ok(vec![]);
            }
            EventPayload::GroupSelectionModeChanged {
                active: false,
                group_id: None,
            }
        };

        Ok(vec![ctx.event(metadata, payload)])
    }
}

/// LongPress action
///
/// On a line: enters item selection with that line selected. Ignored while
/// any selection mode is active and for fulfilled lines.
/// On a course: enters group selection for that course.
#[derive(Debug, Clone)]
pub struct LongPressAction {
    pub target: LongPressTarget,
}

impl CommandHandler for LongPressAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let snapshot = ctx.snapshot();

        match &self.target {
            LongPressTarget::Item(item_id) => {
                let (_, item) = snapshot
                    .find_item(item_id)
                    .ok_or_else(|| OrderError::ItemNotFound(item_id.clone()))?;

                if snapshot.selection != Selection::None || item.has_been_fired {
                    tracing::debug!(item_id = %item_id, "Long press ignored");
                    return Ok(vec![]);
                }

                let enter = ctx.event(metadata, EventPayload::SelectionModeChanged { active: true });
                let select = ctx.event(
                    metadata,
                    EventPayload::ItemSelectionToggled {
                        item_id: item_id.clone(),
                        selected: true,
                    },
                );
                Ok(vec![enter, select])
            }
            LongPressTarget::Group(group_id) => {
                ctx.require_group(group_id)?;

                if snapshot.selection.is_group_mode() {
                    tracing::debug!(group_id = %group_id, "Long press ignored");
                    return Ok(vec![]);
                }

                let event = ctx.event(
                    metadata,
                    EventPayload::GroupSelectionModeChanged {
                        active: true,
                        group_id: Some(group_id.clone()),
                    },
                );
                Ok(vec![event])
            }
        }
    }
}
