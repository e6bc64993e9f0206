//! SeparateGroupFireHold / CombineGroupFireHold command handlers
//!
//! Switches a course between per-line fire/hold controls and a single
//! header control. Presentation only; firing semantics are unaffected.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// SeparateGroupFireHold (distributed = true) / CombineGroupFireHold (false)
#[derive(Debug, Clone)]
pub struct SetGroupTogglesAction {
    pub group_id: String,
    pub distributed: bool,
}

impl CommandHandler for SetGroupTogglesAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        let group = ctx.require_group(&self.group_id)?;

        // Combo lines only expose the group-level control
        if self.distributed && group.has_combos() {
            return Err(OrderError::InvalidOperation(format!(
                "group {} contains combos",
                self.group_id
            )));
        }

        let event = ctx.event(
            metadata,
            EventPayload::GroupTogglesChanged {
                group_id: self.group_id.clone(),
                distributed: self.distributed,
            },
        );
        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::{group, line, run, snapshot};
    use shared::order::OrderItem;

    #[test]
    fn test_distribute_toggles() {
        let snapshot = snapshot(vec![group("main", vec![line("a", "p", 10, 1)])]);
        let action = SetGroupTogglesAction {
            group_id: "main".to_string(),
            distributed: true,
        };
        let events = run(&action, &snapshot).unwrap();
        assert!(matches!(
            events[0].payload,
            EventPayload::GroupTogglesChanged {
                distributed: true,
                ..
            }
        ));
    }

    #[test]
    fn test_groups_with_combos_stay_collective() {
        let combo = OrderItem::combo(
            "c".to_string(),
            vec![line("a", "p1", 10, 1), line("b", "p2", 10, 1)],
            true,
        );
        let snapshot = snapshot(vec![group("main", vec![combo])]);
        let separate = SetGroupTogglesAction {
            group_id: "main".to_string(),
            distributed: true,
        };
        assert!(matches!(
            run(&separate, &snapshot).unwrap_err(),
            OrderError::InvalidOperation(_)
        ));

        let combine = SetGroupTogglesAction {
            group_id: "main".to_string(),
            distributed: false,
        };
        assert_eq!(run(&combine, &snapshot).unwrap().len(), 1);
    }
}
