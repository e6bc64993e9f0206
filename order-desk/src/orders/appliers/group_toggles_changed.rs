//! GroupTogglesChanged applier

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot, Selection};

/// GroupTogglesChanged applier
pub struct GroupTogglesChangedApplier;

impl EventApplier for GroupTogglesChangedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::GroupTogglesChanged {
            group_id,
            distributed,
        } = &event.payload
        {
            if let Some(group) = snapshot.group_mut(group_id) {
                group.has_distributed_toggles = *distributed;
            }
            if snapshot.selection.is_group_mode() {
                snapshot.selection = Selection::None;
            }
            stamp(snapshot, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::testing::{event, group, snapshot};

    #[test]
    fn test_toggles_exit_group_mode() {
        let mut snapshot = snapshot(vec![group("main", vec![])]);
        snapshot.selection = Selection::Group {
            group_id: Some("main".to_string()),
        };

        let changed = event(
            1,
            EventPayload::GroupTogglesChanged {
                group_id: "main".to_string(),
                distributed: true,
            },
        );
        GroupTogglesChangedApplier.apply(&mut snapshot, &changed);

        assert!(snapshot.groups[0].has_distributed_toggles);
        assert_eq!(snapshot.selection, Selection::None);
    }
}
