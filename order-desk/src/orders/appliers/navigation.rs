//! GroupSelected / SelectionErrorChanged appliers

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

/// GroupSelected applier
pub struct GroupSelectedApplier;

impl EventApplier for GroupSelectedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::GroupSelected { group_id } = &event.payload {
            if group_id.is_some() {
                snapshot.show_selection_error = false;
            }
            snapshot.active_group_id = group_id.clone();
            stamp(snapshot, event);
        }
    }
}

/// SelectionErrorChanged applier
pub struct SelectionErrorChangedApplier;

impl EventApplier for SelectionErrorChangedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::SelectionErrorChanged { visible } = &event.payload {
            snapshot.show_selection_error = *visible;
            stamp(snapshot, event);
        }
    }
}
