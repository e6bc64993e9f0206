//! ScrollTargetCleared / FireSuccessChanged appliers

use super::stamp;
use crate::orders::traits::EventApplier;
use shared::order::{EventPayload, OrderEvent, OrderSnapshot};

/// ScrollTargetCleared applier
pub struct ScrollTargetClearedApplier;

impl EventApplier for ScrollTargetClearedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::ScrollTargetCleared {} = &event.payload {
            snapshot.scroll_target = None;
            stamp(snapshot, event);
        }
    }
}

/// FireSuccessChanged applier
pub struct FireSuccessChangedApplier;

impl EventApplier for FireSuccessChangedApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent) {
        if let EventPayload::FireSuccessChanged { value } = &event.payload {
            snapshot.fire_success = *value;
            stamp(snapshot, event);
        }
    }
}
