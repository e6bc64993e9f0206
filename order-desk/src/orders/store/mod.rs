//! OrderStore - the single writer over the order-taking state
//!
//! # Command Flow
//!
//! ```text
//! execute(cmd)
//!     ├─ 1. Idempotency check (command_id)
//!     ├─ 2. Create CommandContext over the current snapshot
//!     ├─ 3. Convert command to action and execute
//!     ├─ 4. Apply events to the snapshot via EventApplier
//!     ├─ 5. Append events to the log, mark command processed
//!     ├─ 6. Broadcast event(s)
//!     └─ 7. Return response
//! ```
//!
//! A rejected command produces no events, so the snapshot, sequence and
//! checksum are untouched.

mod error;
pub use error::*;

use std::collections::HashSet;

use super::actions::CommandAction;
use super::appliers::EventAction;
use super::layout::CourseLayout;
use super::policy::CourseGate;
use super::traits::{CommandContext, CommandHandler, CommandMetadata, EventApplier};
use crate::core::{DEFAULT_EVENT_CHANNEL_CAPACITY, StoreConfig};
use shared::order::{
    CommandResponse, LongPressTarget, OrderCommand, OrderCommandPayload, OrderEvent, OrderGroup,
    OrderItem, OrderSnapshot, ProductInput,
};
use tokio::sync::broadcast;

/// Result of asking to leave the active course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Unsent lines exist; confirm, then call `discard_changes`
    NeedsConfirmation,
    /// Active course cleared
    Closed,
}

/// Actions available from the selection bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionActions {
    /// Every selected line of the active course is an unsent combo
    pub can_separate: bool,
    pub has_sent_items: bool,
    pub all_items_sent: bool,
    /// Group mode with a course whose fire/hold layout may be switched
    pub can_toggle_group_layout: bool,
}

/// In-memory order store
pub struct OrderStore {
    snapshot: OrderSnapshot,
    /// Groups present before the first event (replay base)
    seed_groups: Vec<OrderGroup>,
    layout: CourseLayout,
    gate: Box<dyn CourseGate>,
    events: Vec<OrderEvent>,
    processed_commands: HashSet<String>,
    event_tx: broadcast::Sender<OrderEvent>,
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore")
            .field("layout", &self.layout)
            .field("gate", &self.gate.name())
            .field("last_sequence", &self.snapshot.last_sequence)
            .field("event_tx", &"<broadcast::Sender>")
            .finish()
    }
}

impl OrderStore {
    /// Create a store from configuration
    pub fn new(config: &StoreConfig) -> Self {
        Self::build(
            config.layout,
            config.gate.build(),
            config.event_channel_capacity,
        )
    }

    /// Create a store with an explicit course policy
    pub fn with_policy(layout: CourseLayout, gate: Box<dyn CourseGate>) -> Self {
        Self::build(layout, gate, DEFAULT_EVENT_CHANNEL_CAPACITY)
    }

    fn build(layout: CourseLayout, gate: Box<dyn CourseGate>, capacity: usize) -> Self {
        let seed_groups = layout.seed_groups();
        let (event_tx, _) = broadcast::channel(capacity.max(1));
        tracing::info!(
            layout = ?layout,
            gate = gate.name(),
            seeded = seed_groups.len(),
            "OrderStore created"
        );
        Self {
            snapshot: OrderSnapshot::with_groups(seed_groups.clone()),
            seed_groups,
            layout,
            gate,
            events: Vec::new(),
            processed_commands: HashSet::new(),
            event_tx,
        }
    }

    /// Execute a command and return the response
    pub fn execute(&mut self, cmd: OrderCommand) -> CommandResponse {
        tracing::debug!(command_id = %cmd.command_id, payload = ?cmd.payload, "Processing command");

        // 1. Idempotency check
        if self.processed_commands.contains(&cmd.command_id) {
            tracing::warn!(command_id = %cmd.command_id, "Duplicate command");
            return CommandResponse::duplicate(cmd.command_id);
        }

        // 2-3. Validate and generate events against the current snapshot
        let metadata = CommandMetadata {
            command_id: cmd.command_id.clone(),
            timestamp: cmd.timestamp,
        };
        let action: CommandAction = (&cmd).into();
        let result = {
            let mut ctx = CommandContext::new(
                &self.snapshot,
                self.gate.as_ref(),
                self.layout,
                self.snapshot.last_sequence + 1,
            );
            action.execute(&mut ctx, &metadata)
        };

        let events = match result {
            Ok(events) => events,
            Err(err) => {
                tracing::debug!(command_id = %cmd.command_id, error = %err, "Command rejected");
                return CommandResponse::error(cmd.command_id, err.into());
            }
        };

        // 4-5. Apply and record
        for event in &events {
            let applier: EventAction = event.into();
            applier.apply(&mut self.snapshot, event);
        }
        self.events.extend(events.iter().cloned());
        self.processed_commands.insert(cmd.command_id.clone());

        // 6. Broadcast
        if self.event_tx.receiver_count() > 0 {
            for event in &events {
                if self.event_tx.send(event.clone()).is_err() {
                    tracing::warn!("Event broadcast failed: no active receivers");
                    break;
                }
            }
        }

        tracing::debug!(
            command_id = %cmd.command_id,
            event_count = events.len(),
            sequence = self.snapshot.last_sequence,
            "Command processed"
        );

        CommandResponse::success(cmd.command_id, events.last().map(|e| e.sequence))
    }

    fn dispatch(&mut self, payload: OrderCommandPayload) -> CommandResponse {
        self.execute(OrderCommand::new(payload))
    }

    // ========== Navigation ==========

    pub fn select_group(&mut self, group_id: Option<&str>) -> CommandResponse {
        self.dispatch(OrderCommandPayload::SelectGroup {
            group_id: group_id.map(str::to_string),
        })
    }

    pub fn set_show_selection_error(&mut self, visible: bool) -> CommandResponse {
        self.dispatch(OrderCommandPayload::SetSelectionError { visible })
    }

    /// Leave the active course
    ///
    /// With unsent lines anywhere in the order nothing changes and the
    /// caller must confirm first.
    pub fn close_active_group(&mut self) -> CloseOutcome {
        if self.snapshot.has_unsaved_changes() {
            return CloseOutcome::NeedsConfirmation;
        }
        self.select_group(None);
        CloseOutcome::Closed
    }

    // ========== Items ==========

    pub fn add_item(&mut self, product: ProductInput, category: &str) -> CommandResponse {
        self.dispatch(OrderCommandPayload::AddItem {
            product,
            category: category.to_string(),
        })
    }

    pub fn add_item_to_active_group(&mut self, product: ProductInput) -> CommandResponse {
        self.dispatch(OrderCommandPayload::AddItemToActiveGroup { product })
    }

    pub fn remove_item(&mut self, group_id: &str, item_id: &str) -> CommandResponse {
        self.dispatch(OrderCommandPayload::RemoveItem {
            group_id: group_id.to_string(),
            item_id: item_id.to_string(),
        })
    }

    pub fn reorder_items(
        &mut self,
        group_id: &str,
        active_item_id: &str,
        over_item_id: &str,
    ) -> CommandResponse {
        self.dispatch(OrderCommandPayload::ReorderItems {
            group_id: group_id.to_string(),
            active_item_id: active_item_id.to_string(),
            over_item_id: over_item_id.to_string(),
        })
    }

    // ========== Fire / Hold ==========

    pub fn toggle_item_status(&mut self, item_id: &str) -> CommandResponse {
        self.dispatch(OrderCommandPayload::ToggleItemStatus {
            item_id: item_id.to_string(),
        })
    }

    pub fn set_group_fire_status(&mut self, group_id: &str, is_fired: bool) -> CommandResponse {
        self.dispatch(OrderCommandPayload::SetGroupFireStatus {
            group_id: group_id.to_string(),
            is_fired,
        })
    }

    pub fn discard_changes(&mut self) -> CommandResponse {
        self.dispatch(OrderCommandPayload::DiscardChanges)
    }

    pub fn fire_to_kitchen(&mut self) -> CommandResponse {
        self.dispatch(OrderCommandPayload::FireToKitchen)
    }

    // ========== Selection ==========

    pub fn toggle_selection_mode(&mut self, active: bool) -> CommandResponse {
        self.dispatch(OrderCommandPayload::ToggleSelectionMode { active })
    }

    pub fn toggle_item_selection(&mut self, item_id: &str) -> CommandResponse {
        self.dispatch(OrderCommandPayload::ToggleItemSelection {
            item_id: item_id.to_string(),
        })
    }

    pub fn toggle_group_selection_mode(
        &mut self,
        active: bool,
        group_id: Option<&str>,
    ) -> CommandResponse {
        self.dispatch(OrderCommandPayload::ToggleGroupSelectionMode {
            active,
            group_id: group_id.map(str::to_string),
        })
    }

    pub fn long_press(&mut self, target: LongPressTarget) -> CommandResponse {
        self.dispatch(OrderCommandPayload::LongPress { target })
    }

    pub fn remove_selected_items(&mut self) -> CommandResponse {
        self.dispatch(OrderCommandPayload::RemoveSelectedItems)
    }

    pub fn combine_selected_items(&mut self) -> CommandResponse {
        self.dispatch(OrderCommandPayload::CombineSelectedItems)
    }

    pub fn separate_selected_items(&mut self) -> CommandResponse {
        self.dispatch(OrderCommandPayload::SeparateSelectedItems)
    }

    pub fn separate_group_fire_hold(&mut self, group_id: &str) -> CommandResponse {
        self.dispatch(OrderCommandPayload::SeparateGroupFireHold {
            group_id: group_id.to_string(),
        })
    }

    pub fn combine_group_fire_hold(&mut self, group_id: &str) -> CommandResponse {
        self.dispatch(OrderCommandPayload::CombineGroupFireHold {
            group_id: group_id.to_string(),
        })
    }

    // ========== Notices ==========

    pub fn clear_scroll_target(&mut self) -> CommandResponse {
        self.dispatch(OrderCommandPayload::ClearScrollTarget)
    }

    pub fn set_fire_success(&mut self, value: bool) -> CommandResponse {
        self.dispatch(OrderCommandPayload::SetFireSuccess { value })
    }

    // ========== Queries ==========

    pub fn snapshot(&self) -> &OrderSnapshot {
        &self.snapshot
    }

    pub fn layout(&self) -> CourseLayout {
        self.layout
    }

    pub fn groups(&self) -> &[OrderGroup] {
        &self.snapshot.groups
    }

    pub fn group(&self, group_id: &str) -> Option<&OrderGroup> {
        self.snapshot.group(group_id)
    }

    pub fn active_group(&self) -> Option<&OrderGroup> {
        self.snapshot.active_group()
    }

    pub fn find_item(&self, item_id: &str) -> Option<&OrderItem> {
        self.snapshot.find_item(item_id).map(|(_, item)| item)
    }

    pub fn all_items_subtotal(&self) -> i64 {
        self.snapshot.subtotal()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.snapshot.has_unsaved_changes()
    }

    /// Whether the active course holds a combo
    pub fn has_any_combos(&self) -> bool {
        self.active_group().is_some_and(OrderGroup::has_combos)
    }

    /// Course gate decision, recomputed on every call
    pub fn can_edit_group(&self, group_id: &str) -> bool {
        self.gate.can_edit(&self.snapshot.groups, group_id)
    }

    pub fn is_selection_mode(&self) -> bool {
        self.snapshot.selection.is_item_mode()
    }

    pub fn selected_item_ids(&self) -> &[String] {
        self.snapshot.selection.selected_items()
    }

    pub fn is_group_selection_mode(&self) -> bool {
        self.snapshot.selection.is_group_mode()
    }

    pub fn selected_group_id(&self) -> Option<&str> {
        self.snapshot.selection.selected_group()
    }

    pub fn selection_actions(&self) -> SelectionActions {
        let selection = &self.snapshot.selection;

        if let Some(group_id) = selection.selected_group() {
            let can_toggle_group_layout = self
                .group(group_id)
                .is_some_and(|g| !g.has_combos() || g.has_distributed_toggles);
            return SelectionActions {
                can_toggle_group_layout,
                ..SelectionActions::default()
            };
        }

        let selected: Vec<&OrderItem> = self
            .active_group()
            .map(|g| {
                g.items
                    .iter()
                    .filter(|i| selection.is_selected(&i.id))
                    .collect()
            })
            .unwrap_or_default();

        let has_sent_items = selected.iter().any(|i| i.is_sent);
        SelectionActions {
            can_separate: !selected.is_empty()
                && !has_sent_items
                && selected.iter().all(|i| i.is_combo()),
            has_sent_items,
            all_items_sent: !selected.is_empty() && selected.iter().all(|i| i.is_sent),
            can_toggle_group_layout: false,
        }
    }

    pub fn fire_success(&self) -> bool {
        self.snapshot.fire_success
    }

    pub fn scroll_target(&self) -> Option<&str> {
        self.snapshot.scroll_target.as_deref()
    }

    pub fn show_selection_error(&self) -> bool {
        self.snapshot.show_selection_error
    }

    // ========== Event Log ==========

    pub fn current_sequence(&self) -> u64 {
        self.snapshot.last_sequence
    }

    /// Events with a sequence greater than `since_sequence`
    pub fn events_since(&self, since_sequence: u64) -> Vec<OrderEvent> {
        self.events
            .iter()
            .filter(|e| e.sequence > since_sequence)
            .cloned()
            .collect()
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    /// Rebuild the snapshot from the event log (for verification)
    ///
    /// Uses EventApplier to apply each event to the seeded groups.
    pub fn rebuild_snapshot(&self) -> StoreResult<OrderSnapshot> {
        let mut snapshot = OrderSnapshot::with_groups(self.seed_groups.clone());
        for event in &self.events {
            let applier: EventAction = event.into();
            applier.apply(&mut snapshot, event);
        }

        if !snapshot.verify_checksum() || snapshot.state_checksum != self.snapshot.state_checksum {
            return Err(StoreError::ChecksumMismatch {
                expected: self.snapshot.state_checksum.clone(),
                actual: snapshot.state_checksum,
            });
        }
        Ok(snapshot)
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

#[cfg(test)]
mod tests;
