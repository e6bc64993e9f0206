//! Core traits for the order pipeline
//!
//! - `CommandHandler`: validates a command against the current snapshot and
//!   produces events (never mutates state)
//! - `EventApplier`: pure function applying one event to a snapshot

use enum_dispatch::enum_dispatch;
use thiserror::Error;

// enum_dispatch expands `impl EventApplier for EventAction` next to the trait
#[allow(unused_imports)]
use super::appliers::*;
use super::layout::CourseLayout;
use super::policy::CourseGate;
use shared::models::CourseRef;
use shared::order::{
    CommandError, CommandErrorCode, EventPayload, OrderEvent, OrderGroup, OrderSnapshot,
};

/// Errors raised while validating a command
///
/// A rejected command produces no events, so the snapshot is untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item already sent to kitchen: {0}")]
    ItemAlreadySent(String),

    #[error("No active group selected")]
    NoActiveGroup,

    #[error("Insufficient selection: {0}")]
    InsufficientSelection(String),

    #[error("Selected items span multiple groups")]
    CrossGroupSelection,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<OrderError> for CommandError {
    fn from(err: OrderError) -> Self {
        let code = match &err {
            OrderError::GroupNotFound(_) => CommandErrorCode::GroupNotFound,
            OrderError::ItemNotFound(_) => CommandErrorCode::ItemNotFound,
            OrderError::ItemAlreadySent(_) => CommandErrorCode::ItemAlreadySent,
            OrderError::NoActiveGroup => CommandErrorCode::NoActiveGroup,
            OrderError::InsufficientSelection(_) => CommandErrorCode::InsufficientSelection,
            OrderError::CrossGroupSelection => CommandErrorCode::CrossGroupSelection,
            OrderError::InvalidOperation(_) => CommandErrorCode::InvalidOperation,
        };
        CommandError::new(code, err.to_string())
    }
}

/// Metadata copied from the command envelope into every event
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub timestamp: i64,
}

/// Read-only view handed to command handlers
pub struct CommandContext<'a> {
    snapshot: &'a OrderSnapshot,
    gate: &'a dyn CourseGate,
    layout: CourseLayout,
    next_sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        snapshot: &'a OrderSnapshot,
        gate: &'a dyn CourseGate,
        layout: CourseLayout,
        next_sequence: u64,
    ) -> Self {
        Self {
            snapshot,
            gate,
            layout,
            next_sequence,
        }
    }

    pub fn snapshot(&self) -> &'a OrderSnapshot {
        self.snapshot
    }

    pub fn layout(&self) -> CourseLayout {
        self.layout
    }

    /// Resolve a category label to the group it lands in
    pub fn resolve_course(&self, category: &str) -> CourseRef {
        self.layout.resolve(category)
    }

    /// Look up a group or fail with `GroupNotFound`
    pub fn require_group(&self, group_id: &str) -> Result<&'a OrderGroup, OrderError> {
        self.snapshot
            .group(group_id)
            .ok_or_else(|| OrderError::GroupNotFound(group_id.to_string()))
    }

    /// Gate decision for a group, including one about to be created
    ///
    /// A group that does not exist yet is evaluated as if appended last.
    pub fn can_edit_group(&self, course: &CourseRef) -> bool {
        if self.snapshot.group(&course.id).is_some() {
            return self.gate.can_edit(&self.snapshot.groups, &course.id);
        }
        let mut preview = self.snapshot.groups.clone();
        preview.push(OrderGroup::new(course.id.clone(), course.name.clone()));
        self.gate.can_edit(&preview, &course.id)
    }

    /// Gate decision for an existing group
    pub fn can_edit_existing(&self, group_id: &str) -> bool {
        self.gate.can_edit(&self.snapshot.groups, group_id)
    }

    /// Allocate the next event sequence number
    pub fn next_sequence(&mut self) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        seq
    }

    /// Build an event with the next sequence number
    pub fn event(&mut self, metadata: &CommandMetadata, payload: EventPayload) -> OrderEvent {
        let seq = self.next_sequence();
        OrderEvent::new(
            seq,
            metadata.command_id.clone(),
            Some(metadata.timestamp),
            payload,
        )
    }
}

/// Command handler
///
/// Returns the events to apply. An empty vector means the command had
/// nothing to change.
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError>;
}

/// Event applier - PURE function of (snapshot, event)
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, snapshot: &mut OrderSnapshot, event: &OrderEvent);
}
