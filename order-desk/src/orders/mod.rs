//! Course order module
//!
//! The order-taking state is driven by commands and recorded as events:
//!
//! - **store**: `OrderStore`, the single writer; idempotency, event log, broadcast
//! - **actions**: command validation and event generation (`CommandHandler`)
//! - **appliers**: pure event application onto the snapshot (`EventApplier`)
//! - **policy**: course gating strategies
//! - **layout**: dynamic vs. seeded course groups
//!
//! # Architecture
//!
//! ```text
//! Command → OrderStore → CommandAction → Event(s)
//!                ↓                          ↓
//!           Broadcast ←──────── EventAction::apply → Snapshot
//! ```

pub mod actions;
pub mod appliers;
pub mod layout;
pub mod policy;
pub mod store;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-exports
pub use layout::CourseLayout;
pub use policy::{CourseGate, GateKind, OpenCourses, SequentialCourses, StrictCourses};
pub use store::{CloseOutcome, OrderStore, SelectionActions, StoreError, StoreResult};
pub use traits::OrderError;

// Re-export shared types for convenience
pub use shared::order::{
    CommandError, CommandErrorCode, CommandResponse, EventPayload, LongPressTarget, OrderCommand,
    OrderCommandPayload, OrderEvent, OrderEventType, OrderSnapshot, ProductInput, Selection,
};
