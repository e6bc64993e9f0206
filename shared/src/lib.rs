//! Shared types for the order-taking workspace
//!
//! Serializable vocabulary used by the order store and its consumers:
//! order lines and course groups, commands, events, the snapshot, and menu
//! catalog records.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Order re-exports (for convenient access)
pub use order::{OrderCommand, OrderCommandPayload, OrderEvent, OrderSnapshot};
