//! Order commands - requests from the order-taking screen

use super::types::{LongPressTarget, ProductInput};
use serde::{Deserialize, Serialize};

/// Order command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCommand {
    /// Command unique ID (idempotency key)
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command payload
    pub payload: OrderCommandPayload,
}

impl OrderCommand {
    /// Create a command with a fresh id and the current timestamp
    pub fn new(payload: OrderCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Command payload variants, one per store operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCommandPayload {
    // ========== Navigation ==========
    SelectGroup {
        #[serde(default)]
        group_id: Option<String>,
    },

    SetSelectionError {
        visible: bool,
    },

    // ========== Items ==========
    AddItem {
        product: ProductInput,
        category: String,
    },

    AddItemToActiveGroup {
        product: ProductInput,
    },

    RemoveItem {
        group_id: String,
        item_id: String,
    },

    ReorderItems {
        group_id: String,
        active_item_id: String,
        over_item_id: String,
    },

    // ========== Fire / Hold ==========
    ToggleItemStatus {
        item_id: String,
    },

    SetGroupFireStatus {
        group_id: String,
        is_fired: bool,
    },

    DiscardChanges,

    FireToKitchen,

    // ========== Selection ==========
    ToggleSelectionMode {
        active: bool,
    },

    ToggleItemSelection {
        item_id: String,
    },

    ToggleGroupSelectionMode {
        active: bool,
        #[serde(default)]
        group_id: Option<String>,
    },

    LongPress {
        target: LongPressTarget,
    },

    RemoveSelectedItems,

    CombineSelectedItems,

    SeparateSelectedItems,

    SeparateGroupFireHold {
        group_id: String,
    },

    CombineGroupFireHold {
        group_id: String,
    },

    // ========== Notices ==========
    ClearScrollTarget,

    SetFireSuccess {
        value: bool,
    },
}
