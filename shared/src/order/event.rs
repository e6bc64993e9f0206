//! Order events - immutable facts recorded after command processing

use super::types::OrderItem;
use serde::{Deserialize, Serialize};

/// Order event - immutable record of one state change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Event unique ID
    pub event_id: String,
    /// Store sequence number (for ordering and replay)
    pub sequence: u64,
    /// Store timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Client timestamp (Unix milliseconds) preserved from the command
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_timestamp: Option<i64>,
    /// Command that triggered this event
    pub command_id: String,
    /// Event type
    pub event_type: OrderEventType,
    /// Event payload
    pub payload: EventPayload,
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderEventType {
    // Navigation
    GroupSelected,
    SelectionErrorChanged,

    // Items
    ItemAdded,
    ItemQuantityIncremented,
    ItemRemoved,
    ItemsReordered,

    // Fire / hold
    ItemStatusToggled,
    GroupFireStatusSet,
    ChangesDiscarded,
    OrderFired,

    // Selection
    SelectionModeChanged,
    ItemSelectionToggled,
    GroupSelectionModeChanged,
    SelectedItemsRemoved,
    ItemsCombined,
    ItemsSeparated,
    GroupTogglesChanged,

    // Notices
    ScrollTargetCleared,
    FireSuccessChanged,
}

impl std::fmt::Display for OrderEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderEventType::GroupSelected => write!(f, "GROUP_SELECTED"),
            OrderEventType::SelectionErrorChanged => write!(f, "SELECTION_ERROR_CHANGED"),
            OrderEventType::ItemAdded => write!(f, "ITEM_ADDED"),
            OrderEventType::ItemQuantityIncremented => write!(f, "ITEM_QUANTITY_INCREMENTED"),
            OrderEventType::ItemRemoved => write!(f, "ITEM_REMOVED"),
            OrderEventType::ItemsReordered => write!(f, "ITEMS_REORDERED"),
            OrderEventType::ItemStatusToggled => write!(f, "ITEM_STATUS_TOGGLED"),
            OrderEventType::GroupFireStatusSet => write!(f, "GROUP_FIRE_STATUS_SET"),
            OrderEventType::ChangesDiscarded => write!(f, "CHANGES_DISCARDED"),
            OrderEventType::OrderFired => write!(f, "ORDER_FIRED"),
            OrderEventType::SelectionModeChanged => write!(f, "SELECTION_MODE_CHANGED"),
            OrderEventType::ItemSelectionToggled => write!(f, "ITEM_SELECTION_TOGGLED"),
            OrderEventType::GroupSelectionModeChanged => write!(f, "GROUP_SELECTION_MODE_CHANGED"),
            OrderEventType::SelectedItemsRemoved => write!(f, "SELECTED_ITEMS_REMOVED"),
            OrderEventType::ItemsCombined => write!(f, "ITEMS_COMBINED"),
            OrderEventType::ItemsSeparated => write!(f, "ITEMS_SEPARATED"),
            OrderEventType::GroupTogglesChanged => write!(f, "GROUP_TOGGLES_CHANGED"),
            OrderEventType::ScrollTargetCleared => write!(f, "SCROLL_TARGET_CLEARED"),
            OrderEventType::FireSuccessChanged => write!(f, "FIRE_SUCCESS_CHANGED"),
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Navigation ==========
    GroupSelected {
        #[serde(skip_serializing_if = "Option::is_none")]
        group_id: Option<String>,
    },

    SelectionErrorChanged {
        visible: bool,
    },

    // ========== Items ==========
    /// New line appended (the group is created first when `group_created`)
    ItemAdded {
        group_id: String,
        group_name: String,
        group_created: bool,
        item: OrderItem,
    },

    /// Add merged into an existing unsent line
    ItemQuantityIncremented {
        group_id: String,
        item_id: String,
        /// Quantity after the increment
        qty: i32,
    },

    ItemRemoved {
        group_id: String,
        item_id: String,
        item_name: String,
    },

    ItemsReordered {
        group_id: String,
        item_id: String,
        from_index: usize,
        to_index: usize,
    },

    // ========== Fire / Hold ==========
    ItemStatusToggled {
        group_id: String,
        item_id: String,
        /// Intent after the toggle
        is_fired: bool,
    },

    GroupFireStatusSet {
        group_id: String,
        is_fired: bool,
        /// Lines whose intent was written (fulfilled lines excluded)
        item_ids: Vec<String>,
    },

    ChangesDiscarded {
        /// Unsent lines dropped, across all groups
        item_ids: Vec<String>,
    },

    OrderFired {
        /// Lines marked sent by this commit
        sent_item_ids: Vec<String>,
        /// Lines that became fulfilled by this commit
        fired_item_ids: Vec<String>,
    },

    // ========== Selection ==========
    SelectionModeChanged {
        active: bool,
    },

    ItemSelectionToggled {
        item_id: String,
        selected: bool,
    },

    GroupSelectionModeChanged {
        active: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_id: Option<String>,
    },

    SelectedItemsRemoved {
        group_id: String,
        item_ids: Vec<String>,
    },

    ItemsCombined {
        group_id: String,
        /// Lines replaced by the combo
        item_ids: Vec<String>,
        combo: OrderItem,
    },

    ItemsSeparated {
        group_id: String,
        combo_ids: Vec<String>,
        /// Former sub items, re-keyed, appended in order
        items: Vec<OrderItem>,
    },

    GroupTogglesChanged {
        group_id: String,
        distributed: bool,
    },

    // ========== Notices ==========
    ScrollTargetCleared {},

    FireSuccessChanged {
        value: bool,
    },
}

impl EventPayload {
    /// Event type of this payload
    pub fn event_type(&self) -> OrderEventType {
        match self {
            EventPayload::GroupSelected { .. } => OrderEventType::GroupSelected,
            EventPayload::SelectionErrorChanged { .. } => OrderEventType::SelectionErrorChanged,
            EventPayload::ItemAdded { .. } => OrderEventType::ItemAdded,
            EventPayload::ItemQuantityIncremented { .. } => OrderEventType::ItemQuantityIncremented,
            EventPayload::ItemRemoved { .. } => OrderEventType::ItemRemoved,
            EventPayload::ItemsReordered { .. } => OrderEventType::ItemsReordered,
            EventPayload::ItemStatusToggled { .. } => OrderEventType::ItemStatusToggled,
            EventPayload::GroupFireStatusSet { .. } => OrderEventType::GroupFireStatusSet,
            EventPayload::ChangesDiscarded { .. } => OrderEventType::ChangesDiscarded,
            EventPayload::OrderFired { .. } => OrderEventType::OrderFired,
            EventPayload::SelectionModeChanged { .. } => OrderEventType::SelectionModeChanged,
            EventPayload::ItemSelectionToggled { .. } => OrderEventType::ItemSelectionToggled,
            EventPayload::GroupSelectionModeChanged { .. } => {
                OrderEventType::GroupSelectionModeChanged
            }
            EventPayload::SelectedItemsRemoved { .. } => OrderEventType::SelectedItemsRemoved,
            EventPayload::ItemsCombined { .. } => OrderEventType::ItemsCombined,
            EventPayload::ItemsSeparated { .. } => OrderEventType::ItemsSeparated,
            EventPayload::GroupTogglesChanged { .. } => OrderEventType::GroupTogglesChanged,
            EventPayload::ScrollTargetCleared {} => OrderEventType::ScrollTargetCleared,
            EventPayload::FireSuccessChanged { .. } => OrderEventType::FireSuccessChanged,
        }
    }
}

impl OrderEvent {
    /// Create a new event
    ///
    /// # Arguments
    /// * `sequence` - Store sequence number (authoritative ordering)
    /// * `command_id` - Command that triggered this event
    /// * `client_timestamp` - Client-provided timestamp (for audit)
    /// * `payload` - Event payload
    pub fn new(
        sequence: u64,
        command_id: String,
        client_timestamp: Option<i64>,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: crate::util::now_millis(),
            client_timestamp,
            command_id,
            event_type: payload.event_type(),
            payload,
        }
    }
}
