//! Order snapshot - computed state from the event stream
//!
//! The snapshot is everything the order-taking screen renders from: the
//! course groups plus the transient navigation/selection state. It carries a
//! `state_checksum` so a consumer replaying events can detect drift.

use super::types::{OrderGroup, OrderItem};
use serde::{Deserialize, Serialize};

/// Selection mode layered over the group/item collection
///
/// Item selection and group selection are exclusive by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Selection {
    #[default]
    None,
    /// Item-selection mode, ids in selection order
    Items { selected: Vec<String> },
    /// Group-selection mode with at most one group
    Group {
        #[serde(skip_serializing_if = "Option::is_none")]
        group_id: Option<String>,
    },
}

impl Selection {
    pub fn is_item_mode(&self) -> bool {
        matches!(self, Selection::Items { .. })
    }

    pub fn is_group_mode(&self) -> bool {
        matches!(self, Selection::Group { .. })
    }

    /// Selected item ids (empty outside item-selection mode)
    pub fn selected_items(&self) -> &[String] {
        match self {
            Selection::Items { selected } => selected,
            _ => &[],
        }
    }

    pub fn is_selected(&self, item_id: &str) -> bool {
        self.selected_items().iter().any(|id| id == item_id)
    }

    pub fn selected_group(&self) -> Option<&str> {
        match self {
            Selection::Group { group_id } => group_id.as_deref(),
            _ => None,
        }
    }
}

/// Order snapshot - computed from event stream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Course groups in display order
    pub groups: Vec<OrderGroup>,
    /// Group being edited (None = browse view)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_group_id: Option<String>,
    /// Current selection mode
    #[serde(default)]
    pub selection: Selection,
    /// "Select a group first" error flag
    #[serde(default)]
    pub show_selection_error: bool,
    /// One-shot fire confirmation flag
    #[serde(default)]
    pub fire_success: bool,
    /// Group most recently targeted by an add (scroll-into-view trigger)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_target: Option<String>,
    /// Creation timestamp
    pub created_at: i64,
    /// Last update timestamp
    pub updated_at: i64,
    /// Last applied event sequence
    pub last_sequence: u64,
    /// State checksum for drift detection (hex string)
    #[serde(default)]
    pub state_checksum: String,
}

impl OrderSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::with_groups(Vec::new())
    }

    /// Create a snapshot pre-seeded with the given (empty) groups
    pub fn with_groups(groups: Vec<OrderGroup>) -> Self {
        let now = crate::util::now_millis();
        let mut snapshot = Self {
            groups,
            active_group_id: None,
            selection: Selection::None,
            show_selection_error: false,
            fire_success: false,
            scroll_target: None,
            created_at: now,
            updated_at: now,
            last_sequence: 0,
            state_checksum: String::new(),
        };
        snapshot.update_checksum();
        snapshot
    }

    pub fn group(&self, group_id: &str) -> Option<&OrderGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    pub fn group_mut(&mut self, group_id: &str) -> Option<&mut OrderGroup> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    pub fn group_index(&self, group_id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.id == group_id)
    }

    pub fn active_group(&self) -> Option<&OrderGroup> {
        self.active_group_id.as_deref().and_then(|id| self.group(id))
    }

    /// Locate a line across all groups, returning its owning group too
    pub fn find_item(&self, item_id: &str) -> Option<(&OrderGroup, &OrderItem)> {
        self.groups
            .iter()
            .find_map(|g| g.item(item_id).map(|item| (g, item)))
    }

    /// Sum of `price × qty` over every line of every group
    pub fn subtotal(&self) -> i64 {
        self.groups
            .iter()
            .map(OrderGroup::subtotal)
            .fold(0, i64::saturating_add)
    }

    /// True if any line has not been sent to the kitchen
    pub fn has_unsaved_changes(&self) -> bool {
        self.groups.iter().any(OrderGroup::has_unsent_items)
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Compute state checksum for drift detection
    ///
    /// Covers group ids and order, every line's id, qty, price and flags,
    /// and the last applied sequence. Returns a 16-character hex string.
    pub fn compute_checksum(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for group in &self.groups {
            hasher.update(group.id.as_bytes());
            hasher.update([0u8]);
            for item in &group.items {
                hasher.update(item.id.as_bytes());
                hasher.update(item.qty.to_le_bytes());
                hasher.update(item.price.to_le_bytes());
                hasher.update([
                    u8::from(item.is_fired),
                    u8::from(item.is_sent),
                    u8::from(item.has_been_fired),
                ]);
            }
        }
        hasher.update(self.last_sequence.to_le_bytes());

        let result = hasher.finalize();
        hex::encode(&result[..8])
    }

    /// Update the state_checksum field based on current state
    pub fn update_checksum(&mut self) {
        self.state_checksum = self.compute_checksum();
    }

    /// Returns false if drift is detected
    pub fn verify_checksum(&self) -> bool {
        self.state_checksum == self.compute_checksum()
    }
}

impl Default for OrderSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
