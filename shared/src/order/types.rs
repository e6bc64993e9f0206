//! Shared types for the course order model

use serde::{Deserialize, Serialize};

/// Product id carried by combo containers
pub const COMBO_PRODUCT_ID: &str = "combo";

/// Display name of combo containers
pub const COMBO_NAME: &str = "Combo Group";

// ============================================================================
// Item Types
// ============================================================================

/// Item shape: a plain menu line or a combo wrapping other lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    #[default]
    Simple,
    Combo {
        /// Combined lines, kept verbatim (own qty/price retained for display)
        sub_items: Vec<OrderItem>,
    },
}

/// Kitchen lifecycle of a single line, derived from the three flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemLifecycle {
    /// Not yet sent, intent still editable
    Draft,
    /// Sent on hold, waiting to be released
    QueuedHold,
    /// Sent on hold, intent flipped to fire, waiting for the next commit
    QueuedFire,
    /// Sent while fire intent was active (terminal)
    Fulfilled,
}

/// Order line inside a group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Instance ID (not the product id)
    pub id: String,
    /// Product ID
    pub product_id: String,
    /// Product name
    pub name: String,
    /// Unit price in whole currency units (combos: precomputed total)
    pub price: i64,
    /// Quantity (combos: always 1)
    pub qty: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub kind: ItemKind,
    /// Intent: fire now (true) or hold (false)
    #[serde(default)]
    pub is_fired: bool,
    /// Committed to the kitchen queue
    #[serde(default)]
    pub is_sent: bool,
    /// Sent while `is_fired` was true; never reset
    #[serde(default)]
    pub has_been_fired: bool,
}

impl OrderItem {
    /// Build a fresh draft line (qty 1) from product input
    pub fn from_input(id: String, input: &ProductInput, is_fired: bool) -> Self {
        Self {
            id,
            product_id: input.product_id.clone(),
            name: input.name.clone(),
            price: input.price,
            qty: 1,
            variant_name: normalize_attr(&input.variant_name),
            note: normalize_attr(&input.note),
            kind: ItemKind::Simple,
            is_fired,
            is_sent: false,
            has_been_fired: false,
        }
    }

    /// Build a combo container from the lines it replaces
    ///
    /// Price is the sum of `price × qty` over `sub_items`, qty is 1.
    pub fn combo(id: String, sub_items: Vec<OrderItem>, is_fired: bool) -> Self {
        let price = sub_items
            .iter()
            .map(OrderItem::line_total)
            .fold(0, i64::saturating_add);
        Self {
            id,
            product_id: COMBO_PRODUCT_ID.to_string(),
            name: COMBO_NAME.to_string(),
            price,
            qty: 1,
            variant_name: None,
            note: None,
            kind: ItemKind::Combo { sub_items },
            is_fired,
            is_sent: false,
            has_been_fired: false,
        }
    }

    /// `price × qty`, saturating at `i64::MAX`
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.qty))
    }

    pub fn is_combo(&self) -> bool {
        matches!(&self.kind, ItemKind::Combo { sub_items } if !sub_items.is_empty())
    }

    /// Sub items of a combo (empty for simple lines)
    pub fn sub_items(&self) -> &[OrderItem] {
        match &self.kind {
            ItemKind::Simple => &[],
            ItemKind::Combo { sub_items } => sub_items,
        }
    }

    /// Whether a new add of `input` may be merged into this line
    ///
    /// Only unsent simple lines with the same (product, variant, note)
    /// triple merge. Combos never absorb adds.
    pub fn matches(&self, input: &ProductInput) -> bool {
        !self.is_sent
            && matches!(self.kind, ItemKind::Simple)
            && self.product_id == input.product_id
            && self.variant_name == normalize_attr(&input.variant_name)
            && self.note == normalize_attr(&input.note)
    }

    pub fn lifecycle(&self) -> ItemLifecycle {
        match (self.is_sent, self.has_been_fired, self.is_fired) {
            (false, _, _) => ItemLifecycle::Draft,
            (true, true, _) => ItemLifecycle::Fulfilled,
            (true, false, false) => ItemLifecycle::QueuedHold,
            (true, false, true) => ItemLifecycle::QueuedFire,
        }
    }

    /// Settled lines are skipped by a kitchen commit
    pub fn is_settled(&self) -> bool {
        matches!(
            self.lifecycle(),
            ItemLifecycle::QueuedHold | ItemLifecycle::Fulfilled
        )
    }
}

/// Empty variant/note strings are treated as absent
fn normalize_attr(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Product input for adding a line (resolved from the menu catalog)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductInput {
    pub product_id: String,
    pub name: String,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ProductInput {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            variant_name: None,
            note: None,
        }
    }

    pub fn with_variant(mut self, variant_name: impl Into<String>) -> Self {
        self.variant_name = Some(variant_name.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

// ============================================================================
// Group Types
// ============================================================================

/// Course bucket of ordered items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderGroup {
    /// Stable id derived from the category label
    pub id: String,
    /// Display label
    pub name: String,
    pub items: Vec<OrderItem>,
    /// Fire/hold controls shown per item (true) or on the group header
    #[serde(default)]
    pub has_distributed_toggles: bool,
    /// Seeded course kept even when empty
    #[serde(default)]
    pub pinned: bool,
}

impl OrderGroup {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            has_distributed_toggles: false,
            pinned: false,
        }
    }

    /// Seeded course that survives becoming empty
    pub fn pinned(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pinned: true,
            ..Self::new(id, name)
        }
    }

    pub fn item(&self, item_id: &str) -> Option<&OrderItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == item_id)
    }

    /// Total quantity shown on the group header
    pub fn item_count(&self) -> i32 {
        self.items.iter().map(|i| i.qty).sum()
    }

    pub fn subtotal(&self) -> i64 {
        self.items
            .iter()
            .map(OrderItem::line_total)
            .fold(0, i64::saturating_add)
    }

    /// Non-empty and every line sent and fulfilled
    pub fn is_completed(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.is_sent && i.has_been_fired)
    }

    pub fn has_combos(&self) -> bool {
        self.items.iter().any(OrderItem::is_combo)
    }

    pub fn has_unsent_items(&self) -> bool {
        self.items.iter().any(|i| !i.is_sent)
    }
}

// ============================================================================
// Gesture Types
// ============================================================================

/// Resolved long-press gesture (timers and pointer deltas stay in the UI)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "target", content = "id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LongPressTarget {
    Item(String),
    Group(String),
}

// ============================================================================
// Command Responses
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Sequence of the last event produced (None when nothing changed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, sequence: Option<u64>) -> Self {
        Self {
            command_id,
            success: true,
            sequence,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            sequence: None,
            error: Some(error),
        }
    }

    pub fn duplicate(command_id: String) -> Self {
        Self {
            command_id,
            success: true,
            sequence: None,
            error: None,
        }
    }

    pub fn error_code(&self) -> Option<&CommandErrorCode> {
        self.error.as_ref().map(|e| &e.code)
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    GroupNotFound,
    ItemNotFound,
    ItemAlreadySent,
    NoActiveGroup,
    InsufficientSelection,
    CrossGroupSelection,
    InvalidOperation,
    DuplicateCommand,
}
