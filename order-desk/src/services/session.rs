//! Session replay
//!
//! A session is a JSON array of command payloads executed in order against
//! one store. The report is the only thing the replay binary writes to
//! stdout.

use serde_json::{Value, json};
use shared::order::{OrderCommand, OrderCommandPayload};

use crate::orders::OrderStore;

/// Parse a session file body
pub fn parse_session(raw: &str) -> anyhow::Result<Vec<OrderCommandPayload>> {
    Ok(serde_json::from_str(raw)?)
}

/// Execute every payload; returns the number of rejected commands
pub fn replay(store: &mut OrderStore, payloads: Vec<OrderCommandPayload>) -> usize {
    let mut rejected = 0usize;
    for payload in payloads {
        let resp = store.execute(OrderCommand::new(payload));
        if let Some(err) = resp.error {
            rejected += 1;
            tracing::warn!(code = ?err.code, message = %err.message, "Command rejected");
        }
    }
    tracing::info!(
        sequence = store.current_sequence(),
        rejected,
        "Session replayed"
    );
    rejected
}

/// Final state printed by the replay binary
pub fn report(store: &OrderStore) -> Value {
    json!({
        "snapshot": store.snapshot(),
        "subtotal": store.all_items_subtotal(),
        "has_unsaved_changes": store.has_unsaved_changes(),
    })
}
