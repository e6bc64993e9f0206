//! Test fixtures shared by action and applier tests

use super::layout::CourseLayout;
use super::policy::{CourseGate, SequentialCourses};
use super::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{
    EventPayload, OrderEvent, OrderGroup, OrderItem, OrderSnapshot, ProductInput, Selection,
};

pub fn metadata() -> CommandMetadata {
    CommandMetadata {
        command_id: "cmd-1".to_string(),
        timestamp: 1234567890,
    }
}

/// Draft line with fire intent
pub fn line(id: &str, product_id: &str, price: i64, qty: i32) -> OrderItem {
    let mut item = OrderItem::from_input(
        id.to_string(),
        &ProductInput::new(product_id, format!("Product {product_id}"), price),
        true,
    );
    item.qty = qty;
    item
}

/// Line sent on hold
pub fn held(id: &str, product_id: &str, price: i64) -> OrderItem {
    let mut item = line(id, product_id, price, 1);
    item.is_fired = false;
    item.is_sent = true;
    item
}

/// Line sent with fire intent
pub fn fulfilled(id: &str, product_id: &str, price: i64) -> OrderItem {
    let mut item = line(id, product_id, price, 1);
    item.is_sent = true;
    item.has_been_fired = true;
    item
}

pub fn group(id: &str, items: Vec<OrderItem>) -> OrderGroup {
    let mut group = OrderGroup::new(id, id);
    group.items = items;
    group
}

pub fn snapshot(groups: Vec<OrderGroup>) -> OrderSnapshot {
    OrderSnapshot::with_groups(groups)
}

pub fn selecting(snapshot: &mut OrderSnapshot, ids: &[&str]) {
    snapshot.selection = Selection::Items {
        selected: ids.iter().map(|s| s.to_string()).collect(),
    };
}

/// Run a handler against a snapshot with the sequential gate
pub fn run<H: CommandHandler>(
    handler: &H,
    snapshot: &OrderSnapshot,
) -> Result<Vec<OrderEvent>, OrderError> {
    run_with(handler, snapshot, &SequentialCourses, CourseLayout::Dynamic)
}

pub fn run_with<H: CommandHandler>(
    handler: &H,
    snapshot: &OrderSnapshot,
    gate: &dyn CourseGate,
    layout: CourseLayout,
) -> Result<Vec<OrderEvent>, OrderError> {
    let mut ctx = CommandContext::new(snapshot, gate, layout, snapshot.last_sequence + 1);
    handler.execute(&mut ctx, &metadata())
}

pub fn event(seq: u64, payload: EventPayload) -> OrderEvent {
    OrderEvent::new(seq, "cmd-1".to_string(), Some(1234567890), payload)
}
