use super::*;
use crate::orders::policy::GateKind;
use crate::services::{MenuCatalog, StaticMenu};
use shared::order::{CommandErrorCode, ItemLifecycle, Selection};

fn create_test_store() -> OrderStore {
    OrderStore::with_policy(CourseLayout::Dynamic, GateKind::Sequential.build())
}

fn create_fixed_store() -> OrderStore {
    OrderStore::with_policy(CourseLayout::Fixed, GateKind::Sequential.build())
}

// ========================================================================
// Helper: add a product from the house menu under its own category
// ========================================================================

fn add_menu_item(store: &mut OrderStore, product_id: &str) -> CommandResponse {
    let menu = StaticMenu::house_menu();
    let product = menu.product(product_id).unwrap();
    let resp = store.add_item(product.to_input(), &product.category);
    assert!(resp.success, "Failed to add {product_id}: {:?}", resp.error);
    resp
}

fn item_ids(store: &OrderStore, group_id: &str) -> Vec<String> {
    store
        .group(group_id)
        .map(|g| g.items.iter().map(|i| i.id.clone()).collect())
        .unwrap_or_default()
}

fn group_ids(store: &OrderStore) -> Vec<String> {
    store.groups().iter().map(|g| g.id.clone()).collect()
}

fn all_items(store: &OrderStore) -> Vec<OrderItem> {
    store
        .groups()
        .iter()
        .flat_map(|g| g.items.iter().cloned())
        .collect()
}

fn assert_rejected(resp: &CommandResponse, code: CommandErrorCode) {
    assert!(!resp.success, "Expected rejection with {code:?}");
    assert_eq!(resp.error_code(), Some(&code));
}

mod test_core;
