use super::*;

// ========================================================================
// Adding items
// ========================================================================

#[test]
fn test_add_item_creates_course_and_focuses_it() {
    let mut store = create_test_store();
    let resp = add_menu_item(&mut store, "main_1");

    assert_eq!(resp.sequence, Some(1));
    assert_eq!(group_ids(&store), ["main"]);
    assert_eq!(store.group("main").unwrap().name, "Main Course");
    assert_eq!(store.active_group().map(|g| g.id.as_str()), Some("main"));
    assert_eq!(store.scroll_target(), Some("main"));

    let item = &store.group("main").unwrap().items[0];
    assert_eq!(item.product_id, "main_1");
    assert_eq!(item.qty, 1);
    assert!(item.is_fired);
    assert_eq!(item.lifecycle(), ItemLifecycle::Draft);
}

#[test]
fn test_merge_increments_matching_unsent_line() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");
    add_menu_item(&mut store, "app_1");

    let group = store.group("appetizer").unwrap();
    assert_eq!(group.items.len(), 1);
    assert_eq!(group.items[0].qty, 2);
    assert_eq!(group.item_count(), 2);

    // Empty note from the menu browser matches an absent one
    store.add_item(
        ProductInput::new("app_1", "Caesar Salad", 45000)
            .with_note("")
            .with_variant(""),
        "Appetizer",
    );
    assert_eq!(store.group("appetizer").unwrap().items[0].qty, 3);

    // A different note is a different line
    store.add_item(
        ProductInput::new("app_1", "Caesar Salad", 45000).with_note("no croutons"),
        "Appetizer",
    );
    let group = store.group("appetizer").unwrap();
    assert_eq!(group.items.len(), 2);
    assert_eq!(group.items[1].qty, 1);
    assert_eq!(group.items[1].note.as_deref(), Some("no croutons"));
}

#[test]
fn test_combo_never_absorbs_an_add() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "main_1");
    add_menu_item(&mut store, "main_2");
    let ids = item_ids(&store, "main");
    store.toggle_selection_mode(true);
    store.toggle_item_selection(&ids[0]);
    store.toggle_item_selection(&ids[1]);
    assert!(store.combine_selected_items().success);

    // Same product id as the combo container
    let resp = store.add_item(ProductInput::new("combo", "House Combo", 5), "Main Course");
    assert!(resp.success);

    let group = store.group("main").unwrap();
    assert_eq!(group.items.len(), 2);
    assert!(group.items[0].is_combo());
    assert_eq!(group.items[0].qty, 1);
    assert_eq!(group.items[1].name, "House Combo");
    assert_eq!(store.all_items_subtotal(), 125000 + 180000 + 5);
}

#[test]
fn test_unknown_category_gets_slug_group() {
    let mut store = create_test_store();
    let resp = store.add_item(ProductInput::new("tea_1", "Green Tea", 15000), "hot drinks");
    assert!(resp.success);

    let group = store.group("hot-drinks").unwrap();
    assert_eq!(group.name, "Hot drinks");
    assert!(!group.pinned);
}

#[test]
fn test_non_latin_categories_get_distinct_groups() {
    let mut store = create_test_store();
    store.add_item(ProductInput::new("drink_1", "Cà phê sữa", 30000), "Đồ uống");
    store.add_item(ProductInput::new("sweet_1", "Mango Pudding", 28000), "甜点");
    store.add_item(ProductInput::new("sweet_2", "Bingsu", 35000), "디저트");

    assert_eq!(group_ids(&store), ["đồ-uống", "甜点", "디저트"]);
    assert!(store.group("main").is_none());
}

#[test]
fn test_fixed_layout_routes_unknown_category_to_main() {
    let mut store = create_fixed_store();
    assert_eq!(group_ids(&store), ["appetizer", "main", "dessert"]);

    store.add_item(ProductInput::new("tea_1", "Green Tea", 15000), "Drinks");
    assert_eq!(group_ids(&store), ["appetizer", "main", "dessert"]);
    assert_eq!(store.group("main").unwrap().items.len(), 1);
}

#[test]
fn test_add_to_active_group() {
    let mut store = create_test_store();

    let resp = store.add_item_to_active_group(ProductInput::new("des_1", "Tiramisu", 45000));
    assert!(resp.success);
    assert!(store.show_selection_error());
    assert!(store.groups().is_empty());

    add_menu_item(&mut store, "main_1");
    store.select_group(Some("main"));
    assert!(!store.show_selection_error());

    // Lands in the active course whatever its category
    store.add_item_to_active_group(ProductInput::new("des_1", "Tiramisu", 45000));
    assert_eq!(item_ids(&store, "main").len(), 2);
    assert!(store.group("dessert").is_none());
}

// ========================================================================
// Subtotal
// ========================================================================

#[test]
fn test_subtotal_counts_combo_price_once() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");
    add_menu_item(&mut store, "app_1");
    store.add_item(ProductInput::new("app_x", "Daily Soup", 45000), "Appetizer");
    store.add_item(ProductInput::new("app_y", "Daily Salad", 45000), "Appetizer");

    let ids = item_ids(&store, "appetizer");
    store.toggle_selection_mode(true);
    store.toggle_item_selection(&ids[1]);
    store.toggle_item_selection(&ids[2]);
    assert!(store.combine_selected_items().success);

    let group = store.group("appetizer").unwrap();
    assert_eq!(group.items.len(), 2);
    assert_eq!(group.items[1].price, 90000);
    assert_eq!(store.all_items_subtotal(), 45000 * 2 + 90000);
    assert_eq!(store.all_items_subtotal(), 180000);
}

// ========================================================================
// Removing and reordering
// ========================================================================

#[test]
fn test_remove_last_item_prunes_group() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");
    add_menu_item(&mut store, "main_1");

    let id = item_ids(&store, "appetizer")[0].clone();
    assert!(store.remove_item("appetizer", &id).success);
    assert_eq!(group_ids(&store), ["main"]);
}

#[test]
fn test_fixed_layout_keeps_empty_groups() {
    let mut store = create_fixed_store();
    add_menu_item(&mut store, "app_1");

    let id = item_ids(&store, "appetizer")[0].clone();
    assert!(store.remove_item("appetizer", &id).success);
    assert_eq!(group_ids(&store), ["appetizer", "main", "dessert"]);
    assert!(store.group("appetizer").unwrap().items.is_empty());
}

#[test]
fn test_reorder_items() {
    let mut store = create_test_store();
    for id in ["main_1", "main_2", "main_3"] {
        add_menu_item(&mut store, id);
    }
    let ids = item_ids(&store, "main");

    assert!(store.reorder_items("main", &ids[0], &ids[2]).success);
    assert_eq!(item_ids(&store, "main"), [ids[1].clone(), ids[2].clone(), ids[0].clone()]);

    assert!(store.reorder_items("main", &ids[0], &ids[1]).success);
    assert_eq!(item_ids(&store, "main"), ids);
}

// ========================================================================
// Navigation
// ========================================================================

#[test]
fn test_select_group() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");
    add_menu_item(&mut store, "main_1");

    assert!(store.select_group(Some("appetizer")).success);
    assert_eq!(store.active_group().unwrap().id, "appetizer");

    assert!(store.select_group(None).success);
    assert!(store.active_group().is_none());

    let resp = store.select_group(Some("dessert"));
    assert_rejected(&resp, CommandErrorCode::GroupNotFound);
}

#[test]
fn test_close_active_group_asks_for_confirmation() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");

    assert_eq!(store.close_active_group(), CloseOutcome::NeedsConfirmation);
    assert_eq!(store.active_group().unwrap().id, "appetizer");

    assert!(store.discard_changes().success);
    assert!(store.groups().is_empty());
    assert!(store.active_group().is_none());

    add_menu_item(&mut store, "app_1");
    store.fire_to_kitchen();
    store.select_group(Some("appetizer"));
    assert_eq!(store.close_active_group(), CloseOutcome::Closed);
    assert!(store.active_group().is_none());
}

#[test]
fn test_discard_changes_keeps_sent_items() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");
    store.fire_to_kitchen();
    add_menu_item(&mut store, "app_2");
    add_menu_item(&mut store, "main_1");

    assert!(store.has_unsaved_changes());
    store.discard_changes();

    assert!(!store.has_unsaved_changes());
    assert_eq!(group_ids(&store), ["appetizer"]);
    assert_eq!(store.group("appetizer").unwrap().items.len(), 1);
    assert!(store.active_group().is_none());
}

// ========================================================================
// Event log
// ========================================================================

#[test]
fn test_rebuild_snapshot_matches_live_state() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");
    add_menu_item(&mut store, "app_3");
    add_menu_item(&mut store, "main_2");
    store.fire_to_kitchen();
    add_menu_item(&mut store, "des_1");
    let ids = item_ids(&store, "appetizer");
    store.toggle_item_status(&ids[0]);

    let rebuilt = store.rebuild_snapshot().unwrap();
    assert_eq!(rebuilt.groups, store.snapshot().groups);
    assert_eq!(rebuilt.last_sequence, store.current_sequence());
    assert_eq!(rebuilt.state_checksum, store.snapshot().state_checksum);
}

#[test]
fn test_duplicate_command_not_reapplied() {
    let mut store = create_test_store();
    let cmd = OrderCommand::new(OrderCommandPayload::AddItem {
        product: ProductInput::new("main_1", "Grilled Salmon", 125000),
        category: "Main Course".to_string(),
    });

    let first = store.execute(cmd.clone());
    assert!(first.success);
    assert_eq!(first.sequence, Some(1));

    let second = store.execute(cmd);
    assert!(second.success);
    assert_eq!(second.sequence, None);
    assert_eq!(store.group("main").unwrap().items[0].qty, 1);
    assert_eq!(store.current_sequence(), 1);
}

#[test]
fn test_events_since_and_subscribe() {
    let mut store = create_test_store();
    add_menu_item(&mut store, "app_1");

    let mut rx = store.subscribe();
    add_menu_item(&mut store, "app_1");
    store.fire_to_kitchen();

    let first = rx.try_recv().unwrap();
    assert_eq!(first.sequence, 2);
    assert_eq!(first.event_type, shared::order::OrderEventType::ItemQuantityIncremented);
    assert_eq!(rx.try_recv().unwrap().event_type, shared::order::OrderEventType::OrderFired);

    let events = store.events_since(1);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.sequence > 1));
    assert!(store.events_since(store.current_sequence()).is_empty());
}

#[test]
fn test_store_from_config() {
    let config = StoreConfig::default().with_policy(CourseLayout::Fixed, GateKind::Open);
    let store = OrderStore::new(&config);
    assert_eq!(store.layout(), CourseLayout::Fixed);
    assert_eq!(store.groups().len(), 3);
    assert!(store.can_edit_group("dessert"));
    assert_eq!(store.current_sequence(), 0);
}
