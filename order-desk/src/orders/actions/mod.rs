//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{OrderCommand, OrderCommandPayload, OrderEvent};

mod add_item;
mod combine_items;
mod discard_changes;
mod fire_to_kitchen;
mod group_toggles;
mod notices;
mod remove_item;
mod remove_selected_items;
mod reorder_items;
mod select_group;
mod selection;
mod separate_items;
mod set_group_fire_status;
mod toggle_item_status;

pub use add_item::{AddItemAction, AddItemToActiveGroupAction};
pub use combine_items::CombineSelectedItemsAction;
pub use discard_changes::DiscardChangesAction;
pub use fire_to_kitchen::FireToKitchenAction;
pub use group_toggles::SetGroupTogglesAction;
pub use notices::{ClearScrollTargetAction, SetFireSuccessAction};
pub use remove_item::RemoveItemAction;
pub use remove_selected_items::RemoveSelectedItemsAction;
pub use reorder_items::ReorderItemsAction;
pub use select_group::{SelectGroupAction, SetSelectionErrorAction};
pub use selection::{
    LongPressAction, ToggleGroupSelectionModeAction, ToggleItemSelectionAction,
    ToggleSelectionModeAction,
};
pub use separate_items::SeparateSelectedItemsAction;
pub use set_group_fire_status::SetGroupFireStatusAction;
pub use toggle_item_status::ToggleItemStatusAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    SelectGroup(SelectGroupAction),
    SetSelectionError(SetSelectionErrorAction),
    AddItem(AddItemAction),
    AddItemToActiveGroup(AddItemToActiveGroupAction),
    RemoveItem(RemoveItemAction),
    ReorderItems(ReorderItemsAction),
    ToggleItemStatus(ToggleItemStatusAction),
    SetGroupFireStatus(SetGroupFireStatusAction),
    DiscardChanges(DiscardChangesAction),
    FireToKitchen(FireToKitchenAction),
    ToggleSelectionMode(ToggleSelectionModeAction),
    ToggleItemSelection(ToggleItemSelectionAction),
    ToggleGroupSelectionMode(ToggleGroupSelectionModeAction),
    LongPress(LongPressAction),
    RemoveSelectedItems(RemoveSelectedItemsAction),
    CombineSelectedItems(CombineSelectedItemsAction),
    SeparateSelectedItems(SeparateSelectedItemsAction),
    SetGroupToggles(SetGroupTogglesAction),
    ClearScrollTarget(ClearScrollTargetAction),
    SetFireSuccess(SetFireSuccessAction),
}

/// Manual implementation of CommandHandler for CommandAction
impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        match self {
            CommandAction::SelectGroup(action) => action.execute(ctx, metadata),
            CommandAction::SetSelectionError(action) => action.execute(ctx, metadata),
            CommandAction::AddItem(action) => action.execute(ctx, metadata),
            CommandAction::AddItemToActiveGroup(action) => action.execute(ctx, metadata),
            CommandAction::RemoveItem(action) => action.execute(ctx, metadata),
            CommandAction::ReorderItems(action) => action.execute(ctx, metadata),
            CommandAction::ToggleItemStatus(action) => action.execute(ctx, metadata),
            CommandAction::SetGroupFireStatus(action) => action.execute(ctx, metadata),
            CommandAction::DiscardChanges(action) => action.execute(ctx, metadata),
            CommandAction::FireToKitchen(action) => action.execute(ctx, metadata),
            CommandAction::ToggleSelectionMode(action) => action.execute(ctx, metadata),
            CommandAction::ToggleItemSelection(action) => action.execute(ctx, metadata),
            CommandAction::ToggleGroupSelectionMode(action) => action.execute(ctx, metadata),
            CommandAction::LongPress(action) => action.execute(ctx, metadata),
            CommandAction::RemoveSelectedItems(action) => action.execute(ctx, metadata),
            CommandAction::CombineSelectedItems(action) => action.execute(ctx, metadata),
            CommandAction::SeparateSelectedItems(action) => action.execute(ctx, metadata),
            CommandAction::SetGroupToggles(action) => action.execute(ctx, metadata),
            CommandAction::ClearScrollTarget(action) => action.execute(ctx, metadata),
            CommandAction::SetFireSuccess(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert OrderCommand to CommandAction
///
/// This is the ONLY place with a match on OrderCommandPayload.
impl From<&OrderCommand> for CommandAction {
    fn from(cmd: &OrderCommand) -> Self {
        match &cmd.payload {
            OrderCommandPayload::SelectGroup { group_id } => {
                CommandAction::SelectGroup(SelectGroupAction {
                    group_id: group_id.clone(),
                })
            }
            OrderCommandPayload::SetSelectionError { visible } => {
                CommandAction::SetSelectionError(SetSelectionErrorAction { visible: *visible })
            }
            OrderCommandPayload::AddItem { product, category } => {
                CommandAction::AddItem(AddItemAction {
                    product: product.clone(),
                    category: category.clone(),
                })
            }
            OrderCommandPayload::AddItemToActiveGroup { product } => {
                CommandAction::AddItemToActiveGroup(AddItemToActiveGroupAction {
                    product: product.clone(),
                })
            }
            OrderCommandPayload::RemoveItem { group_id, item_id } => {
                CommandAction::RemoveItem(RemoveItemAction {
                    group_id: group_id.clone(),
                    item_id: item_id.clone(),
                })
            }
            OrderCommandPayload::ReorderItems {
                group_id,
                active_item_id,
                over_item_id,
            } => CommandAction::ReorderItems(ReorderItemsAction {
                group_id: group_id.clone(),
                active_item_id: active_item_id.clone(),
                over_item_id: over_item_id.clone(),
            }),
            OrderCommandPayload::ToggleItemStatus { item_id } => {
                CommandAction::ToggleItemStatus(ToggleItemStatusAction {
                    item_id: item_id.clone(),
                })
            }
            OrderCommandPayload::SetGroupFireStatus { group_id, is_fired } => {
                CommandAction::SetGroupFireStatus(SetGroupFireStatusAction {
                    group_id: group_id.clone(),
                    is_fired: *is_fired,
                })
            }
            OrderCommandPayload::DiscardChanges => {
                CommandAction::DiscardChanges(DiscardChangesAction)
            }
            OrderCommandPayload::FireToKitchen => CommandAction::FireToKitchen(FireToKitchenAction),
            OrderCommandPayload::ToggleSelectionMode { active } => {
                CommandAction::ToggleSelectionMode(ToggleSelectionModeAction { active: *active })
            }
            OrderCommandPayload::ToggleItemSelection { item_id } => {
                CommandAction::ToggleItemSelection(ToggleItemSelectionAction {
                    item_id: item_id.clone(),
                })
            }
            OrderCommandPayload::ToggleGroupSelectionMode { active, group_id } => {
                CommandAction::ToggleGroupSelectionMode(ToggleGroupSelectionModeAction {
                    active: *active,
                    group_id: group_id.clone(),
                })
            }
            OrderCommandPayload::LongPress { target } => CommandAction::LongPress(LongPressAction {
                target: target.clone(),
            }),
            OrderCommandPayload::RemoveSelectedItems => {
                CommandAction::RemoveSelectedItems(RemoveSelectedItemsAction)
            }
            OrderCommandPayload::CombineSelectedItems => {
                CommandAction::CombineSelectedItems(CombineSelectedItemsAction)
            }
            OrderCommandPayload::SeparateSelectedItems => {
                CommandAction::SeparateSelectedItems(SeparateSelectedItemsAction)
            }
            OrderCommandPayload::SeparateGroupFireHold { group_id } => {
                CommandAction::SetGroupToggles(SetGroupTogglesAction {
                    group_id: group_id.clone(),
                    distributed: true,
                })
            }
            OrderCommandPayload::CombineGroupFireHold { group_id } => {
                CommandAction::SetGroupToggles(SetGroupTogglesAction {
                    group_id: group_id.clone(),
                    distributed: false,
                })
            }
            OrderCommandPayload::ClearScrollTarget => {
                CommandAction::ClearScrollTarget(ClearScrollTargetAction)
            }
            OrderCommandPayload::SetFireSuccess { value } => {
                CommandAction::SetFireSuccess(SetFireSuccessAction { value: *value })
            }
        }
    }
}
