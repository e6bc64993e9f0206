//! AddItem / AddItemToActiveGroup command handlers
//!
//! Adds a product line to a course:
//! - An unsent line with the same (product, variant, note) triple absorbs
//!   the add (qty + 1)
//! - Otherwise a new line is appended with qty 1, firing by default when the
//!   course is unlocked and holding when it is locked
//!
//! The target group becomes the active group and the scroll target.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderGroup, OrderItem, ProductInput};
use shared::util::new_instance_id;

/// AddItem action
#[derive(Debug, Clone)]
pub struct AddItemAction {
    pub product: ProductInput,
    pub category: String,
}

impl CommandHandler for AddItemAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        validate_product(&self.product)?;

        let course = ctx.resolve_course(&self.category);
        let existing = ctx.snapshot().group(&course.id);
        let is_fired = ctx.can_edit_group(&course);

        let payload = line_payload(existing, &course.id, &course.name, &self.product, is_fired);
        Ok(vec![ctx.event(metadata, payload)])
    }
}

/// AddItemToActiveGroup action
///
/// Without an active group only the selection error is raised.
#[derive(Debug, Clone)]
pub struct AddItemToActiveGroupAction {
    pub product: ProductInput,
}

impl CommandHandler for AddItemToActiveGroupAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<OrderEvent>, OrderError> {
        validate_product(&self.product)?;

        let snapshot = ctx.snapshot();
        let Some(group) = snapshot.active_group() else {
            if snapshot.show_selection_error {
                return Ok(vec![]);
            }
            let event = ctx.event(
                metadata,
                EventPayload::SelectionErrorChanged { visible: true },
            );
            return Ok(vec![event]);
        };

        let is_fired = ctx.can_edit_existing(&group.id);
        let payload = line_payload(Some(group), &group.id, &group.name, &self.product, is_fired);
        Ok(vec![ctx.event(metadata, payload)])
    }
}

fn validate_product(product: &ProductInput) -> Result<(), OrderError> {
    if product.product_id.trim().is_empty() {
        return Err(OrderError::InvalidOperation(
            "product id must not be empty".to_string(),
        ));
    }
    if product.name.trim().is_empty() {
        return Err(OrderError::InvalidOperation(
            "product name must not be empty".to_string(),
        ));
    }
    if product.price < 0 {
        return Err(OrderError::InvalidOperation(format!(
            "price must be non-negative, got {}",
            product.price
        )));
    }
    Ok(())
}

/// Merge into a matching unsent line or append a new one
fn line_payload(
    existing: Option<&OrderGroup>,
    group_id: &str,
    group_name: &str,
    product: &ProductInput,
    is_fired: bool,
) -> EventPayload {
    if let Some(line) = existing.and_then(|g| g.items.iter().find(|i| i.matches(product))) {
        return EventPayload::ItemQuantityIncremented {
            group_id: group_id.to_string(),
            item_id: line.id.clone(),
            qty: line.qty + 1,
        };
    }

    EventPayload::ItemAdded {
        group_id: group_id.to_string(),
        group_name: group_name.to_string(),
        group_created: existing.is_none(),
        item: OrderItem::from_input(new_instance_id(), product, is_fired),
    }
}
