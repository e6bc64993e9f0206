//! Product Model

use crate::order::ProductInput;
use serde::{Deserialize, Serialize};

/// Menu catalog record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuProduct {
    pub id: String,
    pub name: String,
    /// Selling price in whole currency units
    pub price: i64,
    /// Struck-through price for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Category label (e.g. "Main Course")
    pub category: String,
}

impl MenuProduct {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            category: category.into(),
        }
    }

    pub fn with_original_price(mut self, original_price: i64) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Input for adding this product to the order (no variant, no note)
    pub fn to_input(&self) -> ProductInput {
        ProductInput::new(self.id.clone(), self.name.clone(), self.price)
    }

    /// Whether the catalog shows a discount badge
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|op| op > self.price)
    }
}
