//! Menu catalog
//!
//! Read-only lookup the menu browser uses to turn a tap into an add. The
//! store never reads the catalog; callers resolve a product here and pass
//! `MenuProduct::to_input()` together with its category label.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, bail};
use shared::models::MenuProduct;

/// Catalog lookup
pub trait MenuCatalog {
    /// Category labels in display order
    fn categories(&self) -> Vec<&str>;

    /// Products of a category in display order
    fn products(&self, category: &str) -> Vec<&MenuProduct>;

    /// Product by id
    fn product(&self, product_id: &str) -> Option<&MenuProduct>;
}

/// In-memory catalog
#[derive(Debug, Clone)]
pub struct StaticMenu {
    products: Vec<MenuProduct>,
}

impl StaticMenu {
    /// Build from products, rejecting duplicate ids and negative prices
    pub fn new(products: Vec<MenuProduct>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                bail!("duplicate product id: {}", product.id);
            }
            if product.price < 0 {
                bail!("negative price for product {}: {}", product.id, product.price);
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let products: Vec<MenuProduct> =
            serde_json::from_str(json).context("invalid menu catalog JSON")?;
        Self::new(products)
    }

    /// Load a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read menu catalog {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Built-in house menu
    pub fn house_menu() -> Self {
        const APPETIZER: &str = "Appetizer";
        const MAIN: &str = "Main Course";
        const DESSERTS: &str = "Desserts";

        let products = vec![
            MenuProduct::new("app_1", "Caesar Salad", 45000, APPETIZER),
            MenuProduct::new("app_2", "Garlic Bread", 25000, APPETIZER),
            MenuProduct::new("app_3", "Calamari", 65000, APPETIZER).with_original_price(80000),
            MenuProduct::new("app_4", "Onion Soup", 35000, APPETIZER),
            MenuProduct::new("app_5", "Bruschetta", 38000, APPETIZER),
            MenuProduct::new("app_6", "Buffalo Wings", 55000, APPETIZER),
            MenuProduct::new("main_1", "Grilled Salmon", 125000, MAIN),
            MenuProduct::new("main_2", "Ribeye Steak", 180000, MAIN).with_original_price(220000),
            MenuProduct::new("main_3", "Mushroom Risotto", 95000, MAIN),
            MenuProduct::new("main_4", "Roasted Chicken", 85000, MAIN),
            MenuProduct::new("main_5", "Beef Burger", 75000, MAIN),
            MenuProduct::new("main_6", "Spicy Korean Chicken", 98000, MAIN),
            MenuProduct::new("main_7", "Tom Yum Seafood", 88000, MAIN),
            MenuProduct::new("des_1", "Tiramisu", 45000, DESSERTS),
            MenuProduct::new("des_2", "Cheesecake", 42000, DESSERTS),
            MenuProduct::new("des_3", "Choco Lava Cake", 48000, DESSERTS).with_original_price(55000),
            MenuProduct::new("des_4", "Ice Cream Sundae", 32000, DESSERTS),
            MenuProduct::new("des_5", "Panna Cotta", 38000, DESSERTS),
        ];
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl MenuCatalog for StaticMenu {
    fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    fn products(&self, category: &str) -> Vec<&MenuProduct> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    fn product(&self, product_id: &str) -> Option<&MenuProduct> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_house_menu_layout() {
        let menu = StaticMenu::house_menu();
        assert_eq!(menu.len(), 18);
        assert_eq!(menu.categories(), ["Appetizer", "Main Course", "Desserts"]);
        assert_eq!(menu.products("Main Course").len(), 7);

        let steak = menu.product("main_2").unwrap();
        assert_eq!(steak.price, 180000);
        assert!(steak.is_discounted());
        assert_eq!(steak.to_input().note, None);
    }

    #[test]
    fn test_from_json_str() {
        let menu = StaticMenu::from_json_str(
            r#"[
                {"id":"tea_1","name":"Green Tea","price":15000,"category":"Drinks"},
                {"id":"tea_2","name":"Oolong","price":18000,"original_price":20000,"category":"Drinks"}
            ]"#,
        )
        .unwrap();
        assert_eq!(menu.categories(), ["Drinks"]);
        assert_eq!(menu.product("tea_2").unwrap().original_price, Some(20000));
        assert!(menu.product("tea_3").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = StaticMenu::from_json_str(
            r#"[
                {"id":"x","name":"A","price":1,"category":"C"},
                {"id":"x","name":"B","price":2,"category":"C"}
            ]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate product id"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"des_9","name":"Mochi","price":30000,"category":"Desserts"}}]"#
        )
        .unwrap();

        let menu = StaticMenu::from_path(file.path()).unwrap();
        assert_eq!(menu.products("Desserts")[0].name, "Mochi");
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = StaticMenu::from_path(dir.path().join("menu.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read menu catalog"));
    }
}
