//! Data models
//!
//! Catalog-side records shared between the order store and the menu
//! browser.

pub mod category;
pub mod product;

// Re-exports
pub use category::{CourseCategory, CourseRef, HOUSE_COURSES, resolve_course};
pub use product::MenuProduct;
