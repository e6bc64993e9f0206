//! Services - collaborators outside the order store

pub mod catalog;
pub mod session;

pub use catalog::{MenuCatalog, StaticMenu};
