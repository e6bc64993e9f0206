pub mod config;

pub use config::{DEFAULT_EVENT_CHANNEL_CAPACITY, StoreConfig};
