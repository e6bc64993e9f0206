//! Order Desk - course-based order taking for the POS counter
//!
//! # Module Structure
//!
//! ```text
//! order-desk/src/
//! ├── core/          # Configuration
//! ├── orders/        # OrderStore, actions, appliers, course policy
//! ├── services/      # Menu catalog
//! └── utils/         # Logging
//! ```

pub mod core;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::StoreConfig;
pub use orders::{CourseLayout, GateKind, OrderStore};
pub use services::{MenuCatalog, StaticMenu};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() -> anyhow::Result<StoreConfig> {
    dotenv::dotenv().ok();
    let config = StoreConfig::from_env()?;
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

/// Banner on stderr; stdout carries the session output only
pub fn print_banner() {
    eprintln!(
        r#"
  ___          _           ___         _
 / _ \ _ _ __| |___ _ _  |   \ ___ __| |__
| (_) | '_/ _` / -_) '_| | |) / -_|_-< / /
 \___/|_| \__,_\___|_|   |___/\___/__/_\_\
    "#
    );
}
