use anyhow::Context;
use order_desk::services::session;
use order_desk::{MenuCatalog, OrderStore, StaticMenu, print_banner, setup_environment};

/// Replays a session file (JSON array of command payloads) through a fresh
/// store and prints the resulting snapshot on stdout.
fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;
    print_banner();

    // 2. Menu catalog
    let menu = match &config.menu_catalog {
        Some(path) => StaticMenu::from_path(path)?,
        None => StaticMenu::house_menu(),
    };
    tracing::info!(
        products = menu.len(),
        categories = ?menu.categories(),
        "Menu catalog loaded"
    );

    // 3. Session commands
    let session_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ORDER_DESK_SESSION").ok())
        .context("usage: order-desk <session.json> (or set ORDER_DESK_SESSION)")?;
    let raw = std::fs::read_to_string(&session_path)
        .with_context(|| format!("failed to read session file {session_path}"))?;
    let payloads = session::parse_session(&raw).context("invalid session file")?;

    // 4. Replay
    let mut store = OrderStore::new(&config);
    session::replay(&mut store, payloads);

    println!("{}", serde_json::to_string_pretty(&session::report(&store))?);

    Ok(())
}
