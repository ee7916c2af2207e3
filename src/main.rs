//! Roster conversion service binary.
//!
//! Loads the nickname table once, then serves the upload/convert/download
//! API. A missing or unparsable nickname table aborts startup: no roster can
//! be produced without name resolution.

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use roster_engine::api::{AppState, create_router};
use roster_engine::config::NicknameTable;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let nicknames_path = std::env::var("NICKNAMES_PATH")
        .unwrap_or_else(|_| "config/nicknames.yaml".to_string());
    let nicknames = NicknameTable::load(&nicknames_path)?;
    info!(
        path = %nicknames_path,
        entries = nicknames.len(),
        "Nickname table loaded"
    );

    let processed_dir =
        PathBuf::from(std::env::var("PROCESSED_DIR").unwrap_or_else(|_| "processed".to_string()));
    std::fs::create_dir_all(&processed_dir)?;

    let state = AppState::new(nicknames, processed_dir);
    let listener = tokio::net::TcpListener::bind("0.0.0.0:7777").await?;
    info!("Server started on :7777");
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
