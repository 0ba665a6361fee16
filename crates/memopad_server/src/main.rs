//! Memopad server entry point.
//!
//! # Responsibility
//! - Wire configuration, logging, store, and router together.
//! - Close the store explicitly after graceful shutdown.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, warn};
use memopad_server::{build_router, AppState, ServerConfig};
use memopad_core::{open_db, MemoService, SqliteMemoRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    memopad_core::init_logging(config.effective_log_level(), config.log_dir.as_deref())
        .map_err(|err| anyhow!(err))?;

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path.display()))?;
    let repo = SqliteMemoRepository::try_new(conn)
        .map_err(|err| anyhow!("database is not usable: {err}"))?;
    let state = AppState::new(MemoService::new(repo));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        "event=server_start module=server status=ok addr={addr} db={}",
        config.db_path.display()
    );

    axum::serve(listener, build_router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router is torn down once serve returns, so the state Arc should be
    // unique again; close the store so the last commit hits disk before exit.
    match AppState::into_store(state) {
        Some(store) => match store.into_inner().close() {
            Ok(()) => info!("event=server_stop module=server status=ok"),
            Err(err) => warn!(
                "event=server_stop module=server status=error error_code=db_close_failed error={err}"
            ),
        },
        None => warn!(
            "event=server_stop module=server status=error error_code=state_still_shared"
        ),
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=server status=error error={err}");
    }
}
