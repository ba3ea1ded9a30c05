//! Corkboard server binary.
//!
//! Settings resolve in three layers: compiled defaults, an optional
//! JSON settings file, `CORKBOARD_*` environment variables. CLI flags
//! override all three.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "corkboard", version, about = "Group corkboard: shared sticky notes over HTTP")]
struct Args {
    /// Path to a JSON settings file.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Bind host (overrides settings).
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides settings).
    #[arg(long)]
    port: Option<u16>,

    /// SQLite database path (overrides settings).
    #[arg(long)]
    db: Option<PathBuf>,

    /// Static assets directory (overrides settings).
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = corkboard_settings::load_settings(args.settings.as_deref())
        .context("failed to load settings")?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(db) = args.db {
        settings.database.path = db.display().to_string();
    }
    if let Some(static_dir) = args.static_dir {
        settings.server.static_dir = static_dir.display().to_string();
    }

    corkboard_core::logging::init_tracing(&settings.logging.filter);

    let db_path = PathBuf::from(&settings.database.path);
    let pool = corkboard_store::open_pool(&db_path).context("failed to open database")?;

    let metrics = corkboard_server::metrics::install_recorder();
    let summarizer = Arc::new(corkboard_server::summarizer::ChatSummarizer::new(
        &settings.summarizer,
    ));
    if settings.summarizer.api_key.is_none() {
        tracing::warn!("no summarizer API key configured; /api/summarize will be unavailable");
    }

    let state = corkboard_server::AppState {
        pool,
        db_path,
        summarizer,
        metrics,
    };
    let router = corkboard_server::build_router(state, Path::new(&settings.server.static_dir));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "corkboard listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
