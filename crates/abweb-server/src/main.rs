//! Abstraction Web HTTP server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use abweb_server::{router, AppState};

/// Session-scoped HTTP API for the Abstraction Web editor.
#[derive(Parser, Debug)]
#[command(name = "abweb-server")]
#[command(about = "HTTP API server for the Abstraction Web editor")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3456")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("abweb_server=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let state = Arc::new(AppState::new());
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("listening on http://{addr}");
    info!("sessions live under /api/sessions/{{session}}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
