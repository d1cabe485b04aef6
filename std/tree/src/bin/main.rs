//! Binary entry point for the ddtree-mcp server.

use anyhow::Context;
use clap::Parser;
use ddtree_mcp::{ServerConfig, TreeServer};
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

/// Deep Directory Tree Server: renders directory trees over MCP stdio.
#[derive(Parser)]
#[command(name = "ddtree-mcp", version, about)]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,
}

#[tokio::main]
async fn main() {
    // Stdout carries the protocol, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.config).await {
        tracing::error!("fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!(?config, "starting ddtree-mcp");
    let service = TreeServer::new(config)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start server")?;
    tracing::info!("server started");

    let token = service.cancellation_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutdown signal received");
        token.cancel();
    });

    let reason = service.waiting().await.context("server error")?;
    tracing::info!(?reason, "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("cannot listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("cannot listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
