//! MCP server implementation.
//!
//! Provides both stdio (for desktop MCP clients) and HTTP transports. Both
//! dispatch through [`protocol::McpHandler`].

pub mod protocol;
pub mod session;
pub mod stdio;
pub mod transport;

use std::net::SocketAddr;

use crate::tools::{self, ToolContext};

pub use protocol::McpHandler;

/// MCP server for arXiv.
#[derive(Debug)]
pub struct McpServer {
    handler: McpHandler,
}

impl McpServer {
    /// Create a server with every tool registered.
    #[must_use]
    pub fn new(ctx: ToolContext) -> Self {
        Self { handler: McpHandler::new(tools::register_all_tools(), ctx) }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", self.handler.tool_count());

        stdio::run_stdio(self.handler).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error if the port cannot be bound or the server fails.
    pub async fn run_http(self, port: u16, base_url: Option<String>) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in HTTP mode on port {}", port);
        tracing::info!("Registered {} tools", self.handler.tool_count());

        let router = transport::create_router(self.handler, port, base_url);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server listening on http://{}", addr);

        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Request dispatcher.
    #[must_use]
    pub const fn handler(&self) -> &McpHandler {
        &self.handler
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
