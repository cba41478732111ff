//! arXiv MCP Server - Entry Point
//!
//! Provides both stdio (for desktop MCP clients) and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_mcp::{config::Config, server::McpServer, tools::ToolContext};

#[derive(Parser, Debug)]
#[command(name = "arxiv-mcp")]
#[command(about = "MCP server for arXiv paper search and PDF text extraction")]
#[command(version)]
struct Cli {
    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Base URL for SSE endpoint announcements (default: http://localhost:PORT)
    #[arg(long, env = "BASE_URL")]
    base_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// arXiv query endpoint
    #[arg(long, env = "ARXIV_API_URL")]
    api_url: Option<String>,

    /// Upper bound for get_paper_content's max_pages
    #[arg(long, env = "ARXIV_MAX_PAGES_LIMIT")]
    max_pages_limit: Option<u32>,

    /// Memory budget for extracted PDF text, in MiB
    #[arg(long, env = "ARXIV_CONTENT_CACHE_MB")]
    content_cache_mb: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// HTTP with Server-Sent Events
    Http,
}

/// Logs go to stderr; stdout is reserved for JSON-RPC in stdio mode.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(limit) = cli.max_pages_limit {
        config = config.with_max_pages_limit(limit);
    }
    if let Some(mb) = cli.content_cache_mb {
        config = config.with_content_cache_mb(mb);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting arXiv MCP server"
    );

    let config = build_config(&cli)?;
    tracing::debug!(
        api_url = %config.api_url,
        max_pages_limit = config.max_pages_limit,
        content_cache_bytes = config.content_cache_bytes,
        "Configuration loaded"
    );

    let server = McpServer::new(ToolContext::from_config(config)?);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, base_url = ?cli.base_url, "Running in HTTP mode");
            server.run_http(cli.port, cli.base_url).await?;
        }
    }

    Ok(())
}
