//! Mise
//!
//! An MCP server for recipe scaling and measurement conversion.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use mise::build_info;
use mise::config::Config;
use mise::mcp::MiseService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mise=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env()?;
    tracing::info!(
        "Default preference: {} ({})",
        config.default_preference.measurement_system.as_str(),
        if config.default_preference.fraction_display { "fractions" } else { "decimals" }
    );

    eprintln!("Starting MCP server on stdio...");
    let service = MiseService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
