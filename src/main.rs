//! NutriCoach
//!
//! An MCP server for diet-plan nutrition calculations.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use nutricoach::build_info;
use nutricoach::config::Config;
use nutricoach::mcp::NutricoachService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Log to stderr so stdout stays reserved for the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    tracing::info!(
        substitution_limit = config.substitution_limit,
        "Starting MCP server on stdio"
    );

    let service = NutricoachService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
