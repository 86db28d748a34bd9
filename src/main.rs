//! BMI Tracker
//!
//! An MCP server for BMI calculation and history.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use bmi_tracker::history::HistoryStore;
use bmi_tracker::mcp::BmiService;
use bmi_tracker::session::BmiSession;
use bmi_tracker::{build_info, config, db};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays the MCP channel
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(config::DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let db_path = config::database_path();
    tracing::info!("Database path: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = db::Database::open_migrated(&db_path)?;
    let version = database.with_conn(db::migrations::get_schema_version)?;
    tracing::info!("Database schema version: {}", version);

    let store = HistoryStore::open(database)?;
    tracing::info!("Loaded {} history entries", store.len());

    let service = BmiService::new(db_path, BmiSession::new(store));

    tracing::info!("Starting MCP server on stdio...");
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
