use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use pawplan_api::config::ApiConfig;
use pawplan_store::InMemoryCompletionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Completion flags live for the lifetime of the process
    let completions = Arc::new(InMemoryCompletionStore::new());

    // Start API server
    pawplan_api::start_server(config, completions).await?;

    Ok(())
}
