// Prompt Improver Backend Entry Point

use anyhow::Context;
use std::sync::Arc;
use tracing::info;

use prompt_improver::config::Config;
use prompt_improver::database::{self, SqlitePromptStore};
use prompt_improver::logging;
use prompt_improver::server::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let config = Config::from_env().context("failed to load configuration")?;
    logging::init(config.log_format)?;

    info!("starting prompt improver v{}", env!("CARGO_PKG_VERSION"));

    let pool = database::init_db(&config.database_path)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_path.display()))?;

    let state = AppState::new(Arc::new(SqlitePromptStore::new(pool)), config.debug);

    server::run_server(&config, state)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
