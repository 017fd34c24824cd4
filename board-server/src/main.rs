use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::post_repository::PostRepository;
use application::view_projector::ViewProjector;
use data::repositories::sqlite::post_store::SqlitePostStore;
use infrastructure::database::create_pool;
use infrastructure::logging::init_logging;
use infrastructure::settings::{DEFAULT_PORT, Settings};
use presentation::AppState;
use presentation::render::HtmlFeedRenderer;

#[derive(Debug, Parser)]
#[command(name = "board-server", version, about = "Public message board")]
struct Cli {
    /// Port to listen on.
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = Settings::from_env(cli.port)?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_path, settings.database_max_connections).await?;

    let posts = PostRepository::new(SqlitePostStore::new(pool.clone()));
    posts
        .ensure_schema()
        .await
        .context("failed to create posts table")?;

    let state = AppState::new(
        Arc::new(posts),
        Arc::new(ViewProjector::new(settings.display_timezone)),
        Arc::new(HtmlFeedRenderer),
    );

    let served = server::run_http(&settings, state).await;

    pool.close().await;
    info!("database pool closed");

    served
}
