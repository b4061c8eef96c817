use std::sync::Arc;

use anyhow::Result;
use tracing::info;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::forum_service::ForumService;
use application::user_service::UserService;
use data::repositories::http::user_directory::HttpUserDirectory;
use data::repositories::postgres::forum_repository::PostgresForumRepository;
use infrastructure::database::{create_pool, sync_schema};
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;
    sync_schema(&pool).await?;
    info!("connected to the database");

    let forum_service = Arc::new(ForumService::new(PostgresForumRepository::new(pool.clone())));
    let directory = HttpUserDirectory::new(settings.user_directory_url.clone())?;
    let user_service = Arc::new(UserService::new(directory));
    let state = AppState::new(forum_service, user_service);

    server::run_http(&settings, state).await?;

    pool.close().await;
    info!("server stopped");
    Ok(())
}
