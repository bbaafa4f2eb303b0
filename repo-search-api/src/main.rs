use std::{error::Error, sync::Arc};

use github_api::GitHubClient;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::outbound::github::GitHubRepositoryAdapter,
    domain::services::RepositorySearchServiceImpl,
};

mod adapters;
mod app_state;
mod config;
mod domain;
mod router;
mod routes;

pub use app_state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "repo_search_api=debug,github_api=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::read_config()?;

    let client = GitHubClient::new(config.github.client_config())?;
    tracing::info!("Using GitHub API at {}", client.base_url());

    let provider = Arc::new(GitHubRepositoryAdapter::new(client));
    let search_service =
        RepositorySearchServiceImpl::new(provider, config.cache.cache_config());
    tracing::debug!("Search cache settings: {:?}", config.cache);

    let app = router::create(AppState::new(Arc::new(search_service)));

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
