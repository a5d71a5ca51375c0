use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_recommender::{
    config::Config,
    routes::{create_router, AppState},
    services::{CatalogLoader, ExplanationGenerator},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recommender=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = CatalogLoader::new(config.data_dir.clone(), config.catalog_extension.clone());
    let explainer = ExplanationGenerator::from_config(&config)
        .context("Failed to initialize explanation generator")?;

    tracing::info!(
        data_dir = %catalog.data_dir().display(),
        mode = explainer.mode_name(),
        model = %config.openai_model,
        "Explanation generator ready"
    );

    let app = create_router(AppState::new(catalog, explainer));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Server running on http://{}", address);
    axum::serve(listener, app).await?;

    Ok(())
}
