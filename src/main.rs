use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::ServerConfig;
use activity_signup::database::activities_repo::ActivityDirectory;
use activity_signup::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env();
    let directory = ActivityDirectory::seeded();
    let activity_count = directory.read().await.len();
    info!(
        activities = activity_count,
        static_dir = %config.static_dir.display(),
        "activity directory loaded"
    );

    let app = web::build_router(directory, &config.static_dir);

    let addr = config.addr().context("cannot parse HOST/PORT")?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config
                .fallback_addr()
                .context("cannot parse fallback address")?;
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);
    info!("open http://{}{}", bound_addr, web::LANDING_PAGE);

    axum::serve(listener, app).await?;
    Ok(())
}
