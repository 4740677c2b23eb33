use log::info;

use veckomat::config::AppConfig;
use veckomat::fetch::PageFetcher;
use veckomat::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Falling back to default configuration: {e}");
        AppConfig::default()
    });

    let fetcher = PageFetcher::new(&config)?;
    let app = server::router(fetcher);

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("veckomat import server listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
