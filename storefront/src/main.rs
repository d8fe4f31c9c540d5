use grit_client::NetworkGateway;
use std::sync::Arc;
use storefront::core::{Config, Storefront};
use storefront::prefs::RedbPrefStore;
use storefront::{print_banner, server, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    setup_environment();

    print_banner();

    tracing::info!("🛒 GritGear storefront starting...");

    // 2. Load configuration
    let config = Config::from_env();
    std::fs::create_dir_all(&config.data_dir)?;

    // 3. Open the preference store and the backend gateway
    let prefs_path = std::path::Path::new(&config.data_dir).join("prefs.redb");
    let store = Arc::new(RedbPrefStore::open(&prefs_path)?);
    let gateway = Arc::new(NetworkGateway::new(
        &config.data_api_url,
        &config.data_api_key,
    ));

    // 4. Build the session and load the catalog
    let session = Storefront::new(config.clone(), gateway, store);
    let source = session.bootstrap().await;
    tracing::info!(source = ?source, "Storefront session ready");

    // 5. Serve the asset endpoints until ctrl-c
    let app = server::into_service(session.clone());
    let shutdown = session.shutdown_token();

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_token.cancel();
        }
    });

    if let Err(e) = server::serve(app, config.http_port, shutdown).await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
