use std::net::SocketAddr;
use std::sync::Arc;

use fareflow_api::{app, AppState};
use fareflow_catalog::InventoryStore;
use fareflow_quote::{SessionManager, SessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fareflow_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = fareflow_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting fareflow API on port {}", config.server.port);

    let db = fareflow_store::Database::new(&config.database.url)
        .await
        .expect("Failed to open database");
    db.ensure_schema().await.expect("Failed to ensure schema");

    let inventory: Arc<dyn InventoryStore> = Arc::new(fareflow_store::SqliteInventoryStore::new(&db));
    let sessions: Arc<dyn SessionStore> = Arc::new(fareflow_store::SqliteSessionStore::new(&db));

    let manager = Arc::new(SessionManager::with_ttl(
        inventory.clone(),
        sessions.clone(),
        config.business_rules.session_ttl_seconds,
    ));

    // Periodic reclamation of expired sessions. Expiry itself is computed
    // on read; this only keeps the table from growing without bound.
    let purge_store = sessions.clone();
    let purge_interval = config.business_rules.purge_interval_seconds;
    tokio::spawn(async move {
        let mut ticker =
            tokio::time::interval(std::time::Duration::from_secs(purge_interval.max(1)));
        loop {
            ticker.tick().await;
            match purge_store.purge_expired(chrono::Utc::now()).await {
                Ok(0) => {}
                Ok(purged) => tracing::info!("Purged {} expired price sessions", purged),
                Err(e) => tracing::error!("Session purge failed: {}", e),
            }
        }
    });

    let app_state = AppState {
        inventory,
        sessions: manager,
    };
    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
