use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use petkeeper_api::config::ServerConfig;
use petkeeper_api::router::build_app_router;
use petkeeper_api::state::AppState;
use petkeeper_api::wallet::HttpWalletClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petkeeper_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = petkeeper_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    petkeeper_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    petkeeper_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let wallet = Arc::new(HttpWalletClient::new(
        &config.wallet_base_url,
        config.wallet_timeout_secs,
    ));

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST"),
        config.port,
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        wallet,
    };
    let app = build_app_router(state, &config);

    tracing::info!("Starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
