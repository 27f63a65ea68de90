//! Decay worker binary: runs a decay pass over the pet population on a
//! fixed cadence until shutdown.

use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use petkeeper_worker::decay::{self, DEFAULT_CONCURRENCY};

/// Default interval between decay passes: 1 hour.
const DEFAULT_INTERVAL_SECS: u64 = 3600;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petkeeper_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = petkeeper_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    petkeeper_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    let interval_secs: u64 = std::env::var("DECAY_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);
    let concurrency: usize = std::env::var("DECAY_CONCURRENCY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CONCURRENCY);

    tracing::info!(interval_secs, concurrency, "Decay worker started");

    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            ctrl_c_cancel.cancel();
        }
    });

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Decay worker stopping");
                break;
            }
            _ = ticker.tick() => {
                if let Err(e) = decay::run_decay_pass(&pool, Utc::now(), concurrency).await {
                    tracing::error!(error = %e, "Decay pass aborted; retrying next tick");
                }
            }
        }
    }
}
