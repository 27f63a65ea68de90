use std::sync::Arc;

use crate::config::ServerConfig;
use crate::wallet::WalletClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: petkeeper_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// External wallet collaborator (Reward Bridge).
    pub wallet: Arc<dyn WalletClient>,
}
