//! Reward Bridge: the external wallet collaborator.
//!
//! The engine only computes point amounts; storage of the point ledger
//! belongs to the wallet service. The trait seam lets engine tests
//! substitute a recording fake for the HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use petkeeper_core::types::DbId;

/// Failure of a wallet credit call.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("wallet request failed: {0}")]
    Request(String),

    #[error("wallet rejected credit: status {0}")]
    Rejected(u16),
}

/// Credit interface consumed once per successful care action.
#[async_trait]
pub trait WalletClient: Send + Sync {
    async fn credit(&self, owner_id: DbId, points: i64) -> Result<(), WalletError>;
}

#[derive(Debug, Serialize)]
struct CreditRequest {
    owner_id: DbId,
    points: i64,
}

/// HTTP implementation talking to the wallet service.
pub struct HttpWalletClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWalletClient {
    /// Build a client with a bounded per-call timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build wallet HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl WalletClient for HttpWalletClient {
    async fn credit(&self, owner_id: DbId, points: i64) -> Result<(), WalletError> {
        let url = format!("{}/wallet/credit", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CreditRequest { owner_id, points })
            .send()
            .await
            .map_err(|e| WalletError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WalletError::Rejected(response.status().as_u16()));
        }

        tracing::debug!(owner_id, points, "Wallet credited");
        Ok(())
    }
}
