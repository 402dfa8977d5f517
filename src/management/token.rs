use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{config, error::Error, spotify, types::ClientCredentialsResponse};

#[derive(Debug, Clone)]
struct ServiceToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Cache for the machine-level bearer token used for catalog searches.
///
/// The token comes from the client-credentials grant and is independent of
/// any end user. One instance lives in the shared server state and is reused
/// by every request until the recorded expiry passes; the mutex serializes
/// refreshes so concurrent requests arriving on an expired cache trigger a
/// single exchange.
pub struct ServiceTokenCache {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<ServiceToken>>,
}

impl ServiceTokenCache {
    pub fn new(token_url: String, client_id: String, client_secret: String) -> Self {
        ServiceTokenCache {
            client: Client::new(),
            token_url,
            client_id,
            client_secret,
            cached: Mutex::new(None),
        }
    }

    /// Builds a cache from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            config::spotify_token_url(),
            config::spotify_client_id(),
            config::spotify_client_secret(),
        )
    }

    /// Returns a valid service token, exchanging client credentials only when
    /// the cached one is missing or expired.
    ///
    /// A cached token is reused as long as the current time is strictly
    /// before its recorded expiry; no network call happens on that path. On
    /// refresh the expiry is recorded as now plus the lifetime the identity
    /// endpoint reports.
    ///
    /// # Errors
    ///
    /// [`Error::CredentialExchange`] when the exchange fails. The stale cache
    /// entry is left untouched, so the next call retries the exchange.
    pub async fn ensure_token(&self) -> Result<String, Error> {
        let mut cached = self.cached.lock().await;

        if let Some(entry) = cached.as_ref() {
            if Utc::now() < entry.expires_at {
                return Ok(entry.token.clone());
            }
        }

        let response = self
            .client
            .post(&self.token_url)
            .header(
                "Authorization",
                spotify::auth::basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(Error::CredentialExchange)?;

        let grant = response
            .json::<ClientCredentialsResponse>()
            .await
            .map_err(Error::CredentialExchange)?;

        let entry = ServiceToken {
            token: grant.access_token,
            expires_at: Utc::now() + Duration::seconds(grant.expires_in),
        };
        let token = entry.token.clone();
        *cached = Some(entry);

        Ok(token)
    }
}
