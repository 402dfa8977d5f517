use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::{
    anthropic::ModelClient,
    api, config, error, info,
    management::ServiceTokenCache,
    spotify::{PlaylistPersister, SpotifyAuth, TrackResolver},
};

/// Shared server state holding one instance of each pipeline component.
///
/// Components are constructed once and injected through an `Extension`
/// layer; nothing here is per-request. The token cache is the only mutable
/// piece and guards itself.
pub struct AppState {
    pub model: ModelClient,
    pub token_cache: ServiceTokenCache,
    pub auth: SpotifyAuth,
    pub resolver: TrackResolver,
    pub persister: PlaylistPersister,
}

impl AppState {
    /// Builds the full component set from the process environment.
    pub fn from_env() -> Self {
        AppState {
            model: ModelClient::from_env(),
            token_cache: ServiceTokenCache::from_env(),
            auth: SpotifyAuth::from_env(),
            resolver: TrackResolver::from_env(),
            persister: PlaylistPersister::from_env(),
        }
    }
}

/// Builds the application router with all API routes.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/generate-playlist", post(api::generate_playlist))
        .route("/api/spotify/auth", get(api::spotify_auth))
        .route("/api/spotify/callback", post(api::spotify_callback))
        .route("/api/spotify/create-playlist", post(api::create_playlist))
        .layer(Extension(state))
}

/// Binds the configured address and serves the API until the process exits.
pub async fn start_api_server(state: Arc<AppState>) {
    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Server running at http://{}", addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!("Server error: {}", e);
    }
}
