use std::sync::Arc;

use axum::{Extension, Json};

use crate::{
    error::Error,
    server::AppState,
    types::{AuthUrlResponse, CallbackRequest, UserToken},
};

/// `GET /api/spotify/auth` - returns the authorization redirect URL for the
/// browser to navigate to. No network call is made.
pub async fn spotify_auth(Extension(state): Extension<Arc<AppState>>) -> Json<AuthUrlResponse> {
    Json(AuthUrlResponse {
        auth_url: state.auth.authorize_url(),
    })
}

/// `POST /api/spotify/callback` - exchanges the authorization code the
/// browser brought back for a user access/refresh token pair. The pair is
/// returned to the client, which owns it from here on.
pub async fn spotify_callback(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CallbackRequest>,
) -> Result<Json<UserToken>, Error> {
    let token = state.auth.exchange_code(&req.code).await?;
    Ok(Json(token))
}
