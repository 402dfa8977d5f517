use std::sync::Arc;

use axum::{Extension, Json};

use crate::{
    error::Error,
    server::AppState,
    types::{CreatePlaylistApiRequest, PlaylistCreation},
};

/// `POST /api/spotify/create-playlist` - persists previously resolved track
/// URIs as a playlist in the account behind the supplied user token.
pub async fn create_playlist(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreatePlaylistApiRequest>,
) -> Result<Json<PlaylistCreation>, Error> {
    let created = state
        .persister
        .persist(&req.access_token, &req.vibe, req.track_uris)
        .await?;
    Ok(Json(created))
}
