use std::sync::Arc;

use axum::{Extension, Json};

use crate::{
    error::Error,
    pipeline,
    server::AppState,
    types::{GenerateRequest, GeneratedPlaylist},
};

/// `POST /api/generate-playlist` - turns a vibe into a resolved track list.
pub async fn generate_playlist(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratedPlaylist>, Error> {
    let playlist = pipeline::generate(&state, &req.vibe).await?;
    Ok(Json(playlist))
}
