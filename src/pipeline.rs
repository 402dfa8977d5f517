//! End-to-end playlist generation.
//!
//! Sequences the model call, service-token acquisition, and the track
//! resolution batch into one operation. The sequencing matters: when the
//! model reply fails to parse, no token exchange and no catalog request has
//! been made yet.

use crate::{error::Error, info, server::AppState, types::GeneratedPlaylist};

/// Generates a resolved track list for a vibe.
///
/// An empty track list is a valid outcome (the catalog matched none of the
/// candidates); only model, parse, and credential failures are errors.
/// Individual lookup failures are absorbed inside the resolver and never
/// surface here.
pub async fn generate(state: &AppState, vibe: &str) -> Result<GeneratedPlaylist, Error> {
    let candidates = state.model.generate_candidates(vibe).await?;
    info!("Model proposed {} candidates for \"{}\"", candidates.len(), vibe);

    let token = state.token_cache.ensure_token().await?;
    let tracks = state.resolver.resolve(&candidates, &token).await;
    info!("Resolved {}/{} candidates", tracks.len(), candidates.len());

    Ok(GeneratedPlaylist {
        vibe: vibe.to_string(),
        tracks,
    })
}
