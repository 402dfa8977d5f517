use std::sync::Arc;

use vibestream::{config, error, server};

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let state = Arc::new(server::AppState::from_env());
    server::start_api_server(state).await;
}
