use std::sync::Arc;

use crate::{config, error, management::NewReleaseManager, server};

pub async fn serve(address: Option<String>) {
    let manager = match config::SpotifyConfig::from_env()
        .and_then(|c| NewReleaseManager::from_config(&c))
    {
        Ok(manager) => Arc::new(manager),
        Err(e) => error!("{}", e),
    };

    let address = address.unwrap_or_else(config::server_addr);

    if let Err(e) = server::start_api_server(manager, &address).await {
        error!("Server stopped: {}", e);
    }
}
