use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;

use crate::{Res, api, info, management::NewReleaseManager};

pub fn router(manager: Arc<NewReleaseManager>) -> Router {
    let spotify = Router::new().route("/albums", get(api::albums));

    Router::new()
        .route("/health", get(api::health))
        .nest("/spotify/api", spotify)
        .with_state(manager)
}

pub async fn start_api_server(manager: Arc<NewReleaseManager>, address: &str) -> Res<()> {
    let addr = SocketAddr::from_str(address)
        .map_err(|e| format!("Failed to parse server address '{}': {}", address, e))?;

    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    serve(listener, manager).await
}

/// Serves the router on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, manager: Arc<NewReleaseManager>) -> Res<()> {
    axum::serve(listener, router(manager)).await?;
    Ok(())
}
