use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::{error::ApiError, management::NewReleaseManager, types::Album};

pub async fn albums(
    State(manager): State<Arc<NewReleaseManager>>,
) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = manager.fetch_albums().await?;
    Ok(Json(albums))
}
