use tabled::Table;

use crate::{
    config, error, info,
    management::NewReleaseManager,
    success,
    types::{Album, AlbumTableRow},
};

pub async fn list_releases(json: bool) {
    let manager = match config::SpotifyConfig::from_env()
        .and_then(|c| NewReleaseManager::from_config(&c))
    {
        Ok(manager) => manager,
        Err(e) => error!("{}", e),
    };

    info!("Fetching new releases from Spotify...");
    let albums = match manager.fetch_albums().await {
        Ok(albums) => albums,
        Err(e) => error!("{}", e),
    };

    if json {
        match serde_json::to_string_pretty(&albums) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Cannot serialize releases: {}", e),
        }
        return;
    }

    if albums.is_empty() {
        info!("Spotify returned no new releases.");
        return;
    }

    success!("Found {} new releases", albums.len());
    println!("{}", render_table(&albums));
}

pub fn render_table(albums: &[Album]) -> Table {
    let rows: Vec<AlbumTableRow> = albums.iter().map(AlbumTableRow::from).collect();
    Table::new(rows)
}
