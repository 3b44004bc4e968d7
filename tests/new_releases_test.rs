use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use reqwest::Client;
use serde_json::{Value, json};
use spotify_api::{
    management::NewReleaseManager,
    server,
    spotify::{HttpAuthClient, HttpCatalogClient},
    types::Credentials,
};
use tokio::net::TcpListener;

// Stand-in for the Spotify accounts and Web API endpoints
#[derive(Clone)]
struct FakeSpotify {
    token_status: StatusCode,
    token_body: Value,
    catalog_status: StatusCode,
    catalog_body: Value,
    token_forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    catalog_headers: Arc<Mutex<Vec<String>>>,
}

impl FakeSpotify {
    fn new(token_body: Value, catalog_body: Value) -> Self {
        FakeSpotify {
            token_status: StatusCode::OK,
            token_body,
            catalog_status: StatusCode::OK,
            catalog_body,
            token_forms: Arc::new(Mutex::new(Vec::new())),
            catalog_headers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn token_forms(&self) -> Vec<HashMap<String, String>> {
        self.token_forms.lock().unwrap().clone()
    }

    fn catalog_headers(&self) -> Vec<String> {
        self.catalog_headers.lock().unwrap().clone()
    }
}

async fn fake_token(
    State(fake): State<FakeSpotify>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    fake.token_forms.lock().unwrap().push(form);
    (fake.token_status, Json(fake.token_body.clone()))
}

async fn fake_new_releases(
    State(fake): State<FakeSpotify>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    fake.catalog_headers.lock().unwrap().push(authorization);
    (fake.catalog_status, Json(fake.catalog_body.clone()))
}

async fn spawn_fake_spotify(fake: FakeSpotify) -> SocketAddr {
    let app = Router::new()
        .route("/api/token", post(fake_token))
        .route("/v1/browse/new-releases", get(fake_new_releases))
        .with_state(fake);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_service(spotify: SocketAddr) -> SocketAddr {
    let manager = NewReleaseManager::new(
        Credentials::client_credentials("test-client-id", "test-client-secret"),
        Arc::new(HttpAuthClient::new(
            Client::new(),
            format!("http://{}/api/token", spotify),
        )),
        Arc::new(HttpCatalogClient::new(
            Client::new(),
            format!("http://{}/v1", spotify),
        )),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        server::serve(listener, Arc::new(manager)).await.unwrap();
    });
    addr
}

async fn get_albums(fake: &FakeSpotify) -> (StatusCode, Value) {
    let spotify = spawn_fake_spotify(fake.clone()).await;
    let service = spawn_service(spotify).await;

    let response = Client::new()
        .get(format!("http://{}/spotify/api/albums", service))
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
    let body = response.json::<Value>().await.unwrap();
    (status, body)
}

fn new_releases(items: Value) -> Value {
    json!({
        "albums": {
            "href": "https://api.spotify.com/v1/browse/new-releases?offset=0&limit=20",
            "limit": 20,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": items.as_array().map(|a| a.len()).unwrap_or(0),
            "items": items
        }
    })
}

#[tokio::test]
async fn test_token_is_sent_as_bearer_header() {
    let fake = FakeSpotify::new(
        json!({ "access_token": "abc123", "token_type": "Bearer", "expires_in": 3600 }),
        new_releases(json!([])),
    );

    let (status, _) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fake.catalog_headers(), vec!["Bearer abc123".to_string()]);
}

#[tokio::test]
async fn test_token_request_uses_client_credentials_form() {
    let fake = FakeSpotify::new(
        json!({ "access_token": "abc123" }),
        new_releases(json!([])),
    );

    get_albums(&fake).await;

    let forms = fake.token_forms();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0]["grant_type"], "client_credentials");
    assert_eq!(forms[0]["client_id"], "test-client-id");
    assert_eq!(forms[0]["client_secret"], "test-client-secret");
}

#[tokio::test]
async fn test_album_items_are_returned_as_array() {
    let items = json!([
        { "id": "1", "name": "A" },
        { "id": "2", "name": "B" }
    ]);
    let fake = FakeSpotify::new(json!({ "access_token": "abc123" }), new_releases(items.clone()));

    let (status, body) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, items);
}

#[tokio::test]
async fn test_albums_pass_through_unmodified_and_in_order() {
    let items = json!([
        {
            "id": "4aawyAB9vmqN3uQ7FjRGTy",
            "name": "Global Warming",
            "album_type": "album",
            "release_date": "2012-11-16",
            "artists": [{ "id": "0TnOYISbd1XYRBk9myaseg", "name": "Pitbull" }],
            "images": [
                { "url": "https://i.scdn.co/image/ab67616d0000b273", "height": 640, "width": 640 }
            ],
            "available_markets": ["DE", "SE"]
        },
        { "id": "2", "name": "Second", "total_tracks": 11 },
        { "id": "3", "name": "Third", "restrictions": { "reason": "market" } }
    ]);
    let fake = FakeSpotify::new(json!({ "access_token": "abc123" }), new_releases(items.clone()));

    let (status, body) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body, items);
}

#[tokio::test]
async fn test_empty_release_list_is_not_an_error() {
    let fake = FakeSpotify::new(json!({ "access_token": "abc123" }), new_releases(json!([])));

    let (status, body) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_failed_authentication_skips_catalog() {
    let mut fake = FakeSpotify::new(
        json!({ "error": "invalid_client", "error_description": "Invalid client secret" }),
        new_releases(json!([{ "id": "1", "name": "A" }])),
    );
    fake.token_status = StatusCode::BAD_REQUEST;

    let (status, body) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "authentication_failed");
    assert!(fake.catalog_headers().is_empty());
}

#[tokio::test]
async fn test_error_body_does_not_leak_upstream_detail() {
    let mut fake = FakeSpotify::new(
        json!({ "error": "invalid_client", "error_description": "Invalid client secret" }),
        new_releases(json!([])),
    );
    fake.token_status = StatusCode::BAD_REQUEST;

    let (_, body) = get_albums(&fake).await;

    let rendered = body.to_string();
    assert!(!rendered.contains("invalid_client"));
    assert!(!rendered.contains("test-client-secret"));
}

#[tokio::test]
async fn test_missing_access_token_skips_catalog() {
    let fake = FakeSpotify::new(json!({ "token_type": "Bearer" }), new_releases(json!([])));

    let (status, body) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "authentication_failed");
    assert!(fake.catalog_headers().is_empty());
}

#[tokio::test]
async fn test_empty_access_token_skips_catalog() {
    let fake = FakeSpotify::new(json!({ "access_token": "" }), new_releases(json!([])));

    let (status, _) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(fake.catalog_headers().is_empty());
}

#[tokio::test]
async fn test_rejected_token_is_a_catalog_failure() {
    let mut fake = FakeSpotify::new(
        json!({ "access_token": "expired" }),
        json!({ "error": { "status": 401, "message": "The access token expired" } }),
    );
    fake.catalog_status = StatusCode::UNAUTHORIZED;

    let (status, body) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "catalog_fetch_failed");
    assert_eq!(fake.catalog_headers(), vec!["Bearer expired".to_string()]);
}

#[tokio::test]
async fn test_malformed_catalog_body_is_a_catalog_failure() {
    let fake = FakeSpotify::new(json!({ "access_token": "abc123" }), json!({ "unexpected": true }));

    let (status, body) = get_albums(&fake).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "catalog_fetch_failed");
}

#[tokio::test]
async fn test_every_request_fetches_a_fresh_token() {
    let fake = FakeSpotify::new(json!({ "access_token": "abc123" }), new_releases(json!([])));
    let spotify = spawn_fake_spotify(fake.clone()).await;
    let service = spawn_service(spotify).await;

    let client = Client::new();
    for _ in 0..3 {
        let response = client
            .get(format!("http://{}/spotify/api/albums", service))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    assert_eq!(fake.token_forms().len(), 3);
    assert_eq!(fake.catalog_headers().len(), 3);
}

#[tokio::test]
async fn test_health_reports_version() {
    let fake = FakeSpotify::new(json!({ "access_token": "abc123" }), new_releases(json!([])));
    let spotify = spawn_fake_spotify(fake.clone()).await;
    let service = spawn_service(spotify).await;

    let body = Client::new()
        .get(format!("http://{}/health", service))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();

    assert_eq!(body["service"], "spotify-api");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(fake.token_forms().is_empty());
}
