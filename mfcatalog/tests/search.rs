//! Integration tests for the catalog client against a mock server

use mfcatalog::{AlbumCatalog, CatalogClient, Error};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::builder()
        .base_url(server.uri())
        .country("IN")
        .build()
        .await
        .unwrap()
}

fn mock_results() -> serde_json::Value {
    json!({
        "resultCount": 2,
        "results": [
            {
                "wrapperType": "track",
                "collectionId": 101,
                "trackId": 1001,
                "collectionName": "Midnight Dreams",
                "trackCensoredName": "Starlight",
                "artistName": "Luna Wave",
                "releaseDate": "2024-03-01T08:00:00Z",
                "artworkUrl100": "https://img.test/a/100x100bb.jpg"
            },
            {
                "wrapperType": "track",
                "trackId": 1002,
                "trackCensoredName": "Electric Pulse",
                "releaseDate": "2019-11-22T08:00:00Z",
                "artworkUrl60": "https://img.test/b/60x60bb.jpg"
            }
        ]
    })
}

#[tokio::test]
async fn test_search_albums_maps_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("term", "pop"))
        .and(query_param("country", "IN"))
        .and(query_param("media", "music"))
        .and(query_param("entity", "song"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_results()))
        .expect(1)
        .mount(&server)
        .await;

    let albums = client_for(&server).await.search_albums("pop").await.unwrap();

    assert_eq!(albums.len(), 2);
    assert_eq!(albums[0].id, "101");
    assert_eq!(albums[0].title, "Midnight Dreams");
    assert_eq!(albums[0].artist, "Luna Wave");
    assert_eq!(albums[0].year, 2024);
    assert_eq!(albums[0].cover_url, "https://img.test/a/300x300bb.jpg");

    assert_eq!(albums[1].id, "1002");
    assert_eq!(albums[1].title, "Electric Pulse");
    assert_eq!(albums[1].artist, "Unknown");
    assert_eq!(albums[1].year, 2019);
    assert_eq!(albums[1].cover_url, "https://img.test/b/60x60bb.jpg");
}

#[tokio::test]
async fn test_text_javascript_body_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(mock_results().to_string(), "text/javascript; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let response = client_for(&server).await.search("pop").await.unwrap();
    assert_eq!(response.result_count, Some(2));
}

#[tokio::test]
async fn test_server_error_reports_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .search_albums("rock")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ApiError(_)));
    assert!(err.to_string().contains("500"), "got: {}", err);
}

#[tokio::test]
async fn test_malformed_body_is_a_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).await.search("jazz").await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_client_behind_trait_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "resultCount": 0 })))
        .mount(&server)
        .await;

    let catalog: Arc<dyn AlbumCatalog> = Arc::new(client_for(&server).await);
    let albums = catalog.search_albums("classical").await.unwrap();
    assert!(albums.is_empty());
}
