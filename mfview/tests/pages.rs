//! Page behaviour against in-memory catalog and directory doubles

use async_trait::async_trait;
use mfcatalog::AlbumCatalog;
use mfmodel::{Album, RadioStation};
use mfplayer::{PlaybackMode, PlayerProvider};
use mfradio::{DirectoryStation, StationDirectory};
use mfview::{FetchState, GenrePage, HomePage, RadioPage, SearchPage};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
enum Reply {
    Albums(Vec<Album>),
    Status(u16),
    /// Never answers within a test
    Hang,
}

#[derive(Default)]
struct FakeCatalog {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    fn reply(&self, term: &str, reply: Reply) {
        self.replies.lock().unwrap().insert(term.to_string(), reply);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AlbumCatalog for FakeCatalog {
    async fn search_albums(&self, term: &str) -> mfcatalog::Result<Vec<Album>> {
        self.calls.lock().unwrap().push(term.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(term)
            .cloned()
            .unwrap_or(Reply::Albums(Vec::new()));

        match reply {
            Reply::Albums(albums) => Ok(albums),
            Reply::Status(code) => Err(mfcatalog::Error::ApiError(format!(
                "API returned status: {}",
                code
            ))),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Vec::new())
            }
        }
    }
}

fn album(id: &str, title: &str) -> Album {
    Album {
        id: id.to_string(),
        title: title.to_string(),
        artist: "Luna Wave".to_string(),
        year: 2024,
        cover_url: "/api/placeholder/300/300".to_string(),
    }
}

// ============================================================================
// Genre
// ============================================================================

#[tokio::test]
async fn test_genre_page_loads_and_plays() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("jazz", Reply::Albums(vec![album("1", "Kind of Blue")]));
    let provider = PlayerProvider::new();

    let mut page = GenrePage::new("jazz", "India", catalog.clone(), provider.handle());
    assert_eq!(page.title(), "Jazz • India");

    page.mount().await;
    let albums = page.albums().value().unwrap();
    assert_eq!(albums.len(), 1);

    page.play(&albums[0]).unwrap();
    let snap = provider.snapshot();
    assert_eq!(snap.mode(), PlaybackMode::PlayingMusic);
    let track = snap.current_track.unwrap();
    assert_eq!(track.title, "Kind of Blue");
    assert_eq!(track.duration, "3:45");
}

#[tokio::test]
async fn test_genre_page_failure_message() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("rock", Reply::Status(500));

    let mut page = GenrePage::new("rock", "India", catalog, PlayerProvider::new().handle());
    page.mount().await;

    let message = page.albums().error().unwrap();
    assert!(message.contains("500"), "unexpected message: {}", message);
}

#[tokio::test]
async fn test_torn_down_view_never_applies_result() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("pop", Reply::Hang);

    let mut page = GenrePage::new("pop", "India", catalog, PlayerProvider::new().handle());
    let token = page.scope().token().clone();

    tokio::join!(page.mount(), async { token.cancel() });

    assert!(!page.scope().is_active());
    assert_eq!(*page.albums(), FetchState::Idle);
}

// ============================================================================
// Home
// ============================================================================

#[tokio::test]
async fn test_home_sections_load_concurrently() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("trending", Reply::Albums(vec![album("1", "Midnight Dreams")]));
    catalog.reply("recent", Reply::Albums(vec![album("6", "Summer Vibes")]));

    let mut page = HomePage::new(catalog.clone(), PlayerProvider::new().handle());
    page.mount().await;

    assert_eq!(page.trending().albums[0].title, "Midnight Dreams");
    assert_eq!(page.recent().albums[0].title, "Summer Vibes");
    assert!(!page.trending().loading && !page.recent().loading);

    let mut calls = catalog.calls();
    calls.sort();
    assert_eq!(calls, vec!["recent", "trending"]);
}

#[tokio::test]
async fn test_failed_secondary_keeps_previous_items() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("trending", Reply::Albums(vec![album("1", "Midnight Dreams")]));
    catalog.reply("recent", Reply::Albums(vec![album("6", "Summer Vibes")]));

    let mut page = HomePage::new(catalog.clone(), PlayerProvider::new().handle());
    page.mount().await;

    catalog.reply("recent", Reply::Status(500));
    page.mount().await;

    let recent = page.recent();
    assert_eq!(recent.albums.len(), 1);
    assert_eq!(recent.albums[0].title, "Summer Vibes");
    assert!(recent.error.as_deref().unwrap().contains("500"));

    // the primary row is not blocked by the failure
    assert_eq!(page.trending().albums.len(), 1);
    assert!(page.trending().error.is_none());
}

#[tokio::test]
async fn test_cancelled_home_mount_stops_loading() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("trending", Reply::Hang);
    catalog.reply("recent", Reply::Hang);

    let mut page = HomePage::new(catalog, PlayerProvider::new().handle());
    let token = page.scope().token().clone();

    tokio::join!(page.mount(), async { token.cancel() });

    for section in [page.trending(), page.recent()] {
        assert!(!section.loading, "{} still loading", section.query);
        assert!(section.albums.is_empty());
        assert!(section.error.is_none());
    }
}

#[tokio::test]
async fn test_failed_primary_clears_items() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("trending", Reply::Albums(vec![album("1", "Midnight Dreams")]));

    let mut page = HomePage::new(catalog.clone(), PlayerProvider::new().handle());
    page.mount().await;
    assert_eq!(page.trending().albums.len(), 1);

    catalog.reply("trending", Reply::Status(503));
    page.mount().await;

    assert!(page.trending().albums.is_empty());
    assert!(page.trending().error.as_deref().unwrap().contains("503"));
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_suggestions_and_results() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("luna", Reply::Albums(vec![album("1", "Midnight Dreams")]));
    let mut page = SearchPage::new(catalog, PlayerProvider::new().handle());

    let suggestions = page.suggestions().unwrap();
    assert_eq!(suggestions.recent[0], "Luna Wave");
    assert_eq!(suggestions.trending.len(), 6);

    page.submit("  luna ").unwrap().await.unwrap();
    assert_eq!(page.query(), "luna");
    assert!(page.suggestions().is_none());
    assert_eq!(page.results().value().unwrap()[0].title, "Midnight Dreams");

    assert!(page.submit("").is_none());
    assert_eq!(page.results(), FetchState::Idle);
    assert!(page.suggestions().is_some());
}

#[tokio::test]
async fn test_new_submission_cancels_previous() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("slow", Reply::Hang);
    catalog.reply("fast", Reply::Albums(vec![album("2", "Electric Pulse")]));
    let mut page = SearchPage::new(catalog, PlayerProvider::new().handle());

    let first = page.submit("slow").unwrap();
    let second = page.submit("fast").unwrap();

    // the superseded request returns promptly instead of hanging
    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(page.query(), "fast");
    assert_eq!(page.results().value().unwrap()[0].title, "Electric Pulse");
}

#[tokio::test]
async fn test_dropping_search_page_cancels_request() {
    let catalog = Arc::new(FakeCatalog::default());
    catalog.reply("slow", Reply::Hang);
    let mut page = SearchPage::new(catalog, PlayerProvider::new().handle());

    let task = page.submit("slow").unwrap();
    drop(page);

    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("request still running after teardown")
        .unwrap();
}

// ============================================================================
// Radio
// ============================================================================

struct FakeDirectory {
    stations: Vec<DirectoryStation>,
}

#[async_trait]
impl StationDirectory for FakeDirectory {
    async fn stations_by_country(&self, country: &str) -> mfradio::Result<Vec<DirectoryStation>> {
        if country == "India" {
            Ok(self.stations.clone())
        } else {
            Err(mfradio::Error::ApiError("API returned status: 404 Not Found".to_string()))
        }
    }
}

fn directory_station(id: &str, name: &str, language: &str, live: bool) -> DirectoryStation {
    DirectoryStation {
        stationuuid: id.to_string(),
        name: name.to_string(),
        language: Some(language.to_string()),
        lastcheckok: Some(live as u8),
        ..Default::default()
    }
}

fn directory() -> Arc<FakeDirectory> {
    Arc::new(FakeDirectory {
        stations: vec![
            directory_station("s1", "Radio Mirchi", "hindi", true),
            directory_station("s2", "Hello FM", "tamil", false),
            directory_station("s3", "Vividh Bharati", "hindi", true),
        ],
    })
}

#[tokio::test]
async fn test_radio_page_regions_and_live_count() {
    let mut page = RadioPage::new("India", directory(), PlayerProvider::new().handle());
    page.mount().await;

    assert_eq!(page.stations().len(), 3);
    assert_eq!(page.live_count(), 2);

    page.select_region(Some("Tamil"));
    let names: Vec<String> = page.stations().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Hello FM"]);
    assert_eq!(page.live_count(), 0);

    page.select_region(Some("Atlantis"));
    assert_eq!(page.selected_region(), Some("Tamil"));

    page.select_region(None);
    assert_eq!(page.stations().len(), 3);

    let groups = page.groups();
    assert_eq!(groups[0].region, "Hindi");
    assert_eq!(groups[0].stations.len(), 2);
}

#[tokio::test]
async fn test_radio_play_stops_music() {
    let provider = PlayerProvider::new();
    let player = provider.handle();
    player
        .play_track(mfmodel::TrackRef::new("A", "B", "u", "3:00"))
        .unwrap();

    let mut page = RadioPage::new("India", directory(), provider.handle());
    page.mount().await;

    let station: RadioStation = page.stations().remove(0);
    page.play(&station).unwrap();

    let snap = provider.snapshot();
    assert!(snap.is_radio_playing);
    assert!(!snap.is_music_playing);
    assert!(snap.current_track.is_some());
    assert!(page.is_playing(&station).unwrap());
}

#[tokio::test]
async fn test_radio_page_failure() {
    let mut page = RadioPage::new("Atlantis", directory(), PlayerProvider::new().handle());
    page.mount().await;

    assert!(page.state().error().unwrap().contains("404"));
    assert!(page.stations().is_empty());
    assert_eq!(page.live_count(), 0);
}
