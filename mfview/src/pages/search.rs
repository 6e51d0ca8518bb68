//! Free-text catalog search
//!
//! Each submission runs as its own task. Submitting again (or clearing the
//! query) cancels the request still in flight, so only the latest query can
//! ever land in the results.

use crate::fetch::FetchState;
use crate::scope::{race, ViewScope};
use mfcatalog::AlbumCatalog;
use mfmodel::Album;
use mfplayer::PlayerHandle;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const RECENT_SEARCHES: &[&str] = &[
    "Luna Wave",
    "Electronic",
    "Jazz Playlist",
    "Chill Vibes",
    "Rock Classics",
];

pub const TRENDING_SEARCHES: &[&str] = &[
    "Summer Hits 2024",
    "Workout Mix",
    "Study Music",
    "Party Anthems",
    "Relaxing Piano",
    "Top 50 Global",
];

/// Shown while the query is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestions {
    pub recent: &'static [&'static str],
    pub trending: &'static [&'static str],
}

#[derive(Debug, Default)]
struct Results {
    query: String,
    albums: FetchState<Vec<Album>>,
}

pub struct SearchPage {
    catalog: Arc<dyn AlbumCatalog>,
    player: PlayerHandle,
    scope: ViewScope,
    results: Arc<Mutex<Results>>,
    in_flight: Option<CancellationToken>,
}

impl SearchPage {
    pub fn new(catalog: Arc<dyn AlbumCatalog>, player: PlayerHandle) -> Self {
        Self {
            catalog,
            player,
            scope: ViewScope::new("search"),
            results: Arc::new(Mutex::new(Results::default())),
            in_flight: None,
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    pub fn results(&self) -> FetchState<Vec<Album>> {
        self.lock().albums.clone()
    }

    /// Static suggestions, only while no query is entered
    pub fn suggestions(&self) -> Option<Suggestions> {
        self.lock().query.is_empty().then_some(Suggestions {
            recent: RECENT_SEARCHES,
            trending: TRENDING_SEARCHES,
        })
    }

    /// Start a search for `query`
    ///
    /// The returned task finishes once the results are applied or the
    /// request was superseded. An empty query clears the page and spawns
    /// nothing.
    ///
    /// # Panics
    ///
    /// Panics if a non-empty query is submitted outside a Tokio runtime.
    pub fn submit(&mut self, query: &str) -> Option<JoinHandle<()>> {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }

        let query = query.trim().to_string();
        {
            let mut results = self.lock();
            results.query = query.clone();
            results.albums = if query.is_empty() {
                FetchState::Idle
            } else {
                FetchState::Loading
            };
        }
        if query.is_empty() {
            return None;
        }

        debug!(query = %query, "Submitting search");
        let token = self.scope.child_token();
        self.in_flight = Some(token.clone());

        let catalog = Arc::clone(&self.catalog);
        let results = Arc::clone(&self.results);
        Some(tokio::spawn(async move {
            let outcome = race(&token, catalog.search_albums(&query)).await;
            let mut results = results.lock().unwrap_or_else(PoisonError::into_inner);
            if !token.is_cancelled() && results.query == query {
                results.albums.apply(outcome);
            }
        }))
    }

    /// Play a result card
    pub fn play(&self, album: &Album) -> crate::Result<()> {
        self.player.play_track(album.to_track_ref())?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Results> {
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
