//! Landing page: trending and recent album rows
//!
//! Both rows are fetched concurrently and joined. The trending row is the
//! primary content: a failure clears it. The recent row is secondary: a
//! failure keeps whatever it showed before and only reports the error.

use crate::error::Result;
use crate::scope::ViewScope;
use mfcatalog::AlbumCatalog;
use mfmodel::Album;
use mfplayer::PlayerHandle;
use std::sync::Arc;
use tracing::warn;

pub const DEFAULT_TRENDING_QUERY: &str = "trending";
pub const DEFAULT_RECENT_QUERY: &str = "recent";

/// One row of album cards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub query: String,
    pub albums: Vec<Album>,
    pub error: Option<String>,
    pub loading: bool,
}

impl Section {
    fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Returns false when the fetch was cancelled; only `loading` is reset then
    fn apply(&mut self, result: Result<Vec<Album>>, keep_on_error: bool) -> bool {
        self.loading = false;
        match result {
            Ok(albums) => {
                self.albums = albums;
                self.error = None;
            }
            Err(e) if e.is_cancelled() => return false,
            Err(e) => {
                warn!(query = %self.query, error = %e, "Home section failed");
                if !keep_on_error {
                    self.albums.clear();
                }
                self.error = Some(e.to_string());
            }
        }
        true
    }
}

pub struct HomePage {
    catalog: Arc<dyn AlbumCatalog>,
    player: PlayerHandle,
    scope: ViewScope,
    trending: Section,
    recent: Section,
}

impl HomePage {
    pub fn new(catalog: Arc<dyn AlbumCatalog>, player: PlayerHandle) -> Self {
        Self::with_queries(catalog, player, DEFAULT_TRENDING_QUERY, DEFAULT_RECENT_QUERY)
    }

    pub fn with_queries(
        catalog: Arc<dyn AlbumCatalog>,
        player: PlayerHandle,
        trending: impl Into<String>,
        recent: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            player,
            scope: ViewScope::new("home"),
            trending: Section::new(trending),
            recent: Section::new(recent),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn trending(&self) -> &Section {
        &self.trending
    }

    pub fn recent(&self) -> &Section {
        &self.recent
    }

    /// Fetch both rows; also used to refresh
    pub async fn mount(&mut self) {
        self.trending.loading = true;
        self.recent.loading = true;

        let (trending, recent) = tokio::join!(
            self.scope.fetch(self.catalog.search_albums(&self.trending.query)),
            self.scope.fetch(self.catalog.search_albums(&self.recent.query)),
        );

        self.trending.apply(trending, false);
        self.recent.apply(recent, true);
    }

    pub fn play(&self, album: &Album) -> Result<()> {
        self.player.play_track(album.to_track_ref())?;
        Ok(())
    }
}
