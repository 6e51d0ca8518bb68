//! Albums of one genre

use crate::error::Result;
use crate::fetch::FetchState;
use crate::scope::ViewScope;
use mfcatalog::AlbumCatalog;
use mfmodel::Album;
use mfplayer::PlayerHandle;
use std::sync::Arc;
use tracing::info;

pub struct GenrePage {
    genre: String,
    country_label: String,
    catalog: Arc<dyn AlbumCatalog>,
    player: PlayerHandle,
    scope: ViewScope,
    albums: FetchState<Vec<Album>>,
}

impl GenrePage {
    pub fn new(
        genre: impl Into<String>,
        country_label: impl Into<String>,
        catalog: Arc<dyn AlbumCatalog>,
        player: PlayerHandle,
    ) -> Self {
        let genre = genre.into();
        Self {
            scope: ViewScope::new(format!("genre:{}", genre)),
            genre,
            country_label: country_label.into(),
            catalog,
            player,
            albums: FetchState::Idle,
        }
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// "Jazz • India"
    pub fn title(&self) -> String {
        format!("{} • {}", capitalize(&self.genre), self.country_label)
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn albums(&self) -> &FetchState<Vec<Album>> {
        &self.albums
    }

    /// Search the catalog for the genre once the page is shown
    pub async fn mount(&mut self) {
        self.albums = FetchState::Loading;
        let result = self.scope.fetch(self.catalog.search_albums(&self.genre)).await;
        self.albums.apply(result);
    }

    /// Play the album card's track
    pub fn play(&self, album: &Album) -> Result<()> {
        info!(album = %album.title, "Playing album from genre page");
        self.player.play_track(album.to_track_ref())?;
        Ok(())
    }
}

/// Upper-case the first character, leave the rest as typed
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
