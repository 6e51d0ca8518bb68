//! Live radio stations of one country

use crate::error::Result;
use crate::fetch::FetchState;
use crate::scope::ViewScope;
use mfmodel::RadioStation;
use mfplayer::PlayerHandle;
use mfradio::{classify, default_regions, DirectoryStation, Region, RegionGroup, StationDirectory};
use std::sync::Arc;
use tracing::{info, warn};

pub struct RadioPage {
    country: String,
    directory: Arc<dyn StationDirectory>,
    player: PlayerHandle,
    scope: ViewScope,
    regions: Vec<Region>,
    selected_region: Option<String>,
    stations: FetchState<Vec<DirectoryStation>>,
}

impl RadioPage {
    pub fn new(
        country: impl Into<String>,
        directory: Arc<dyn StationDirectory>,
        player: PlayerHandle,
    ) -> Self {
        Self {
            country: country.into(),
            directory,
            player,
            scope: ViewScope::new("radio"),
            regions: default_regions(),
            selected_region: None,
            stations: FetchState::Idle,
        }
    }

    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn state(&self) -> &FetchState<Vec<DirectoryStation>> {
        &self.stations
    }

    pub async fn mount(&mut self) {
        self.stations = FetchState::Loading;
        let result = self
            .scope
            .fetch(self.directory.stations_by_country(&self.country))
            .await;
        self.stations.apply(result);
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn selected_region(&self) -> Option<&str> {
        self.selected_region.as_deref()
    }

    /// Restrict the list to one region; `None` shows every station
    ///
    /// An unknown region name is ignored.
    pub fn select_region(&mut self, region: Option<&str>) {
        match region {
            None => self.selected_region = None,
            Some(name) if self.region(name).is_some() => {
                self.selected_region = Some(name.to_string())
            }
            Some(name) => warn!(region = name, "Unknown region"),
        }
    }

    /// Stations shown, in directory order, honouring the region filter
    pub fn stations(&self) -> Vec<RadioStation> {
        let Some(all) = self.stations.value() else {
            return Vec::new();
        };
        let selected = self.selected_region.as_deref().and_then(|n| self.region(n));
        all.iter()
            .filter(|s| selected.map_or(true, |r| r.matches(s)))
            .map(DirectoryStation::to_radio_station)
            .collect()
    }

    pub fn groups(&self) -> Vec<RegionGroup> {
        self.stations
            .value()
            .map(|all| classify(all, &self.regions))
            .unwrap_or_default()
    }

    /// "N stations live" counter
    pub fn live_count(&self) -> usize {
        self.stations().iter().filter(|s| s.live()).count()
    }

    pub fn play(&self, station: &RadioStation) -> Result<()> {
        info!(station = %station.name, "Tuning in");
        self.player.play_station(station.clone())?;
        Ok(())
    }

    /// True when `station` is the one on air
    pub fn is_playing(&self, station: &RadioStation) -> Result<bool> {
        let snapshot = self.player.snapshot()?;
        Ok(snapshot.is_radio_playing
            && snapshot
                .current_radio_station
                .is_some_and(|current| current.id == station.id))
    }

    fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }
}
