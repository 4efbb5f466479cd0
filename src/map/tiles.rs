//! HTTP tile sources for the map.

use std::path::{Path, PathBuf};

use walkers::sources::{Attribution, OpenStreetMap, TileSource};
use walkers::{HeaderValue, HttpOptions, HttpTiles, TileId};

use crate::storage::config::{MapSettings, TileProvider};

/// Base URL of the Stadia Maps outdoors style.
pub const STADIA_OUTDOORS_URL: &str = "https://tiles.stadiamaps.com/tiles/outdoors";
/// Deepest zoom the outdoors style serves.
pub const STADIA_MAX_ZOOM: u8 = 20;

/// Stadia Maps outdoors raster tiles.
///
/// Requests without an API key are only accepted from localhost.
#[derive(Debug, Clone, Default)]
pub struct StadiaOutdoors {
    api_key: Option<String>,
}

impl StadiaOutdoors {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl TileSource for StadiaOutdoors {
    fn tile_url(&self, tile_id: TileId) -> String {
        let url = format!(
            "{}/{}/{}/{}.png",
            STADIA_OUTDOORS_URL, tile_id.zoom, tile_id.x, tile_id.y
        );
        match &self.api_key {
            Some(key) => format!("{}?api_key={}", url, key),
            None => url,
        }
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "Stadia Maps © OpenMapTiles © OpenStreetMap",
            url: "https://stadiamaps.com/",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        STADIA_MAX_ZOOM
    }
}

/// Directory for downloaded tiles, if caching is enabled.
pub fn tile_cache_dir(settings: &MapSettings, data_dir: &Path) -> Option<PathBuf> {
    if !settings.cache_tiles || data_dir.as_os_str().is_empty() {
        return None;
    }
    Some(data_dir.join("tiles"))
}

/// Build the tile downloader selected in the map settings.
///
/// Returns `None` when tiles are disabled.
pub fn http_tiles(settings: &MapSettings, data_dir: &Path, ctx: egui::Context) -> Option<HttpTiles> {
    let options = HttpOptions {
        cache: tile_cache_dir(settings, data_dir),
        user_agent: Some(HeaderValue::from_static(concat!(
            "mapty/",
            env!("CARGO_PKG_VERSION")
        ))),
        ..HttpOptions::default()
    };

    tracing::info!(
        "Map tiles: {:?} (cache: {:?})",
        settings.tiles,
        options.cache
    );

    let tiles = match settings.tiles {
        TileProvider::StadiaOutdoors => HttpTiles::with_options(
            StadiaOutdoors::new(settings.api_key.clone()),
            options,
            ctx,
        ),
        TileProvider::OpenStreetMap => HttpTiles::with_options(OpenStreetMap, options, ctx),
        TileProvider::None => return None,
    };
    Some(tiles)
}
