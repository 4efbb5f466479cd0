//! Slippy map backed by walkers.
//!
//! Tiles come from an HTTP tile server and markers with their popups are
//! drawn on top. Without tiles the markers sit on a plain background.

use egui::{Align, Align2, FontId, Frame, Layout, PointerButton, Rect, RichText, Sense, Ui, UiBuilder};
use walkers::{lat_lon, HttpTiles, Map, MapMemory, Tiles};

use super::markers::{normalize_lng, Marker, MarkerLayer, Popup};
use super::{MapWidget, MarkerHandle, PopupOptions};
use crate::ui::theme::Theme;
use crate::workouts::Coords;

/// Lowest zoom level of the map.
pub const MIN_ZOOM: u8 = 1;
/// Deepest zoom walkers can display.
pub const ZOOM_LIMIT: u8 = 26;

/// Center and zoom of the visible map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coords,
    pub zoom: u8,
}

/// Interactive tile map.
pub struct TileMap {
    /// View created for the device position
    view: Option<MapView>,
    max_zoom: u8,
    memory: MapMemory,
    tiles: Option<HttpTiles>,
    markers: Vec<Marker>,
    /// Popup areas from the last frame; clicks there don't reach the map
    popup_rects: Vec<Rect>,
}

impl TileMap {
    /// Create a map without a view or tiles.
    pub fn new(max_zoom: u8) -> Self {
        Self {
            view: None,
            max_zoom: max_zoom.clamp(MIN_ZOOM, ZOOM_LIMIT),
            memory: MapMemory::default(),
            tiles: None,
            markers: Vec::new(),
            popup_rects: Vec::new(),
        }
    }

    /// Draw `tiles` under the markers.
    pub fn with_tiles(mut self, tiles: Option<HttpTiles>) -> Self {
        self.tiles = tiles;
        self
    }

    /// Current view, if one was created.
    pub fn view(&self) -> Option<MapView> {
        let view = self.view?;
        let center = self
            .memory
            .detached()
            .map(|p| Coords::new(p.y(), normalize_lng(p.x())))
            .unwrap_or(view.center);
        Some(MapView {
            center,
            zoom: self.memory.zoom().round() as u8,
        })
    }

    /// Number of markers on the map.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Position of a marker.
    pub fn marker_coords(&self, marker: MarkerHandle) -> Option<Coords> {
        self.markers.get(marker.0).map(|m| m.coords)
    }

    /// Popup bound to a marker.
    pub fn popup(&self, marker: MarkerHandle) -> Option<&Popup> {
        self.markers.get(marker.0).and_then(|m| m.popup.as_ref())
    }

    /// Close every open popup that closes on map clicks.
    pub fn register_click(&mut self) {
        for popup in self.markers.iter_mut().filter_map(|m| m.popup.as_mut()) {
            if popup.open && popup.options.close_on_click {
                popup.open = false;
            }
        }
    }

    /// Keep the zoom within `[MIN_ZOOM, max_zoom]` after user gestures.
    fn clamp_zoom(&mut self) {
        let zoom = self.memory.zoom();
        let clamped = zoom.clamp(MIN_ZOOM as f64, self.max_zoom as f64);
        if clamped != zoom {
            if let Err(e) = self.memory.set_zoom(clamped) {
                tracing::warn!("Could not set zoom {}: {}", clamped, e);
            }
        }
    }

    /// Draw the map and return the coordinates of a click on it, if any.
    pub fn show(&mut self, ui: &mut Ui, theme: Theme) -> Option<Coords> {
        let rect = ui.available_rect_before_wrap();
        ui.painter().rect_filled(rect, 0.0, theme.map_background());

        let Some(view) = self.view else {
            ui.allocate_rect(rect, Sense::hover());
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Map unavailable until your position is known",
                FontId::proportional(18.0),
                theme.text_secondary(),
            );
            return None;
        };

        let attribution = self.tiles.as_ref().map(|tiles| tiles.attribution());
        let tiles = self.tiles.as_mut().map(|tiles| tiles as &mut dyn Tiles);
        let mut popup_rects = Vec::new();
        let layer = MarkerLayer::new(&self.markers, theme, &mut popup_rects);
        let last_popup_rects = &self.popup_rects;

        let clicked = Map::new(tiles, &mut self.memory, lat_lon(view.center.lat, view.center.lng))
            .with_plugin(layer)
            .zoom_with_ctrl(false)
            .show(ui, |ui, response, projector, _memory| {
                if let Some(attribution) = &attribution {
                    paint_attribution(ui, response.rect, attribution.text, attribution.url, theme);
                }

                if !response.clicked_by(PointerButton::Primary) {
                    return None;
                }
                let pos = response.interact_pointer_pos()?;
                if last_popup_rects.iter().any(|r| r.contains(pos)) {
                    return None;
                }
                let position = projector.unproject(pos.to_vec2());
                Some(Coords::new(position.y(), normalize_lng(position.x())))
            })
            .inner;

        self.popup_rects = popup_rects;
        self.clamp_zoom();

        if clicked.is_some() {
            self.register_click();
        }
        clicked
    }
}

/// Tile attribution link in the bottom-right corner of the map.
fn paint_attribution(ui: &mut Ui, rect: Rect, text: &str, url: &str, theme: Theme) {
    ui.scope_builder(
        UiBuilder::new()
            .max_rect(rect.shrink(6.0))
            .layout(Layout::right_to_left(Align::Max)),
        |ui| {
            Frame::new()
                .fill(theme.popup_fill().gamma_multiply(0.85))
                .corner_radius(4.0)
                .inner_margin(4.0)
                .show(ui, |ui| {
                    ui.hyperlink_to(RichText::new(format!("© {}", text)).small(), url);
                });
        },
    );
}

impl MapWidget for TileMap {
    fn create_view(&mut self, center: Coords, zoom: u8) {
        let zoom = zoom.clamp(MIN_ZOOM, self.max_zoom);
        tracing::debug!("Map view at {} (zoom {})", center, zoom);
        self.memory.follow_my_position();
        if let Err(e) = self.memory.set_zoom(zoom as f64) {
            tracing::warn!("Could not set zoom {}: {}", zoom, e);
        }
        self.view = Some(MapView { center, zoom });
    }

    fn add_marker(&mut self, coords: Coords) -> MarkerHandle {
        self.markers.push(Marker {
            coords,
            popup: None,
        });
        MarkerHandle(self.markers.len() - 1)
    }

    fn bind_popup(&mut self, marker: MarkerHandle, options: PopupOptions) {
        match self.markers.get_mut(marker.0) {
            Some(m) => {
                m.popup = Some(Popup {
                    options,
                    content: String::new(),
                    open: false,
                })
            }
            None => tracing::warn!("bind_popup on unknown marker {:?}", marker),
        }
    }

    fn set_popup_content(&mut self, marker: MarkerHandle, content: &str) {
        match self.markers.get_mut(marker.0).and_then(|m| m.popup.as_mut()) {
            Some(popup) => popup.content = content.to_string(),
            None => tracing::warn!("set_popup_content on marker {:?} without popup", marker),
        }
    }

    fn open_popup(&mut self, marker: MarkerHandle) {
        if self.popup(marker).is_none() {
            tracing::warn!("open_popup on marker {:?} without popup", marker);
            return;
        }

        for (index, m) in self.markers.iter_mut().enumerate() {
            if let Some(popup) = m.popup.as_mut() {
                if index == marker.0 {
                    popup.open = true;
                } else if popup.open && popup.options.auto_close {
                    popup.open = false;
                }
            }
        }
    }
}
