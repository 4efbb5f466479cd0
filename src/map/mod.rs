//! Map widget abstraction and the walkers tile map implementation.
//!
//! The controller only talks to [`MapWidget`]; clicks reach the controller
//! from whoever renders the map, as plain coordinates.

pub mod markers;
pub mod tile_map;
pub mod tiles;

pub use markers::Popup;
pub use tile_map::{MapView, TileMap};
pub use tiles::{http_tiles, StadiaOutdoors};

use crate::workouts::{Coords, WorkoutType};

/// Widest a workout popup may grow.
pub const POPUP_MAX_WIDTH: f32 = 250.0;
/// Narrowest a workout popup may shrink.
pub const POPUP_MIN_WIDTH: f32 = 100.0;

/// Identifies a marker added to a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub usize);

/// Popup configuration attached to a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    /// Maximum width in points
    pub max_width: f32,
    /// Minimum width in points
    pub min_width: f32,
    /// Close when another popup opens
    pub auto_close: bool,
    /// Close when the map is clicked
    pub close_on_click: bool,
    /// Style class
    pub class_name: String,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: 300.0,
            min_width: 50.0,
            auto_close: true,
            close_on_click: true,
            class_name: String::new(),
        }
    }
}

impl PopupOptions {
    /// Sticky popup styled for a workout type.
    pub fn for_workout(workout_type: WorkoutType) -> Self {
        Self {
            max_width: POPUP_MAX_WIDTH,
            min_width: POPUP_MIN_WIDTH,
            auto_close: false,
            close_on_click: false,
            class_name: workout_type.popup_class(),
        }
    }
}

/// Operations the controller needs from a map.
///
/// Calls with unknown marker handles are ignored.
pub trait MapWidget {
    /// Show the map centered at `center` with the given zoom.
    fn create_view(&mut self, center: Coords, zoom: u8);

    /// Place a marker and return its handle.
    fn add_marker(&mut self, coords: Coords) -> MarkerHandle;

    /// Attach a (closed, empty) popup to a marker.
    fn bind_popup(&mut self, marker: MarkerHandle, options: PopupOptions);

    /// Set the text shown in a marker's popup.
    fn set_popup_content(&mut self, marker: MarkerHandle, content: &str);

    /// Open a marker's popup.
    fn open_popup(&mut self, marker: MarkerHandle);
}
