//! Mapty - Map-based workout log
//!
//! Log runs and bike rides by clicking where they happened on a map. The
//! workout model and the controller driving the click → form → workout flow
//! are independent of the GUI; the map, geolocation and list are reached
//! through traits.

pub mod controller;
pub mod geolocation;
pub mod map;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use controller::{ControllerError, ControllerState, WorkoutController};
pub use geolocation::{GeolocationProvider, Position};
pub use map::{MapWidget, TileMap};
pub use storage::config::AppConfig;
pub use workouts::{Coords, Workout, WorkoutType};
