//! Interaction controller between map, form and workouts.

pub mod form;
pub mod types;
pub mod workout_controller;

pub use form::{coerce_number, FormField, FormValues, WorkoutForm};
pub use types::{
    ControllerError, ControllerState, INVALID_INPUT_MESSAGE, POSITION_UNAVAILABLE_MESSAGE,
};
pub use workout_controller::{render_workout_marker, WorkoutController};
