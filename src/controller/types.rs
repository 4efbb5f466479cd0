//! Controller states and errors.

use crate::geolocation::GeolocationError;
use thiserror::Error;

/// Alert shown when the position cannot be determined.
pub const POSITION_UNAVAILABLE_MESSAGE: &str = "Could not get your position";

/// Alert shown when a submitted form fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be positive numbers";

/// Interaction state of the workout controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Waiting for the position request to answer
    #[default]
    AwaitingPosition,
    /// Position could not be determined; the map never loads
    PositionUnavailable,
    /// Map shown, waiting for a click
    MapReady,
    /// Form shown for the last clicked location
    FormOpen,
}

impl std::fmt::Display for ControllerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerState::AwaitingPosition => write!(f, "Locating you..."),
            ControllerState::PositionUnavailable => write!(f, "Position unavailable"),
            ControllerState::MapReady => write!(f, "Click on the map to log a workout"),
            ControllerState::FormOpen => write!(f, "Fill in the workout details"),
        }
    }
}

/// Errors surfaced by controller operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// Geolocation failed or is unsupported
    #[error("Could not get your position: {0}")]
    PositionUnavailable(#[from] GeolocationError),

    /// A required form value is not finite or not positive
    #[error("Inputs have to be positive numbers")]
    InvalidWorkoutInput,

    /// No map is available to click on
    #[error("Map is not available")]
    MapUnavailable,

    /// Submission without an open form
    #[error("Workout form is not open")]
    FormNotOpen,

    /// Input arrived while an alert is waiting to be dismissed
    #[error("An alert is waiting to be dismissed")]
    AlertPending,
}
