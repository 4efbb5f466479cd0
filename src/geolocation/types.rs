//! Geolocation types: positions, errors and the one-shot position request.

use crate::workouts::Coords;
use crossbeam::channel::{Receiver, Sender, TryRecvError};
use thiserror::Error;

/// A resolved device position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Position as map coordinates.
    pub fn coords(&self) -> Coords {
        Coords::new(self.latitude, self.longitude)
    }

    /// Link to this position on Google Maps.
    pub fn maps_link(&self) -> String {
        format!(
            "https://www.google.com/maps/@{},{}",
            self.latitude, self.longitude
        )
    }
}

/// Errors while acquiring the current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    /// No geolocation capability is available
    #[error("Geolocation is not supported")]
    Unsupported,

    /// The provider refused to locate the device
    #[error("Position request denied: {0}")]
    Denied(String),

    /// The lookup itself failed
    #[error("Position request failed: {0}")]
    RequestFailed(String),

    /// The provider went away without answering
    #[error("Position provider stopped without answering")]
    Dropped,
}

/// Result delivered by a position request.
pub type PositionResult = Result<Position, GeolocationError>;

/// Pending answer to a single position request.
///
/// The provider side holds the matching [`PositionResponder`]. Polling never
/// blocks; a request whose provider never answers stays pending forever.
#[derive(Debug)]
pub struct PositionRequest {
    rx: Receiver<PositionResult>,
}

/// Provider side of a [`PositionRequest`]. Answers exactly once.
#[derive(Debug)]
pub struct PositionResponder {
    tx: Sender<PositionResult>,
}

impl PositionRequest {
    /// Create a connected responder/request pair.
    pub fn channel() -> (PositionResponder, PositionRequest) {
        let (tx, rx) = crossbeam::channel::bounded(1);
        (PositionResponder { tx }, PositionRequest { rx })
    }

    /// Check for an answer without blocking.
    ///
    /// Returns `None` while the request is still pending.
    pub fn poll(&self) -> Option<PositionResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(GeolocationError::Dropped)),
        }
    }
}

impl PositionResponder {
    /// Deliver the answer, consuming the responder.
    pub fn resolve(self, result: PositionResult) {
        if self.tx.send(result).is_err() {
            tracing::debug!("Position request was dropped before the answer arrived");
        }
    }
}

/// A source of the device's current position.
pub trait GeolocationProvider {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Start a single asynchronous position request.
    ///
    /// Returns `Err(GeolocationError::Unsupported)` when the provider has no
    /// capability to locate the device at all.
    fn request_current_position(&self) -> Result<PositionRequest, GeolocationError>;
}
