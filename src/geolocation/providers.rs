//! Local geolocation providers.

use super::types::{GeolocationError, GeolocationProvider, Position, PositionRequest};

/// Answers every request immediately with a configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocation {
    position: Position,
}

impl FixedGeolocation {
    /// Create a provider that always reports `position`.
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl GeolocationProvider for FixedGeolocation {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn request_current_position(&self) -> Result<PositionRequest, GeolocationError> {
        let (responder, request) = PositionRequest::channel();
        responder.resolve(Ok(self.position));
        Ok(request)
    }
}

/// Stands in for a host without any geolocation capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeolocation;

impl GeolocationProvider for DisabledGeolocation {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn request_current_position(&self) -> Result<PositionRequest, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}
