//! Geolocation providers answering one-shot position requests.

pub mod ip_lookup;
pub mod providers;
pub mod types;

pub use ip_lookup::IpGeolocation;
pub use providers::{DisabledGeolocation, FixedGeolocation};
pub use types::{
    GeolocationError, GeolocationProvider, Position, PositionRequest, PositionResponder,
    PositionResult,
};

use crate::storage::config::{GeolocationSettings, GeolocationSource};

/// Build the provider selected in the configuration.
pub fn provider_from_settings(settings: &GeolocationSettings) -> Box<dyn GeolocationProvider> {
    match settings.source {
        GeolocationSource::Ip => Box::new(IpGeolocation::with_url(&settings.endpoint)),
        GeolocationSource::Fixed => Box::new(FixedGeolocation::new(Position::new(
            settings.fixed_latitude,
            settings.fixed_longitude,
        ))),
        GeolocationSource::Disabled => Box::new(DisabledGeolocation),
    }
}
