//! Network geolocation by IP address lookup.

use super::types::{GeolocationError, GeolocationProvider, Position, PositionRequest};

/// Default lookup endpoint. Answers with `latitude`/`longitude` JSON.
pub const DEFAULT_ENDPOINT: &str = "https://ipapi.co/json/";

/// Locates the device through an IP geolocation web service.
///
/// Each request runs on its own thread with a single-threaded tokio runtime
/// and reports back through the request's one-shot channel.
#[derive(Debug, Clone)]
pub struct IpGeolocation {
    client: reqwest::Client,
    endpoint: String,
}

impl IpGeolocation {
    /// Create a client for the default endpoint.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_ENDPOINT)
    }

    /// Create with a custom endpoint (self-hosted or testing).
    pub fn with_url(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// Endpoint queried by this client.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Look up the current position.
    pub async fn lookup(&self) -> Result<Position, GeolocationError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| GeolocationError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeolocationError::RequestFailed(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        let body: LocationResponse = response
            .json()
            .await
            .map_err(|e| GeolocationError::RequestFailed(e.to_string()))?;

        body.into_position()
    }
}

impl Default for IpGeolocation {
    fn default() -> Self {
        Self::new()
    }
}

impl GeolocationProvider for IpGeolocation {
    fn name(&self) -> &'static str {
        "ip"
    }

    fn request_current_position(&self) -> Result<PositionRequest, GeolocationError> {
        let (responder, request) = PositionRequest::channel();
        let service = self.clone();

        std::thread::Builder::new()
            .name("geolocation".to_string())
            .spawn(move || {
                let result = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime.block_on(service.lookup()),
                    Err(e) => Err(GeolocationError::RequestFailed(e.to_string())),
                };
                responder.resolve(result);
            })
            .map_err(|e| GeolocationError::RequestFailed(e.to_string()))?;

        Ok(request)
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct LocationResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

impl LocationResponse {
    fn into_position(self) -> Result<Position, GeolocationError> {
        if self.error {
            return Err(GeolocationError::Denied(
                self.reason.unwrap_or_else(|| "unknown reason".to_string()),
            ));
        }

        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Ok(Position::new(latitude, longitude))
            }
            _ => Err(GeolocationError::RequestFailed(
                "response did not contain a position".to_string(),
            )),
        }
    }
}
