//! Reverse geocoding port.

use super::Coordinates;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for geocoder lookups.
pub type GeocoderResult<T> = Result<T, GeocoderError>;

/// Reverse lookup of coordinates to a human-readable place name.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the place name for the coordinates, or `None` when the
    /// service knows no name for them.
    ///
    /// # Errors
    ///
    /// Returns [`GeocoderError::Unavailable`] when the service cannot be
    /// reached or answers with an error.
    async fn reverse(&self, coordinates: Coordinates) -> GeocoderResult<Option<String>>;
}

/// Errors returned by geocoder implementations.
#[derive(Debug, Clone, Error)]
pub enum GeocoderError {
    /// The lookup service failed.
    #[error("geocoder unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl GeocoderError {
    /// Wraps a lookup failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}

/// Geocoder for deployments without a lookup service; it never knows a
/// place name.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGeocoder;

#[async_trait]
impl Geocoder for OfflineGeocoder {
    async fn reverse(&self, _coordinates: Coordinates) -> GeocoderResult<Option<String>> {
        Ok(None)
    }
}
