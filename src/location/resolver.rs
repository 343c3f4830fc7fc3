//! Human-readable location text for a reported position.

use super::{Coordinates, Geocoder};
use std::sync::Arc;

/// Turns coordinates into location text for an issue report.
///
/// Lookup failures never surface: the raw coordinates are used instead.
#[derive(Clone)]
pub struct LocationResolver<G>
where
    G: Geocoder,
{
    geocoder: Arc<G>,
}

impl<G> LocationResolver<G>
where
    G: Geocoder,
{
    /// Creates a resolver backed by the geocoder.
    #[must_use]
    pub const fn new(geocoder: Arc<G>) -> Self {
        Self { geocoder }
    }

    /// Returns the place name for the coordinates, or `"<lat>, <lon>"` when
    /// the geocoder fails or has no answer.
    pub async fn describe(&self, coordinates: Coordinates) -> String {
        match self.geocoder.reverse(coordinates).await {
            Ok(Some(name)) if !name.trim().is_empty() => name.trim().to_owned(),
            Ok(_) => coordinates.to_string(),
            Err(err) => {
                tracing::warn!(
                    %coordinates,
                    error = %err,
                    "reverse geocoding failed; using raw coordinates"
                );
                coordinates.to_string()
            }
        }
    }
}
