//! Optional location lookup for the reporting flow.
//!
//! A reporter may share a position instead of typing a location. The
//! [`LocationResolver`] asks a [`Geocoder`] for a place name and degrades to
//! the raw coordinates when none is available.

mod coordinates;
mod geocoder;
mod resolver;


pub use coordinates::{Coordinates, CoordinatesError};
pub use geocoder::{Geocoder, GeocoderError, GeocoderResult, OfflineGeocoder};
pub use resolver::LocationResolver;
