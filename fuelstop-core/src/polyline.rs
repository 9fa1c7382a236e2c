//! Decoding of Google encoded polylines.
//!
//! Routing providers such as OSRM return route geometry as an encoded
//! polyline. Decoding happens at the boundary so the rest of the engine only
//! sees [`Coord`] values (`x = longitude`, `y = latitude`).

use geo::Coord;
use thiserror::Error;

/// Precision used by OSRM and the Google Directions API.
pub const DEFAULT_POLYLINE_PRECISION: u8 = 5;

/// Error returned by [`decode_polyline`] for malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid encoded polyline: {message}")]
pub struct PolylineError {
    message: String,
}

impl PolylineError {
    /// Decoder diagnostic describing the malformed input.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<polyline::errors::PolylineError> for PolylineError {
    fn from(err: polyline::errors::PolylineError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Decode an encoded polyline into coordinates.
///
/// # Errors
/// Returns [`PolylineError`] when the input is not a well-formed polyline or
/// decodes to positions outside the WGS84 range.
///
/// # Examples
/// ```
/// use fuelstop_core::{decode_polyline, DEFAULT_POLYLINE_PRECISION};
///
/// let coords = decode_polyline("_p~iF~ps|U_ulLnnqC", DEFAULT_POLYLINE_PRECISION).unwrap();
/// assert_eq!(coords.len(), 2);
/// assert!((coords[0].y - 38.5).abs() < 1e-9);
/// assert!((coords[0].x + 120.2).abs() < 1e-9);
/// ```
pub fn decode_polyline(encoded: &str, precision: u8) -> Result<Vec<Coord<f64>>, PolylineError> {
    match polyline::decode_polyline(encoded, u32::from(precision)) {
        Ok(line) => Ok(line.0),
        Err(err) => {
            log::debug!("rejecting {} byte polyline: {err}", encoded.len());
            Err(err.into())
        }
    }
}
