//! Encoded polyline geometry.
//!
//! Routing services compress route geometry with the polyline algorithm:
//! each coordinate is scaled to an integer at a fixed decimal precision,
//! delta-encoded against its predecessor, zig-zag encoded and split into
//! 5-bit chunks offset into printable ASCII. Latitude precedes longitude.
//!
//! Decoding never fails. Malformed input (a byte outside the alphabet, a
//! value cut short, a dangling latitude without its longitude, or a point
//! outside WGS84 bounds) ends decoding and returns the points read so far.

use thiserror::Error;

use crate::Coordinate;

/// Decimal precision used by Google's polyline format and OSRM's `polyline`
/// geometry.
pub const DEFAULT_PRECISION: u8 = 5;

/// Highest precision [`Polyline`] accepts.
///
/// At seven decimal places every scaled WGS84 component still fits an
/// `i32`, so scaling and unscaling are exact.
pub const MAX_PRECISION: u8 = 7;

const ASCII_OFFSET: u8 = 63;
const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION: i64 = 0x20;
const MAX_CHUNK: i64 = 0x3f;
const MAX_SHIFT: u32 = 60;

/// Errors returned by [`Polyline::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// The requested precision exceeds [`MAX_PRECISION`].
    #[error("polyline precision {precision} exceeds the maximum of {MAX_PRECISION}")]
    UnsupportedPrecision {
        /// Rejected number of decimal places.
        precision: u8,
    },
}

/// Expand an encoded route geometry into ordered coordinates.
pub trait PathDecoder {
    /// Decode `encoded`, returning as many points as could be read.
    fn decode(&self, encoded: &str) -> Vec<Coordinate>;
}

impl<T: PathDecoder + ?Sized> PathDecoder for &T {
    fn decode(&self, encoded: &str) -> Vec<Coordinate> {
        (**self).decode(encoded)
    }
}

/// Polyline codec at a fixed decimal precision.
///
/// # Examples
/// ```
/// use wayfinder_core::{PathDecoder, Polyline};
///
/// let path = Polyline::default().decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// assert_eq!(path.len(), 3);
/// assert!((path[0].lat() - 38.5).abs() < 1e-9);
/// assert!((path[0].lon() + 120.2).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Polyline {
    precision: u8,
}

impl Default for Polyline {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Polyline {
    /// Create a codec with `precision` decimal places.
    ///
    /// OSRM emits precision 5 for `geometries=polyline` and 6 for
    /// `geometries=polyline6`.
    ///
    /// # Errors
    ///
    /// Returns [`PolylineError::UnsupportedPrecision`] when `precision` is
    /// above [`MAX_PRECISION`].
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Polyline, PolylineError};
    ///
    /// assert_eq!(Polyline::new(6)?.precision(), 6);
    /// assert_eq!(
    ///     Polyline::new(20),
    ///     Err(PolylineError::UnsupportedPrecision { precision: 20 })
    /// );
    /// # Ok::<(), PolylineError>(())
    /// ```
    pub const fn new(precision: u8) -> Result<Self, PolylineError> {
        if precision > MAX_PRECISION {
            return Err(PolylineError::UnsupportedPrecision { precision });
        }
        Ok(Self { precision })
    }

    /// Decimal places this codec works with.
    #[must_use]
    pub const fn precision(self) -> u8 {
        self.precision
    }

    fn factor(self) -> f64 {
        10_f64.powi(i32::from(self.precision))
    }

    /// Encode `path` into a polyline string.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Coordinate, Polyline};
    ///
    /// let path = [
    ///     Coordinate::new(38.5, -120.2)?,
    ///     Coordinate::new(40.7, -120.95)?,
    ///     Coordinate::new(43.252, -126.453)?,
    /// ];
    /// assert_eq!(Polyline::default().encode(&path), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
    /// # Ok::<(), wayfinder_core::CoordinateError>(())
    /// ```
    #[must_use]
    pub fn encode(self, path: &[Coordinate]) -> String {
        let factor = self.factor();
        let mut encoded = String::new();
        let mut previous = (0_i64, 0_i64);
        for coordinate in path {
            let current = (
                scale(coordinate.lat(), factor),
                scale(coordinate.lon(), factor),
            );
            push_value(&mut encoded, current.0 - previous.0);
            push_value(&mut encoded, current.1 - previous.1);
            previous = current;
        }
        encoded
    }
}

impl PathDecoder for Polyline {
    fn decode(&self, encoded: &str) -> Vec<Coordinate> {
        let factor = self.factor();
        let mut bytes = encoded.bytes();
        let mut path = Vec::new();
        let (mut lat, mut lon) = (0_i64, 0_i64);

        while let Some(lat_delta) = next_value(&mut bytes) {
            let Some(lon_delta) = next_value(&mut bytes) else {
                break;
            };
            let (Some(next_lat), Some(next_lon)) =
                (lat.checked_add(lat_delta), lon.checked_add(lon_delta))
            else {
                break;
            };
            lat = next_lat;
            lon = next_lon;
            let Some(coordinate) = unscale(lat, lon, factor) else {
                break;
            };
            path.push(coordinate);
        }
        path
    }
}

/// Decode `encoded` at the default precision.
#[must_use]
pub fn decode_path(encoded: &str) -> Vec<Coordinate> {
    Polyline::default().decode(encoded)
}

/// Encode `path` at the default precision.
#[must_use]
pub fn encode_path(path: &[Coordinate]) -> String {
    Polyline::default().encode(path)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "components are within ±180° and precision is capped, so the rounded value fits"
)]
fn scale(value: f64, factor: f64) -> i64 {
    (value * factor).round() as i64
}

/// Out-of-range or non-`i32` accumulators yield `None`.
fn unscale(lat: i64, lon: i64, factor: f64) -> Option<Coordinate> {
    let lat = f64::from(i32::try_from(lat).ok()?) / factor;
    let lon = f64::from(i32::try_from(lon).ok()?) / factor;
    Coordinate::new(lat, lon).ok()
}

fn push_value(encoded: &mut String, delta: i64) {
    let mut value = if delta < 0 {
        !(delta << 1)
    } else {
        delta << 1
    };
    while value >= CONTINUATION {
        encoded.extend(to_char(CONTINUATION | (value & CHUNK_MASK)));
        value >>= CHUNK_BITS;
    }
    encoded.extend(to_char(value));
}

fn to_char(chunk: i64) -> Option<char> {
    let bits = u8::try_from(chunk).ok().filter(|bits| i64::from(*bits) <= MAX_CHUNK)?;
    Some(char::from(bits + ASCII_OFFSET))
}

fn next_value(bytes: &mut impl Iterator<Item = u8>) -> Option<i64> {
    let mut result = 0_i64;
    let mut shift = 0_u32;
    loop {
        let chunk = i64::from(bytes.next()?.checked_sub(ASCII_OFFSET)?);
        if chunk > MAX_CHUNK || shift > MAX_SHIFT {
            return None;
        }
        result |= (chunk & CHUNK_MASK) << shift;
        shift += CHUNK_BITS;
        if chunk < CONTINUATION {
            break;
        }
    }
    Some(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    const REFERENCE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    #[fixture]
    fn reference_points() -> Vec<Coordinate> {
        [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]
            .into_iter()
            .map(|(lat, lon)| Coordinate::new(lat, lon).expect("valid coordinate"))
            .collect()
    }

    #[rstest]
    fn decodes_reference_polyline(reference_points: Vec<Coordinate>) {
        let decoded = decode_path(REFERENCE);
        assert_eq!(decoded.len(), reference_points.len());
        for (actual, expected) in decoded.iter().zip(&reference_points) {
            assert!(
                actual.approx_eq(*expected, 1e-5),
                "expected {expected:?}, got {actual:?}"
            );
        }
    }

    #[rstest]
    fn re_encoding_reproduces_reference() {
        assert_eq!(encode_path(&decode_path(REFERENCE)), REFERENCE);
    }

    #[rstest]
    fn empty_input_decodes_to_empty_path() {
        assert!(decode_path("").is_empty());
    }

    #[rstest]
    #[case::cut_mid_value(&REFERENCE[..REFERENCE.len() - 1], 2)]
    #[case::dangling_latitude("_p~iF~ps|U_ulL", 1)]
    #[case::byte_below_alphabet("_p~iF~ps|U !!", 1)]
    #[case::only_garbage("   ", 0)]
    fn malformed_input_truncates(#[case] encoded: &str, #[case] expected_len: usize) {
        assert_eq!(decode_path(encoded).len(), expected_len);
    }

    #[rstest]
    fn out_of_range_point_ends_decoding() {
        // 100° latitude encoded at precision 5 followed by a zero longitude.
        let mut encoded = String::new();
        push_value(&mut encoded, 10_000_000);
        push_value(&mut encoded, 0);
        assert!(decode_path(&encoded).is_empty());
    }

    #[rstest]
    fn precision_six_scales_by_a_further_decade(reference_points: Vec<Coordinate>) {
        let codec = Polyline::new(6).expect("supported precision");
        let encoded = codec.encode(&reference_points);
        let decoded = codec.decode(&encoded);
        assert_eq!(decoded.len(), 3);
        assert!(decoded[2].approx_eq(reference_points[2], 1e-6));

        let misread = decode_path(&encoded);
        assert!(
            misread.is_empty() || !misread[0].approx_eq(reference_points[0], 1e-3),
            "precision 5 must not silently read precision 6 data"
        );
    }

    #[rstest]
    #[case::eight(8)]
    #[case::twenty(20)]
    #[case::max_u8(u8::MAX)]
    fn rejects_precision_beyond_maximum(#[case] precision: u8) {
        assert_eq!(
            Polyline::new(precision),
            Err(PolylineError::UnsupportedPrecision { precision })
        );
    }

    #[rstest]
    fn maximum_precision_encodes_extreme_coordinates() {
        let codec = Polyline::new(MAX_PRECISION).expect("supported precision");
        let path = [(90.0, 180.0), (-90.0, -180.0), (50.0, 0.0), (-50.0, 0.0)]
            .map(|(lat, lon)| Coordinate::new(lat, lon).expect("valid coordinate"));

        let decoded = codec.decode(&codec.encode(&path));

        assert_eq!(decoded.len(), path.len());
        for (actual, expected) in decoded.iter().zip(&path) {
            assert!(actual.approx_eq(*expected, 1e-7), "got {actual:?}");
        }
    }
}
