//! Property-based tests for the polyline codec.
//!
//! # Invariants tested
//!
//! - **Round trip:** decoding an encoded path yields the same number of
//!   points, each within one unit of the codec precision.
//! - **Totality:** decoding arbitrary printable input never panics and only
//!   yields coordinates inside WGS84 bounds.

use proptest::prelude::*;
use wayfinder_core::{Coordinate, PathDecoder, Polyline, decode_path, encode_path};

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lon)| {
        Coordinate::new(lat, lon).expect("strategy stays within bounds")
    })
}

fn path_strategy() -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(coordinate_strategy(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: decode(encode(path)) reproduces the path at precision 5.
    #[test]
    fn round_trip_preserves_points(path in path_strategy()) {
        let decoded = decode_path(&encode_path(&path));
        prop_assert_eq!(decoded.len(), path.len());
        for (actual, expected) in decoded.iter().zip(&path) {
            prop_assert!(
                actual.approx_eq(*expected, 1e-5),
                "expected {:?}, got {:?}",
                expected,
                actual
            );
        }
    }

    /// Property: the precision 6 codec round-trips at its own tolerance.
    #[test]
    fn round_trip_at_precision_six(path in path_strategy()) {
        let codec = Polyline::new(6).expect("supported precision");
        let decoded = codec.decode(&codec.encode(&path));
        prop_assert_eq!(decoded.len(), path.len());
        for (actual, expected) in decoded.iter().zip(&path) {
            prop_assert!(actual.approx_eq(*expected, 1e-6));
        }
    }

    /// Property: arbitrary ASCII never panics the decoder and every decoded
    /// point is a valid coordinate.
    #[test]
    fn decoding_arbitrary_input_is_total(input in "[ -~]{0,64}") {
        for point in decode_path(&input) {
            prop_assert!((-90.0..=90.0).contains(&point.lat()));
            prop_assert!((-180.0..=180.0).contains(&point.lon()));
        }
    }
}
