//! Renderer-agnostic description of a route map.
//!
//! A [`MapView`] carries everything a map surface needs to draw a
//! [`RoutePlan`]: a centre, a zoom level, the route as a line string, its
//! bounding box and two labelled markers. Rendering (HTML, tiles, terminal)
//! is left to the front end.

use geo::{BoundingRect, Coord, LineString, Rect};

use crate::{Coordinate, RoutePlan};

/// Zoom level used when a [`MapView`] is built from a plan.
pub const DEFAULT_ZOOM: u8 = 4;

/// Marker colours understood by common web map libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerColour {
    /// Used for the starting place.
    Green,
    /// Used for the destination.
    Red,
}

impl MarkerColour {
    /// Lower-case colour name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// A labelled pin on the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    /// Pin position.
    pub position: Coordinate,
    /// Popup text, the place name as entered.
    pub label: String,
    /// Pin colour.
    pub colour: MarkerColour,
}

/// Map view for a single route.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, DEFAULT_ZOOM, MapView, PlaceQuery, RoutePlan, RouteResult};
///
/// let paris = Coordinate::new(48.85, 2.35)?;
/// let berlin = Coordinate::new(52.52, 13.40)?;
/// let plan = RoutePlan {
///     start: PlaceQuery::new("Paris")?,
///     destination: PlaceQuery::new("Berlin")?,
///     start_coordinate: paris,
///     destination_coordinate: berlin,
///     route: RouteResult::new(1050.0, vec![paris, berlin])?,
/// };
///
/// let view = MapView::from_plan(&plan);
/// assert_eq!(view.zoom, DEFAULT_ZOOM);
/// assert_eq!(view.start_marker.label, "Paris");
/// assert_eq!(view.path.0.len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapView {
    /// Midpoint of the two endpoints.
    pub center: Coordinate,
    /// Initial zoom level.
    pub zoom: u8,
    /// Route overlay; `x` is longitude and `y` latitude.
    pub path: LineString<f64>,
    /// Bounding box of the overlay.
    pub bounds: Option<Rect<f64>>,
    /// Marker for the starting place.
    pub start_marker: Marker,
    /// Marker for the destination.
    pub destination_marker: Marker,
}

impl MapView {
    /// Build a view centred between the plan's endpoints.
    #[must_use]
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let path: LineString<f64> = plan
            .route
            .path()
            .iter()
            .copied()
            .map(Coord::from)
            .collect();
        let bounds = path.bounding_rect();
        Self {
            center: plan.start_coordinate.midpoint(plan.destination_coordinate),
            zoom: DEFAULT_ZOOM,
            path,
            bounds,
            start_marker: Marker {
                position: plan.start_coordinate,
                label: plan.start.to_string(),
                colour: MarkerColour::Green,
            },
            destination_marker: Marker {
                position: plan.destination_coordinate,
                label: plan.destination.to_string(),
                colour: MarkerColour::Red,
            },
        }
    }

    /// Override the initial zoom level.
    #[must_use]
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Both markers, start first.
    #[must_use]
    pub const fn markers(&self) -> [&Marker; 2] {
        [&self.start_marker, &self.destination_marker]
    }

    /// Overlay points as `[lat, lon]` pairs, the order web map libraries
    /// expect.
    #[must_use]
    pub fn lat_lon_pairs(&self) -> Vec<[f64; 2]> {
        self.path.coords().map(|coord| [coord.y, coord.x]).collect()
    }
}
