//! Standalone Leaflet page for a [`MapView`].
//!
//! The page loads Leaflet and OpenStreetMap tiles from public CDNs, draws the
//! route as a blue polyline and pins both endpoints with coloured markers.
//! Map data is embedded as JSON; marker labels are inserted as text nodes so
//! place names are never interpreted as HTML.

use serde::Serialize;
use wayfinder_core::{MapView, Marker};

const LEAFLET_VERSION: &str = "1.9.4";
const ROUTE_COLOUR: &str = "blue";
const ROUTE_WEIGHT: f64 = 2.5;
const ROUTE_OPACITY: f64 = 1.0;

#[derive(Debug, Serialize)]
struct PageData<'a> {
    center: [f64; 2],
    zoom: u8,
    route: RouteStyle,
    path: Vec<[f64; 2]>,
    markers: Vec<PageMarker<'a>>,
}

#[derive(Debug, Serialize)]
struct RouteStyle {
    color: &'static str,
    weight: f64,
    opacity: f64,
}

#[derive(Debug, Serialize)]
struct PageMarker<'a> {
    position: [f64; 2],
    label: &'a str,
    colour: &'static str,
}

impl<'a> From<&'a Marker> for PageMarker<'a> {
    fn from(marker: &'a Marker) -> Self {
        Self {
            position: [marker.position.lat(), marker.position.lon()],
            label: &marker.label,
            colour: marker.colour.as_str(),
        }
    }
}

/// Render `view` as a self-contained HTML document.
pub(crate) fn render_leaflet(view: &MapView) -> Result<String, serde_json::Error> {
    let data = PageData {
        center: [view.center.lat(), view.center.lon()],
        zoom: view.zoom,
        route: RouteStyle {
            color: ROUTE_COLOUR,
            weight: ROUTE_WEIGHT,
            opacity: ROUTE_OPACITY,
        },
        path: view.lat_lon_pairs(),
        markers: view.markers().into_iter().map(PageMarker::from).collect(),
    };
    // `<` never appears in JSON syntax, only inside strings, so escaping it
    // keeps `</script>` in a place name from closing the script element.
    let json = serde_json::to_string(&data)?.replace('<', "\\u003c");
    let heading = format!(
        "{} to {}",
        view.start_marker.label, view.destination_marker.label
    );
    let title = html_escape::encode_text(&heading);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
const data = {json};
const map = L.map("map").setView(data.center, data.zoom);
L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
  maxZoom: 19,
  attribution: "&copy; OpenStreetMap contributors"
}}).addTo(map);
L.polyline(data.path, data.route).addTo(map);
for (const marker of data.markers) {{
  const popup = document.createElement("span");
  popup.textContent = marker.label;
  L.circleMarker(marker.position, {{
    radius: 8,
    color: marker.colour,
    fillColor: marker.colour,
    fillOpacity: 0.9
  }}).bindPopup(popup).addTo(map);
}}
</script>
</body>
</html>
"#
    ))
}
