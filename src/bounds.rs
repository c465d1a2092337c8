use geo::{Destination, Haversine, Point};
use serde::{Deserialize, Serialize};

/// Kilometres per degree of latitude.
const KM_PER_DEGREE: f64 = 111.0;

pub const DEFAULT_LATITUDE_SPAN: f64 = 0.00922;
pub const DEFAULT_LONGITUDE_SPAN: f64 = 0.00521;

/// Visible map region as reported by the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl Viewport {
    /// Region centred on a point with the default zoom of the map screens.
    pub fn around(lat: f64, lon: f64) -> Self {
        Self {
            center_latitude: lat,
            center_longitude: lon,
            latitude_span: DEFAULT_LATITUDE_SPAN,
            longitude_span: DEFAULT_LONGITUDE_SPAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Projects the viewport centre outwards by half of each span along the four
/// compass bearings.
///
/// Spans are converted to distances with the flat 111 km/degree rule, then
/// walked along the sphere, so the box follows real ground distance rather
/// than the raw angular deltas. Zero or negative spans, and viewports touching
/// a pole or the antimeridian, are not handled.
pub fn compute_bounds(viewport: &Viewport) -> GeoBoundingBox {
    let center = Point::new(viewport.center_longitude, viewport.center_latitude);

    let vertical_m = KM_PER_DEGREE * viewport.latitude_span / 2.0 * 1000.0;
    let horizontal_m = KM_PER_DEGREE * viewport.longitude_span / 2.0 * 1000.0;

    let south = Haversine.destination(center, 180.0, vertical_m);
    let west = Haversine.destination(center, -90.0, horizontal_m);
    let north = Haversine.destination(center, 0.0, vertical_m);
    let east = Haversine.destination(center, 90.0, horizontal_m);

    GeoBoundingBox {
        south: south.y(),
        west: west.x(),
        north: north.y(),
        east: east.x(),
    }
}
