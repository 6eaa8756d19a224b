//! Geometry -> compound SVG path synthesis.

use geo::Coord;

use crate::geom::{Center, Projector, centroid, simplify};
use crate::io::geojson::Geometry;

/// Compound path for one district and the label point computed over all of its parts.
#[derive(Clone, Debug, PartialEq)]
pub struct DistrictPath {
    pub data: String,
    pub center: Center,
}

impl DistrictPath {
    /// True when no polygon contributed any points.
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

/// Build the SVG path for a Polygon or MultiPolygon.
///
/// Each polygon contributes its outer ring only (holes are dropped), projected
/// to canvas space and simplified when `tolerance` is Some. Every part becomes
/// its own `M … Z` sub-path so exclaves render with the district. The center
/// is the vertex mean of all emitted points across all parts.
///
/// Unsupported geometries, and geometries whose rings all have fewer than two
/// points, produce an empty path centered on the canvas.
pub fn synthesize(geometry: &Geometry, projector: &Projector, tolerance: Option<f64>) -> DistrictPath {
    let mut data = String::new();
    let mut points: Vec<Coord<f64>> = Vec::new();

    for polygon in geometry.polygons() {
        let Some(exterior) = polygon.first() else { continue };
        if exterior.len() < 2 { continue }

        let projected = projector.project_ring(exterior);
        let ring = match tolerance {
            Some(tolerance) => simplify(&projected, tolerance),
            None => projected,
        };

        ring_to_path(&ring, &mut data);
        points.extend(ring);
    }

    match centroid(&points) {
        Some(center) if !data.is_empty() => DistrictPath { data, center },
        _ => DistrictPath { data: String::new(), center: projector.canvas().center().into() },
    }
}

/// Append a ring as an SVG sub-path: "M x,y L x,y ... Z"
pub(crate) fn ring_to_path(ring: &[Coord<f64>], out: &mut String) {
    let mut coords = ring.iter();
    if let Some(first) = coords.next() {
        if !out.is_empty() { out.push(' ') }
        out.push_str(&format!("M{},{}", round1(first.x), round1(first.y)));
        for coord in coords {
            out.push_str(&format!(" L{},{}", round1(coord.x), round1(coord.y)));
        }
        out.push('Z');
    }
}

/// Round to one decimal place; `12.0` formats as `12`. Negative zero is normalized.
#[inline]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}
