use geo::{Centroid, Coord, MultiPoint};
use serde::{Deserialize, Serialize};

/// Integer canvas position used to anchor a district label.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Center {
    pub x: i64,
    pub y: i64,
}

impl From<Coord<f64>> for Center {
    fn from(coord: Coord<f64>) -> Self {
        Self { x: coord.x.round() as i64, y: coord.y.round() as i64 }
    }
}

/// Vertex-average center of `points`, rounded per axis.
///
/// Mean of the vertices, not the area-weighted centroid. None for an empty point set.
pub fn centroid(points: &[Coord<f64>]) -> Option<Center> {
    let multi_point: MultiPoint<f64> = points.to_vec().into();
    multi_point.centroid().map(|point| point.0.into())
}
