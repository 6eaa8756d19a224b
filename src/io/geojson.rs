use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, Result, bail};
use geo::{BoundingRect, Coord, MultiPoint};
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::geom::Bounds;

/// Closed sequence of lon/lat coordinates.
pub type Ring = Vec<Coord<f64>>;

/// Outer boundary followed by any holes.
pub type PolygonRings = Vec<Ring>;

/// Geometry of one source feature.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Polygon(PolygonRings),
    MultiPolygon(Vec<PolygonRings>),
    /// Any other GeoJSON type, a null geometry or malformed coordinates, kept by name for reporting.
    Unsupported(String),
}

impl Geometry {
    /// GeoJSON type name.
    pub fn kind(&self) -> &str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Unsupported(kind) => kind,
        }
    }

    /// Polygons making up this geometry; a Polygon yields one, an unsupported geometry none.
    pub fn polygons(&self) -> Vec<&PolygonRings> {
        match self {
            Geometry::Polygon(rings) => vec![rings],
            Geometry::MultiPolygon(polygons) => polygons.iter().collect(),
            Geometry::Unsupported(_) => Vec::new(),
        }
    }
}

/// One administrative region from the source dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    /// `properties.name`, in the source dataset's transliteration.
    pub name: Option<String>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self { name: Some(name.into()), geometry }
    }
}

/// Input document: a GeoJSON FeatureCollection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Read a FeatureCollection from a GeoJSON file.
    pub fn read_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[geojson] Failed to read {}", path.display()))?;
        text.parse()
            .with_context(|| format!("[geojson] Failed to parse {}", path.display()))
    }

    /// Read a FeatureCollection from GeoJSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawCollection = serde_json::from_slice(bytes).context("[geojson] Invalid GeoJSON")?;
        raw.try_into()
    }

    /// Bounding box over every finite coordinate of every ring.
    pub fn bounds(&self) -> Option<Bounds> {
        let coords: Vec<Coord<f64>> = self.features.iter()
            .flat_map(|feature| feature.geometry.polygons())
            .flatten()
            .flatten()
            .filter(|coord| coord.x.is_finite() && coord.y.is_finite())
            .copied()
            .collect();
        MultiPoint::<f64>::from(coords).bounding_rect().map(Bounds::from)
    }
}

impl FromStr for FeatureCollection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> { Self::from_bytes(s.as_bytes()) }
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Deserialize)]
struct RawProperties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// A position as written in the file; null or missing axes become NaN.
type RawPosition = Vec<Option<f64>>;

impl TryFrom<RawCollection> for FeatureCollection {
    type Error = anyhow::Error;

    fn try_from(raw: RawCollection) -> Result<Self> {
        if raw.kind != "FeatureCollection" {
            bail!("[geojson] Expected a FeatureCollection, found {}", raw.kind);
        }

        let features = raw.features.into_iter().enumerate()
            .map(|(index, feature)| {
                let name = feature.properties.and_then(|properties| properties.name);
                let geometry = match feature.geometry {
                    Some(geometry) => parse_geometry(index, geometry),
                    None => Geometry::Unsupported("null".into()),
                };
                Feature { name, geometry }
            })
            .collect();

        Ok(Self { features })
    }
}

/// Null or missing coordinates read as an empty shape; malformed ones make the
/// feature unsupported so only that feature is dropped.
fn parse_geometry(index: usize, raw: RawGeometry) -> Geometry {
    let RawGeometry { kind, coordinates } = raw;
    let coordinates = if coordinates.is_null() { Value::Array(Vec::new()) } else { coordinates };

    let parsed = match kind.as_str() {
        "Polygon" => serde_json::from_value::<Vec<Vec<RawPosition>>>(coordinates)
            .map(|rings| Geometry::Polygon(parse_polygon(rings))),
        "MultiPolygon" => serde_json::from_value::<Vec<Vec<Vec<RawPosition>>>>(coordinates)
            .map(|polygons| Geometry::MultiPolygon(polygons.into_iter().map(parse_polygon).collect())),
        _ => return Geometry::Unsupported(kind),
    };

    parsed.unwrap_or_else(|err| {
        warn!("[geojson] bad {kind} coordinates in feature {index}: {err}");
        Geometry::Unsupported(format!("invalid {kind}"))
    })
}

fn parse_polygon(rings: Vec<Vec<RawPosition>>) -> PolygonRings {
    rings.into_iter()
        .map(|ring| ring.into_iter().map(parse_position).collect())
        .collect()
}

fn parse_position(position: RawPosition) -> Coord<f64> {
    let axis = |i: usize| position.get(i).copied().flatten().unwrap_or(f64::NAN);
    Coord { x: axis(0), y: axis(1) }
}
