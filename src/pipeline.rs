use std::{collections::BTreeSet, fmt, path::Path};

use anyhow::{Result, anyhow};
use log::{debug, info, warn};

use crate::config::Config;
use crate::district::Districts;
use crate::geom::{Bounds, Projector};
use crate::io::geojson::FeatureCollection;
use crate::io::svg::synthesize;

/// Why a source feature produced no district.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The feature has no `properties.name`.
    MissingName,
    /// The name has no entry in the name table.
    Unmapped(String),
    /// The district resolved but its geometry yielded no drawable ring.
    EmptyPath { id: String, geometry: String },
    /// An earlier feature already produced this district.
    DuplicateId(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingName => write!(f, "feature has no name"),
            SkipReason::Unmapped(name) => write!(f, "no mapping for {name:?}"),
            SkipReason::EmptyPath { id, geometry } => write!(f, "{id}: no drawable shape in {geometry} geometry"),
            SkipReason::DuplicateId(id) => write!(f, "{id}: already produced by an earlier feature"),
        }
    }
}

/// A dropped feature, by position in the input collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of one pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    /// Successfully converted districts, sorted by display name.
    pub districts: Districts,
    pub skipped: Vec<Skipped>,
    /// Non-finite coordinates replaced by the origin.
    pub invalid_coordinates: usize,
    /// Geographic extent the canvas was fitted to.
    pub bounds: Bounds,
}

impl Conversion {
    /// True when every feature converted and every coordinate was finite.
    pub fn is_clean(&self) -> bool { self.skipped.is_empty() && self.invalid_coordinates == 0 }
}

/// Batch GeoJSON -> district record converter.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Build a pipeline over validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config { &self.config }

    /// Read `path` and convert every feature in it.
    pub fn run_file(&self, path: &Path) -> Result<Conversion> {
        info!("[pipeline] reading {}", path.display());
        let collection = FeatureCollection::read_from_file(path)?;
        self.run(&collection)
    }

    /// Convert every feature of `collection`.
    ///
    /// Unnamed, unmapped and shapeless features are skipped with a warning and
    /// reported in [`Conversion::skipped`]. Fails only when no bounding box is
    /// configured and none can be measured from the input.
    pub fn run(&self, collection: &FeatureCollection) -> Result<Conversion> {
        let bounds = match self.config.bounds {
            Some(bounds) => bounds,
            None => collection.bounds()
                .filter(Bounds::is_valid)
                .ok_or_else(|| anyhow!("[pipeline] Could not determine bounds; nothing to draw."))?,
        };
        debug!("[pipeline] fitting {bounds:?} onto {:?}", self.config.canvas);

        let projector = Projector::new(bounds, self.config.canvas);
        let tolerance = self.config.canvas.simplify_tolerance();
        let tables = &self.config.tables;

        let mut records = Vec::with_capacity(collection.features.len());
        let mut skipped = Vec::new();
        let mut seen = BTreeSet::new();

        for (index, feature) in collection.features.iter().enumerate() {
            let Some(name) = feature.name.as_deref() else {
                warn!("[pipeline] feature {index} has no name, skipping");
                skipped.push(Skipped { index, reason: SkipReason::MissingName });
                continue;
            };

            let Some(mut record) = tables.resolve(name) else {
                warn!("[pipeline] no district mapping for {name:?}, skipping");
                skipped.push(Skipped { index, reason: SkipReason::Unmapped(name.to_string()) });
                continue;
            };

            let path = synthesize(&feature.geometry, &projector, tolerance);
            if path.is_empty() {
                warn!("[pipeline] {} has no drawable shape ({} geometry), skipping", record.id, feature.geometry.kind());
                let geometry = feature.geometry.kind().to_string();
                skipped.push(Skipped { index, reason: SkipReason::EmptyPath { id: record.id, geometry } });
                continue;
            }

            if !seen.insert(record.id.clone()) {
                warn!("[pipeline] {name:?} maps to {} again, keeping the first feature", record.id);
                skipped.push(Skipped { index, reason: SkipReason::DuplicateId(record.id) });
                continue;
            }

            debug!("[pipeline] {name:?} -> {} ({} bytes of path)", record.id, path.data.len());
            record.path_data = path.data;
            record.center = path.center;
            records.push(record);
        }

        records.sort_by(|a, b| a.name.cmp(&b.name));

        let invalid_coordinates = projector.invalid_count();
        if invalid_coordinates > 0 {
            warn!("[pipeline] replaced {invalid_coordinates} non-finite coordinate(s) with the origin");
        }
        info!("[pipeline] converted {} district(s), skipped {}", records.len(), skipped.len());

        Ok(Conversion { districts: records.into(), skipped, invalid_coordinates, bounds })
    }
}
