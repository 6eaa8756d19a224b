//! Format-specific reading and writing.
//!
//! - `geojson` - source district boundaries (FeatureCollection input)
//! - `output` - converted district artifacts (JSON, TypeScript)
//! - `svg` - path synthesis and the standalone preview map
//! - `fs` - output path checks

pub(crate) mod fs;
pub(crate) mod geojson;
pub(crate) mod output;
pub(crate) mod svg;
