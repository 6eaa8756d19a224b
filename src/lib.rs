#![doc = "lankamap public API"]
mod config;
mod district;
mod geom;
mod io;
mod pipeline;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use district::{Demographics, DistrictNames, DistrictRecord, Districts, Membership, Tables, TagRule};

#[doc(inline)]
pub use geom::{Bounds, Canvas, Center, Projector, centroid, simplify};

#[doc(inline)]
pub use io::fs::{ensure_parent_dir_exists, require_writable};

#[doc(inline)]
pub use io::geojson::{Feature, FeatureCollection, Geometry, PolygonRings, Ring};

#[doc(inline)]
pub use io::output::{Format, read_districts_from_json_file, write_districts, write_districts_to_file};

#[doc(inline)]
pub use io::svg::{DistrictPath, synthesize, write_preview, write_preview_to_svg_file};

#[doc(inline)]
pub use pipeline::{Conversion, Pipeline, SkipReason, Skipped};
