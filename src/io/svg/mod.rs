//! SVG path synthesis and preview rendering.

mod path;
mod writer;

pub use path::*;
pub use writer::*;
