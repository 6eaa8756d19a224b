mod centroid;
mod proj;
mod simplify;

pub use centroid::*;
pub use proj::*;
pub use simplify::*;
