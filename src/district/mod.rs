mod record;
mod resolve;

pub use record::*;
pub use resolve::*;
