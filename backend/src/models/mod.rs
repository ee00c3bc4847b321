pub mod dataset;
pub mod record;

pub use dataset::*;
pub use record::*;
