mod analysis;
mod competitor;
mod cost;
mod curve;
mod grid;
mod map;
mod pricing;
mod segment;
mod sensitivity;
mod survey;

pub use analysis::*;
pub use competitor::*;
pub use cost::*;
pub use curve::*;
pub use grid::*;
pub use map::*;
pub use pricing::*;
pub use segment::*;
pub use sensitivity::*;
pub use survey::*;
