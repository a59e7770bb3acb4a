//! Display-list types for in-process canvases.
//!
//! Responsibilities:
//! - store stroked shapes with their paint, per frame
//! - provide deterministic paint order (layer + submission order)
//! - flatten splines into cubic segments for backends that only draw Béziers

mod key;
mod list;
mod shape;
mod svg;
mod z_index;

pub use key::SortKey;
pub use list::{DisplayItem, DisplayList};
pub use shape::{spline_segments, Geometry, Shape};
pub use svg::to_svg;
pub use z_index::ZIndex;
