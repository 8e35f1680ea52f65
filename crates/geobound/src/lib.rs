pub mod bound;
pub mod polygon;
pub mod ring;
pub mod shape;

pub use geobound_core::{GeoError, Result, Tolerance, Validate};
pub use glam::{dvec2, DVec2};

pub use bound::Bound;
pub use polygon::Polygon;
pub use ring::Ring;
pub use shape::{Shape, ShapeKind};

/// An `(x, y)` coordinate pair, `(lon, lat)` for geographic data.
pub type Point = DVec2;
