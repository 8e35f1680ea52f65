use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Bound, Point};

/// GeoJSON geometry type a shape is encoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Polygon,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for geometry values that generic shape code can dispatch on.
pub trait Shape {
    /// The GeoJSON type of this shape.
    fn kind(&self) -> ShapeKind;

    /// Topological dimension: 0 for points, 2 for areal shapes.
    fn dimensions(&self) -> u8;

    /// The smallest bound enclosing the shape.
    fn bound(&self) -> Bound;
}

impl Shape for Point {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn dimensions(&self) -> u8 {
        0
    }

    fn bound(&self) -> Bound {
        Bound::new(*self, *self)
    }
}
